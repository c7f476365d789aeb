mod home;
pub use home::Home;

mod reports;
pub use reports::Reports;

mod schedule;
pub use schedule::Schedule;

mod time_cards;
pub use time_cards::TimeCards;

mod workforce;
pub use workforce::WorkforceManagement;
