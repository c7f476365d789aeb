//! Shared UI crate for the POINTS workforce dashboard. Navigation, tabular
//! cards, dashboard widgets and views live here; platform crates only own
//! their router.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Route-aware navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    pub mod employee_alerts;
    pub use employee_alerts::EmployeeAlerts;

    mod icons;

    pub mod info_card;
    pub use info_card::InfoCard;

    pub mod notification_bell;
    pub use notification_bell::NotificationBell;

    pub mod ratio_chart;
    pub use ratio_chart::RatioChart;

    pub mod schedule_table;
    pub use schedule_table::ScheduleTable;

    pub mod statistics_card;
    pub use statistics_card::StatisticsCard;
}
