//! Platform-agnostic logic behind the dashboard components.

pub mod chart;
pub mod fixtures;
pub mod nav;
pub mod table;
pub mod viewport;
