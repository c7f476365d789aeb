//! Static dashboard content.
//!
//! The dashboard has no backend: everything it shows comes from
//! `assets/data/dashboard.json`, embedded at compile time and decoded once.
//! A malformed fixture is logged and replaced by an empty dashboard so the
//! shell still renders.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::table::RowRecord;

const EMBEDDED_FIXTURE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/dashboard.json"
));

static DASHBOARD: Lazy<DashboardData> = Lazy::new(DashboardData::load_or_default);

/// Shared, lazily decoded dashboard content.
pub fn dashboard() -> &'static DashboardData {
    &DASHBOARD
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("dashboard fixture is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub profile: Profile,
    pub statistics: Vec<StatisticCard>,
    pub chart: Vec<ChartPoint>,
    pub schedule: ScheduleSheet,
    pub alerts: Alerts,
}

impl DashboardData {
    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load_embedded() -> Result<Self, FixtureError> {
        Self::from_json(EMBEDDED_FIXTURE)
    }

    pub fn load_or_default() -> Self {
        Self::load_embedded().unwrap_or_else(|err| {
            warn!(error = %err, "fixtures: falling back to an empty dashboard");
            Self::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub user_name: String,
    pub notification_count: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            user_name: "VendorF".into(),
            notification_count: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticCard {
    pub title: String,
    pub value: String,
    /// Short glyph shown on the icon chip.
    #[serde(default)]
    pub icon: String,
    /// Chip color modifier, e.g. `teal`.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub footer: Option<StatFooter>,
}

impl StatisticCard {
    /// Footer to render, if it carries a label.
    pub fn visible_footer(&self) -> Option<&StatFooter> {
        self.footer.as_ref().filter(|f| !f.label.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatFooter {
    pub value: String,
    /// Tone modifier for the value: `positive`, `negative` or `neutral`.
    pub color: String,
    pub label: String,
}

/// One hourly sample for the ratio chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: String,
    #[serde(default)]
    pub sale: f64,
    #[serde(default)]
    pub visitors: f64,
    #[serde(default)]
    pub employees: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSheet {
    pub time_slots: Vec<String>,
    pub employees: Vec<ScheduledEmployee>,
    pub wage_summary: SummaryRow,
    pub sales_summary: SummaryRow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEmployee {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub wage: String,
    #[serde(default)]
    pub additional_lines: Vec<String>,
    /// Per-slot flags; slots past the end count as unscheduled.
    #[serde(default)]
    pub schedule: Vec<bool>,
}

impl ScheduledEmployee {
    pub fn is_scheduled(&self, slot: usize) -> bool {
        self.schedule.get(slot).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryRow {
    pub label: String,
    pub sublabel: Option<String>,
    pub total: String,
    pub values: Vec<String>,
}

impl SummaryRow {
    /// Displayed as given; a missing slot is blank.
    pub fn value_at(&self, slot: usize) -> &str {
        self.values.get(slot).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alerts {
    pub time_off_today: Vec<RowRecord>,
    pub flagged_time_cards: Vec<RowRecord>,
    pub no_show_employees: Vec<RowRecord>,
}
