use dioxus::prelude::*;

use crate::components::{EmployeeAlerts, RatioChart, ScheduleTable, StatisticsCard};
use crate::core::fixtures;

/// Dashboard landing page: statistic cards, the ratio chart, today's schedule
/// and the employee alerts, top to bottom.
#[component]
pub fn Home() -> Element {
    let data = fixtures::dashboard();

    rsx! {
        section { class: "page page-home",
            h1 { class: "visually-hidden", {crate::t!("page-dashboard-title")} }

            div { class: "page-home__stats",
                for card in data.statistics.iter() {
                    StatisticsCard { key: "{card.title}", card: card.clone() }
                }
            }

            RatioChart { points: data.chart.clone() }
            ScheduleTable { sheet: data.schedule.clone() }
            EmployeeAlerts { alerts: data.alerts.clone() }
        }
    }
}
