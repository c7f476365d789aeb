use dioxus::prelude::*;

use crate::components::employee_alerts::alert_columns;
use crate::components::InfoCard;
use crate::core::fixtures;

#[component]
pub fn TimeCards() -> Element {
    let rows = fixtures::dashboard().alerts.flagged_time_cards.clone();

    rsx! {
        section { class: "page page-time-cards",
            h1 { {crate::t!("page-time-cards-title")} }
            p { {crate::t!("page-time-cards-intro")} }
            InfoCard {
                title: crate::t!("alerts-flagged-title"),
                columns: alert_columns(),
                rows,
                no_data_message: None,
            }
        }
    }
}
