use dioxus::prelude::*;

use crate::components::ScheduleTable;
use crate::core::fixtures;

#[component]
pub fn Schedule() -> Element {
    rsx! {
        section { class: "page page-schedule",
            h1 { {crate::t!("page-schedule-title")} }
            p { {crate::t!("page-schedule-intro")} }
            ScheduleTable { sheet: fixtures::dashboard().schedule.clone() }
        }
    }
}
