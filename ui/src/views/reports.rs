use dioxus::prelude::*;

use crate::components::RatioChart;
use crate::core::fixtures;

#[component]
pub fn Reports() -> Element {
    rsx! {
        section { class: "page page-reports",
            h1 { {crate::t!("page-reports-title")} }
            p { {crate::t!("page-reports-intro")} }
            RatioChart { points: fixtures::dashboard().chart.clone() }
        }
    }
}
