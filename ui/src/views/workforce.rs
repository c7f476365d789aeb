use dioxus::prelude::*;

use crate::components::EmployeeAlerts;
use crate::core::fixtures;

#[component]
pub fn WorkforceManagement() -> Element {
    rsx! {
        section { class: "page page-workforce",
            h1 { {crate::t!("page-workforce-title")} }
            p { {crate::t!("page-workforce-intro")} }
            EmployeeAlerts { alerts: fixtures::dashboard().alerts.clone() }
        }
    }
}
