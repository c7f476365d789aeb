use dioxus::prelude::*;

use crate::components::InfoCard;
use crate::core::fixtures::Alerts;
use crate::core::table::ColumnDescriptor;
use crate::t;

/// Name/date/status columns with localized labels.
pub fn alert_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("name", t!("column-name")).with_flex(2.0),
        ColumnDescriptor::new("date", t!("column-date")),
        ColumnDescriptor::new("status", t!("column-status")),
    ]
}

/// Time-off, flagged time cards and no-shows. Only the time-off card carries
/// an empty-state message; the other two stay blank when empty.
#[component]
pub fn EmployeeAlerts(alerts: Alerts) -> Element {
    let columns = alert_columns();

    rsx! {
        div { class: "alerts",
            InfoCard {
                title: t!("alerts-time-off-title"),
                columns: columns.clone(),
                rows: alerts.time_off_today,
                no_data_message: Some(t!("alerts-time-off-empty")),
            }
            InfoCard {
                title: t!("alerts-flagged-title"),
                columns: columns.clone(),
                rows: alerts.flagged_time_cards,
                no_data_message: None,
            }
            InfoCard {
                title: t!("alerts-no-show-title"),
                columns,
                rows: alerts.no_show_employees,
                no_data_message: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn empty_alerts_show_a_single_message() {
        let html = render(|| {
            crate::i18n::init();
            rsx! { EmployeeAlerts { alerts: Alerts::default() } }
        });
        assert_eq!(html.matches("class=\"card info-card\"").count(), 3);
        assert_eq!(html.matches("info-card__message-text").count(), 1);
        assert_eq!(html.matches("class=\"info-card__row").count(), 0);
    }
}
