use dioxus::prelude::*;

use crate::core::fixtures::{ScheduleSheet, ScheduledEmployee, SummaryRow};
use crate::t;

/// Today's schedule: one row per employee across the time-slot band, followed
/// by the wage/hours and sales summary rows exactly as supplied.
#[component]
pub fn ScheduleTable(sheet: ScheduleSheet) -> Element {
    let ScheduleSheet {
        time_slots,
        employees,
        wage_summary,
        sales_summary,
    } = sheet;
    let slot_count = time_slots.len();

    rsx! {
        section { class: "card schedule",
            div { class: "card__header",
                h2 { class: "card__title", {t!("schedule-title")} }
            }
            div { class: "card__body card__body--flush card__body--scroll",
                table { class: "schedule__table",
                    thead {
                        tr {
                            th { class: "schedule__corner",
                                div { class: "schedule__corner-hours", {t!("schedule-hours")} }
                                div { class: "schedule__corner-employees", {t!("schedule-employees")} }
                            }
                            th { class: "schedule__wage-head" }
                            for (idx, slot) in time_slots.iter().enumerate() {
                                th { key: "{idx}", class: "schedule__slot-head", "{slot}" }
                            }
                        }
                    }
                    tbody {
                        for (idx, employee) in employees.into_iter().enumerate() {
                            {employee_row(idx, employee, slot_count)}
                        }
                        {summary_row(&wage_summary, slot_count, "schedule__summary schedule__summary--wage")}
                        {summary_row(&sales_summary, slot_count, "schedule__summary schedule__summary--sales")}
                    }
                }
            }
        }
    }
}

fn employee_row(idx: usize, employee: ScheduledEmployee, slot_count: usize) -> Element {
    let slots: Vec<bool> = (0..slot_count).map(|slot| employee.is_scheduled(slot)).collect();

    rsx! {
        tr { key: "{idx}", class: "schedule__row",
            td { class: "schedule__employee",
                div { class: "schedule__name", "{employee.name}" }
                small { class: "schedule__role", "{employee.role}" }
                for line in employee.additional_lines.iter() {
                    div { class: "schedule__extra", "{line}" }
                }
            }
            td { class: "schedule__wage", "{employee.wage}" }
            for (slot, active) in slots.into_iter().enumerate() {
                td {
                    key: "{slot}",
                    class: if active { "schedule__slot schedule__slot--active" } else { "schedule__slot" },
                }
            }
        }
    }
}

fn summary_row(summary: &SummaryRow, slot_count: usize, class: &'static str) -> Element {
    rsx! {
        tr { class,
            td { class: "schedule__summary-label",
                div { "{summary.label}" }
                if let Some(sublabel) = summary.sublabel.as_ref() {
                    div { class: "schedule__summary-sublabel", "{sublabel}" }
                }
            }
            td { class: "schedule__wage", "{summary.total}" }
            for slot in 0..slot_count {
                td { key: "{slot}", class: "schedule__summary-value", "{summary.value_at(slot)}" }
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
    fn fixture_schedule_renders_every_row() {
        let html = render(|| {
            let sheet = crate::core::fixtures::dashboard().schedule.clone();
            rsx! { ScheduleTable { sheet } }
        });
        assert_eq!(html.matches("schedule__row\"").count(), 4);
        assert_eq!(html.matches("schedule__slot-head").count(), 7);
        // 4 employees x 7 slots, none scheduled.
        assert_eq!(html.matches("class=\"schedule__slot\"").count(), 28);
        assert_eq!(html.matches("schedule__summary schedule__summary--").count(), 2);
        assert!(html.contains("Test Test"));
        assert!(html.contains("$ 120"));
    }

    #[test]
    fn short_flags_and_values_render_blank() {
        let html = render(|| {
            let sheet = ScheduleSheet {
                time_slots: vec!["09:00".into(), "10:00".into()],
                employees: vec![ScheduledEmployee {
                    name: "Me".into(),
                    role: "AvgCustomer".into(),
                    wage: "$ 0".into(),
                    additional_lines: Vec::new(),
                    schedule: vec![true],
                }],
                wage_summary: SummaryRow::default(),
                sales_summary: SummaryRow::default(),
            };
            rsx! { ScheduleTable { sheet } }
        });
        assert_eq!(html.matches("schedule__slot schedule__slot--active").count(), 1);
        assert_eq!(html.matches("class=\"schedule__slot\"").count(), 1);
        assert_eq!(html.matches("schedule__summary-value").count(), 4);
    }

    #[test]
    fn repeated_slot_labels_each_get_a_column() {
        let html = render(|| {
            let sheet = ScheduleSheet {
                time_slots: vec!["09:00".into(), "09:00".into(), "10:00".into()],
                employees: Vec::new(),
                wage_summary: SummaryRow::default(),
                sales_summary: SummaryRow::default(),
            };
            rsx! { ScheduleTable { sheet } }
        });
        assert_eq!(html.matches("schedule__slot-head").count(), 3);
        assert_eq!(html.matches(">09:00<").count(), 2);
    }
}
