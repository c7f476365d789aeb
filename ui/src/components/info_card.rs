use dioxus::prelude::*;

use crate::core::table::{
    default_columns, min_content_width, ColumnDescriptor, RowRecord, TableBody,
};

/// Generic tabular card: a title band, a header row and either the data rows,
/// a framed message, or an intentionally blank body.
#[component]
pub fn InfoCard(
    #[props(into)] title: String,
    #[props(default = default_columns())] columns: Vec<ColumnDescriptor>,
    #[props(default)] rows: Vec<RowRecord>,
    no_data_message: Option<String>,
) -> Element {
    let body = TableBody::project(&columns, &rows, no_data_message.as_deref());
    let min_width = min_content_width(&columns);

    rsx! {
        section { class: "card info-card",
            div { class: "card__header",
                h2 { class: "card__title", "{title}" }
            }
            div { class: "card__body card__body--scroll",
                div { class: "info-card__content", style: "min-width: {min_width}px;",
                    div { class: "info-card__head",
                        for col in columns.iter() {
                            div { key: "{col.id}", class: "info-card__head-cell", style: col.cell_style(), "{col.label}" }
                        }
                    }
                    {match body {
                        TableBody::Rows(rows) => rsx! {
                            for (idx, row) in rows.into_iter().enumerate() {
                                div {
                                    key: "{idx}",
                                    class: if row.show_divider { "info-card__row" } else { "info-card__row info-card__row--last" },
                                    for cell in row.cells.into_iter() {
                                        div { key: "{cell.column_id}", class: "info-card__cell", style: cell.style, "{cell.text}" }
                                    }
                                }
                            }
                        },
                        TableBody::Message(message) => rsx! {
                            div { class: "info-card__message",
                                div { class: "info-card__message-text", "{message}" }
                            }
                        },
                        TableBody::Empty => rsx! {},
                    }}
                }
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

    fn data_rows(html: &str) -> usize {
        html.matches(r#"class="info-card__row"#).count()
    }

    #[test]
    fn empty_rows_show_the_message() {
        let html = render(|| {
            rsx! {
                InfoCard {
                    title: "Time-Off today",
                    rows: vec![],
                    no_data_message: Some("No upcoming time off's today".to_string()),
                }
            }
        });
        assert!(html.contains("Time-Off today"));
        assert_eq!(html.matches("info-card__message-text").count(), 1);
        assert!(html.contains("No upcoming time off"));
        assert_eq!(data_rows(&html), 0);
    }

    #[test]
    fn empty_rows_without_message_leave_body_blank() {
        let html = render(|| rsx! { InfoCard { title: "Flagged Time card" } });
        assert_eq!(data_rows(&html), 0);
        assert!(!html.contains("info-card__message"));
        // Header cells still render for the default schema.
        assert_eq!(html.matches("info-card__head-cell").count(), 3);
        assert!(html.contains("min-width: 450px;"));
    }

    #[test]
    fn single_row_is_first_and_last() {
        let html = render(|| {
            let row = RowRecord::new()
                .with("name", "A")
                .with("date", "1/1")
                .with("status", "ok");
            rsx! { InfoCard { title: "No show employees", rows: vec![row], no_data_message: None } }
        });
        assert_eq!(data_rows(&html), 1);
        assert!(html.contains("info-card__row info-card__row--last"));
        assert_eq!(html.matches("info-card__cell").count(), 3);
        assert!(html.contains(">1/1<"));
    }

    #[test]
    fn custom_columns_drive_header_and_cells() {
        let html = render(|| {
            let columns = vec![ColumnDescriptor::new("employee", "Employee").with_flex(3.0)];
            let rows = vec![
                RowRecord::new().with("employee", "Test Employee"),
                RowRecord::new().with("other", "ignored"),
            ];
            rsx! { InfoCard { title: "Custom", columns, rows, no_data_message: None } }
        });
        assert!(html.contains(">Employee<"));
        assert!(html.contains("flex: 3; text-align: left;"));
        assert_eq!(data_rows(&html), 2);
        assert_eq!(html.matches("info-card__row--last").count(), 1);
        assert!(!html.contains("ignored"));
    }
}
