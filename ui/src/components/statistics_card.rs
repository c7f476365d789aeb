use dioxus::prelude::*;

use crate::core::fixtures::StatisticCard;

#[component]
pub fn StatisticsCard(card: StatisticCard) -> Element {
    let chip_class = if card.color.is_empty() {
        "stat-card__icon".to_string()
    } else {
        format!("stat-card__icon stat-card__icon--{}", card.color)
    };
    let footer = card.visible_footer().cloned();

    rsx! {
        article { class: "card stat-card",
            div { class: "stat-card__body",
                span { class: "{chip_class}", aria_hidden: "true", "{card.icon}" }
                div { class: "stat-card__text",
                    span { class: "stat-card__title", "{card.title}" }
                    strong { class: "stat-card__value", "{card.value}" }
                }
            }
            if let Some(footer) = footer {
                p { class: "stat-card__footer",
                    strong { class: "stat-card__delta stat-card__delta--{footer.color}", "{footer.value}" }
                    " {footer.label}"
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

    fn card(footer_label: &str) -> StatisticCard {
        serde_json::from_value(serde_json::json!({
            "title": "Today's Sales",
            "value": "$0.00",
            "icon": "$",
            "color": "teal",
            "footer": { "value": "+0%", "color": "positive", "label": footer_label }
        }))
        .unwrap()
    }

    #[test]
    fn labelled_footer_renders() {
        let html = render(|| rsx! { StatisticsCard { card: card("than last week") } });
        assert!(html.contains("stat-card__icon--teal"));
        assert!(html.contains("stat-card__delta--positive"));
        assert!(html.contains("than last week"));
    }

    #[test]
    fn unlabelled_footer_is_omitted() {
        let html = render(|| rsx! { StatisticsCard { card: card("") } });
        assert!(html.contains("$0.00"));
        assert!(!html.contains("stat-card__footer"));
    }
}
