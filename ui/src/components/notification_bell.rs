use dioxus::prelude::*;

use crate::components::icons::BellIcon;
use crate::core::nav::NotificationBadge;
use crate::t;

/// Bell button with a count badge. The badge node is always rendered; a zero
/// count only hides it.
#[component]
pub fn NotificationBell(count: u32) -> Element {
    let badge = NotificationBadge::new(count);
    let content = badge.content().unwrap_or_default();
    let hidden = !badge.is_visible();

    rsx! {
        div { class: "navbar__bell",
            button {
                r#type: "button",
                class: "navbar__icon-button",
                aria_label: t!("navbar-notifications-label"),
                BellIcon {}
            }
            span { class: badge.css_class(), aria_hidden: "{hidden}", "{content}" }
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
    fn zero_count_keeps_an_invisible_badge() {
        let html = render(|| rsx! { NotificationBell { count: 0 } });
        assert!(html.contains("navbar__badge navbar__badge--invisible"));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn positive_count_is_displayed() {
        let html = render(|| rsx! { NotificationBell { count: 7 } });
        assert!(html.contains(r#"class="navbar__badge""#));
        assert!(html.contains(">7</span>"));
        assert!(!html.contains("--invisible"));
    }
}
