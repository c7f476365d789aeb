use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::components::icons::{BarsIcon, ChevronDownIcon, CloseIcon, PointsLogo};
use crate::components::notification_bell::NotificationBell;
use crate::core::nav::{avatar_initial, MenuState, RouteDescriptor};
use crate::core::viewport::ResizeSubscription;
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Route-aware application navbar.
///
/// Platforms own their `Route` enum, so they hand over plain
/// [`RouteDescriptor`]s plus the current path (usually
/// `use_route::<Route>().to_string()`); links are rendered from the descriptor
/// paths and resolved by the platform router.
///
/// Below the desktop breakpoint the link list moves into a collapsible panel.
/// The panel listens for viewport resizes through a single
/// [`ResizeSubscription`] that lives exactly as long as this component and
/// closes the panel once the viewport is desktop-wide again.
#[component]
pub fn AppNavbar(
    routes: Vec<RouteDescriptor>,
    #[props(into)] current_path: String,
    #[props(into, default = "VendorF".to_string())] user_name: String,
    #[props(default = 10)] notification_count: u32,
) -> Element {
    i18n::init();

    let mut menu = use_signal(MenuState::default);

    let subscription = use_hook(move || {
        Rc::new(RefCell::new(ResizeSubscription::subscribe(move |width| {
            let current = *menu.peek();
            let next = current.on_viewport_resize(width);
            if next != current {
                debug!(width, "navbar: viewport reached desktop width, collapsing menu");
                menu.set(next);
            }
        })))
    });
    use_drop(move || subscription.borrow_mut().unsubscribe());

    let toggle_menu = move |_| {
        let next = menu().toggle();
        debug!(?next, "navbar: menu toggled");
        menu.set(next);
    };

    let is_open = menu().is_open();
    let initial = avatar_initial(&user_name);
    let greeting = t!("navbar-greeting", name = user_name.as_str());
    let time_card = t!("navbar-time-card");
    let notifications = t!("navbar-notifications", count = notification_count);
    let toggle_label = if is_open {
        t!("navbar-close-menu")
    } else {
        t!("navbar-open-menu")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                Link { class: "navbar__brand", to: "/", aria_label: t!("navbar-home-link"),
                    PointsLogo {}
                }

                div { class: "navbar__desktop-links",
                    {nav_list(&routes, &current_path)}
                }

                div { class: "navbar__actions",
                    button { r#type: "button", class: "button button--light", "{time_card}" }
                    NotificationBell { count: notification_count }
                    div { class: "navbar__user",
                        span { class: "navbar__avatar", "{initial}" }
                        span { class: "navbar__greeting", "{greeting}" }
                        ChevronDownIcon {}
                    }
                }

                button {
                    r#type: "button",
                    class: "navbar__menu-toggle",
                    aria_label: "{toggle_label}",
                    aria_expanded: "{is_open}",
                    onclick: toggle_menu,
                    if is_open {
                        CloseIcon {}
                    } else {
                        BarsIcon {}
                    }
                }
            }

            if is_open {
                div { class: "navbar__collapse",
                    {nav_list(&routes, &current_path)}
                    div { class: "navbar__collapse-footer",
                        button { r#type: "button", class: "button button--light button--block", "{time_card}" }
                        div { class: "navbar__collapse-meta",
                            span { class: "navbar__collapse-notifications", "{notifications}" }
                            div { class: "navbar__user",
                                span { class: "navbar__avatar navbar__avatar--sm", "{initial}" }
                                span { class: "navbar__greeting", "{greeting}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn nav_list(routes: &[RouteDescriptor], current_path: &str) -> Element {
    rsx! {
        ul { class: "navbar__links",
            for route in routes.iter() {
                li { key: "{route.path}", class: "navbar__item",
                    Link {
                        to: route.path.clone(),
                        class: link_class(route, current_path),
                        "{route.name}"
                    }
                }
            }
        }
    }
}

fn link_class(route: &RouteDescriptor, current_path: &str) -> &'static str {
    if route.is_highlighted(current_path) {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::{dispatch_resize, listener_count};

    #[derive(Debug, Clone, Routable, PartialEq)]
    #[rustfmt::skip]
    enum TestRoute {
        #[layout(Shell)]
        #[route("/")]
        Dashboard {},
    }

    #[component]
    fn Shell() -> Element {
        let current_path = use_route::<TestRoute>().to_string();
        let routes = vec![
            RouteDescriptor::new("Dashboard", "/"),
            RouteDescriptor::new("Workforce Management", "/workforce-management").highlighted(),
            RouteDescriptor::new("Schedule", "/schedule"),
        ];
        rsx! {
            AppNavbar { routes, current_path, notification_count: 0 }
            Outlet::<TestRoute> {}
        }
    }

    #[component]
    fn Dashboard() -> Element {
        rsx! { main { "dashboard" } }
    }

    fn app() -> Element {
        rsx! { Router::<TestRoute> {} }
    }

    #[test]
    fn link_class_follows_highlighting() {
        let root = RouteDescriptor::new("Dashboard", "/");
        let wfm = RouteDescriptor::new("Workforce Management", "/workforce-management").highlighted();
        let schedule = RouteDescriptor::new("Schedule", "/schedule");

        assert_eq!(link_class(&root, "/schedule/today"), "navbar__link");
        assert_eq!(link_class(&schedule, "/schedule/today"), "navbar__link navbar__link--active");
        assert_eq!(link_class(&wfm, "/"), "navbar__link navbar__link--active");
    }

    #[test]
    fn navbar_holds_one_resize_listener_while_mounted() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert_eq!(listener_count(), 1);

        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        assert_eq!(listener_count(), 1, "re-render must not subscribe again");

        assert_eq!(dispatch_resize(1200.0), 1);
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("navbar__collapse"));

        drop(dom);
        assert_eq!(listener_count(), 0);
    }

    #[test]
    fn navbar_marks_current_and_promoted_links() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        // Dashboard is current, Workforce Management is promoted.
        assert_eq!(html.matches("navbar__link navbar__link--active").count(), 2);
        assert!(html.contains("class=\"navbar__link\""));
        assert!(html.contains("navbar__badge navbar__badge--invisible"));
        assert!(html.contains("dashboard"));
    }
}
