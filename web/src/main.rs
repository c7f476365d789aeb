use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::fixtures;
use ui::core::nav::RouteDescriptor;
use ui::views::{Home, Reports, Schedule, TimeCards, WorkforceManagement};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/workforce-management")]
    WorkforceManagement {},
    #[route("/schedule")]
    Schedule {},
    #[route("/time-cards")]
    TimeCards {},
    #[route("/reports")]
    Reports {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

fn nav_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("Dashboard", Route::Home {}.to_string()),
        RouteDescriptor::new("Workforce Management", Route::WorkforceManagement {}.to_string())
            .highlighted(),
        RouteDescriptor::new("Schedule", Route::Schedule {}.to_string()),
        RouteDescriptor::new("Time Cards", Route::TimeCards {}.to_string()),
        RouteDescriptor::new("Reports", Route::Reports {}.to_string()),
    ]
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        document::Title { "POINTS Workforce Dashboard" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Web layout: the shared navbar fed with this platform's routes, then the
/// routed page.
#[component]
fn WebNavbar() -> Element {
    let current_path = use_route::<Route>().to_string();
    let routes = use_hook(nav_routes);
    let profile = &fixtures::dashboard().profile;

    rsx! {
        AppNavbar {
            routes,
            current_path,
            user_name: profile.user_name.clone(),
            notification_count: profile.notification_count,
        }
        Outlet::<Route> {}
    }
}
