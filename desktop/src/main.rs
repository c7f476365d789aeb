#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::event::{Event, WindowEvent},
    tao::window::WindowBuilder,
    use_window, use_wry_event_handler, Config,
};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::fixtures;
use ui::core::nav::RouteDescriptor;
use ui::views::{Home, Reports, Schedule, TimeCards, WorkforceManagement};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
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

// Shared theme, embedded so the desktop bundle needs no asset directory.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("POINTS Workforce – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                ),
        )
        .launch(App);
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

    // Native windows have no DOM resize event: forward tao's resize events
    // (in logical px) to the shared viewport hub the navbar subscribes to.
    #[cfg(feature = "desktop")]
    {
        let window = use_window();
        use_wry_event_handler(move |event, _| {
            if let Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } = event
            {
                let logical = size.to_logical::<f64>(window.scale_factor());
                ui::core::viewport::dispatch_resize(logical.width);
            }
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

/// Desktop layout around the shared navbar, using the desktop `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
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
