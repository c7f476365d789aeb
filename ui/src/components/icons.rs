//! Inline outline icons and the POINTS wordmark.
use dioxus::prelude::*;

#[component]
fn OutlineIcon(path: &'static str, class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path { stroke_linecap: "round", stroke_linejoin: "round", d: path }
        }
    }
}

#[component]
pub fn BarsIcon() -> Element {
    rsx! { OutlineIcon { class: "icon icon--md", path: "M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5" } }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! { OutlineIcon { class: "icon icon--md", path: "M6 18 18 6M6 6l12 12" } }
}

#[component]
pub fn ChevronDownIcon() -> Element {
    rsx! { OutlineIcon { class: "icon icon--sm", path: "m19.5 8.25-7.5 7.5-7.5-7.5" } }
}

#[component]
pub fn BellIcon() -> Element {
    rsx! {
        OutlineIcon {
            class: "icon icon--md",
            path: "M14.857 17.082a23.848 23.848 0 0 0 5.454-1.31A8.967 8.967 0 0 1 18 9.75V9A6 6 0 0 0 6 9v.75a8.967 8.967 0 0 1-2.312 6.022c1.733.64 3.56 1.085 5.455 1.31m5.714 0a24.255 24.255 0 0 1-5.714 0m5.714 0a3 3 0 1 1-5.714 0",
        }
    }
}

#[component]
pub fn PointsLogo() -> Element {
    rsx! {
        svg {
            class: "navbar__logo",
            width: "100",
            height: "30",
            view_box: "0 0 150 40",
            fill: "none",
            text {
                x: "45",
                y: "28",
                font_family: "Arial, sans-serif",
                font_size: "24",
                font_weight: "bold",
                fill: "#FFFFFF",
                "POINTS"
            }
            path {
                d: "M15 8 L35 28 M35 8 L15 28",
                stroke: "#6EE7B7",
                stroke_width: "5",
                stroke_linecap: "round",
            }
            path {
                d: "M20 5 L40 25 M40 5 L20 25",
                stroke: "#34D399",
                stroke_width: "3",
                stroke_linecap: "round",
                transform: "translate(-2, 3)",
            }
        }
    }
}
