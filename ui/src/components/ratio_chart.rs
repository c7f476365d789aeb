use dioxus::prelude::*;

use crate::core::chart::{ChartGeometry, Series, VIEW_HEIGHT, VIEW_WIDTH};
use crate::core::fixtures::ChartPoint;
use crate::t;

const SALE_COLOR: &str = "#391eda";
const VISITORS_COLOR: &str = "#1ad5ee";
const EMPLOYEES_COLOR: &str = "#16a34a";

/// Composed chart: sales bars (left axis), visitor bars and the employee line
/// (right axis).
#[component]
pub fn RatioChart(points: Vec<ChartPoint>) -> Element {
    let geo = ChartGeometry::layout(&points);
    let plot = geo.plot;
    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");
    let line_points = geo.line_points();
    let label_y = plot.bottom + 20.0;

    let legend = [
        (t!("chart-legend-sale"), SALE_COLOR),
        (t!("chart-legend-visitors"), VISITORS_COLOR),
        (t!("chart-legend-employees"), EMPLOYEES_COLOR),
    ];

    rsx! {
        section { class: "card ratio-chart",
            div { class: "card__header",
                h2 { class: "card__title", {t!("chart-title")} }
            }
            div { class: "card__body",
                svg {
                    class: "ratio-chart__canvas",
                    view_box: "{view_box}",
                    preserve_aspect_ratio: "none",
                    role: "img",

                    g { class: "ratio-chart__grid",
                        for tick in geo.left_ticks.iter() {
                            line {
                                x1: "{plot.left}",
                                x2: "{plot.right}",
                                y1: "{tick.y}",
                                y2: "{tick.y}",
                                stroke: "#e0e0e0",
                                stroke_dasharray: "3 3",
                            }
                        }
                    }

                    g { class: "ratio-chart__axis ratio-chart__axis--left",
                        for tick in geo.left_ticks.iter() {
                            text { x: "{plot.left - 8.0}", y: "{tick.y + 4.0}", text_anchor: "end", fill: SALE_COLOR, "{tick.label}" }
                        }
                    }
                    g { class: "ratio-chart__axis ratio-chart__axis--right",
                        for tick in geo.right_ticks.iter() {
                            text { x: "{plot.right + 8.0}", y: "{tick.y + 4.0}", text_anchor: "start", fill: VISITORS_COLOR, "{tick.label}" }
                        }
                    }

                    g { class: "ratio-chart__bars",
                        for bar in geo.bars.iter() {
                            rect {
                                class: "ratio-chart__bar",
                                x: "{bar.x}",
                                y: "{bar.y}",
                                width: "{bar.width}",
                                height: "{bar.height}",
                                fill: match bar.series {
                                    Series::Sale => SALE_COLOR,
                                    Series::Visitors => VISITORS_COLOR,
                                },
                            }
                        }
                    }

                    polyline {
                        class: "ratio-chart__line",
                        points: "{line_points}",
                        fill: "none",
                        stroke: EMPLOYEES_COLOR,
                        stroke_width: "2",
                    }

                    g { class: "ratio-chart__labels",
                        for label in geo.x_labels.iter() {
                            text { x: "{label.x}", y: "{label_y}", text_anchor: "middle", "{label.text}" }
                        }
                    }
                }

                ul { class: "ratio-chart__legend",
                    for (name, color) in legend.into_iter() {
                        li { class: "ratio-chart__legend-item",
                            span { class: "ratio-chart__swatch", style: "background: {color};" }
                            "{name}"
                        }
                    }
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

    #[test]
    fn renders_two_bars_per_point_and_one_line() {
        let html = render(|| {
            let points = crate::core::fixtures::dashboard().chart.clone();
            rsx! { RatioChart { points } }
        });
        assert_eq!(html.matches("ratio-chart__bar\"").count(), 14);
        assert_eq!(html.matches("<polyline").count(), 1);
        assert!(html.contains("08:00 AM"));
    }
}
