//! Geometry for the composed bar/line ratio chart.
//!
//! Sales bars scale against the left axis; visitor bars and the employee line
//! share the right axis. All coordinates are SVG user units inside a fixed
//! view box, so the chart scales with its container.

use super::fixtures::ChartPoint;

pub const VIEW_WIDTH: f64 = 800.0;
pub const VIEW_HEIGHT: f64 = 400.0;
pub const TICK_COUNT: usize = 5;

const MARGIN_TOP: f64 = 16.0;
const MARGIN_RIGHT: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 36.0;
const MARGIN_LEFT: f64 = 56.0;
const BAR_WIDTH: f64 = 30.0;
const BAR_GAP: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Series {
    Sale,
    Visitors,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub series: Series,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XLabel {
    pub x: f64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    fn standard() -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            right: VIEW_WIDTH - MARGIN_RIGHT,
            bottom: VIEW_HEIGHT - MARGIN_BOTTOM,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    fn y_for(&self, value: f64, axis_max: f64) -> f64 {
        let ratio = (value.max(0.0) / axis_max).min(1.0);
        self.bottom - ratio * self.height()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub plot: PlotArea,
    pub left_max: f64,
    pub right_max: f64,
    pub bars: Vec<BarRect>,
    /// Employee line vertices, one per point.
    pub line: Vec<(f64, f64)>,
    pub left_ticks: Vec<AxisTick>,
    pub right_ticks: Vec<AxisTick>,
    pub x_labels: Vec<XLabel>,
}

impl ChartGeometry {
    pub fn layout(points: &[ChartPoint]) -> Self {
        let plot = PlotArea::standard();
        let left_max = nice_max(points.iter().map(|p| p.sale).fold(0.0, f64::max));
        let right_max = nice_max(
            points
                .iter()
                .flat_map(|p| [p.visitors, p.employees])
                .fold(0.0, f64::max),
        );

        let band = if points.is_empty() {
            plot.width()
        } else {
            plot.width() / points.len() as f64
        };
        let bar_width = BAR_WIDTH.min((band - 2.0 * BAR_GAP) / 2.0).max(1.0);

        let mut bars = Vec::with_capacity(points.len() * 2);
        let mut line = Vec::with_capacity(points.len());
        let mut x_labels = Vec::with_capacity(points.len());

        for (idx, point) in points.iter().enumerate() {
            let center = plot.left + band * (idx as f64 + 0.5);

            for (series, value, axis_max, x) in [
                (Series::Sale, point.sale, left_max, center - bar_width - BAR_GAP / 2.0),
                (Series::Visitors, point.visitors, right_max, center + BAR_GAP / 2.0),
            ] {
                let y = plot.y_for(value, axis_max);
                bars.push(BarRect {
                    series,
                    x,
                    y,
                    width: bar_width,
                    height: plot.bottom - y,
                });
            }

            line.push((center, plot.y_for(point.employees, right_max)));
            x_labels.push(XLabel {
                x: center,
                text: point.time.clone(),
            });
        }

        Self {
            plot,
            left_max,
            right_max,
            bars,
            line,
            left_ticks: ticks(&plot, left_max),
            right_ticks: ticks(&plot, right_max),
            x_labels,
        }
    }

    /// `points` attribute for the employee polyline.
    pub fn line_points(&self) -> String {
        self.line
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Round an axis maximum up to 1, 2, 2.5, 4, 5 or 10 times a power of ten.
/// Empty or all-zero data gets a unit axis.
pub fn nice_max(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let normalized = value / magnitude;
    let step = [1.0, 2.0, 2.5, 4.0, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= step + 1e-9)
        .unwrap_or(10.0);
    step * magnitude
}

fn ticks(plot: &PlotArea, axis_max: f64) -> Vec<AxisTick> {
    (0..TICK_COUNT)
        .map(|i| {
            let value = axis_max * i as f64 / (TICK_COUNT - 1) as f64;
            AxisTick {
                y: plot.y_for(value, axis_max),
                label: format_tick(value),
            }
        })
        .collect()
}

fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(time: &str, sale: f64, visitors: f64, employees: f64) -> ChartPoint {
        ChartPoint {
            time: time.into(),
            sale,
            visitors,
            employees,
        }
    }

    #[test]
    fn nice_max_rounds_up() {
        assert_eq!(nice_max(400.0), 400.0);
        assert_eq!(nice_max(390.0), 400.0);
        assert_eq!(nice_max(100.0), 100.0);
        assert_eq!(nice_max(120.0), 200.0);
        assert_eq!(nice_max(21.0), 25.0);
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(f64::NAN), 1.0);
    }

    #[test]
    fn bars_scale_against_their_axis() {
        let geo = ChartGeometry::layout(&[
            point("08:00 AM", 400.0, 100.0, 80.0),
            point("10:00 AM", 200.0, 50.0, 60.0),
        ]);
        assert_eq!(geo.left_max, 400.0);
        assert_eq!(geo.right_max, 100.0);
        assert_eq!(geo.bars.len(), 4);

        let full = geo.plot.height();
        assert!((geo.bars[0].height - full).abs() < 1e-9);
        assert!((geo.bars[2].height - full / 2.0).abs() < 1e-9);
        assert!((geo.bars[3].height - full / 2.0).abs() < 1e-9);
    }

    #[test]
    fn zero_values_sit_on_the_baseline() {
        let geo = ChartGeometry::layout(&[point("02:00 PM", 0.0, 0.0, 0.0)]);
        assert!(geo.bars.iter().all(|b| b.height == 0.0));
        assert_eq!(geo.line, vec![(geo.x_labels[0].x, geo.plot.bottom)]);
    }

    #[test]
    fn one_line_vertex_and_label_per_point() {
        let points: Vec<_> = (0..7).map(|i| point(&format!("{i}"), 1.0, 1.0, 1.0)).collect();
        let geo = ChartGeometry::layout(&points);
        assert_eq!(geo.line.len(), 7);
        assert_eq!(geo.x_labels.len(), 7);
        assert_eq!(geo.line_points().split(' ').count(), 7);
    }

    #[test]
    fn ticks_span_axis() {
        let geo = ChartGeometry::layout(&[point("x", 400.0, 100.0, 0.0)]);
        let labels: Vec<_> = geo.left_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "100", "200", "300", "400"]);
        assert_eq!(geo.left_ticks[0].y, geo.plot.bottom);
        assert_eq!(geo.left_ticks[4].y, geo.plot.top);

        let unit = ChartGeometry::layout(&[]);
        let labels: Vec<_> = unit.right_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "0.25", "0.5", "0.75", "1"]);
    }
}
