//! Chart renderers. Each one turns a numeric series and a viewport into a
//! [`Scene`]; painting the scene onto a real surface is left to the caller.

mod bar;
mod geometry;
mod line;
mod scene;

pub use bar::{render_bar_chart, BarGroup};
pub use geometry::{gradient_bands, polygon_area};
pub use line::render_line_chart;
pub use scene::{DrawOp, Point, Rgba, Scene, TextAlign, Viewport, VerticalGradient};

use crate::config::ChartConfig;
use crate::format::{format_compact_thousands, Locale};

pub const INCOME_COLOR: Rgba = Rgba::rgb(16, 185, 129);
pub const EXPENSE_COLOR: Rgba = Rgba::rgb(239, 68, 68);
pub const GRID_COLOR: Rgba = Rgba::rgb(226, 232, 240);
pub const LABEL_COLOR: Rgba = Rgba::rgb(100, 116, 139);

const GRID_LINES: usize = 4;

/// Layout and wording shared by both charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub padding: f64,
    pub locale: Locale,
}

impl ChartStyle {
    pub fn new(config: &ChartConfig, locale: Locale) -> Self {
        Self {
            padding: config.padding,
            locale,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::new(&ChartConfig::default(), Locale::default())
    }
}

/// The drawable rectangle inside the padding
#[derive(Debug, Clone, Copy)]
struct Plot {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Plot {
    fn new(viewport: Viewport, padding: f64) -> Self {
        Self {
            left: padding,
            right: (viewport.width - padding).max(padding),
            top: padding,
            bottom: (viewport.height - padding).max(padding),
        }
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Five horizontal grid lines, each with a right-aligned label for the
/// value it marks. `value_at(i)` gives the value of line `i`, top first.
fn draw_grid(scene: &mut Scene, plot: &Plot, value_at: impl Fn(usize) -> f64) {
    for i in 0..=GRID_LINES {
        let y = plot.top + plot.height() / GRID_LINES as f64 * i as f64;
        scene.push(DrawOp::Line {
            from: Point::new(plot.left, y),
            to: Point::new(plot.right, y),
            color: GRID_COLOR,
            width: 1.0,
        });
        scene.push(DrawOp::Text {
            text: format_compact_thousands(value_at(i)),
            at: Point::new(plot.left - 5.0, y + 4.0),
            color: LABEL_COLOR,
            size: 10.0,
            align: TextAlign::Right,
        });
    }
}

/// Centred message shown instead of a chart
fn placeholder(viewport: Viewport, message: &str) -> Scene {
    let mut scene = Scene::new(viewport);
    scene.push(DrawOp::Text {
        text: message.to_string(),
        at: viewport.center(),
        color: LABEL_COLOR,
        size: 14.0,
        align: TextAlign::Center,
    });
    scene
}
