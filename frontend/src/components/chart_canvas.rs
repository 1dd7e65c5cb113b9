use finance_hub_core::chart::{
    gradient_bands, render_bar_chart, render_line_chart, BarGroup, ChartStyle, DrawOp, Point,
    Rgba, Scene, TextAlign, Viewport,
};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Slices used to approximate a vertical gradient
const GRADIENT_BANDS: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    /// Samples drawn left to right as a line
    Line(Vec<f64>),
    /// Income/expense pairs
    Bars(Vec<BarGroup>),
}

#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    pub data: ChartData,
    pub style: ChartStyle,
    pub height: f64,
}

/// Canvas that sizes itself to its CSS width and paints a chart scene
pub struct ChartCanvas {
    canvas_ref: NodeRef,
}

impl Component for ChartCanvas {
    type Message = ();
    type Properties = ChartCanvasProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props() != old_props {
            self.draw(ctx.props());
        }
        false
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(ctx.props());
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <canvas ref={self.canvas_ref.clone()} class="chart-canvas" style="width: 100%;"></canvas>
        }
    }
}

impl ChartCanvas {
    fn draw(&self, props: &ChartCanvasProps) {
        // Gone when the page was switched before the redraw
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            Logger::debug_with_component("chart-canvas", "Canvas detached, skipping redraw");
            return;
        };

        let width = canvas.offset_width().max(0) as u32;
        let height = props.height.max(0.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let scene = build_scene(&props.data, Viewport::new(width as f64, height as f64), &props.style);

        let Some(backend) = CanvasBackend::with_canvas_object(canvas) else {
            return;
        };
        let root = backend.into_drawing_area();
        if let Err(e) = paint_scene(&root, &scene) {
            Logger::warn_with_component("chart-canvas", &format!("Failed to paint chart: {}", e));
        }
        if let Err(e) = root.present() {
            Logger::warn_with_component("chart-canvas", &format!("Failed to present chart: {:?}", e));
        }
    }
}

pub fn build_scene(data: &ChartData, viewport: Viewport, style: &ChartStyle) -> Scene {
    match data {
        ChartData::Line(values) => render_line_chart(values, viewport, style),
        ChartData::Bars(groups) => render_bar_chart(groups, viewport, style),
    }
}

fn paint_scene(root: &DrawingArea<CanvasBackend, Shift>, scene: &Scene) -> Result<(), String> {
    for op in scene.ops() {
        let drawn = match op {
            DrawOp::Line { from, to, color, width } => root.draw(&PathElement::new(
                vec![pixel(from), pixel(to)],
                plotters_color(color).stroke_width(stroke(*width)),
            )),
            DrawOp::Polyline { points, color, width } => root.draw(&PathElement::new(
                points.iter().map(pixel).collect::<Vec<_>>(),
                plotters_color(color).stroke_width(stroke(*width)),
            )),
            DrawOp::Area { points, fill } => {
                for (band, color) in gradient_bands(points, fill, GRADIENT_BANDS) {
                    root.draw(&Polygon::new(
                        band.iter().map(pixel).collect::<Vec<_>>(),
                        plotters_color(&color).filled(),
                    ))
                    .map_err(|e| format!("{:?}", e))?;
                }
                Ok(())
            }
            DrawOp::Circle { center, radius, color } => root.draw(&Circle::new(
                pixel(center),
                radius.round() as i32,
                plotters_color(color).filled(),
            )),
            DrawOp::Rect { x, y, width, height, color } => root.draw(&Rectangle::new(
                [
                    pixel(&Point::new(*x, *y)),
                    pixel(&Point::new(x + width, y + height)),
                ],
                plotters_color(color).filled(),
            )),
            DrawOp::Text { text, at, color, size, align } => {
                let rgba = plotters_color(color);
                let style = TextStyle::from(("sans-serif", *size).into_font())
                    .color(&rgba)
                    .pos(Pos::new(horizontal(*align), VPos::Bottom));
                root.draw(&Text::new(text.clone(), pixel(at), style))
            }
        };
        drawn.map_err(|e| format!("{:?}", e))?;
    }
    Ok(())
}

fn pixel(point: &Point) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

fn stroke(width: f64) -> u32 {
    width.round().max(1.0) as u32
}

fn plotters_color(color: &Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

fn horizontal(align: TextAlign) -> HPos {
    match align {
        TextAlign::Left => HPos::Left,
        TextAlign::Center => HPos::Center,
        TextAlign::Right => HPos::Right,
    }
}
