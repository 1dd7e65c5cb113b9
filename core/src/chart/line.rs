use super::{
    draw_grid, placeholder, ChartStyle, DrawOp, Plot, Point, Rgba, Scene, VerticalGradient,
    Viewport, INCOME_COLOR,
};

const AREA_TOP: Rgba = Rgba::rgba(16, 185, 129, 0.3);
const AREA_BOTTOM: Rgba = Rgba::rgba(16, 185, 129, 0.05);
const LINE_WIDTH: f64 = 2.5;
const MARKER_RADIUS: f64 = 3.0;

/// Line chart of `values` spread evenly left to right, scaled between the
/// observed min and max. Fewer than two samples give a placeholder.
pub fn render_line_chart(values: &[f64], viewport: Viewport, style: &ChartStyle) -> Scene {
    if values.len() < 2 {
        return placeholder(viewport, style.locale.collecting_data());
    }

    let plot = Plot::new(viewport, style.padding);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    let mut scene = Scene::new(viewport);
    draw_grid(&mut scene, &plot, |i| max - range / 4.0 * i as f64);

    let step = plot.width() / (values.len() - 1) as f64;
    let samples: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            Point::new(
                plot.left + step * i as f64,
                plot.bottom - (value - min) / range * plot.height(),
            )
        })
        .collect();

    let mut area = Vec::with_capacity(samples.len() + 2);
    area.push(Point::new(plot.left, plot.bottom));
    area.extend(samples.iter().copied());
    area.push(Point::new(plot.right, plot.bottom));
    scene.push(DrawOp::Area {
        points: area,
        fill: VerticalGradient {
            top: plot.top,
            bottom: plot.bottom,
            from: AREA_TOP,
            to: AREA_BOTTOM,
        },
    });

    scene.push(DrawOp::Polyline {
        points: samples.clone(),
        color: INCOME_COLOR,
        width: LINE_WIDTH,
    });

    for center in samples {
        scene.push(DrawOp::Circle {
            center,
            radius: MARKER_RADIUS,
            color: INCOME_COLOR,
        });
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Locale;

    const VIEWPORT: Viewport = Viewport::new(400.0, 220.0);

    fn polyline(scene: &Scene) -> &[Point] {
        scene
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_single_sample_shows_collecting_placeholder() {
        let scene = render_line_chart(&[1000.0], VIEWPORT, &ChartStyle::default());
        assert_eq!(scene.texts(), vec!["Raccogliendo dati..."]);

        let style = ChartStyle {
            locale: Locale::English,
            ..ChartStyle::default()
        };
        let empty = render_line_chart(&[], VIEWPORT, &style);
        assert_eq!(empty.texts(), vec!["Collecting data..."]);
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn test_samples_spread_across_plot() {
        let scene = render_line_chart(&[1000.0, 1500.0, 1250.0], VIEWPORT, &ChartStyle::default());
        let points = polyline(&scene);

        // Plot is 300 x 120 inside 50px padding
        assert_eq!(points[0], Point::new(50.0, 170.0));
        assert_eq!(points[1], Point::new(200.0, 50.0));
        assert_eq!(points[2], Point::new(350.0, 110.0));
    }

    #[test]
    fn test_grid_labels_from_max_down() {
        let scene = render_line_chart(&[1000.0, 2000.0], VIEWPORT, &ChartStyle::default());
        assert_eq!(
            scene.texts(),
            vec!["€2.000k", "€1.750k", "€1.500k", "€1.250k", "€1.000k"]
        );
    }

    #[test]
    fn test_flat_series_uses_unit_range() {
        let scene = render_line_chart(&[500.0, 500.0, 500.0], VIEWPORT, &ChartStyle::default());
        let points = polyline(&scene);

        assert!(points.iter().all(|p| p.y == 170.0 && p.x.is_finite()));
        assert_eq!(scene.texts()[0], "€0.500k");
    }

    #[test]
    fn test_paint_order_and_marker_count() {
        let scene = render_line_chart(&[1.0, 2.0, 3.0, 4.0], VIEWPORT, &ChartStyle::default());
        let ops = scene.ops();

        // 5 grid lines with labels, then area, polyline and one marker per sample
        assert_eq!(ops.len(), 10 + 1 + 1 + 4);
        assert!(matches!(ops[10], DrawOp::Area { .. }));
        assert!(matches!(ops[11], DrawOp::Polyline { width, .. } if width == 2.5));
        assert!(ops[12..]
            .iter()
            .all(|op| matches!(op, DrawOp::Circle { radius, .. } if *radius == 3.0)));

        match &ops[10] {
            DrawOp::Area { points, fill } => {
                assert_eq!(points.first(), Some(&Point::new(50.0, 170.0)));
                assert_eq!(points.last(), Some(&Point::new(350.0, 170.0)));
                assert_eq!(fill.top, 50.0);
                assert_eq!(fill.bottom, 170.0);
            }
            _ => unreachable!(),
        }
    }
}
