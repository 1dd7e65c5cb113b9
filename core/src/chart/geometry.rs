//! Polygon helpers for painters without native gradient fills.

use super::scene::{Point, Rgba, VerticalGradient};

/// Absolute area of a simple polygon (shoelace formula)
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = &points[(i + 1) % points.len()];
        twice += a.x * b.y - b.x * a.y;
    }
    (twice / 2.0).abs()
}

/// Splits a gradient-filled polygon into `bands` horizontal slices between
/// the gradient's `top` and `bottom`, each with the colour at its midline.
/// Slices that miss the polygon are dropped.
pub fn gradient_bands(
    polygon: &[Point],
    gradient: &VerticalGradient,
    bands: usize,
) -> Vec<(Vec<Point>, Rgba)> {
    if polygon.len() < 3 || bands == 0 {
        return Vec::new();
    }

    let top = gradient.top.min(gradient.bottom);
    let bottom = gradient.top.max(gradient.bottom);
    let step = (bottom - top) / bands as f64;

    (0..bands)
        .filter_map(|band| {
            let y0 = if band == 0 { f64::NEG_INFINITY } else { top + step * band as f64 };
            let y1 = if band + 1 == bands {
                f64::INFINITY
            } else {
                top + step * (band + 1) as f64
            };

            let slice = clip_below(&clip_above(polygon, y0), y1);
            if slice.len() < 3 {
                return None;
            }
            let mid = top + step * (band as f64 + 0.5);
            Some((slice, gradient.color_at(mid)))
        })
        .collect()
}

/// Keeps the part of the polygon with `y >= limit`
fn clip_above(polygon: &[Point], limit: f64) -> Vec<Point> {
    clip(polygon, |p| p.y >= limit, limit)
}

/// Keeps the part of the polygon with `y <= limit`
fn clip_below(polygon: &[Point], limit: f64) -> Vec<Point> {
    clip(polygon, |p| p.y <= limit, limit)
}

// Sutherland-Hodgman against a single horizontal edge
fn clip(polygon: &[Point], inside: impl Fn(&Point) -> bool, limit: f64) -> Vec<Point> {
    if polygon.is_empty() || !limit.is_finite() {
        return polygon.to_vec();
    }

    let mut output = Vec::with_capacity(polygon.len() + 2);
    for (i, current) in polygon.iter().enumerate() {
        let previous = &polygon[(i + polygon.len() - 1) % polygon.len()];
        match (inside(previous), inside(current)) {
            (true, true) => output.push(*current),
            (true, false) => output.push(crossing(previous, current, limit)),
            (false, true) => {
                output.push(crossing(previous, current, limit));
                output.push(*current);
            }
            (false, false) => {}
        }
    }
    output
}

fn crossing(a: &Point, b: &Point, y: f64) -> Point {
    let t = (y - a.y) / (b.y - a.y);
    Point::new(a.x + (b.x - a.x) * t, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(top: f64, bottom: f64) -> VerticalGradient {
        VerticalGradient {
            top,
            bottom,
            from: Rgba::rgba(16, 185, 129, 0.3),
            to: Rgba::rgba(16, 185, 129, 0.05),
        }
    }

    #[test]
    fn test_polygon_area_rectangle() {
        let rect = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(0.0, 5.0),
        ];
        assert_eq!(polygon_area(&rect), 50.0);
        assert_eq!(polygon_area(&rect[..2]), 0.0);
    }

    #[test]
    fn test_bands_cover_area_under_curve() {
        // Area under a zig-zag line, closed along the baseline at y = 170
        let polygon = vec![
            Point::new(50.0, 170.0),
            Point::new(50.0, 120.0),
            Point::new(150.0, 50.0),
            Point::new(250.0, 140.0),
            Point::new(350.0, 90.0),
            Point::new(350.0, 170.0),
        ];
        let bands = gradient_bands(&polygon, &gradient(50.0, 170.0), 12);

        let banded: f64 = bands.iter().map(|(slice, _)| polygon_area(slice)).sum();
        assert!((banded - polygon_area(&polygon)).abs() < 1e-6);
        assert_eq!(bands.len(), 12);
    }

    #[test]
    fn test_band_colours_fade_downwards() {
        let polygon = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        let bands = gradient_bands(&polygon, &gradient(0.0, 100.0), 4);

        assert_eq!(bands.len(), 4);
        for pair in bands.windows(2) {
            assert!(pair[0].1.a > pair[1].1.a);
        }
        for (slice, _) in &bands {
            assert!((polygon_area(slice) - 2500.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bands_skip_empty_slices() {
        // Triangle only reaches the lower half of the gradient
        let polygon = vec![
            Point::new(0.0, 100.0),
            Point::new(50.0, 60.0),
            Point::new(100.0, 100.0),
        ];
        let bands = gradient_bands(&polygon, &gradient(0.0, 100.0), 4);
        assert_eq!(bands.len(), 2);
        assert!(gradient_bands(&polygon, &gradient(0.0, 100.0), 0).is_empty());
    }
}
