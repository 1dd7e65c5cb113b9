//! Drawing primitives produced by the chart renderers. Coordinates are
//! pixels with the origin at the top-left of the surface.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in 0.0..=1.0
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Linear blend, `t = 0` gives `self` and `t = 1` gives `other`
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t).round() as u8;
        Rgba {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Top-to-bottom colour ramp between two y positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalGradient {
    pub top: f64,
    pub bottom: f64,
    pub from: Rgba,
    pub to: Rgba,
}

impl VerticalGradient {
    pub fn color_at(&self, y: f64) -> Rgba {
        let span = self.bottom - self.top;
        if span == 0.0 {
            return self.from;
        }
        self.from.lerp(&self.to, (y - self.top) / span)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
    Polyline {
        points: Vec<Point>,
        color: Rgba,
        width: f64,
    },
    /// Closed polygon filled with a vertical gradient
    Area {
        points: Vec<Point>,
        fill: VerticalGradient,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgba,
    },
    Text {
        text: String,
        /// Baseline anchor
        at: Point,
        color: Rgba,
        size: f64,
        align: TextAlign,
    },
}

/// Ordered list of primitives; later ops paint over earlier ones
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    ops: Vec<DrawOp>,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Every text string in paint order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_color_at_edges() {
        let gradient = VerticalGradient {
            top: 50.0,
            bottom: 170.0,
            from: Rgba::rgba(16, 185, 129, 0.3),
            to: Rgba::rgba(16, 185, 129, 0.05),
        };

        assert_eq!(gradient.color_at(50.0), gradient.from);
        assert!((gradient.color_at(170.0).a - 0.05).abs() < 1e-12);
        assert!((gradient.color_at(110.0).a - 0.175).abs() < 1e-12);
        // Outside the ramp clamps to the end colours
        assert_eq!(gradient.color_at(0.0), gradient.from);
    }

    #[test]
    fn test_rgba_display() {
        assert_eq!(Rgba::rgb(16, 185, 129).to_string(), "rgba(16, 185, 129, 1)");
    }
}
