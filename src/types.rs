//! Geometry and color primitives shared across the crate.
//!
//! Points and offsets are plain `glam::DVec2` in canvas pixel space; there is
//! no separate unit system because the host canvas already works in image
//! pixels and applies zoom through [`crate::Shape::set_scale`].

use std::fmt;

pub use glam::{DVec2, dvec2};

/// A point (or offset) in canvas pixel coordinates.
pub type Pt = DVec2;

/// An RGBA color with 8-bit channels.
///
/// `Display` renders the CSS form used by the SVG painter: `rgb(r,g,b)` when
/// fully opaque, `rgba(r,g,b,a)` with a 0..1 alpha otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// True when the alpha channel is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({},{},{},{:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

/// Axis-aligned rectangle, kept as min/max corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Pt,
    pub max: Pt,
}

impl Rect {
    /// An empty rectangle that expands on the first point.
    pub fn empty() -> Rect {
        Rect {
            min: dvec2(f64::MAX, f64::MAX),
            max: dvec2(f64::MIN, f64::MIN),
        }
    }

    /// The tight bounds of a point set. Returns `None` for an empty set.
    pub fn from_points(points: impl IntoIterator<Item = Pt>) -> Option<Rect> {
        let mut rect = Rect::empty();
        let mut any = false;
        for p in points {
            rect.expand_point(p);
            any = true;
        }
        any.then_some(rect)
    }

    /// Check if the rect is empty (never expanded).
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point.
    pub fn expand_point(&mut self, p: Pt) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include another rectangle.
    pub fn expand_rect(&mut self, other: Rect) {
        self.expand_point(other.min);
        self.expand_point(other.max);
    }

    /// Top-left corner.
    pub fn origin(&self) -> Pt {
        self.min
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Pt {
        (self.min + self.max) / 2.0
    }

    /// True when the point lies inside or on the boundary.
    pub fn contains(&self, p: Pt) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Color tests ====================

    #[test]
    fn opaque_color_displays_rgb() {
        assert_eq!(Color::rgb(255, 0, 0).to_string(), "rgb(255,0,0)");
    }

    #[test]
    fn translucent_color_displays_rgba() {
        assert_eq!(
            Color::rgba(0, 255, 0, 128).to_string(),
            "rgba(0,255,0,0.502)"
        );
    }

    // ==================== Rect tests ====================

    #[test]
    fn rect_empty_is_empty() {
        assert!(Rect::empty().is_empty());
    }

    #[test]
    fn rect_from_points_none_when_empty() {
        assert_eq!(Rect::from_points([]), None);
    }

    #[test]
    fn rect_from_points_bounds() {
        let rect = Rect::from_points([dvec2(1.0, 8.0), dvec2(5.0, 2.0)]).unwrap();
        assert_eq!(rect.origin(), dvec2(1.0, 2.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 6.0);
        assert_eq!(rect.center(), dvec2(3.0, 5.0));
    }

    #[test]
    fn rect_expand_rect() {
        let mut rect = Rect::from_points([dvec2(0.0, 0.0), dvec2(1.0, 1.0)]).unwrap();
        rect.expand_rect(Rect::from_points([dvec2(-2.0, 3.0)]).unwrap());
        assert_eq!(rect.min, dvec2(-2.0, 0.0));
        assert_eq!(rect.max, dvec2(1.0, 3.0));
    }

    #[test]
    fn rect_contains_boundary() {
        let rect = Rect::from_points([dvec2(0.0, 0.0), dvec2(10.0, 5.0)]).unwrap();
        assert!(rect.contains(dvec2(0.0, 0.0)));
        assert!(rect.contains(dvec2(10.0, 5.0)));
        assert!(!rect.contains(dvec2(10.1, 5.0)));
    }
}
