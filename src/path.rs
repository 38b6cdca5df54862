//! Painter-independent path model.
//!
//! A [`Path`] is the element sequence a shape hands to its painter: line
//! subpaths for outlines, rect/ellipse elements for vertex markers. Keeping
//! the path as data (instead of driving a stateful context) lets the same
//! construction serve stroking, filling, containment testing, and bounding
//! boxes without a rendering backend in the loop.

use crate::types::{Pt, Rect, dvec2};

/// One element of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathEl {
    /// Start a new subpath at the point.
    MoveTo(Pt),
    /// Straight segment from the current point.
    LineTo(Pt),
    /// Axis-aligned rectangle subpath.
    Rect { origin: Pt, width: f64, height: f64 },
    /// Ellipse subpath centered on a point.
    Ellipse { center: Pt, rx: f64, ry: f64 },
}

/// An ordered sequence of path elements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    els: Vec<PathEl>,
}

impl Path {
    pub fn new() -> Path {
        Path::default()
    }

    pub fn move_to(&mut self, p: Pt) {
        self.els.push(PathEl::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Pt) {
        self.els.push(PathEl::LineTo(p));
    }

    pub fn add_rect(&mut self, origin: Pt, width: f64, height: f64) {
        self.els.push(PathEl::Rect {
            origin,
            width,
            height,
        });
    }

    pub fn add_ellipse(&mut self, center: Pt, rx: f64, ry: f64) {
        self.els.push(PathEl::Ellipse { center, rx, ry });
    }

    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    /// Explicit straight segments of the line subpaths, in order.
    ///
    /// Rect and ellipse elements contribute nothing; this reflects only the
    /// move-to/line-to structure (used to check outline closing segments).
    pub fn line_segments(&self) -> Vec<(Pt, Pt)> {
        let mut segments = Vec::new();
        let mut current: Option<Pt> = None;
        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) => current = Some(p),
                PathEl::LineTo(p) => {
                    if let Some(from) = current {
                        segments.push((from, p));
                    }
                    current = Some(p);
                }
                PathEl::Rect { .. } | PathEl::Ellipse { .. } => current = None,
            }
        }
        segments
    }

    /// Axis-aligned bounding box of every element. `None` for an empty path.
    pub fn bounding_rect(&self) -> Option<Rect> {
        let mut rect = Rect::empty();
        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => rect.expand_point(p),
                PathEl::Rect {
                    origin,
                    width,
                    height,
                } => {
                    rect.expand_point(origin);
                    rect.expand_point(origin + dvec2(width, height));
                }
                PathEl::Ellipse { center, rx, ry } => {
                    rect.expand_point(center - dvec2(rx, ry));
                    rect.expand_point(center + dvec2(rx, ry));
                }
            }
        }
        (!rect.is_empty()).then_some(rect)
    }

    /// Even-odd containment test.
    ///
    /// Line subpaths are treated as implicitly closed, matching the fill rule
    /// a canvas applies when hit-testing an annotation outline that has not
    /// been sealed yet. Rect and ellipse subpaths toggle parity analytically.
    pub fn contains(&self, p: Pt) -> bool {
        let mut inside = false;
        let mut subpath: Vec<Pt> = Vec::new();

        for el in &self.els {
            match *el {
                PathEl::MoveTo(start) => {
                    if polygon_contains(&subpath, p) {
                        inside = !inside;
                    }
                    subpath.clear();
                    subpath.push(start);
                }
                PathEl::LineTo(to) => subpath.push(to),
                PathEl::Rect {
                    origin,
                    width,
                    height,
                } => {
                    let corner = origin + dvec2(width, height);
                    if p.x >= origin.x && p.x <= corner.x && p.y >= origin.y && p.y <= corner.y {
                        inside = !inside;
                    }
                }
                PathEl::Ellipse { center, rx, ry } => {
                    if rx > 0.0 && ry > 0.0 {
                        let d = (p - center) / dvec2(rx, ry);
                        if d.length_squared() <= 1.0 {
                            inside = !inside;
                        }
                    }
                }
            }
        }
        if polygon_contains(&subpath, p) {
            inside = !inside;
        }
        inside
    }
}

/// Ray-crossing parity test against an implicitly closed polygon.
fn polygon_contains(vertices: &[Pt], p: Pt) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (a, b) = (vertices[i], vertices[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
