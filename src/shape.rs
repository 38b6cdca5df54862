//! The quadrilateral annotation shape.
//!
//! A [`Shape`] owns an ordered point list (capped at four points, the corners
//! of a bounding box), selection and highlight state, and a cached box area.
//! The host canvas appends points during interactive drawing, calls
//! [`Shape::close`] to seal the quad, and invokes [`Shape::paint`] once per
//! redraw with its style, its "show box size" toggle, and a ground-sample
//! resolver.

use crate::errors::ShapeError;
use crate::gsd::GsdResolver;
use crate::painter::Painter;
use crate::path::Path;
use crate::style::{HighlightMode, MarkerKind, ShapeStyle};
use crate::types::{Pt, Rect, dvec2};

/// Maximum number of points a shape holds; models a quadrilateral box.
pub const MAX_POINTS: usize = 4;

/// Area cached when no ground-sample entry resolves for the image.
///
/// Deliberately large so the host canvas never auto-discards the shape as
/// degenerate when physical size is unknown.
pub const GSD_MISS_AREA: f64 = 99_999.0;

/// Everything [`Shape::paint`] needs from the host canvas.
pub struct PaintContext<'a> {
    /// Shared drawing style for all shapes on the canvas.
    pub style: &'a ShapeStyle,
    /// Whether the canvas wants the box size label drawn.
    pub show_box_size: bool,
    /// Ground-sample lookup for the physical-unit label.
    pub gsd: &'a dyn GsdResolver,
}

/// A single quadrilateral annotation shape.
#[derive(Clone, Debug)]
pub struct Shape {
    /// Text tag attached by the labeling UI.
    pub label: Option<String>,
    /// Key into the ground-sample table; set by the canvas when the shape is
    /// created on a geo-referenced image.
    pub image_name: Option<String>,
    /// Interior fill toggle.
    pub filled: bool,
    /// Selection affects color choice only.
    pub selected: bool,
    /// Opaque difficulty flag, consumed by the host application.
    pub difficult: bool,
    /// Per-instance line color override; `None` uses the style default.
    /// The canvas uses this to draw the pending shape in a distinct color.
    pub line_color: Option<crate::types::Color>,
    /// Per-instance fill color override; `None` uses the style default.
    pub fill_color: Option<crate::types::Color>,

    points: Vec<Pt>,
    closed: bool,
    highlight: Option<(usize, HighlightMode)>,
    scale: f64,
    area: Option<f64>,
}

impl Default for Shape {
    fn default() -> Shape {
        Shape::new()
    }
}

impl Shape {
    /// A fresh open shape with no points, at zoom 1.0.
    pub fn new() -> Shape {
        Shape {
            label: None,
            image_name: None,
            filled: false,
            selected: false,
            difficult: false,
            line_color: None,
            fill_color: None,
            points: Vec::new(),
            closed: false,
            highlight: None,
            scale: 1.0,
            area: None,
        }
    }

    /// A fresh shape with a label and image key already attached.
    pub fn with_label(label: impl Into<String>, image_name: Option<String>) -> Shape {
        Shape {
            label: Some(label.into()),
            image_name,
            ..Shape::new()
        }
    }

    // ==================== point & vertex management ====================

    /// True once the shape holds its full four points.
    pub fn reached_max_points(&self) -> bool {
        self.points.len() >= MAX_POINTS
    }

    /// Append a point. A fifth point is silently ignored, not an error; the
    /// event handler calls this on every click without checking first.
    pub fn add_point(&mut self, p: Pt) {
        if self.reached_max_points() {
            crate::log::debug!("ignoring point beyond quad capacity");
            return;
        }
        self.points.push(p);
    }

    /// Remove and return the last point, if any.
    pub fn pop_point(&mut self) -> Option<Pt> {
        self.points.pop()
    }

    /// Seal the polygon; rendering adds the closing edge back to the first
    /// point.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Reopen the polygon.
    pub fn set_open(&mut self) {
        self.closed = false;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Translate every point by `offset`. Builds a fresh point list rather
    /// than mutating in place so a panic cannot leave the shape half-moved.
    pub fn move_by(&mut self, offset: Pt) {
        self.points = self.points.iter().map(|&p| p + offset).collect();
    }

    /// Translate the point at `index` by `offset`.
    ///
    /// # Panics
    /// Panics if `index` is out of range; validity is the caller's contract.
    pub fn move_vertex_by(&mut self, index: usize, offset: Pt) {
        self.points[index] += offset;
    }

    /// Mark the vertex at `index` as under pointer focus.
    ///
    /// # Panics
    /// Panics if `index` is out of range; validity is the caller's contract.
    pub fn highlight_vertex(&mut self, index: usize, mode: HighlightMode) {
        assert!(
            index < self.points.len(),
            "highlight index {index} out of range for {} points",
            self.points.len()
        );
        self.highlight = Some((index, mode));
    }

    /// Clear any vertex focus.
    pub fn highlight_clear(&mut self) {
        self.highlight = None;
    }

    /// The currently focused vertex, if any.
    pub fn highlighted_vertex(&self) -> Option<(usize, HighlightMode)> {
        self.highlight
    }

    // ==================== collection-like access ====================

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Pt] {
        &self.points
    }

    /// Checked point access.
    pub fn point(&self, index: usize) -> Result<Pt, ShapeError> {
        self.points
            .get(index)
            .copied()
            .ok_or(ShapeError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// Checked point replacement.
    pub fn set_point(&mut self, index: usize, p: Pt) -> Result<(), ShapeError> {
        let len = self.points.len();
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = p;
                Ok(())
            }
            None => Err(ShapeError::IndexOutOfRange { index, len }),
        }
    }

    // ==================== zoom & cached area ====================

    /// Current canvas zoom factor. Stroke width and vertex marker size are
    /// divided by it so they stay visually constant under zoom.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Box area cached by the last paint of a four-point shape: square
    /// meters when the ground-sample lookup resolved, [`GSD_MISS_AREA`]
    /// otherwise, `None` before the first paint. The host canvas reads this
    /// to discard degenerate zero-area shapes.
    pub fn area(&self) -> Option<f64> {
        self.area
    }

    // ==================== geometric queries ====================

    /// Index of the first point within `epsilon` of `target`, scanning in
    /// insertion order. This is first-match, not nearest-of-all: with a
    /// hit-test epsilon the markers do not overlap, and the editing code
    /// depends on the stable choice.
    pub fn nearest_vertex(&self, target: Pt, epsilon: f64) -> Option<usize> {
        self.points.iter().position(|p| p.distance(target) <= epsilon)
    }

    /// The open polyline path through the points, in insertion order.
    pub fn make_path(&self) -> Result<Path, ShapeError> {
        let (&first, rest) = self.points.split_first().ok_or(ShapeError::EmptyShape)?;
        let mut path = Path::new();
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
        Ok(path)
    }

    /// Even-odd containment against the implicitly closed polygon, whether
    /// or not the shape has been sealed with [`Shape::close`].
    pub fn contains_point(&self, p: Pt) -> Result<bool, ShapeError> {
        Ok(self.make_path()?.contains(p))
    }

    /// Axis-aligned bounding box of the point path.
    pub fn bounding_rect(&self) -> Result<Rect, ShapeError> {
        self.make_path()?.bounding_rect().ok_or(ShapeError::EmptyShape)
    }

    // ==================== rendering ====================

    /// Draw the shape: outline, vertex markers, optional size label, and
    /// optional interior fill. No-op when the shape has no points.
    ///
    /// Caches the box area as a side effect when the shape has its full four
    /// points (see [`Shape::area`]).
    pub fn paint<P: Painter>(&mut self, painter: &mut P, ctx: &PaintContext<'_>) {
        if self.points.is_empty() {
            return;
        }
        let style = ctx.style;

        let line_color = if self.selected {
            style.select_line_color
        } else {
            self.line_color.unwrap_or(style.line_color)
        };
        let stroke_width = f64::max(1.0, (2.0 / self.scale).round());
        painter.set_stroke(line_color, stroke_width);

        let mut line_path = Path::new();
        let mut vertex_path = Path::new();
        line_path.move_to(self.points[0]);
        for (i, &p) in self.points.iter().enumerate() {
            if i > 0 {
                line_path.line_to(p);
            }
            self.add_vertex_marker(&mut vertex_path, i, style);
        }
        if self.closed {
            line_path.line_to(self.points[0]);
        }

        painter.stroke_path(&line_path);
        painter.stroke_path(&vertex_path);
        // Any focused vertex switches the fill of every marker, not just the
        // focused one.
        let vertex_fill = if self.highlight.is_some() {
            style.highlight_vertex_fill_color
        } else {
            style.vertex_fill_color
        };
        painter.fill_path(&vertex_path, vertex_fill);

        if self.points.len() == MAX_POINTS {
            self.paint_size_label(painter, ctx);
        }

        if self.filled {
            let fill_color = if self.selected {
                style.select_fill_color
            } else {
                self.fill_color.unwrap_or(style.fill_color)
            };
            painter.fill_path(&line_path, fill_color);
        }
    }

    fn add_vertex_marker(&self, path: &mut Path, index: usize, style: &ShapeStyle) {
        let mut d = style.point_size / self.scale;
        let mut kind = style.point_type;
        if let Some((focused, mode)) = self.highlight {
            if focused == index {
                let (factor, marker) = mode.marker();
                d *= factor;
                kind = marker;
            }
        }
        let p = self.points[index];
        match kind {
            MarkerKind::Square => path.add_rect(p - dvec2(d / 2.0, d / 2.0), d, d),
            MarkerKind::Round => path.add_ellipse(p, d / 2.0, d / 2.0),
        }
    }

    /// Size label for a full quad: width/height from the diagonal corner
    /// deltas, drawn in meters when the ground-sample lookup resolves and in
    /// pixels otherwise. A lookup miss never propagates; it caches the
    /// [`GSD_MISS_AREA`] sentinel instead.
    fn paint_size_label<P: Painter>(&mut self, painter: &mut P, ctx: &PaintContext<'_>) {
        let p0 = self.points[0];
        let p2 = self.points[2];
        let width = round1((p2.x - p0.x).abs());
        let height = round1((p2.y - p0.y).abs());

        let font_size = f64::max(width.min(height) / 15.0, 3.0);
        painter.set_font(font_size, false);

        let anchor = dvec2(
            p0.x.min(p2.x),
            if p0.y < p2.y { p0.y - 1.0 } else { p2.y },
        );

        let gsd = self
            .image_name
            .as_deref()
            .and_then(|image| ctx.gsd.resolve(image));
        match gsd {
            Some(gsd) => {
                let physical_width = width * gsd.width;
                let physical_height = height * gsd.height;
                self.area = Some(physical_width * physical_height);
                if ctx.show_box_size {
                    painter.draw_text(
                        anchor,
                        &format!("{physical_width:.1} x {physical_height:.1} m"),
                    );
                }
            }
            None => {
                crate::log::debug!(
                    image = self.image_name.as_deref().unwrap_or("<none>"),
                    "no ground-sample entry; caching sentinel area"
                );
                self.area = Some(GSD_MISS_AREA);
                if ctx.show_box_size {
                    painter.draw_text(anchor, &format!("{width:.1} x {height:.1} pix."));
                }
            }
        }
    }

    // ==================== cloning ====================

    /// An independent copy for duplicate-and-drag editing: same label, flags
    /// and color overrides over a freshly copied point list. Pointer focus
    /// and the cached area are reset, and the image key is not carried over;
    /// the canvas reassigns it when it adopts the copy.
    pub fn duplicate(&self) -> Shape {
        Shape {
            label: self.label.clone(),
            image_name: None,
            filled: self.filled,
            selected: self.selected,
            difficult: self.difficult,
            line_color: self.line_color,
            fill_color: self.fill_color,
            points: self.points.clone(),
            closed: self.closed,
            highlight: None,
            scale: self.scale,
            area: None,
        }
    }
}

impl std::ops::Index<usize> for Shape {
    type Output = Pt;

    fn index(&self, index: usize) -> &Pt {
        &self.points[index]
    }
}

impl std::ops::IndexMut<usize> for Shape {
    fn index_mut(&mut self, index: usize) -> &mut Pt {
        &mut self.points[index]
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Pt;
    type IntoIter = std::slice::Iter<'a, Pt>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
