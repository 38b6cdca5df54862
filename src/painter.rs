//! The drawing-context seam between shapes and the host canvas.
//!
//! [`Painter`] is the capability a shape needs from whatever is rendering it:
//! pen/font state plus path stroking, path filling, and text. Host canvases
//! implement it over their own graphics API; the crate ships an SVG backend
//! ([`crate::svg::SvgPainter`]) and a [`RecordingPainter`] that captures the
//! operation stream for tests.

use crate::path::Path;
use crate::types::{Color, Pt};

/// Drawing primitives a shape paints through.
pub trait Painter {
    /// Set the pen used by subsequent [`stroke_path`](Painter::stroke_path)
    /// calls. `width` is in canvas pixels.
    fn set_stroke(&mut self, color: Color, width: f64);

    /// Set the font used by subsequent [`draw_text`](Painter::draw_text)
    /// calls. `point_size` is in points.
    fn set_font(&mut self, point_size: f64, bold: bool);

    /// Stroke the outline of every element in the path.
    fn stroke_path(&mut self, path: &Path);

    /// Fill the path with the given color (even-odd rule).
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Draw a single line of text with its baseline anchor at `anchor`.
    fn draw_text(&mut self, anchor: Pt, text: &str);
}

/// One recorded painter operation.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    SetStroke { color: Color, width: f64 },
    SetFont { point_size: f64, bold: bool },
    StrokePath(Path),
    FillPath { path: Path, color: Color },
    DrawText { anchor: Pt, text: String },
}

/// Painter that records every operation; the backend used by the test suite
/// to assert on what a shape actually drew.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    ops: Vec<PaintOp>,
}

impl RecordingPainter {
    pub fn new() -> RecordingPainter {
        RecordingPainter::default()
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// All stroked paths, in draw order.
    pub fn stroked_paths(&self) -> Vec<&Path> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::StrokePath(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    /// All filled paths with their colors, in draw order.
    pub fn filled_paths(&self) -> Vec<(&Path, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::FillPath { path, color } => Some((path, *color)),
                _ => None,
            })
            .collect()
    }

    /// All drawn text strings, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn set_stroke(&mut self, color: Color, width: f64) {
        self.ops.push(PaintOp::SetStroke { color, width });
    }

    fn set_font(&mut self, point_size: f64, bold: bool) {
        self.ops.push(PaintOp::SetFont { point_size, bold });
    }

    fn stroke_path(&mut self, path: &Path) {
        self.ops.push(PaintOp::StrokePath(path.clone()));
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.ops.push(PaintOp::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn draw_text(&mut self, anchor: Pt, text: &str) {
        self.ops.push(PaintOp::DrawText {
            anchor,
            text: text.to_string(),
        });
    }
}
