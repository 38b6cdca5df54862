//! Shared drawing style for shapes.
//!
//! The upstream labeling tool held these as process-wide mutable attributes
//! on the shape class. Here they are an immutable [`ShapeStyle`] the host
//! canvas owns and passes into [`crate::Shape::paint`] by reference, so
//! instances stay independently testable and there is no shared mutable
//! state to race on.

use crate::types::Color;

pub const DEFAULT_LINE_COLOR: Color = Color::rgba(0, 255, 0, 128);
pub const DEFAULT_FILL_COLOR: Color = Color::rgba(255, 0, 0, 128);
pub const DEFAULT_SELECT_LINE_COLOR: Color = Color::rgb(255, 255, 255);
pub const DEFAULT_SELECT_FILL_COLOR: Color = Color::rgba(0, 128, 255, 155);
pub const DEFAULT_VERTEX_FILL_COLOR: Color = Color::rgb(0, 255, 0);
pub const DEFAULT_HIGHLIGHT_VERTEX_FILL_COLOR: Color = Color::rgb(255, 0, 0);

/// Marker drawn at each vertex of a shape outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MarkerKind {
    Square,
    #[default]
    Round,
}

/// How a vertex under pointer focus is emphasized.
///
/// `NearVertex` marks a vertex the pointer is hovering near (large round
/// marker); `MoveVertex` marks a vertex being dragged (modest square marker).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightMode {
    MoveVertex,
    NearVertex,
}

impl HighlightMode {
    /// Marker size multiplier and marker kind for this mode.
    pub fn marker(self) -> (f64, MarkerKind) {
        match self {
            HighlightMode::NearVertex => (4.0, MarkerKind::Round),
            HighlightMode::MoveVertex => (1.5, MarkerKind::Square),
        }
    }
}

/// Colors and marker settings shared by every shape on a canvas.
///
/// Individual shapes may override `line_color` and `fill_color` through
/// their own optional fields; everything else comes from here.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    pub line_color: Color,
    pub fill_color: Color,
    pub select_line_color: Color,
    pub select_fill_color: Color,
    pub vertex_fill_color: Color,
    pub highlight_vertex_fill_color: Color,
    /// Vertex marker diameter at zoom 1.0, in canvas pixels.
    pub point_size: f64,
    pub point_type: MarkerKind,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        ShapeStyle {
            line_color: DEFAULT_LINE_COLOR,
            fill_color: DEFAULT_FILL_COLOR,
            select_line_color: DEFAULT_SELECT_LINE_COLOR,
            select_fill_color: DEFAULT_SELECT_FILL_COLOR,
            vertex_fill_color: DEFAULT_VERTEX_FILL_COLOR,
            highlight_vertex_fill_color: DEFAULT_HIGHLIGHT_VERTEX_FILL_COLOR,
            point_size: 8.0,
            point_type: MarkerKind::Round,
        }
    }
}
