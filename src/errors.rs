//! Error types for shape geometry queries.
//!
//! Rendering itself is infallible (an empty shape paints nothing, a missing
//! ground-sample entry degrades to the pixel label); errors only arise from
//! geometry queries whose preconditions the caller violated.

use miette::Diagnostic;
use thiserror::Error;

/// Errors returned by [`crate::Shape`] geometry and point access.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Path construction, containment, or bounding-box query on a shape
    /// that holds no points.
    #[error("shape has no points")]
    #[diagnostic(code(quadbox::shape::empty_shape))]
    EmptyShape,

    /// Checked point access with an index past the end of the point list.
    #[error("point index {index} out of range for shape with {len} points")]
    #[diagnostic(code(quadbox::shape::index_out_of_range))]
    IndexOutOfRange { index: usize, len: usize },
}
