//! Quadrilateral annotation shape core for image-labeling canvases.
//!
//! A [`Shape`] is one four-point bounding box on an interactive canvas: this
//! crate draws its outline, fill, vertex handles and computed size label, and
//! answers the hit-testing queries (nearest vertex, point containment) the
//! host canvas uses to drive mouse-based editing. Everything else — file I/O,
//! label lists, window chrome, event interpretation — lives in the host.
//!
//! Rendering goes through the [`Painter`] trait, so any graphics stack can
//! host shapes; [`SvgPainter`] and [`RecordingPainter`] backends are built in.
//! Size labels consult a [`GsdResolver`] (ground-sample distance, meters per
//! pixel) and degrade from meters to pixel units when the lookup misses.
//!
//! ```
//! use quadbox::{dvec2, NoGsd, PaintContext, Shape, ShapeStyle, SvgPainter};
//!
//! let mut shape = Shape::with_label("car", None);
//! shape.add_point(dvec2(0.0, 0.0));
//! shape.add_point(dvec2(20.0, 0.0));
//! shape.add_point(dvec2(20.0, 10.0));
//! shape.add_point(dvec2(0.0, 10.0));
//! shape.close();
//!
//! assert_eq!(shape.nearest_vertex(dvec2(19.8, 0.1), 0.5), Some(1));
//! assert!(shape.contains_point(dvec2(10.0, 5.0)).unwrap());
//!
//! let style = ShapeStyle::default();
//! let mut painter = SvgPainter::new();
//! shape.paint(
//!     &mut painter,
//!     &PaintContext { style: &style, show_box_size: true, gsd: &NoGsd },
//! );
//! let svg = painter.finish();
//! assert!(svg.contains("20.0 x 10.0 pix."));
//! // No ground-sample entry: the sentinel keeps the shape non-deletable.
//! assert_eq!(shape.area(), Some(quadbox::GSD_MISS_AREA));
//! ```

pub mod errors;
pub mod gsd;
pub mod log;
pub mod painter;
pub mod path;
pub mod shape;
pub mod style;
pub mod svg;
pub mod types;

pub use errors::ShapeError;
pub use gsd::{Gsd, GsdResolver, GsdTable, NoGsd};
pub use painter::{PaintOp, Painter, RecordingPainter};
pub use path::{Path, PathEl};
pub use shape::{GSD_MISS_AREA, MAX_POINTS, PaintContext, Shape};
pub use style::{HighlightMode, MarkerKind, ShapeStyle};
pub use svg::SvgPainter;
pub use types::{Color, DVec2, Pt, Rect, dvec2};
