//! Rectangle clipping for polygons and polylines.
//!
//! Renderers that carry screen coordinates in fixed-width integers break when
//! handed huge coordinates. This crate trims shapes to a rectangle first,
//! using the Sutherland-Hodgman algorithm, so that every vertex the renderer
//! sees lies inside known bounds.
//!
//! # Quick Start
//!
//! ```
//! use rectclip::prelude::*;
//!
//! let clipper = Clipper::default(); // +/-30000 on both axes
//! let mut line = vec![Point::new(-40000.0, 0.0), Point::new(40000.0, 0.0)];
//! clipper.trim(&mut line, ShapeKind::Open);
//! assert_eq!(line, vec![Point::new(-30000.0, 0.0), Point::new(30000.0, 0.0)]);
//! ```

pub mod clipper;
pub mod colors;
pub mod math;
pub mod render;

mod error;

pub use clipper::{Boundary, ClipBounds, Clipper, ShapeKind};
pub use error::{Error, Result};
pub use math::Point;
pub use render::Canvas;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rectclip::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{Boundary, ClipBounds, Clipper, ShapeKind};

    // Math
    pub use crate::math::Point;

    // Rendering
    pub use crate::render::Canvas;
}
