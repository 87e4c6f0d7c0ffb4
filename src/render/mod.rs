//! Rasterization of trimmed shapes.
//!
//! Provides the [`Canvas`] struct which owns a color buffer and strokes
//! shapes after running them through a [`Clipper`](crate::clipper::Clipper).

mod canvas;

pub use canvas::{Canvas, RASTER_MARGIN};
