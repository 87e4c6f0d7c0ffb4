//! Trimming of polygons and polylines to a rectangle.
//!
//! Renderers with fixed-width coordinate pipelines (historically X11 with its
//! 16-bit screen coordinates) corrupt output when handed coordinates beyond
//! their limits. [`Clipper`] trims a shape to a [`ClipBounds`] rectangle
//! before it reaches such a renderer, using the Sutherland-Hodgman algorithm:
//! the shape is clipped against one [`Boundary`] at a time, and the output of
//! each stage feeds the next.
//!
//! Open shapes (polylines) are handled by never synthesizing a point on the
//! edge from the last vertex back to the first.

pub mod boundary;
pub mod bounds;

pub use boundary::{Boundary, Side, SMALL_NUM};
pub use bounds::ClipBounds;

use crate::error::{Error, Result};
use crate::math::Point;

/// Topology of a vertex sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    /// Polyline. There is no edge from the last vertex to the first.
    Open,
    /// Polygon. The last vertex connects back to the first.
    #[default]
    Closed,
}

impl From<bool> for ShapeKind {
    /// `true` means the shape is open.
    fn from(shape_open: bool) -> Self {
        if shape_open {
            ShapeKind::Open
        } else {
            ShapeKind::Closed
        }
    }
}

/// Trims shapes to a fixed rectangle.
///
/// The clipper holds only its bounds, so one value can be shared freely
/// between threads; each call works on a sequence owned by its caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clipper {
    bounds: ClipBounds,
    stages: [Boundary; 4],
}

impl Clipper {
    pub fn new(bounds: ClipBounds) -> Self {
        Self {
            bounds,
            stages: Boundary::PIPELINE,
        }
    }

    pub fn bounds(&self) -> &ClipBounds {
        &self.bounds
    }

    /// Trim `points` in place.
    ///
    /// Afterwards every vertex lies inside or on the bounds. Vertices are
    /// never reordered; some are dropped and boundary crossings are inserted.
    /// Vertices with NaN or infinite coordinates are dropped up front.
    pub fn trim(&self, points: &mut Vec<Point>, kind: ShapeKind) {
        let before = points.len();
        points.retain(Point::is_finite);
        if points.len() != before {
            log::debug!("dropped {} non-finite vertices", before - points.len());
        }

        // Ping-pong between the caller's buffer and one scratch buffer.
        let mut scratch = Vec::with_capacity(points.len() + self.stages.len());
        for &boundary in &self.stages {
            if points.is_empty() {
                break;
            }
            self.trim_to_boundary(points, &mut scratch, boundary, kind);
            std::mem::swap(points, &mut scratch);
        }
    }

    /// Trim a copy of `points`, leaving the input alone.
    pub fn trimmed(&self, points: &[Point], kind: ShapeKind) -> Vec<Point> {
        let mut out = points.to_vec();
        self.trim(&mut out, kind);
        out
    }

    /// Trim a shape stored as parallel coordinate arrays.
    ///
    /// Both arrays are left untouched if their lengths differ.
    pub fn trim_xy(&self, xs: &mut Vec<f64>, ys: &mut Vec<f64>, kind: ShapeKind) -> Result<()> {
        if xs.len() != ys.len() {
            return Err(Error::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }

        let mut points: Vec<Point> = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| Point::new(x, y))
            .collect();
        self.trim(&mut points, kind);

        xs.clear();
        ys.clear();
        xs.extend(points.iter().map(|p| p.x));
        ys.extend(points.iter().map(|p| p.y));
        Ok(())
    }

    /// Clip `input` against a single boundary using the Sutherland-Hodgman
    /// algorithm, replacing the contents of `output`.
    ///
    /// Each edge runs from the previous vertex to the current one, starting
    /// with the edge from the last vertex to the first. For open shapes that
    /// first edge does not exist, so no crossing point is emitted for it.
    ///
    /// Crossings are only computed between a strictly inside and a strictly
    /// outside vertex. A vertex lying exactly on the boundary line is kept as
    /// it is, so trimming already trimmed output returns it unchanged.
    pub fn trim_to_boundary(
        &self,
        input: &[Point],
        output: &mut Vec<Point>,
        boundary: Boundary,
        kind: ShapeKind,
    ) {
        output.clear();

        let Some(mut prev) = input.len().checked_sub(1) else {
            return;
        };

        let mut ends_with_crossing = false;
        for (current, &p2) in input.iter().enumerate() {
            let p1 = input[prev];
            let real_edge = !(current == 0 && kind == ShapeKind::Open);

            let p1_side = boundary.side(p1, &self.bounds);
            let p2_side = boundary.side(p2, &self.bounds);

            match (p1_side, p2_side) {
                (Side::Outside, Side::Inside) => {
                    // Entering: crossing point, then the vertex itself
                    if real_edge {
                        push_crossing(output, boundary.intersect(p1, p2, &self.bounds));
                    }
                    output.push(p2);
                    ends_with_crossing = false;
                }
                (_, Side::Inside | Side::On) => {
                    output.push(p2);
                    ends_with_crossing = false;
                }
                (Side::Inside, Side::Outside) => {
                    if real_edge {
                        ends_with_crossing |=
                            push_crossing(output, boundary.intersect(p1, p2, &self.bounds));
                    }
                }
                // leaving from the line: p1 itself was the crossing
                (Side::On | Side::Outside, Side::Outside) => {}
            }

            prev = current;
        }

        // The wrap-around edge was handled first; don't close onto a copy of
        // the starting point.
        if kind == ShapeKind::Closed
            && ends_with_crossing
            && output.len() > 1
            && output.first() == output.last()
        {
            output.pop();
        }

        log::trace!(
            "{:?}: {} -> {} vertices",
            boundary,
            input.len(),
            output.len()
        );
    }
}

impl Default for Clipper {
    fn default() -> Self {
        Self::new(ClipBounds::default())
    }
}

/// Two crossings can meet at one point where the shape only touches the
/// outside; emit it once. Returns whether the point was pushed.
#[inline]
fn push_crossing(output: &mut Vec<Point>, p: Point) -> bool {
    if output.last() == Some(&p) {
        return false;
    }
    output.push(p);
    true
}
