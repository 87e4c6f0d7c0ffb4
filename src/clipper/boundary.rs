//! The four half-plane boundaries of the clip rectangle.

use super::bounds::ClipBounds;
use crate::math::Point;

/// Magnitude below which the intersection denominator counts as zero.
pub const SMALL_NUM: f64 = 1e-12;

/// One side of the clip rectangle.
///
/// Each boundary is an infinite line; a point is inside when it lies on the
/// same side as the rectangle's interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// x = max_x, inside is x < max_x
    Xmax,
    /// y = max_y, inside is y < max_y
    Ymax,
    /// x = min_x, inside is x > min_x
    Xmin,
    /// y = min_y, inside is y > min_y
    Ymin,
}

impl Boundary {
    /// Stage order used by [`Clipper`](super::Clipper). Any order gives the
    /// same shape; this one matches the historical renderer.
    pub const PIPELINE: [Boundary; 4] = [
        Boundary::Xmax,
        Boundary::Ymax,
        Boundary::Xmin,
        Boundary::Ymin,
    ];

    /// Strict inside test. Points exactly on the line count as outside.
    #[inline]
    pub fn contains(self, p: Point, bounds: &ClipBounds) -> bool {
        self.side(p, bounds) == Side::Inside
    }

    /// Which side of this boundary `p` lies on. NaN coordinates are outside.
    #[inline]
    pub fn side(self, p: Point, bounds: &ClipBounds) -> Side {
        let (value, threshold) = self.axis(p, bounds);
        let inside = match self {
            Self::Xmax | Self::Ymax => value < threshold,
            Self::Xmin | Self::Ymin => value > threshold,
        };
        if inside {
            Side::Inside
        } else if value == threshold {
            Side::On
        } else {
            Side::Outside
        }
    }

    /// Move `p` onto this boundary line along the boundary's axis.
    #[inline]
    pub fn project(self, p: Point, bounds: &ClipBounds) -> Point {
        match self {
            Self::Xmax => Point::new(bounds.max_x(), p.y),
            Self::Ymax => Point::new(p.x, bounds.max_y()),
            Self::Xmin => Point::new(bounds.min_x(), p.y),
            Self::Ymin => Point::new(p.x, bounds.min_y()),
        }
    }

    /// Intersection of the segment `p1`-`p2` with this boundary.
    ///
    /// The caller guarantees the segment crosses the boundary, i.e. exactly
    /// one endpoint is inside. The crossing is found from the parametric form
    /// `p1 + r * (p2 - p1)` with `r = r_n / r_d`. The result lies exactly on
    /// the boundary line, and its other coordinate stays between the
    /// endpoints' values, so boundaries already clipped against stay
    /// satisfied.
    ///
    /// If `r_d` vanishes (the segment is numerically parallel to the
    /// boundary, which tiny clip rectangles can produce) the inside endpoint
    /// is projected onto the boundary instead.
    pub fn intersect(self, p1: Point, p2: Point, bounds: &ClipBounds) -> Point {
        let (c1, threshold) = self.axis(p1, bounds);
        let (c2, _) = self.axis(p2, bounds);
        let extent = match self {
            Self::Xmax | Self::Xmin => bounds.height(),
            Self::Ymax | Self::Ymin => bounds.width(),
        };

        // The extent scales r_n and r_d alike, so the ratio is taken from the
        // plain differences; halve the operands if a difference overflows.
        let (mut num, mut den) = (threshold - c1, c2 - c1);
        if !(num.is_finite() && den.is_finite()) {
            num = threshold / 2.0 - c1 / 2.0;
            den = c2 / 2.0 - c1 / 2.0;
        }
        let r_d = den * extent;
        let r = num / den;

        if r_d.abs() <= SMALL_NUM || r.is_nan() {
            let anchor = if self.contains(p1, bounds) { p1 } else { p2 };
            log::debug!(
                "degenerate {:?} crossing ({}, {}) -> ({}, {}), r_n = {:e}, r_d = {:e}",
                self,
                p1.x,
                p1.y,
                p2.x,
                p2.y,
                num * extent,
                r_d
            );
            return self.project(anchor, bounds);
        }

        if r <= 0.0 {
            return self.project(p1, bounds);
        }
        if r >= 1.0 {
            return self.project(p2, bounds);
        }
        match self {
            Self::Xmax | Self::Xmin => Point::new(threshold, along(p1.y, p2.y, r)),
            Self::Ymax | Self::Ymin => Point::new(along(p1.x, p2.x, r), threshold),
        }
    }

    /// The coordinate this boundary tests, and the boundary's threshold.
    #[inline]
    fn axis(self, p: Point, bounds: &ClipBounds) -> (f64, f64) {
        match self {
            Self::Xmax => (p.x, bounds.max_x()),
            Self::Ymax => (p.y, bounds.max_y()),
            Self::Xmin => (p.x, bounds.min_x()),
            Self::Ymin => (p.y, bounds.min_y()),
        }
    }
}

/// Position of a point relative to one [`Boundary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Inside,
    /// Exactly on the boundary line.
    On,
    Outside,
}

/// Value at `r` of the way from `a` to `b`, kept within `[a, b]`.
#[inline]
fn along(a: f64, b: f64, r: f64) -> f64 {
    let d = b - a;
    let v = if d.is_finite() {
        a + d * r
    } else {
        a * (1.0 - r) + b * r
    };
    v.clamp(a.min(b), a.max(b))
}
