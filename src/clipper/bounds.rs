//! The rectangle every trimmed shape is confined to.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::Point;

/// Axis-aligned clip rectangle.
///
/// The fields are private so that `min < max` holds on both axes for every
/// value of this type, including deserialised ones.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundsRepr", into = "BoundsRepr")]
pub struct ClipBounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

/// Wire form of [`ClipBounds`], validated on the way in.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct BoundsRepr {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl ClipBounds {
    /// X11 screen coordinates are 16 bit signed. The real limit is 32767 but
    /// drawing still goes wrong near it, so leave some headroom.
    pub const X11: Self = Self {
        min_x: -30000.0,
        min_y: -30000.0,
        max_x: 30000.0,
        max_y: 30000.0,
    };

    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        let finite = [min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite());
        if !finite || min_x >= max_x || min_y >= max_y {
            return Err(Error::InvalidBounds {
                min_x,
                min_y,
                max_x,
                max_y,
            });
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Bounds of `[-limit, limit]` on both axes.
    pub fn symmetric(limit: f64) -> Result<Self> {
        Self::new(-limit, -limit, limit, limit)
    }

    /// Parse bounds from a JSON object with `min_x`, `min_y`, `max_x` and
    /// `max_y` keys.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load bounds from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The overlap of two rectangles, or `None` if they share no area.
    pub fn intersection(&self, other: &ClipBounds) -> Option<ClipBounds> {
        Self::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        )
        .ok()
    }

    /// Inclusive containment test. Trimmed output always satisfies this.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

impl Default for ClipBounds {
    fn default() -> Self {
        Self::X11
    }
}

impl TryFrom<BoundsRepr> for ClipBounds {
    type Error = Error;

    fn try_from(repr: BoundsRepr) -> Result<Self> {
        Self::new(repr.min_x, repr.min_y, repr.max_x, repr.max_y)
    }
}

impl From<ClipBounds> for BoundsRepr {
    fn from(b: ClipBounds) -> Self {
        Self {
            min_x: b.min_x,
            min_y: b.min_y,
            max_x: b.max_x,
            max_y: b.max_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_is_x11_limit() {
        let b = ClipBounds::default();
        assert_eq!(b, ClipBounds::X11);
        assert_relative_eq!(b.max_x(), 30000.0);
        assert_relative_eq!(b.min_y(), -30000.0);
        assert_relative_eq!(b.width(), 60000.0);
        assert_relative_eq!(b.height(), 60000.0);
    }

    #[test]
    fn rejects_inverted_empty_and_non_finite() {
        assert!(matches!(
            ClipBounds::new(10.0, 0.0, -10.0, 5.0),
            Err(Error::InvalidBounds { .. })
        ));
        assert!(ClipBounds::new(0.0, 0.0, 0.0, 5.0).is_err());
        assert!(ClipBounds::new(0.0, f64::NAN, 1.0, 5.0).is_err());
        assert!(ClipBounds::symmetric(f64::INFINITY).is_err());
        assert!(ClipBounds::symmetric(-1.0).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let b = ClipBounds::symmetric(10.0).unwrap();
        assert!(b.contains(Point::new(10.0, -10.0)));
        assert!(b.contains(Point::ZERO));
        assert!(!b.contains(Point::new(10.000001, 0.0)));
        assert!(!b.contains(Point::new(f64::NAN, 0.0)));
    }

    #[test]
    fn intersection_of_overlapping_and_disjoint_bounds() {
        let a = ClipBounds::symmetric(3e9).unwrap();
        let canvas = ClipBounds::new(-2.0, -2.0, 12.0, 8.0).unwrap();
        assert_eq!(a.intersection(&canvas), Some(canvas));
        assert_eq!(canvas.intersection(&a), Some(canvas));

        let right = ClipBounds::new(5.0, 0.0, 20.0, 1.0).unwrap();
        assert_eq!(
            canvas.intersection(&right),
            Some(ClipBounds::new(5.0, 0.0, 12.0, 1.0).unwrap())
        );

        let far = ClipBounds::new(100.0, 100.0, 200.0, 200.0).unwrap();
        assert_eq!(canvas.intersection(&far), None);
        // touching edges share no area
        let touching = ClipBounds::new(12.0, -2.0, 20.0, 8.0).unwrap();
        assert_eq!(canvas.intersection(&touching), None);
    }

    #[test]
    fn parses_json_config() {
        let b = ClipBounds::from_json(r#"{"min_x": -5, "min_y": -2.5, "max_x": 5, "max_y": 7}"#)
            .unwrap();
        assert_eq!(b, ClipBounds::new(-5.0, -2.5, 5.0, 7.0).unwrap());

        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(ClipBounds::from_json(&json).unwrap(), b);
    }

    #[test]
    fn json_goes_through_validation() {
        let err = ClipBounds::from_json(r#"{"min_x": 5, "min_y": 0, "max_x": -5, "max_y": 1}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = ClipBounds::from_json(r#"{"min_x": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ClipBounds::load("/nonexistent/rectclip/bounds.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
