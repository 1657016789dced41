//! Geometry primitives over normalized image coordinates.

use serde::{Deserialize, Serialize};

/// A 2D point in normalized image coordinates: `x` and `y` in `[0, 1]`,
/// relative to image width and height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: NormalizedPoint, b: NormalizedPoint) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Point at parameter `t` in `[0, 1]` on the segment `a` -> `b`.
///
/// Pose detectors emit no waist landmark; the body classifier synthesizes
/// one at `t = 0.5` between shoulder and hip.
pub fn lerp_point(a: NormalizedPoint, b: NormalizedPoint, t: f64) -> NormalizedPoint {
    NormalizedPoint {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_point_to_itself_is_zero() {
        let p = NormalizedPoint::new(0.3, 0.7);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = NormalizedPoint::new(0.1, 0.2);
        let b = NormalizedPoint::new(0.9, 0.5);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn distance_matches_pythagoras() {
        let a = NormalizedPoint::new(0.0, 0.0);
        let b = NormalizedPoint::new(0.3, 0.4);
        assert!((distance(a, b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = NormalizedPoint::new(0.2, 0.4);
        let b = NormalizedPoint::new(0.8, 0.0);

        assert_eq!(lerp_point(a, b, 0.0), a);
        assert_eq!(lerp_point(a, b, 1.0), b);

        let mid = lerp_point(a, b, 0.5);
        assert!((mid.x - 0.5).abs() < 1e-12);
        assert!((mid.y - 0.2).abs() < 1e-12);
    }
}
