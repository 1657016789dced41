//! Landmark sets emitted by the external face and pose detectors.
//!
//! Index assignments are a fixed contract with the detectors. Changing any
//! index here invalidates every classifier threshold downstream, so the
//! constants live in one place and the classifiers never hardcode indices.

use serde::{Deserialize, Serialize};

use crate::geometry::NormalizedPoint;

/// Point count of the face landmark scheme.
pub const FACE_LANDMARK_COUNT: usize = 468;

/// Point count of the pose landmark scheme.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Minimum pose points for the torso landmarks to be trustworthy.
pub const MIN_POSE_LANDMARKS: usize = 25;

/// Face landmark indices used by the classifiers.
pub mod face_index {
    pub const FOREHEAD_CENTER: usize = 10;
    pub const LEFT_FOREHEAD_EDGE: usize = 70;
    pub const RIGHT_FOREHEAD_EDGE: usize = 300;
    pub const LEFT_CHEEK: usize = 234;
    pub const RIGHT_CHEEK: usize = 454;
    pub const LEFT_JAW: usize = 172;
    pub const RIGHT_JAW: usize = 397;
    pub const CHIN: usize = 152;
}

/// Pose landmark indices used by the classifiers.
pub mod pose_index {
    pub const LEFT_SHOULDER: usize = 11;
    pub const RIGHT_SHOULDER: usize = 12;
    pub const LEFT_HIP: usize = 23;
    pub const RIGHT_HIP: usize = 24;
}

/// The 468-point face landmark set.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceLandmarkSet(Vec<NormalizedPoint>);

impl FaceLandmarkSet {
    pub fn new(points: Vec<NormalizedPoint>) -> Self {
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every index of the face landmark scheme is present.
    pub fn is_complete(&self) -> bool {
        self.0.len() >= FACE_LANDMARK_COUNT
    }

    pub fn get(&self, index: usize) -> Option<NormalizedPoint> {
        self.0.get(index).copied()
    }

    pub fn points(&self) -> &[NormalizedPoint] {
        &self.0
    }
}

/// The 33-point body pose landmark set.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoseLandmarkSet(Vec<NormalizedPoint>);

impl PoseLandmarkSet {
    pub fn new(points: Vec<NormalizedPoint>) -> Self {
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NormalizedPoint> {
        self.0.get(index).copied()
    }

    pub fn points(&self) -> &[NormalizedPoint] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_set_completeness_threshold() {
        let short = FaceLandmarkSet::new(vec![NormalizedPoint::new(0.5, 0.5); 100]);
        assert!(!short.is_complete());

        let full = FaceLandmarkSet::new(vec![NormalizedPoint::new(0.5, 0.5); FACE_LANDMARK_COUNT]);
        assert!(full.is_complete());
    }

    #[test]
    fn landmark_sets_round_trip_as_plain_json_arrays() {
        let set = PoseLandmarkSet::new(vec![
            NormalizedPoint::new(0.25, 0.5),
            NormalizedPoint::new(0.75, 0.5),
        ]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"x":0.25,"y":0.5},{"x":0.75,"y":0.5}]"#);

        let back: PoseLandmarkSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.get(1).unwrap().x, 0.75);
    }
}
