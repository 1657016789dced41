//! Body shape classification from the 33-point pose landmark set.
//!
//! Same ordered-rule structure as the face classifier. Waist landmarks are
//! synthesized halfway between shoulder and hip on each side; pose detectors
//! emit no waist point directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::geometry::{distance, lerp_point};
use crate::landmarks::{pose_index, PoseLandmarkSet, MIN_POSE_LANDMARKS};

/// The five body shape labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyShape {
    Rectangle,
    #[serde(rename = "Inverted Triangle")]
    InvertedTriangle,
    Triangle,
    Trapezoid,
    Oval,
}

impl fmt::Display for BodyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BodyShape::Rectangle => "Rectangle",
            BodyShape::InvertedTriangle => "Inverted Triangle",
            BodyShape::Triangle => "Triangle",
            BodyShape::Trapezoid => "Trapezoid",
            BodyShape::Oval => "Oval",
        };
        f.write_str(label)
    }
}

/// Raw body widths. Units cancel in the ratios, so callers may supply
/// normalized or pixel measurements interchangeably.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurements {
    pub shoulder_width: f64,
    pub hip_width: f64,
    pub waist_width: f64,
}

/// Ratios the classification rules test against.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRatios {
    pub shoulder_to_hip: f64,
    pub waist_to_shoulder: f64,
}

/// Outcome of body shape classification.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyShapeResult {
    pub body_shape: BodyShape,
    pub confidence: f64,
    pub ratios: BodyRatios,
}

/// Measure shoulder, hip and synthesized waist widths from pose landmarks.
///
/// Fails `InsufficientLandmarks` when fewer than 25 points arrived or any
/// shoulder/hip point is missing. The orchestrator absorbs this failure.
pub fn measure(landmarks: &PoseLandmarkSet) -> Result<BodyMeasurements> {
    if landmarks.len() < MIN_POSE_LANDMARKS {
        return Err(AnalysisError::InsufficientLandmarks);
    }

    let point = |index: usize| {
        landmarks
            .get(index)
            .ok_or(AnalysisError::InsufficientLandmarks)
    };

    let left_shoulder = point(pose_index::LEFT_SHOULDER)?;
    let right_shoulder = point(pose_index::RIGHT_SHOULDER)?;
    let left_hip = point(pose_index::LEFT_HIP)?;
    let right_hip = point(pose_index::RIGHT_HIP)?;

    let left_waist = lerp_point(left_shoulder, left_hip, 0.5);
    let right_waist = lerp_point(right_shoulder, right_hip, 0.5);

    Ok(BodyMeasurements {
        shoulder_width: distance(left_shoulder, right_shoulder),
        hip_width: distance(left_hip, right_hip),
        waist_width: distance(left_waist, right_waist),
    })
}

/// Classify a body shape from measurements. First match wins.
pub fn classify_measurements(m: &BodyMeasurements) -> Result<BodyShapeResult> {
    // Zero-width shoulders or hips would divide by zero below; that is a
    // detection failure, not a Rectangle.
    if m.shoulder_width <= f64::EPSILON || m.hip_width <= f64::EPSILON {
        return Err(AnalysisError::InsufficientLandmarks);
    }

    let ratios = BodyRatios {
        shoulder_to_hip: m.shoulder_width / m.hip_width,
        waist_to_shoulder: m.waist_width / m.shoulder_width,
    };

    let s2h = ratios.shoulder_to_hip;
    let w2s = ratios.waist_to_shoulder;

    let (body_shape, confidence) = if s2h >= 1.2 {
        (BodyShape::InvertedTriangle, (0.65 + (s2h - 1.2)).min(1.0))
    } else if s2h <= 0.85 {
        (BodyShape::Triangle, (0.65 + (0.85 - s2h)).min(1.0))
    } else if w2s < 0.75 {
        (BodyShape::Trapezoid, (0.6 + (0.75 - w2s)).min(1.0))
    } else if w2s > 0.95 {
        (BodyShape::Oval, (0.6 + (w2s - 0.95)).min(1.0))
    } else {
        (BodyShape::Rectangle, 0.55)
    };

    Ok(BodyShapeResult {
        body_shape,
        confidence,
        ratios,
    })
}

/// Classify a body shape from pose landmarks.
pub fn classify(landmarks: &PoseLandmarkSet) -> Result<BodyShapeResult> {
    classify_measurements(&measure(landmarks)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::NormalizedPoint;
    use crate::landmarks::POSE_LANDMARK_COUNT;

    fn torso_landmarks(shoulder_width: f64, hip_width: f64) -> PoseLandmarkSet {
        let mut points = vec![NormalizedPoint::new(0.5, 0.5); POSE_LANDMARK_COUNT];
        points[pose_index::LEFT_SHOULDER] = NormalizedPoint::new(0.5 - shoulder_width / 2.0, 0.3);
        points[pose_index::RIGHT_SHOULDER] = NormalizedPoint::new(0.5 + shoulder_width / 2.0, 0.3);
        points[pose_index::LEFT_HIP] = NormalizedPoint::new(0.5 - hip_width / 2.0, 0.7);
        points[pose_index::RIGHT_HIP] = NormalizedPoint::new(0.5 + hip_width / 2.0, 0.7);
        PoseLandmarkSet::new(points)
    }

    #[test]
    fn rejects_short_landmark_set() {
        let short = PoseLandmarkSet::new(vec![NormalizedPoint::new(0.5, 0.5); 20]);
        assert!(matches!(
            classify(&short),
            Err(AnalysisError::InsufficientLandmarks)
        ));
    }

    #[test]
    fn rejects_zero_width_torso() {
        let collapsed = PoseLandmarkSet::new(vec![NormalizedPoint::new(0.5, 0.5); 33]);
        assert!(matches!(
            classify(&collapsed),
            Err(AnalysisError::InsufficientLandmarks)
        ));
    }

    #[test]
    fn wide_shoulders_classify_inverted_triangle() {
        // Shoulder 120, hip 90: ratio 1.33.
        let m = BodyMeasurements {
            shoulder_width: 120.0,
            hip_width: 90.0,
            waist_width: 105.0,
        };
        let result = classify_measurements(&m).unwrap();
        assert_eq!(result.body_shape, BodyShape::InvertedTriangle);
        assert!((result.confidence - (0.65 + (120.0 / 90.0 - 1.2))).abs() < 1e-12);
        assert!((result.confidence - 0.7833).abs() < 1e-4);
    }

    #[test]
    fn narrow_waist_classifies_trapezoid() {
        // Equal shoulders and hips with a pinched waist.
        let m = BodyMeasurements {
            shoulder_width: 90.0,
            hip_width: 90.0,
            waist_width: 60.0,
        };
        let result = classify_measurements(&m).unwrap();
        assert_eq!(result.body_shape, BodyShape::Trapezoid);
    }

    #[test]
    fn narrow_shoulders_classify_triangle() {
        let m = BodyMeasurements {
            shoulder_width: 70.0,
            hip_width: 100.0,
            waist_width: 60.0,
        };
        let result = classify_measurements(&m).unwrap();
        assert_eq!(result.body_shape, BodyShape::Triangle);
    }

    #[test]
    fn straight_torso_from_landmarks_is_oval() {
        // Equal widths: the synthesized waist matches the shoulders, so
        // waist-to-shoulder is 1.0 and the Oval rule fires.
        let landmarks = torso_landmarks(0.4, 0.4);
        let result = classify(&landmarks).unwrap();
        assert_eq!(result.body_shape, BodyShape::Oval);
        assert!((result.ratios.waist_to_shoulder - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mild_taper_from_landmarks_is_rectangle() {
        // Shoulder 0.40, hip 0.34: s2h 1.18, waist 0.37 -> w2s 0.925. No
        // rule fires, so the Rectangle default applies.
        let landmarks = torso_landmarks(0.40, 0.34);
        let result = classify(&landmarks).unwrap();
        assert_eq!(result.body_shape, BodyShape::Rectangle);
        assert!((result.confidence - 0.55).abs() < 1e-12);
    }

    #[test]
    fn confidence_clamps_at_one() {
        let m = BodyMeasurements {
            shoulder_width: 200.0,
            hip_width: 90.0,
            waist_width: 150.0,
        };
        let result = classify_measurements(&m).unwrap();
        assert_eq!(result.confidence, 1.0);
    }
}
