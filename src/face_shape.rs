//! Face shape classification from the 468-point landmark set.
//!
//! Ordered threshold rules over three width/height ratios; the first
//! matching rule wins, so rule order is load-bearing. The thresholds are
//! empirically tuned constants and must not be reordered or nudged without
//! revisiting the whole rule set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::geometry::distance;
use crate::landmarks::{face_index, FaceLandmarkSet};

/// The seven face shape labels.
///
/// `Uncertain` is the designed fallback when no rule matches. It is a real
/// label with its own confidence, not a detection failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceShape {
    Rectangle,
    Square,
    Oval,
    Round,
    Diamond,
    Heart,
    Uncertain,
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FaceShape::Rectangle => "Rectangle",
            FaceShape::Square => "Square",
            FaceShape::Oval => "Oval",
            FaceShape::Round => "Round",
            FaceShape::Diamond => "Diamond",
            FaceShape::Heart => "Heart",
            FaceShape::Uncertain => "Uncertain",
        };
        f.write_str(label)
    }
}

/// Raw face measurements in normalized units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceMeasurements {
    pub face_width: f64,
    pub face_height: f64,
    pub jaw_width: f64,
    pub forehead_width: f64,
}

/// Ratios the classification rules test against.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceRatios {
    pub height_to_width: f64,
    pub jaw_to_face_width: f64,
    pub forehead_to_face_width: f64,
}

/// Outcome of face shape classification.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceShapeResult {
    pub face_shape: FaceShape,
    pub confidence: f64,
    pub ratios: FaceRatios,
}

/// Measure face width, height, jaw width and forehead width from the fixed
/// landmark indices.
///
/// Fails `MissingLandmarks` when the set is incomplete or the cheek-to-cheek
/// width is degenerate (zero width would poison every ratio downstream).
pub fn measure(landmarks: &FaceLandmarkSet) -> Result<FaceMeasurements> {
    if !landmarks.is_complete() {
        return Err(AnalysisError::MissingLandmarks);
    }

    let point = |index: usize| landmarks.get(index).ok_or(AnalysisError::MissingLandmarks);

    let face_width = distance(
        point(face_index::LEFT_CHEEK)?,
        point(face_index::RIGHT_CHEEK)?,
    );
    let face_height = distance(point(face_index::FOREHEAD_CENTER)?, point(face_index::CHIN)?);
    let jaw_width = distance(point(face_index::LEFT_JAW)?, point(face_index::RIGHT_JAW)?);
    let forehead_width = distance(
        point(face_index::LEFT_FOREHEAD_EDGE)?,
        point(face_index::RIGHT_FOREHEAD_EDGE)?,
    );

    if face_width <= f64::EPSILON {
        return Err(AnalysisError::MissingLandmarks);
    }

    Ok(FaceMeasurements {
        face_width,
        face_height,
        jaw_width,
        forehead_width,
    })
}

/// Classify a face shape from landmarks.
pub fn classify(landmarks: &FaceLandmarkSet) -> Result<FaceShapeResult> {
    let m = measure(landmarks)?;

    let ratios = FaceRatios {
        height_to_width: m.face_height / m.face_width,
        jaw_to_face_width: m.jaw_width / m.face_width,
        forehead_to_face_width: m.forehead_width / m.face_width,
    };

    let h2w = ratios.height_to_width;
    let jaw = ratios.jaw_to_face_width;
    let forehead = ratios.forehead_to_face_width;

    // First match wins.
    let (face_shape, confidence) = if h2w > 1.35 && (jaw - forehead).abs() < 0.05 {
        (FaceShape::Rectangle, (0.7 + (h2w - 1.35)).min(1.0))
    } else if h2w < 1.25 && jaw > 0.85 {
        (FaceShape::Square, (0.65 + (jaw - 0.85)).min(1.0))
    } else if h2w > 1.3 && jaw < forehead {
        (FaceShape::Oval, (0.65 + (h2w - 1.3)).min(1.0))
    } else if h2w < 1.25 && jaw < 0.8 {
        (FaceShape::Round, (0.65 + (0.8 - jaw)).min(1.0))
    } else if forehead < jaw && m.face_width >= m.jaw_width && m.face_width >= m.forehead_width {
        (FaceShape::Diamond, 0.65)
    } else if h2w > 1.25 && jaw < 0.85 {
        (FaceShape::Heart, 0.6)
    } else {
        (FaceShape::Uncertain, 0.45)
    };

    Ok(FaceShapeResult {
        face_shape,
        confidence,
        ratios,
    })
}
