//! Analysis orchestration.
//!
//! `StyleEngine` owns one handle per detector for its whole lifetime and
//! sequences the classifiers over their output. Partial-failure policy:
//! face and skin failures abort the analysis; pose failures are absorbed as
//! a zero-confidence absent body. A fatal error never returns a partially
//! populated result.

use std::sync::Mutex;

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::body_shape::{self, BodyShapeResult};
use crate::colors::{self, ColorPalette};
use crate::detect::{FaceLandmarker, PoseLandmarker};
use crate::error::{AnalysisError, Result};
use crate::face_shape::{self, FaceShapeResult};
use crate::recommend::{self, AnalysisFacts, RecommendationContext, RecommendationSet};
use crate::skin_tone::{self, SkinToneResult};

/// Aggregate analysis output: a pure function of (image, landmarks, context).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub face: FaceShapeResult,
    /// Absent when pose detection or body classification failed; the
    /// analysis still succeeds.
    pub body: Option<BodyShapeResult>,
    pub skin: SkinToneResult,
    pub palette: ColorPalette,
    pub recommendations: RecommendationSet,
    /// Mean of the face, skin and body confidences. An absent body
    /// contributes zero.
    pub overall_confidence: f64,
}

/// The analysis engine. Owns its detector handles; construct one per
/// isolated session and call [`StyleEngine::shutdown`] when done.
pub struct StyleEngine {
    face: Box<dyn FaceLandmarker>,
    pose: Box<dyn PoseLandmarker>,
}

impl StyleEngine {
    /// Construct an engine and warm up both detector handles.
    ///
    /// A warm-up failure is `DetectorUnavailable`: the detector never ran,
    /// which is a different situation from a clean "no face" outcome.
    pub fn new(
        mut face: Box<dyn FaceLandmarker>,
        mut pose: Box<dyn PoseLandmarker>,
    ) -> Result<Self> {
        if let Err(e) = face.warm_up() {
            log::error!("face detector '{}' failed to initialize: {e:#}", face.name());
            return Err(AnalysisError::DetectorUnavailable);
        }
        if let Err(e) = pose.warm_up() {
            log::error!("pose detector '{}' failed to initialize: {e:#}", pose.name());
            return Err(AnalysisError::DetectorUnavailable);
        }
        Ok(Self { face, pose })
    }

    /// Run one full analysis.
    ///
    /// Both detector outcomes are consumed before any classification; the
    /// two invocations have no ordering dependency. The engine performs no
    /// I/O beyond what the detectors require.
    pub fn analyze(
        &mut self,
        image: &RgbImage,
        context: &RecommendationContext,
    ) -> Result<AnalysisResult> {
        let face_outcome = self.face.detect(image);
        let pose_outcome = self.pose.detect(image);

        let face_landmarks = match face_outcome {
            Ok(Some(landmarks)) => landmarks,
            Ok(None) => return Err(AnalysisError::NoFaceDetected),
            Err(e) => {
                log::error!("face detector '{}' failed: {e:#}", self.face.name());
                return Err(AnalysisError::NoFaceDetected);
            }
        };

        // Pose is best-effort: any failure here downgrades to an absent body.
        let body = match pose_outcome {
            Ok(Some(landmarks)) => match body_shape::classify(&landmarks) {
                Ok(result) => Some(result),
                Err(e) => {
                    log::warn!("body classification skipped: {e}");
                    None
                }
            },
            Ok(None) => {
                log::warn!("no pose detected; body shape unavailable");
                None
            }
            Err(e) => {
                log::warn!("pose detector '{}' failed: {e:#}", self.pose.name());
                None
            }
        };

        let face = face_shape::classify(&face_landmarks)?;
        let skin = skin_tone::estimate(image, &face_landmarks)?;
        let palette = colors::palette_for(skin.tone, skin.undertone);

        let facts = AnalysisFacts {
            body_shape: body.as_ref().map(|b| b.body_shape),
            face_shape: Some(face.face_shape),
            skin_tone: Some(skin.tone),
            palette: Some(palette.clone()),
        };
        let recommendations = recommend::generate(context, &facts);

        let body_confidence = body.as_ref().map_or(0.0, |b| b.confidence);
        let overall_confidence = (face.confidence + skin.confidence + body_confidence) / 3.0;

        log::info!(
            "analysis complete: face={} skin={}/{} body={} confidence={overall_confidence:.2}",
            face.face_shape,
            skin.tone,
            skin.undertone,
            body.as_ref()
                .map_or_else(|| "absent".to_string(), |b| b.body_shape.to_string()),
        );

        Ok(AnalysisResult {
            face,
            body,
            skin,
            palette,
            recommendations,
            overall_confidence,
        })
    }

    /// Tear the engine down, releasing the detector handles.
    pub fn shutdown(self) {
        log::debug!(
            "engine shut down (face='{}', pose='{}')",
            self.face.name(),
            self.pose.name()
        );
    }
}

/// Frame-by-frame wrapper for live preview streams.
///
/// The underlying detector handles are not reentrant, so at most one
/// analysis may be in flight per stream. A frame arriving mid-analysis is
/// dropped, never queued.
pub struct StreamSession {
    engine: Mutex<StyleEngine>,
}

impl StreamSession {
    pub fn new(engine: StyleEngine) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }

    /// Analyze a frame unless an analysis is already running. Returns
    /// `None` when the frame was dropped because the engine was busy.
    pub fn try_analyze(
        &self,
        image: &RgbImage,
        context: &RecommendationContext,
    ) -> Option<Result<AnalysisResult>> {
        let mut engine = match self.engine.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                log::debug!("frame dropped: analysis already in flight");
                return None;
            }
        };
        Some(engine.analyze(image, context))
    }

    /// Recover the engine for explicit shutdown.
    pub fn into_engine(self) -> StyleEngine {
        self.engine
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
