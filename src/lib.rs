//! Style analysis engine.
//!
//! Turns a photograph plus externally supplied facial and body landmark
//! detections into a structured style profile: face shape, body shape, skin
//! tone and undertone with confidence scores, a five-color palette, and
//! fashion recommendations for the user's context.
//!
//! # Architecture
//!
//! Data flows one way: image + landmarks -> classifiers -> palette and
//! recommendations -> result, which the caller may persist or render.
//!
//! - `geometry`: point distance and interpolation primitives
//! - `landmarks`: fixed-index landmark sets from the external detectors
//! - `detect`: detector handle traits, fixture and replay sources
//! - `face_shape`, `body_shape`: ordered-rule geometric classifiers
//! - `skin_tone`: pixel sampling and k-means tone/undertone estimation
//! - `colors`: (tone, undertone) -> palette lookup
//! - `recommend`: context + analysis facts -> outfits and rationale
//! - `engine`: orchestration, partial-failure policy, stream gating
//! - `config`: scan profile for the CLI
//!
//! Classification is deterministic geometric and color heuristics over
//! supplied landmarks, not a trained model. Confidence scores are
//! rule-margin indicators in `[0, 1]`, not calibrated probabilities.
//!
//! # Failure policy
//!
//! Face landmarks and skin signal are mandatory: their absence aborts the
//! whole analysis with a typed error. Pose landmarks are best-effort: their
//! absence yields a result without a body shape. A fatal error never
//! returns a partially populated result.

pub mod body_shape;
pub mod colors;
pub mod config;
pub mod detect;
pub mod engine;
pub mod error;
pub mod face_shape;
pub mod geometry;
pub mod landmarks;
pub mod recommend;
pub mod skin_tone;

pub use body_shape::{BodyMeasurements, BodyRatios, BodyShape, BodyShapeResult};
pub use colors::{palette_for, ColorPalette};
pub use detect::{FaceLandmarker, PoseLandmarker};
pub use engine::{AnalysisResult, StreamSession, StyleEngine};
pub use error::{AnalysisError, Result};
pub use face_shape::{FaceMeasurements, FaceRatios, FaceShape, FaceShapeResult};
pub use geometry::{distance, lerp_point, NormalizedPoint};
pub use landmarks::{FaceLandmarkSet, PoseLandmarkSet, FACE_LANDMARK_COUNT, POSE_LANDMARK_COUNT};
pub use recommend::{
    AnalysisFacts, Budget, Gender, Occasion, RecommendationContext, RecommendationSet,
};
pub use skin_tone::{SkinTone, SkinToneResult, Undertone};
