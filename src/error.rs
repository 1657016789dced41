//! Error types for the style analysis engine.

use thiserror::Error;

/// Analysis failure modes surfaced to callers.
///
/// Each variant carries exactly one human-readable message; raw detector
/// internals are logged, never returned. Variants with a safe fallback
/// (`InsufficientLandmarks`) are absorbed by the orchestrator; the rest
/// abort the whole analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The face detector ran but found no face. Fatal: every downstream
    /// classifier needs face landmarks.
    #[error("No face detected. Use a clear, well-lit photo.")]
    NoFaceDetected,

    /// The face landmark set is incomplete or geometrically degenerate
    /// (fewer than 468 points, or zero-width measurements).
    #[error("Face landmarks incomplete. Use a clear, well-lit photo.")]
    MissingLandmarks,

    /// Pose landmarks are missing or unusable (fewer than 25 points, or
    /// shoulder/hip points absent or coincident). Recovered by the
    /// orchestrator: body fields become absent and the analysis succeeds.
    #[error("Body landmarks incomplete; body shape unavailable.")]
    InsufficientLandmarks,

    /// Too few usable skin pixels to estimate a tone. Fatal: the engine
    /// never fabricates a tone from bad signal.
    #[error("Not enough usable skin pixels. Use a clear, well-lit photo.")]
    LowSignal,

    /// A detector handle failed to initialize. Distinct from
    /// `NoFaceDetected`: the detector never ran.
    #[error("Style analysis is unavailable right now. Try again later.")]
    DetectorUnavailable,
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
