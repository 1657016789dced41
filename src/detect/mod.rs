//! Detector seam.
//!
//! Face and pose landmark detectors are external black boxes that emit
//! normalized coordinates; this module defines the handles the engine owns
//! and the fixture/replay sources used in tests and the CLI.

mod landmarker;

pub mod fixture;

pub use fixture::{
    FixtureFaceLandmarker, FixtureOutcome, FixturePoseLandmarker, JsonFaceSource, JsonPoseSource,
};
pub use landmarker::{FaceLandmarker, PoseLandmarker};
