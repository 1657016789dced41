//! Fixture and replay landmark sources.
//!
//! The production capture path runs the detectors elsewhere and ships
//! landmark JSON to this engine. The JSON sources replay such captured
//! output; the fixture sources return a preset outcome and exist for tests
//! and the CLI's no-pose fallback.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use image::RgbImage;

use crate::geometry::NormalizedPoint;
use crate::landmarks::{FaceLandmarkSet, PoseLandmarkSet};

use super::{FaceLandmarker, PoseLandmarker};

/// Preset outcome for a fixture detector.
#[derive(Clone, Debug)]
pub enum FixtureOutcome<T> {
    /// The detector "found" these landmarks.
    Landmarks(T),
    /// The detector ran but found nothing.
    NoDetection,
    /// The detector failed outright.
    Failure(String),
}

impl<T: Clone> FixtureOutcome<T> {
    fn resolve(&self) -> Result<Option<T>> {
        match self {
            FixtureOutcome::Landmarks(landmarks) => Ok(Some(landmarks.clone())),
            FixtureOutcome::NoDetection => Ok(None),
            FixtureOutcome::Failure(message) => Err(anyhow!("{message}")),
        }
    }
}

/// Face detector that returns a preset outcome, ignoring the image.
pub struct FixtureFaceLandmarker {
    outcome: FixtureOutcome<FaceLandmarkSet>,
}

impl FixtureFaceLandmarker {
    pub fn new(outcome: FixtureOutcome<FaceLandmarkSet>) -> Self {
        Self { outcome }
    }
}

impl FaceLandmarker for FixtureFaceLandmarker {
    fn name(&self) -> &'static str {
        "fixture-face"
    }

    fn detect(&mut self, _image: &RgbImage) -> Result<Option<FaceLandmarkSet>> {
        self.outcome.resolve()
    }
}

/// Pose detector that returns a preset outcome, ignoring the image.
pub struct FixturePoseLandmarker {
    outcome: FixtureOutcome<PoseLandmarkSet>,
}

impl FixturePoseLandmarker {
    pub fn new(outcome: FixtureOutcome<PoseLandmarkSet>) -> Self {
        Self { outcome }
    }
}

impl PoseLandmarker for FixturePoseLandmarker {
    fn name(&self) -> &'static str {
        "fixture-pose"
    }

    fn detect(&mut self, _image: &RgbImage) -> Result<Option<PoseLandmarkSet>> {
        self.outcome.resolve()
    }
}

/// Face landmark source replaying captured detector JSON: a plain array of
/// `{ "x": .., "y": .. }` points.
pub struct JsonFaceSource {
    path: PathBuf,
}

impl JsonFaceSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FaceLandmarker for JsonFaceSource {
    fn name(&self) -> &'static str {
        "json-face"
    }

    fn detect(&mut self, _image: &RgbImage) -> Result<Option<FaceLandmarkSet>> {
        let points = read_points(&self.path)?;
        if points.is_empty() {
            return Ok(None);
        }
        Ok(Some(FaceLandmarkSet::new(points)))
    }

    fn warm_up(&mut self) -> Result<()> {
        if !self.path.exists() {
            return Err(anyhow!(
                "landmark file {} does not exist",
                self.path.display()
            ));
        }
        Ok(())
    }
}

/// Pose landmark source replaying captured detector JSON.
pub struct JsonPoseSource {
    path: PathBuf,
}

impl JsonPoseSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PoseLandmarker for JsonPoseSource {
    fn name(&self) -> &'static str {
        "json-pose"
    }

    fn detect(&mut self, _image: &RgbImage) -> Result<Option<PoseLandmarkSet>> {
        let points = read_points(&self.path)?;
        if points.is_empty() {
            return Ok(None);
        }
        Ok(Some(PoseLandmarkSet::new(points)))
    }

    fn warm_up(&mut self) -> Result<()> {
        if !self.path.exists() {
            return Err(anyhow!(
                "landmark file {} does not exist",
                self.path.display()
            ));
        }
        Ok(())
    }
}

fn read_points(path: &PathBuf) -> Result<Vec<NormalizedPoint>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read landmark file {}", path.display()))?;
    let points: Vec<NormalizedPoint> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid landmark file {}", path.display()))?;
    Ok(points)
}
