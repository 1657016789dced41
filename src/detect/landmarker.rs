use anyhow::Result;
use image::RgbImage;

use crate::landmarks::{FaceLandmarkSet, PoseLandmarkSet};

/// Face landmark detector handle.
///
/// One image in, one outcome out: `Ok(Some(_))` when a face was found,
/// `Ok(None)` when the detector ran cleanly but found no face, `Err` when
/// the detector itself failed. The distinction matters to the orchestrator;
/// implementations must not collapse "no face" into an error.
///
/// Handles are not reentrant (`&mut self`): at most one detection may be in
/// flight per handle. Implementations must treat the image as read-only and
/// must not retain it across calls.
pub trait FaceLandmarker: Send {
    /// Detector identifier, used in logs only.
    fn name(&self) -> &'static str;

    /// Run detection on an image.
    fn detect(&mut self, image: &RgbImage) -> Result<Option<FaceLandmarkSet>>;

    /// Optional warm-up hook, called once at engine construction.
    fn warm_up(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Body pose landmark detector handle. Same contract as [`FaceLandmarker`].
pub trait PoseLandmarker: Send {
    fn name(&self) -> &'static str;

    fn detect(&mut self, image: &RgbImage) -> Result<Option<PoseLandmarkSet>>;

    fn warm_up(&mut self) -> Result<()> {
        Ok(())
    }
}
