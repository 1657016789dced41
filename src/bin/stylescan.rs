//! stylescan - analyze a photo against captured landmark detections and
//! print the structured style profile as JSON.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use stylescan::config::ScanProfile;
use stylescan::detect::{FixtureOutcome, FixturePoseLandmarker, JsonFaceSource, JsonPoseSource};
use stylescan::{Budget, Gender, Occasion, PoseLandmarker, RecommendationContext, StyleEngine};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Photo to analyze (jpeg or png).
    image: PathBuf,
    /// Captured face landmark JSON (468 normalized points).
    #[arg(long, env = "STYLESCAN_FACE_LANDMARKS")]
    face_landmarks: Option<PathBuf>,
    /// Captured pose landmark JSON (33 normalized points). Body shape is
    /// skipped when absent.
    #[arg(long, env = "STYLESCAN_POSE_LANDMARKS")]
    pose_landmarks: Option<PathBuf>,
    /// Overrides the profile gender.
    #[arg(long, value_enum)]
    gender: Option<Gender>,
    /// Overrides the profile occasion.
    #[arg(long, value_enum)]
    occasion: Option<Occasion>,
    /// Overrides the profile budget.
    #[arg(long, value_enum)]
    budget: Option<Budget>,
    /// Pretty-print the result JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let profile = ScanProfile::load().context("load scan profile")?;
    let context = RecommendationContext {
        gender: args.gender.unwrap_or(profile.context.gender),
        occasion: args.occasion.unwrap_or(profile.context.occasion),
        budget: args.budget.unwrap_or(profile.context.budget),
    };

    let face_path = args
        .face_landmarks
        .or(profile.face_landmarks)
        .ok_or_else(|| {
            anyhow!("no face landmark capture; pass --face-landmarks or set it in the profile")
        })?;
    let face = Box::new(JsonFaceSource::new(face_path));

    let pose: Box<dyn PoseLandmarker> = match args.pose_landmarks.or(profile.pose_landmarks) {
        Some(path) => Box::new(JsonPoseSource::new(path)),
        None => Box::new(FixturePoseLandmarker::new(FixtureOutcome::NoDetection)),
    };

    let image = image::open(&args.image)
        .with_context(|| format!("open image {}", args.image.display()))?
        .to_rgb8();

    let mut engine = StyleEngine::new(face, pose)?;
    let result = engine.analyze(&image, &context)?;
    engine.shutdown();

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}
