use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::Deserialize;

use crate::recommend::{Budget, Gender, Occasion, RecommendationContext};

const DEFAULT_GENDER: Gender = Gender::Male;
const DEFAULT_OCCASION: Occasion = Occasion::Daily;
const DEFAULT_BUDGET: Budget = Budget::Medium;

#[derive(Debug, Deserialize, Default)]
struct ProfileFile {
    gender: Option<String>,
    occasion: Option<String>,
    budget: Option<String>,
    face_landmarks: Option<PathBuf>,
    pose_landmarks: Option<PathBuf>,
}

/// User scan profile: context defaults plus optional captured landmark
/// files for replay. Loaded from an optional JSON file pointed at by
/// `STYLESCAN_CONFIG`, then overridden by individual env vars.
#[derive(Debug, Clone)]
pub struct ScanProfile {
    pub context: RecommendationContext,
    pub face_landmarks: Option<PathBuf>,
    pub pose_landmarks: Option<PathBuf>,
}

impl Default for ScanProfile {
    fn default() -> Self {
        Self {
            context: RecommendationContext {
                gender: DEFAULT_GENDER,
                occasion: DEFAULT_OCCASION,
                budget: DEFAULT_BUDGET,
            },
            face_landmarks: None,
            pose_landmarks: None,
        }
    }
}

impl ScanProfile {
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("STYLESCAN_CONFIG").ok();
        let file_cfg = match config_path.as_deref() {
            Some(path) => Some(read_profile_file(Path::new(path))?),
            None => None,
        };
        let mut profile = Self::from_file(file_cfg.unwrap_or_default())?;
        profile.apply_env()?;
        Ok(profile)
    }

    fn from_file(file: ProfileFile) -> Result<Self> {
        let mut profile = Self::default();
        if let Some(gender) = file.gender {
            profile.context.gender = parse_variant(&gender, "gender")?;
        }
        if let Some(occasion) = file.occasion {
            profile.context.occasion = parse_variant(&occasion, "occasion")?;
        }
        if let Some(budget) = file.budget {
            profile.context.budget = parse_variant(&budget, "budget")?;
        }
        profile.face_landmarks = file.face_landmarks;
        profile.pose_landmarks = file.pose_landmarks;
        Ok(profile)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(gender) = std::env::var("STYLESCAN_GENDER") {
            if !gender.trim().is_empty() {
                self.context.gender = parse_variant(&gender, "STYLESCAN_GENDER")?;
            }
        }
        if let Ok(occasion) = std::env::var("STYLESCAN_OCCASION") {
            if !occasion.trim().is_empty() {
                self.context.occasion = parse_variant(&occasion, "STYLESCAN_OCCASION")?;
            }
        }
        if let Ok(budget) = std::env::var("STYLESCAN_BUDGET") {
            if !budget.trim().is_empty() {
                self.context.budget = parse_variant(&budget, "STYLESCAN_BUDGET")?;
            }
        }
        if let Ok(path) = std::env::var("STYLESCAN_FACE_LANDMARKS") {
            if !path.trim().is_empty() {
                self.face_landmarks = Some(PathBuf::from(path));
            }
        }
        if let Ok(path) = std::env::var("STYLESCAN_POSE_LANDMARKS") {
            if !path.trim().is_empty() {
                self.pose_landmarks = Some(PathBuf::from(path));
            }
        }
        Ok(())
    }
}

fn parse_variant<T: ValueEnum>(value: &str, field: &str) -> Result<T> {
    T::from_str(value.trim(), true).map_err(|_| anyhow!("invalid {field} value '{value}'"))
}

fn read_profile_file(path: &Path) -> Result<ProfileFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read profile {}: {}", path.display(), e))?;
    let cfg = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("invalid profile {}: {}", path.display(), e))?;
    Ok(cfg)
}
