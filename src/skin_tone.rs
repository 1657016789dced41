//! Skin tone and undertone estimation.
//!
//! Samples pixels inside the face landmark bounding box, gates out shadow,
//! glare and background in HSV, clusters the survivors with a small k-means
//! routine, and maps the dominant cluster center through fixed luminance and
//! Lab thresholds.
//!
//! The thresholds assume 8-bit channel scaling (HSV saturation/value and Lab
//! a/b in 0..255). They are empirically tuned constants; keep them exactly
//! as published.

use std::fmt;

use image::RgbImage;
use palette::{Hsv, IntoColor, Lab, Srgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::landmarks::FaceLandmarkSet;

/// Coarse skin luminance bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkinTone {
    Fair,
    Light,
    Medium,
    Deep,
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkinTone::Fair => "Fair",
            SkinTone::Light => "Light",
            SkinTone::Medium => "Medium",
            SkinTone::Deep => "Deep",
        };
        f.write_str(label)
    }
}

/// Chroma-direction classification, orthogonal to tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Undertone::Warm => "Warm",
            Undertone::Cool => "Cool",
            Undertone::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// Outcome of skin tone estimation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinToneResult {
    pub tone: SkinTone,
    pub undertone: Undertone,
    /// Dominant cluster center, rounded to 8-bit RGB.
    pub rgb: [u8; 3],
    pub confidence: f64,
}

// Crop padding as a fraction of the landmark bounding box.
const PAD_X_FRAC: f64 = 0.08;
const PAD_Y_FRAC: f64 = 0.10;

// Pixel sampling and HSV gating (8-bit scale).
const SAMPLE_STRIDE: u32 = 2;
const MIN_VALUE: f32 = 40.0;
const MAX_VALUE: f32 = 230.0;
const MIN_SATURATION: f32 = 40.0;
const MIN_SAMPLES: usize = 30;

// Clustering parameters.
const CLUSTERS: usize = 3;
const ATTEMPTS: u64 = 3;
const MAX_ITERATIONS: usize = 10;
const CONVERGENCE_EPSILON: f32 = 1.0;

// Fixed seed: the estimate must be a pure function of its inputs.
const KMEANS_SEED: u64 = 0x5ca_15ca;

// Tone thresholds over Rec. 709 luminance of the dominant center.
const FAIR_LUMINANCE: f32 = 190.0;
const LIGHT_LUMINANCE: f32 = 165.0;
const DEEP_LUMINANCE: f32 = 120.0;

// Undertone thresholds over 8-bit Lab a/b channels.
const WARM_B_MIN: f32 = 150.0;
const WARM_A_MIN: f32 = 135.0;
const COOL_B_MAX: f32 = 135.0;

/// Estimate skin tone and undertone from the face region of an image.
///
/// Fails `LowSignal` when fewer than 30 pixels survive the HSV gate; a tone
/// is never fabricated from bad signal.
pub fn estimate(image: &RgbImage, landmarks: &FaceLandmarkSet) -> Result<SkinToneResult> {
    if !landmarks.is_complete() {
        return Err(AnalysisError::MissingLandmarks);
    }

    let crop = face_crop(image, landmarks);
    let samples = collect_samples(image, crop);
    if samples.len() < MIN_SAMPLES {
        return Err(AnalysisError::LowSignal);
    }

    let (center, dominant_ratio) = dominant_cluster(&samples);

    let tone = tone_from_luminance(center);
    let undertone = undertone_from_lab(center);
    let rgb = [
        center[0].round().clamp(0.0, 255.0) as u8,
        center[1].round().clamp(0.0, 255.0) as u8,
        center[2].round().clamp(0.0, 255.0) as u8,
    ];

    Ok(SkinToneResult {
        tone,
        undertone,
        rgb,
        confidence: (0.5 + dominant_ratio).min(1.0),
    })
}

/// Pixel-space crop rectangle: `(x0, y0, x1, y1)`, half-open.
type CropRect = (u32, u32, u32, u32);

/// Bounding box of the landmarks, padded 8% horizontally and 10% vertically,
/// clamped to the image bounds.
fn face_crop(image: &RgbImage, landmarks: &FaceLandmarkSet) -> CropRect {
    let (width, height) = (image.width() as f64, image.height() as f64);

    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;
    for point in landmarks.points() {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    let pad_x = (max_x - min_x) * PAD_X_FRAC;
    let pad_y = (max_y - min_y) * PAD_Y_FRAC;

    let x0 = ((min_x - pad_x).max(0.0) * width).floor() as u32;
    let y0 = ((min_y - pad_y).max(0.0) * height).floor() as u32;
    let x1 = (((max_x + pad_x).min(1.0) * width).ceil() as u32).min(image.width());
    let y1 = (((max_y + pad_y).min(1.0) * height).ceil() as u32).min(image.height());

    (x0, y0, x1, y1)
}

/// Sample every second pixel in the crop and keep the ones that look like
/// lit skin: not shadow (low value), not glare (high value), not washed-out
/// background (low saturation).
fn collect_samples(image: &RgbImage, crop: CropRect) -> Vec<[f32; 3]> {
    let (x0, y0, x1, y1) = crop;
    let mut samples = Vec::new();

    let mut y = y0;
    while y < y1 {
        let mut x = x0;
        while x < x1 {
            let pixel = image.get_pixel(x, y).0;
            let srgb = Srgb::new(
                f32::from(pixel[0]) / 255.0,
                f32::from(pixel[1]) / 255.0,
                f32::from(pixel[2]) / 255.0,
            );
            let hsv: Hsv = srgb.into_color();
            let value = hsv.value * 255.0;
            let saturation = hsv.saturation * 255.0;
            if value >= MIN_VALUE && value <= MAX_VALUE && saturation >= MIN_SATURATION {
                samples.push([
                    f32::from(pixel[0]),
                    f32::from(pixel[1]),
                    f32::from(pixel[2]),
                ]);
            }
            x += SAMPLE_STRIDE;
        }
        y += SAMPLE_STRIDE;
    }

    samples
}

struct Clustering {
    centers: Vec<[f32; 3]>,
    counts: Vec<usize>,
    inertia: f32,
}

/// Run k-means over the samples and return the center of the most populated
/// cluster plus its share of all samples.
fn dominant_cluster(samples: &[[f32; 3]]) -> ([f32; 3], f64) {
    let mut best = run_kmeans(samples, KMEANS_SEED);
    for attempt in 1..ATTEMPTS {
        let candidate = run_kmeans(samples, KMEANS_SEED.wrapping_add(attempt));
        if candidate.inertia < best.inertia {
            best = candidate;
        }
    }

    let mut dominant = 0;
    for (index, count) in best.counts.iter().enumerate() {
        if *count > best.counts[dominant] {
            dominant = index;
        }
    }

    let ratio = best.counts[dominant] as f64 / samples.len() as f64;
    (best.centers[dominant], ratio)
}

fn run_kmeans(samples: &[[f32; 3]], seed: u64) -> Clustering {
    let k = CLUSTERS.min(samples.len());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut centers: Vec<[f32; 3]> = (0..k)
        .map(|_| samples[rng.gen_range(0..samples.len())])
        .collect();
    let mut assignments = vec![0usize; samples.len()];

    for _ in 0..MAX_ITERATIONS {
        for (sample, slot) in samples.iter().zip(assignments.iter_mut()) {
            *slot = nearest_center(&centers, sample);
        }

        let mut movement: f32 = 0.0;
        for (index, center) in centers.iter_mut().enumerate() {
            let mut sum = [0.0f32; 3];
            let mut count = 0usize;
            for (sample, slot) in samples.iter().zip(assignments.iter()) {
                if *slot == index {
                    sum[0] += sample[0];
                    sum[1] += sample[1];
                    sum[2] += sample[2];
                    count += 1;
                }
            }
            // Empty clusters keep their previous center.
            if count > 0 {
                let next = [
                    sum[0] / count as f32,
                    sum[1] / count as f32,
                    sum[2] / count as f32,
                ];
                movement = movement.max(squared_distance(center, &next).sqrt());
                *center = next;
            }
        }

        if movement < CONVERGENCE_EPSILON {
            break;
        }
    }

    let mut counts = vec![0usize; k];
    let mut inertia = 0.0f32;
    for (sample, slot) in samples.iter().zip(assignments.iter_mut()) {
        *slot = nearest_center(&centers, sample);
        counts[*slot] += 1;
        inertia += squared_distance(&centers[*slot], sample);
    }

    Clustering {
        centers,
        counts,
        inertia,
    }
}

/// Index of the nearest center; ties resolve to the lowest index.
fn nearest_center(centers: &[[f32; 3]], sample: &[f32; 3]) -> usize {
    let mut best = 0;
    let mut best_distance = f32::MAX;
    for (index, center) in centers.iter().enumerate() {
        let d = squared_distance(center, sample);
        if d < best_distance {
            best = index;
            best_distance = d;
        }
    }
    best
}

fn squared_distance(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

/// Tone bucket from Rec. 709 luminance of the dominant center.
fn tone_from_luminance(center: [f32; 3]) -> SkinTone {
    let luminance = 0.2126 * center[0] + 0.7152 * center[1] + 0.0722 * center[2];
    if luminance >= FAIR_LUMINANCE {
        SkinTone::Fair
    } else if luminance >= LIGHT_LUMINANCE {
        SkinTone::Light
    } else if luminance < DEEP_LUMINANCE {
        SkinTone::Deep
    } else {
        SkinTone::Medium
    }
}

/// Undertone from the a/b channels of the dominant center in 8-bit Lab.
fn undertone_from_lab(center: [f32; 3]) -> Undertone {
    let srgb = Srgb::new(center[0] / 255.0, center[1] / 255.0, center[2] / 255.0);
    let lab: Lab = srgb.into_color();
    let a = lab.a + 128.0;
    let b = lab.b + 128.0;

    if b > WARM_B_MIN && a > WARM_A_MIN {
        Undertone::Warm
    } else if b < COOL_B_MAX {
        Undertone::Cool
    } else {
        Undertone::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::NormalizedPoint;
    use crate::landmarks::FACE_LANDMARK_COUNT;

    /// Landmarks spanning most of the frame, so the crop covers the image.
    fn full_frame_landmarks() -> FaceLandmarkSet {
        let mut points = vec![NormalizedPoint::new(0.5, 0.5); FACE_LANDMARK_COUNT];
        points[0] = NormalizedPoint::new(0.05, 0.05);
        points[1] = NormalizedPoint::new(0.95, 0.95);
        FaceLandmarkSet::new(points)
    }

    fn uniform_image(rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(64, 64, image::Rgb(rgb))
    }

    #[test]
    fn black_image_raises_low_signal() {
        // Value 0 fails the shadow gate for every pixel; no tone may be
        // fabricated.
        let image = uniform_image([0, 0, 0]);
        let result = estimate(&image, &full_frame_landmarks());
        assert!(matches!(result, Err(AnalysisError::LowSignal)));
    }

    #[test]
    fn white_image_raises_low_signal() {
        // Value 255 fails the glare gate.
        let image = uniform_image([255, 255, 255]);
        let result = estimate(&image, &full_frame_landmarks());
        assert!(matches!(result, Err(AnalysisError::LowSignal)));
    }

    #[test]
    fn grey_image_raises_low_signal() {
        // Mid grey passes the value gates but has zero saturation.
        let image = uniform_image([128, 128, 128]);
        let result = estimate(&image, &full_frame_landmarks());
        assert!(matches!(result, Err(AnalysisError::LowSignal)));
    }

    #[test]
    fn uniform_skin_image_classifies_with_full_confidence() {
        // (220, 180, 160): luminance ~187 -> Light; Lab a/b land in the
        // neutral band. Every sample is identical, so the dominant cluster
        // holds all of them.
        let image = uniform_image([220, 180, 160]);
        let result = estimate(&image, &full_frame_landmarks()).unwrap();

        assert_eq!(result.tone, SkinTone::Light);
        assert_eq!(result.undertone, Undertone::Neutral);
        assert_eq!(result.rgb, [220, 180, 160]);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn deep_tone_from_dark_skin_pixels() {
        let image = uniform_image([90, 60, 50]);
        let result = estimate(&image, &full_frame_landmarks()).unwrap();
        assert_eq!(result.tone, SkinTone::Deep);
    }

    #[test]
    fn estimate_is_deterministic() {
        let image = uniform_image([200, 150, 130]);
        let landmarks = full_frame_landmarks();
        let first = estimate(&image, &landmarks).unwrap();
        let second = estimate(&image, &landmarks).unwrap();
        assert_eq!(first.tone, second.tone);
        assert_eq!(first.undertone, second.undertone);
        assert_eq!(first.rgb, second.rgb);
        assert_eq!(first.confidence, second.confidence);
    }

    #[test]
    fn incomplete_landmarks_are_rejected() {
        let image = uniform_image([220, 180, 160]);
        let short = FaceLandmarkSet::new(vec![NormalizedPoint::new(0.5, 0.5); 10]);
        assert!(matches!(
            estimate(&image, &short),
            Err(AnalysisError::MissingLandmarks)
        ));
    }

    #[test]
    fn dominant_cluster_prefers_the_larger_group() {
        // 80% warm pixels, 20% dark pixels: the dominant center must come
        // from the warm group and the ratio must reflect its share.
        let mut samples = vec![[210.0, 170.0, 150.0]; 80];
        samples.extend(vec![[40.0, 40.0, 60.0]; 20]);

        let (center, ratio) = dominant_cluster(&samples);
        assert!(center[0] > 150.0);
        assert!(ratio >= 0.8);
    }
}
