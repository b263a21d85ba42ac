//! Image analysis pipeline
//!
//! Turns a decoded image into an [`ImageAnalysis`] record:
//! - `histogram`: quantized bucket counts -> ranked dominant colors
//! - `statistics`: brightness, contrast, saturation, average color
//! - `classifier`: heuristic mood/style/temperature/exposure labels
//!   and suggested preset LUTs

mod classifier;
mod histogram;
mod statistics;

#[cfg(test)]
mod tests;

pub use classifier::{classify, Classification};
pub use histogram::dominant_colors;
pub use statistics::{compute_statistics, ImageStatistics};

use crate::models::{DecodedImage, ImageAnalysis};
use crate::sampler::sample_pixels;

/// Analyze a decoded image into its statistical and heuristic profile.
///
/// A single sampling pass feeds every downstream stage; cost is bounded
/// by the sampling stride regardless of image resolution. An image with
/// zero accepted pixels (fully transparent) produces the deterministic
/// zeroed record rather than an error.
pub fn analyze_image(image: &DecodedImage) -> ImageAnalysis {
    let samples = sample_pixels(image);
    crate::verbose_println!(
        "[analysis] {}x{} image, stride {}, {} accepted samples, {} buckets",
        image.width,
        image.height,
        samples.sample_rate,
        samples.accepted,
        samples.bucket_len()
    );

    let dominant = dominant_colors(&samples);
    let stats = compute_statistics(&samples, &dominant);
    let labels = classify(&dominant, &stats);

    ImageAnalysis {
        dominant_colors: dominant,
        average_color: stats.average_color,
        brightness: stats.brightness,
        contrast: stats.contrast,
        saturation: stats.saturation,
        mood: labels.mood,
        style: labels.style,
        color_temperature: labels.color_temperature,
        exposure: labels.exposure,
        composition: labels.composition,
        suggested_luts: labels.suggested_luts,
    }
}
