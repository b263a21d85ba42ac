//! Scalar image statistics derived from the sampling pass

use crate::color;
use crate::models::{AverageColor, DominantColor};
use crate::sampler::SampleSet;

/// Scalar metrics for one analyzed image
#[derive(Debug, Clone, Default)]
pub struct ImageStatistics {
    /// Luma-weighted mean brightness (0-255)
    pub brightness: f32,

    /// Frequency-weighted standard deviation of dominant-color luma
    /// around the mean brightness
    pub contrast: f32,

    /// Mean per-pixel saturation (0-1)
    pub saturation: f32,

    /// Mean channel values over all accepted samples
    pub average_color: AverageColor,
}

/// Derive brightness, contrast, saturation, and average color.
///
/// Brightness, saturation, and the average color use the full accepted
/// sums; contrast is approximated over the retained dominant colors
/// only, which keeps its cost bounded by the histogram cap.
pub fn compute_statistics(samples: &SampleSet, dominant: &[DominantColor]) -> ImageStatistics {
    if samples.accepted == 0 {
        return ImageStatistics::default();
    }

    let n = samples.accepted as f64;
    let brightness = (samples.sum_luma / n) as f32;
    let saturation = (samples.sum_saturation / n) as f32;
    let average_color = AverageColor {
        r: (samples.sum_r / n) as f32,
        g: (samples.sum_g / n) as f32,
        b: (samples.sum_b / n) as f32,
    };

    let variance: f32 = dominant
        .iter()
        .map(|c| {
            let l = color::luma(c.r as f32, c.g as f32, c.b as f32);
            (l - brightness) * (l - brightness) * c.frequency
        })
        .sum();

    ImageStatistics {
        brightness,
        contrast: variance.sqrt(),
        saturation,
        average_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::dominant_colors;
    use crate::models::DecodedImage;
    use crate::sampler::sample_pixels;

    fn solid_image(rgba: [u8; 4], count: usize) -> DecodedImage {
        let pixels = rgba.iter().copied().cycle().take(count * 4).collect();
        DecodedImage::new(count as u32, 1, pixels).unwrap()
    }

    #[test]
    fn test_zero_accepted_is_zeroed() {
        let image = solid_image([255, 255, 255, 0], 8);
        let samples = sample_pixels(&image);
        let stats = compute_statistics(&samples, &[]);
        assert_eq!(stats.brightness, 0.0);
        assert_eq!(stats.contrast, 0.0);
        assert_eq!(stats.saturation, 0.0);
        assert_eq!(stats.average_color, AverageColor::default());
    }

    #[test]
    fn test_black_image() {
        let image = solid_image([0, 0, 0, 255], 8);
        let samples = sample_pixels(&image);
        let dominant = dominant_colors(&samples);
        let stats = compute_statistics(&samples, &dominant);
        assert_eq!(stats.brightness, 0.0);
        assert_eq!(stats.saturation, 0.0);
        assert_eq!(stats.contrast, 0.0);
    }

    #[test]
    fn test_uniform_gray() {
        let image = solid_image([128, 128, 128, 255], 16);
        let samples = sample_pixels(&image);
        let dominant = dominant_colors(&samples);
        let stats = compute_statistics(&samples, &dominant);

        assert!((stats.brightness - 128.0).abs() < 0.01);
        assert_eq!(stats.saturation, 0.0);
        assert!((stats.average_color.r - 128.0).abs() < 0.01);
        // One dominant color at luma 128 against brightness 128
        assert!(stats.contrast < 1.0);
    }

    #[test]
    fn test_metric_ranges() {
        let image = solid_image([250, 30, 90, 255], 16);
        let samples = sample_pixels(&image);
        let dominant = dominant_colors(&samples);
        let stats = compute_statistics(&samples, &dominant);

        assert!(stats.brightness >= 0.0 && stats.brightness <= 255.0);
        assert!(stats.saturation >= 0.0 && stats.saturation <= 1.0);
        assert!(stats.contrast >= 0.0);
    }

    #[test]
    fn test_contrast_reflects_luma_spread() {
        // Half black, half white: large frequency-weighted deviation
        let mut pixels = vec![[0u8, 0, 0, 255]; 8];
        pixels.extend(vec![[240u8, 240, 240, 255]; 8]);
        let bytes: Vec<u8> = pixels.into_iter().flatten().collect();
        let image = DecodedImage::new(16, 1, bytes).unwrap();

        let samples = sample_pixels(&image);
        let dominant = dominant_colors(&samples);
        let stats = compute_statistics(&samples, &dominant);
        assert!(stats.contrast > 60.0);
    }
}
