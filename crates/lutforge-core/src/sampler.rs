//! Strided pixel sampling for bounded-cost image analysis
//!
//! A single pass over the RGBA buffer accumulates everything the rest
//! of the pipeline needs: channel sums, luma and saturation sums, and
//! the quantized color bucket counts. No second pass over the image is
//! ever required.

use crate::color;
use crate::config::{ALPHA_THRESHOLD, MAX_SAMPLED_PIXELS};
use crate::models::DecodedImage;

/// Number of quantized color buckets (16 levels per channel)
pub const BUCKET_COUNT: usize = 4096;

/// Aggregated results of one sampling pass
#[derive(Debug, Clone)]
pub struct SampleSet {
    /// Channel sums over accepted pixels
    pub sum_r: f64,
    pub sum_g: f64,
    pub sum_b: f64,

    /// Sum of per-pixel luma over accepted pixels
    pub sum_luma: f64,

    /// Sum of per-pixel saturation over accepted pixels
    pub sum_saturation: f64,

    /// Number of pixels that passed the alpha threshold
    pub accepted: usize,

    /// Pixel stride used for this pass
    pub sample_rate: usize,

    counts: Vec<u32>,
    order: Vec<u16>,
}

impl SampleSet {
    fn new(sample_rate: usize) -> Self {
        Self {
            sum_r: 0.0,
            sum_g: 0.0,
            sum_b: 0.0,
            sum_luma: 0.0,
            sum_saturation: 0.0,
            accepted: 0,
            sample_rate,
            counts: vec![0; BUCKET_COUNT],
            order: Vec::new(),
        }
    }

    fn accept(&mut self, r: u8, g: u8, b: u8) {
        let key = bucket_key(r, g, b);
        if self.counts[key as usize] == 0 {
            self.order.push(key);
        }
        self.counts[key as usize] += 1;

        self.sum_r += r as f64;
        self.sum_g += g as f64;
        self.sum_b += b as f64;
        self.sum_luma += color::luma(r as f32, g as f32, b as f32) as f64;
        self.sum_saturation += color::pixel_saturation(r, g, b) as f64;
        self.accepted += 1;
    }

    /// Populated buckets in first-encounter order, as (key, count) pairs.
    ///
    /// The encounter order is deterministic for a fixed buffer and
    /// stride, which keeps frequency tie-breaks reproducible.
    pub fn buckets(&self) -> impl Iterator<Item = (u16, u32)> + '_ {
        self.order.iter().map(|&key| (key, self.counts[key as usize]))
    }

    /// Number of distinct populated buckets.
    pub fn bucket_len(&self) -> usize {
        self.order.len()
    }
}

/// Quantization key: high 4 bits of each channel (4096 buckets total)
#[inline]
pub fn bucket_key(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 >> 4) << 8) | ((g as u16 >> 4) << 4) | (b as u16 >> 4)
}

/// Reconstruct the representative RGB triple for a bucket key
#[inline]
pub fn bucket_color(key: u16) -> (u8, u8, u8) {
    let r = (((key >> 8) & 0xF) * 16) as u8;
    let g = (((key >> 4) & 0xF) * 16) as u8;
    let b = ((key & 0xF) * 16) as u8;
    (r, g, b)
}

/// Sample an image with a resolution-independent stride.
///
/// The stride is chosen so that at most ~10,000 pixels are inspected;
/// pixels with alpha below the threshold are skipped entirely.
pub fn sample_pixels(image: &DecodedImage) -> SampleSet {
    let total_pixels = image.pixel_count();
    let sample_rate = (total_pixels / MAX_SAMPLED_PIXELS).max(1);

    let mut samples = SampleSet::new(sample_rate);
    let stride = 4 * sample_rate;

    let mut i = 0;
    while i + 3 < image.pixels.len() {
        let a = image.pixels[i + 3];
        if a >= ALPHA_THRESHOLD {
            samples.accept(image.pixels[i], image.pixels[i + 1], image.pixels[i + 2]);
        }
        i += stride;
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> DecodedImage {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        DecodedImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_sample_rate_minimum_one() {
        let image = solid_image(4, 4, [10, 20, 30, 255]);
        let samples = sample_pixels(&image);
        assert_eq!(samples.sample_rate, 1);
        assert_eq!(samples.accepted, 16);
    }

    #[test]
    fn test_sample_rate_bounds_inspection() {
        // 400x400 = 160,000 pixels -> stride 16 -> 10,000 inspected
        let image = solid_image(400, 400, [100, 100, 100, 255]);
        let samples = sample_pixels(&image);
        assert_eq!(samples.sample_rate, 16);
        assert_eq!(samples.accepted, 10_000);
        assert!(samples.accepted <= image.pixel_count());
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let image = solid_image(8, 8, [200, 200, 200, 0]);
        let samples = sample_pixels(&image);
        assert_eq!(samples.accepted, 0);
        assert_eq!(samples.bucket_len(), 0);
    }

    #[test]
    fn test_alpha_threshold_boundary() {
        // Alpha 128 is accepted, 127 is not
        let accepted = sample_pixels(&solid_image(2, 2, [50, 50, 50, 128]));
        assert_eq!(accepted.accepted, 4);
        let rejected = sample_pixels(&solid_image(2, 2, [50, 50, 50, 127]));
        assert_eq!(rejected.accepted, 0);
    }

    #[test]
    fn test_bucket_key_roundtrip() {
        let key = bucket_key(255, 128, 0);
        assert_eq!(bucket_color(key), (240, 128, 0));
        assert_eq!(bucket_key(0, 0, 0), 0);
        assert_eq!(bucket_color(0), (0, 0, 0));
    }

    #[test]
    fn test_accumulated_sums() {
        let image = solid_image(2, 2, [255, 0, 0, 255]);
        let samples = sample_pixels(&image);
        assert_eq!(samples.accepted, 4);
        assert!((samples.sum_r - 4.0 * 255.0).abs() < 1e-6);
        assert_eq!(samples.sum_g, 0.0);
        // Pure red: saturation 1 per pixel
        assert!((samples.sum_saturation - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_first_encounter_order() {
        let mut pixels = Vec::new();
        // Two pixels of one color, then two of another
        pixels.extend_from_slice(&[16, 16, 16, 255]);
        pixels.extend_from_slice(&[240, 240, 240, 255]);
        pixels.extend_from_slice(&[16, 16, 16, 255]);
        pixels.extend_from_slice(&[240, 240, 240, 255]);
        let image = DecodedImage::new(2, 2, pixels).unwrap();
        let samples = sample_pixels(&image);

        let buckets: Vec<(u16, u32)> = samples.buckets().collect();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].0, bucket_key(16, 16, 16));
        assert_eq!(buckets[0].1, 2);
        assert_eq!(buckets[1].1, 2);
    }
}
