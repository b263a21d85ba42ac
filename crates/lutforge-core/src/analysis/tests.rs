//! Tests for the full analysis pipeline
//!
//! Scenario-level coverage; the per-stage edge cases live next to
//! their modules.

use super::*;
use crate::models::{ColorTemperature, DecodedImage, Exposure, Mood};

fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> DecodedImage {
    let pixels = rgba
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 4)
        .collect();
    DecodedImage::new(width, height, pixels).unwrap()
}

// ========================================================================
// Scenario Tests
// ========================================================================

#[test]
fn test_mid_gray_image_is_balanced() {
    let image = solid_image(32, 32, [128, 128, 128, 255]);
    let analysis = analyze_image(&image);

    assert_eq!(analysis.mood, Mood::Equilibrado);
    assert_eq!(analysis.exposure, Exposure::WellExposed);
    assert_eq!(analysis.color_temperature, ColorTemperature::Neutral);
    assert!((analysis.brightness - 128.0).abs() < 0.01);
    assert_eq!(analysis.saturation, 0.0);
}

#[test]
fn test_pure_black_image_is_underexposed() {
    let image = solid_image(16, 16, [0, 0, 0, 255]);
    let analysis = analyze_image(&image);

    assert_eq!(analysis.brightness, 0.0);
    assert_eq!(analysis.exposure, Exposure::Underexposed);
    assert_eq!(analysis.dominant_colors.len(), 1);
    assert_eq!(analysis.dominant_colors[0].name, "Negro");
}

#[test]
fn test_fully_transparent_image_falls_back_to_zeroed_record() {
    let image = solid_image(16, 16, [200, 100, 50, 0]);
    let analysis = analyze_image(&image);

    assert!(analysis.dominant_colors.is_empty());
    assert_eq!(analysis.brightness, 0.0);
    assert_eq!(analysis.contrast, 0.0);
    assert_eq!(analysis.saturation, 0.0);
    assert_eq!(analysis.exposure, Exposure::Underexposed);
    // Deterministic: same input, same record
    let again = analyze_image(&image);
    assert_eq!(again.mood, analysis.mood);
    assert_eq!(again.style, analysis.style);
}

#[test]
fn test_warm_bright_image() {
    let image = solid_image(16, 16, [230, 170, 60, 255]);
    let analysis = analyze_image(&image);

    assert_eq!(analysis.mood, Mood::Calido);
    assert_eq!(analysis.color_temperature, ColorTemperature::Warm);
    assert!(!analysis.suggested_luts.is_empty());
    assert_eq!(analysis.suggested_luts[0], "golden-hour");
}

// ========================================================================
// Invariant Tests
// ========================================================================

#[test]
fn test_dominant_colors_bounded_and_ordered() {
    // Noisy image: deterministic pseudo-random pixels
    let mut pixels = Vec::with_capacity(64 * 64 * 4);
    let mut state = 0x2545f491u32;
    for _ in 0..(64 * 64) {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        let bytes = state.to_le_bytes();
        pixels.extend_from_slice(&[bytes[0], bytes[1], bytes[2], 255]);
    }
    let image = DecodedImage::new(64, 64, pixels).unwrap();
    let analysis = analyze_image(&image);

    assert!(analysis.dominant_colors.len() <= 10);
    for pair in analysis.dominant_colors.windows(2) {
        assert!(pair[0].frequency >= pair[1].frequency);
    }
    let freq_sum: f32 = analysis.dominant_colors.iter().map(|c| c.frequency).sum();
    assert!(freq_sum <= 1.0 + 1e-4);

    assert!(analysis.brightness >= 0.0 && analysis.brightness <= 255.0);
    assert!(analysis.saturation >= 0.0 && analysis.saturation <= 1.0);
    assert!(analysis.suggested_luts.len() <= 3);
}

#[test]
fn test_analysis_is_deterministic() {
    let image = solid_image(100, 80, [90, 140, 200, 255]);
    let a = analyze_image(&image);
    let b = analyze_image(&image);

    assert_eq!(a.dominant_colors, b.dominant_colors);
    assert_eq!(a.brightness, b.brightness);
    assert_eq!(a.contrast, b.contrast);
    assert_eq!(a.suggested_luts, b.suggested_luts);
}

#[test]
fn test_analysis_serializes_to_yaml() {
    let image = solid_image(8, 8, [230, 170, 60, 255]);
    let analysis = analyze_image(&image);

    let yaml = serde_yaml::to_string(&analysis).unwrap();
    assert!(yaml.contains("mood: Cálido"));
    assert!(yaml.contains("color_temperature: warm"));
}
