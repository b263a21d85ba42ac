//! Data models for Lutforge
//!
//! Core data structures for decoded images, analysis records, LUT
//! configuration, presets, and validation reports.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DEFAULT_LUT_SIZE;

/// Decoded image data handed to the analysis pipeline.
///
/// The engine never decodes files itself; callers supply a row-major,
/// top-to-bottom RGBA byte buffer (4 bytes per pixel).
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved RGBA bytes, length `width * height * 4`
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Wrap a decoded RGBA buffer, checking that its length matches the
    /// declared dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, String> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(format!(
                "Pixel buffer length mismatch: expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                pixels.len()
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Total number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// One of the most frequent quantized colors in a sampled image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,

    /// Share of accepted samples that fell into this color's bucket (0-1)
    pub frequency: f32,

    /// `#rrggbb` representation
    pub hex: String,

    /// Heuristic human-readable color name
    pub name: String,
}

/// Mean channel values over all accepted samples (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Heuristic mood classification of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Misterioso,
    Vibrante,
    #[serde(rename = "Cálido")]
    Calido,
    #[serde(rename = "Frío")]
    Frio,
    #[serde(rename = "Dramático")]
    Dramatico,
    Minimalista,
    Luminoso,
    Equilibrado,
}

impl Mood {
    /// Display label, matching the preset catalog's vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Misterioso => "Misterioso",
            Mood::Vibrante => "Vibrante",
            Mood::Calido => "Cálido",
            Mood::Frio => "Frío",
            Mood::Dramatico => "Dramático",
            Mood::Minimalista => "Minimalista",
            Mood::Luminoso => "Luminoso",
            Mood::Equilibrado => "Equilibrado",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Heuristic visual style classification of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "Film Noir")]
    FilmNoir,
    Cyberpunk,
    Minimalista,
    #[serde(rename = "Monocromático")]
    Monocromatico,
    Vintage,
    Natural,
}

impl Style {
    pub fn label(&self) -> &'static str {
        match self {
            Style::FilmNoir => "Film Noir",
            Style::Cyberpunk => "Cyberpunk",
            Style::Minimalista => "Minimalista",
            Style::Monocromatico => "Monocromático",
            Style::Vintage => "Vintage",
            Style::Natural => "Natural",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Warm/cool/neutral classification from red-vs-blue channel balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTemperature {
    Warm,
    Cool,
    Neutral,
}

impl ColorTemperature {
    pub fn label(&self) -> &'static str {
        match self {
            ColorTemperature::Warm => "warm",
            ColorTemperature::Cool => "cool",
            ColorTemperature::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exposure classification from mean luma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exposure {
    #[serde(rename = "underexposed")]
    Underexposed,
    #[serde(rename = "well-exposed")]
    WellExposed,
    #[serde(rename = "overexposed")]
    Overexposed,
}

impl Exposure {
    pub fn label(&self) -> &'static str {
        match self {
            Exposure::Underexposed => "underexposed",
            Exposure::WellExposed => "well-exposed",
            Exposure::Overexposed => "overexposed",
        }
    }
}

impl fmt::Display for Exposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete statistical and heuristic profile of one analyzed image.
///
/// Created once per analysis call and immutable thereafter. An image
/// with zero accepted (non-transparent) samples yields the zeroed
/// fallback record rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysis {
    /// Up to 10 dominant colors, sorted by descending frequency
    pub dominant_colors: Vec<DominantColor>,

    /// Mean channel values over all accepted samples
    pub average_color: AverageColor,

    /// Luma-weighted mean brightness (0-255)
    pub brightness: f32,

    /// Frequency-weighted luma deviation over the dominant colors
    pub contrast: f32,

    /// Mean per-pixel saturation (0-1)
    pub saturation: f32,

    pub mood: Mood,
    pub style: Style,
    pub color_temperature: ColorTemperature,
    pub exposure: Exposure,

    /// Descriptive composition tags (cumulative, not mutually exclusive)
    pub composition: Vec<String>,

    /// Up to 3 suggested preset LUT identifiers, deduplicated
    pub suggested_luts: Vec<String>,
}

/// Configuration for one LUT synthesis call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LutConfig {
    /// Cubic grid dimension (the LUT holds `size^3` entries)
    pub size: usize,

    /// Title written into the LUT header
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,
}

impl LutConfig {
    /// Config with the default 32-point grid.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            size: DEFAULT_LUT_SIZE,
            name: name.into(),
            description: None,
        }
    }

    /// Config with an explicit grid dimension.
    pub fn with_size(name: impl Into<String>, size: usize) -> Self {
        Self {
            size,
            name: name.into(),
            description: None,
        }
    }
}

/// A cinematic LUT preset from the catalog.
///
/// The engine only consumes preset identifiers (for `suggested_luts`);
/// the remaining fields describe the preset to presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LutPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,

    /// Effect strength, 0-100
    pub intensity: u8,

    pub mood: String,
}

/// Result of validating a serialized LUT document.
///
/// Violations are accumulated, never thrown; an empty error list means
/// the document parsed cleanly with the expected shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LutValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_image_length_check() {
        let ok = DecodedImage::new(2, 2, vec![0u8; 16]);
        assert!(ok.is_ok());
        assert_eq!(ok.unwrap().pixel_count(), 4);

        let bad = DecodedImage::new(2, 2, vec![0u8; 15]);
        assert!(bad.is_err());
        assert!(bad.unwrap_err().contains("length mismatch"));
    }

    #[test]
    fn test_mood_labels() {
        assert_eq!(Mood::Equilibrado.to_string(), "Equilibrado");
        assert_eq!(Mood::Calido.to_string(), "Cálido");
        assert_eq!(Mood::Dramatico.to_string(), "Dramático");
    }

    #[test]
    fn test_enum_serde_labels() {
        assert_eq!(serde_yaml::to_string(&Mood::Frio).unwrap().trim(), "Frío");
        assert_eq!(
            serde_yaml::to_string(&Exposure::WellExposed).unwrap().trim(),
            "well-exposed"
        );
        assert_eq!(
            serde_yaml::to_string(&ColorTemperature::Warm).unwrap().trim(),
            "warm"
        );
        assert_eq!(
            serde_yaml::to_string(&Style::FilmNoir).unwrap().trim(),
            "Film Noir"
        );
    }

    #[test]
    fn test_lut_config_defaults() {
        let config = LutConfig::new("Test");
        assert_eq!(config.size, 32);
        assert_eq!(config.name, "Test");
        assert!(config.description.is_none());

        let small = LutConfig::with_size("Small", 2);
        assert_eq!(small.size, 2);
    }
}
