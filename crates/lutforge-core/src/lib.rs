//! Lutforge Core Library
//!
//! Color analysis and 3D LUT synthesis for cinematic color grading.
//!
//! The pipeline: a decoded RGBA image is sampled ([`sampler`]), the
//! samples are reduced to dominant colors and scalar statistics
//! ([`analysis`]), the resulting profile drives a sparse color mapping
//! ([`mapping`]), and the mapping is densified into a full 3D lookup
//! table serialized as `.cube` or `.3dl` text ([`lut`]).

pub mod analysis;
pub mod color;
pub mod config;
pub mod lut;
pub mod mapping;
pub mod models;
pub mod presets;
pub mod sampler;

// Re-export commonly used types
pub use analysis::analyze_image;
pub use lut::{
    declared_size, synthesize_3dl, synthesize_cube, synthesize_grid, validate_lut, LutFormat,
};
pub use mapping::ColorMapping;
pub use models::{
    AverageColor, ColorTemperature, DecodedImage, DominantColor, Exposure, ImageAnalysis,
    LutConfig, LutPreset, LutValidation, Mood, Style,
};
