//! Dense LUT grid synthesis from a sparse color mapping

use rayon::prelude::*;

use crate::mapping::ColorMapping;
use crate::models::{ImageAnalysis, LutConfig};

use super::format::{write_3dl, write_cube};

/// Densify a sparse mapping into a full `size^3` grid of normalized
/// RGB triples.
///
/// Cells are laid out with b as the outer loop and r as the inner
/// (fastest) loop, the nesting both interchange formats expect. Per
/// cell: an exact mapping hit (keyed by the rounded 0-255 input
/// triple) returns the mapped color directly; otherwise the nearest
/// mapping entry is used, falling back to the input color itself when
/// the mapping is empty, and the optional analysis-driven
/// brightness/contrast correction is applied.
///
/// Grid slices are computed in parallel; the mapping is read-only
/// during synthesis, and slice order is preserved, so output is
/// byte-identical across calls.
pub fn synthesize_grid(
    mapping: &ColorMapping,
    config: &LutConfig,
    analysis: Option<&ImageAnalysis>,
) -> Vec<[f32; 3]> {
    let size = config.size;
    let slices: Vec<Vec<[f32; 3]>> = (0..size)
        .into_par_iter()
        .map(|b| {
            let mut slice = Vec::with_capacity(size * size);
            for g in 0..size {
                for r in 0..size {
                    slice.push(transform_cell(r, g, b, size, mapping, analysis));
                }
            }
            slice
        })
        .collect();

    slices.into_iter().flatten().collect()
}

fn transform_cell(
    r: usize,
    g: usize,
    b: usize,
    size: usize,
    mapping: &ColorMapping,
    analysis: Option<&ImageAnalysis>,
) -> [f32; 3] {
    let denom = (size - 1) as f32;
    let input = [r as f32 / denom, g as f32 / denom, b as f32 / denom];
    let key = [
        (input[0] * 255.0).round() as u8,
        (input[1] * 255.0).round() as u8,
        (input[2] * 255.0).round() as u8,
    ];

    // Exact hits bypass the global correction: the mapping entry is
    // already the fully transformed color for that source.
    if let Some(target) = mapping.exact(key) {
        return [target[0] / 255.0, target[1] / 255.0, target[2] / 255.0];
    }

    let mut color = match mapping.nearest(key) {
        Some(target) => [target[0] / 255.0, target[1] / 255.0, target[2] / 255.0],
        None => input,
    };

    if let Some(analysis) = analysis {
        let brightness_factor = (analysis.brightness / 128.0).clamp(0.5, 1.5);
        let contrast_factor = (analysis.contrast / 100.0).clamp(0.8, 1.2);
        for channel in &mut color {
            *channel *= brightness_factor;
            *channel = 0.5 + (*channel - 0.5) * contrast_factor;
            *channel = channel.clamp(0.0, 1.0);
        }
    }

    color
}

/// Synthesize and serialize to `.cube` text.
pub fn synthesize_cube(
    mapping: &ColorMapping,
    config: &LutConfig,
    analysis: Option<&ImageAnalysis>,
) -> String {
    let grid = synthesize_grid(mapping, config, analysis);
    write_cube(&grid, config)
}

/// Synthesize and serialize to `.3dl` text.
pub fn synthesize_3dl(
    mapping: &ColorMapping,
    config: &LutConfig,
    analysis: Option<&ImageAnalysis>,
) -> String {
    let grid = synthesize_grid(mapping, config, analysis);
    write_3dl(&grid, config)
}
