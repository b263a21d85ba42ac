//! Sparse source-to-target color mapping
//!
//! A mapping holds one entry per reference dominant color (at most 10).
//! Entry order follows the reference color ranking, which keeps exact
//! and nearest-neighbor lookups deterministic.

use crate::color;
use crate::models::{ColorTemperature, DominantColor, ImageAnalysis, Mood, Style};

/// One sparse mapping entry: exact 8-bit source, floating target
#[derive(Debug, Clone, PartialEq)]
pub struct MappedColor {
    pub source: [u8; 3],
    pub target: [f32; 3],
}

/// Sparse map from source RGB triples to transformed RGB triples
#[derive(Debug, Clone, Default)]
pub struct ColorMapping {
    entries: Vec<MappedColor>,
}

impl ColorMapping {
    /// Build a mapping from a reference analysis toward a target analysis.
    ///
    /// Each reference dominant color is paired with its nearest target
    /// dominant color (Euclidean RGB distance, earliest target wins
    /// ties) and interpolated toward it: R and G by the product of the
    /// mood and style compatibility factors, B by the temperature
    /// factor. Channels are clamped to [0, 255].
    pub fn from_analyses(reference: &ImageAnalysis, target: &ImageAnalysis) -> Self {
        let mood = mood_factor(reference.mood, target.mood);
        let style = style_factor(reference.style, target.style);
        let temperature =
            temperature_factor(reference.color_temperature, target.color_temperature);
        let rg_blend = mood * style;

        let entries = reference
            .dominant_colors
            .iter()
            .filter_map(|ref_color| {
                let best = nearest_dominant(ref_color, &target.dominant_colors)?;
                Some(MappedColor {
                    source: [ref_color.r, ref_color.g, ref_color.b],
                    target: [
                        blend_channel(ref_color.r, best.r, rg_blend),
                        blend_channel(ref_color.g, best.g, rg_blend),
                        blend_channel(ref_color.b, best.b, temperature),
                    ],
                })
            })
            .collect();

        Self { entries }
    }

    /// Build a mapping pulling a dominant-color set toward one fixed color.
    ///
    /// The blend strength per entry scales with similarity to the
    /// target: `min(0.8 * (1 - distance / max_distance), 1)`, so colors
    /// already close to the target move the furthest toward it.
    pub fn toward_color(colors: &[DominantColor], target: [u8; 3]) -> Self {
        let max_distance = 255.0 * 3.0_f32.sqrt();
        let target_f = [target[0] as f32, target[1] as f32, target[2] as f32];

        let entries = colors
            .iter()
            .map(|c| {
                let d = color::distance([c.r as f32, c.g as f32, c.b as f32], target_f);
                let similarity = 1.0 - d / max_distance;
                let strength = (similarity * 0.8).min(1.0);
                MappedColor {
                    source: [c.r, c.g, c.b],
                    target: [
                        blend_channel(c.r, target[0], strength),
                        blend_channel(c.g, target[1], strength),
                        blend_channel(c.b, target[2], strength),
                    ],
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[MappedColor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup by 8-bit source triple.
    pub fn exact(&self, source: [u8; 3]) -> Option<[f32; 3]> {
        self.entries
            .iter()
            .find(|e| e.source == source)
            .map(|e| e.target)
    }

    /// Nearest entry by Euclidean distance in 0-255 space.
    ///
    /// Returns `None` only when the mapping is empty; ties keep the
    /// earliest entry.
    pub fn nearest(&self, source: [u8; 3]) -> Option<[f32; 3]> {
        let query = [source[0] as f32, source[1] as f32, source[2] as f32];
        let mut best: Option<(f32, [f32; 3])> = None;

        for entry in &self.entries {
            let entry_source = [
                entry.source[0] as f32,
                entry.source[1] as f32,
                entry.source[2] as f32,
            ];
            let d = color::distance(query, entry_source);
            if best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, entry.target));
            }
        }

        best.map(|(_, target)| target)
    }
}

fn blend_channel(from: u8, to: u8, factor: f32) -> f32 {
    (from as f32 + (to as f32 - from as f32) * factor).clamp(0.0, 255.0)
}

fn nearest_dominant<'a>(
    reference: &DominantColor,
    candidates: &'a [DominantColor],
) -> Option<&'a DominantColor> {
    let query = [reference.r as f32, reference.g as f32, reference.b as f32];
    let mut best: Option<(f32, &DominantColor)> = None;

    for candidate in candidates {
        let d = color::distance(
            query,
            [candidate.r as f32, candidate.g as f32, candidate.b as f32],
        );
        if best.map_or(true, |(bd, _)| d < bd) {
            best = Some((d, candidate));
        }
    }

    best.map(|(_, c)| c)
}

/// Mood compatibility factor. Unlisted pairs default to 0.5.
fn mood_factor(reference: Mood, target: Mood) -> f32 {
    use Mood::*;
    match (reference, target) {
        (Misterioso, Misterioso) => 1.0,
        (Misterioso, Dramatico) => 0.8,
        (Misterioso, Vibrante) => 0.3,
        (Vibrante, Vibrante) => 1.0,
        (Vibrante, Calido) => 0.7,
        (Vibrante, Misterioso) => 0.2,
        (Calido, Calido) => 1.0,
        (Calido, Vibrante) => 0.6,
        (Calido, Frio) => 0.3,
        (Frio, Frio) => 1.0,
        (Frio, Misterioso) => 0.7,
        (Frio, Calido) => 0.2,
        (Dramatico, Dramatico) => 1.0,
        (Dramatico, Misterioso) => 0.8,
        (Dramatico, Vibrante) => 0.5,
        _ => 0.5,
    }
}

/// Style compatibility factor. Unlisted pairs default to 0.5.
fn style_factor(reference: Style, target: Style) -> f32 {
    use Style::*;
    match (reference, target) {
        (FilmNoir, FilmNoir) => 1.0,
        (FilmNoir, Vintage) => 0.8,
        (FilmNoir, Cyberpunk) => 0.4,
        (Cyberpunk, Cyberpunk) => 1.0,
        (Cyberpunk, FilmNoir) => 0.3,
        (Vintage, Vintage) => 1.0,
        (Vintage, FilmNoir) => 0.8,
        (Vintage, Natural) => 0.6,
        (Natural, Natural) => 1.0,
        (Natural, Vintage) => 0.6,
        (Natural, Minimalista) => 0.8,
        _ => 0.5,
    }
}

/// Temperature compatibility: same 1.0, opposed warm/cool 0.3, else 0.7.
fn temperature_factor(reference: ColorTemperature, target: ColorTemperature) -> f32 {
    use ColorTemperature::*;
    match (reference, target) {
        (a, b) if a == b => 1.0,
        (Warm, Cool) | (Cool, Warm) => 0.3,
        _ => 0.7,
    }
}
