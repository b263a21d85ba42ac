//! Dominant color extraction from quantized bucket counts

use crate::color;
use crate::config::MAX_DOMINANT_COLORS;
use crate::models::DominantColor;
use crate::sampler::{bucket_color, SampleSet};

/// Rank the populated color buckets and keep the top 10.
///
/// Counts are sorted by descending frequency with a stable sort, so
/// equal counts keep their first-encounter order. Each retained bucket
/// is reconstructed to its representative RGB value (bucket index * 16).
pub fn dominant_colors(samples: &SampleSet) -> Vec<DominantColor> {
    if samples.accepted == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(u16, u32)> = samples.buckets().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(MAX_DOMINANT_COLORS);

    let accepted = samples.accepted as f32;
    ranked
        .into_iter()
        .map(|(key, count)| {
            let (r, g, b) = bucket_color(key);
            DominantColor {
                r,
                g,
                b,
                frequency: count as f32 / accepted,
                hex: color::hex(r, g, b),
                name: color::color_name(r, g, b).to_string(),
            }
        })
        .collect()
}
