//! Heuristic scene classification
//!
//! Threshold-based rules mapping image statistics to categorical
//! labels. The rule ordering is load-bearing: mood and style are
//! first-match cascades, composition tags accumulate.

use crate::models::{ColorTemperature, DominantColor, Exposure, Mood, Style};

use super::statistics::ImageStatistics;

/// Categorical labels produced by the classifier
#[derive(Debug, Clone)]
pub struct Classification {
    pub mood: Mood,
    pub style: Style,
    pub color_temperature: ColorTemperature,
    pub exposure: Exposure,
    pub composition: Vec<String>,
    pub suggested_luts: Vec<String>,
}

/// Classify an image from its dominant colors and scalar statistics.
pub fn classify(dominant: &[DominantColor], stats: &ImageStatistics) -> Classification {
    let mood = classify_mood(dominant, stats);
    let style = classify_style(dominant, stats);
    let color_temperature = classify_temperature(stats);
    let exposure = classify_exposure(stats.brightness);
    let composition = composition_tags(dominant, stats);
    let suggested_luts = suggest_luts(mood, style, color_temperature);

    Classification {
        mood,
        style,
        color_temperature,
        exposure,
        composition,
        suggested_luts,
    }
}

/// First-match mood cascade
fn classify_mood(dominant: &[DominantColor], stats: &ImageStatistics) -> Mood {
    let warm = dominant.iter().filter(|c| c.r > c.b && c.g > c.b).count();
    let cool = dominant.iter().filter(|c| c.b > c.r && c.b > c.g).count();

    if stats.brightness < 80.0 && stats.contrast > 60.0 {
        Mood::Misterioso
    } else if stats.brightness > 180.0 && stats.saturation > 0.7 {
        Mood::Vibrante
    } else if warm > cool && stats.brightness > 120.0 {
        Mood::Calido
    } else if cool > warm && stats.brightness < 150.0 {
        Mood::Frio
    } else if stats.contrast > 70.0 {
        Mood::Dramatico
    } else if stats.saturation > 0.0 && stats.saturation < 0.3 {
        // Fully achromatic images read as balanced, not minimalist
        Mood::Minimalista
    } else if stats.brightness > 160.0 {
        Mood::Luminoso
    } else {
        Mood::Equilibrado
    }
}

/// First-match style cascade
fn classify_style(dominant: &[DominantColor], stats: &ImageStatistics) -> Style {
    let unique_colors = dominant.len();
    let avg_saturation = if dominant.is_empty() {
        0.0
    } else {
        dominant
            .iter()
            .map(|c| crate::color::pixel_saturation(c.r, c.g, c.b))
            .sum::<f32>()
            / unique_colors as f32
    };

    if stats.contrast > 80.0 && stats.brightness < 100.0 {
        Style::FilmNoir
    } else if avg_saturation > 0.8 && unique_colors > 6 {
        Style::Cyberpunk
    } else if stats.brightness > 150.0 && avg_saturation < 0.4 {
        Style::Minimalista
    } else if unique_colors < 4 && stats.contrast > 60.0 {
        Style::Monocromatico
    } else if avg_saturation > 0.6 && stats.brightness > 120.0 {
        Style::Vintage
    } else {
        Style::Natural
    }
}

/// Red-vs-blue channel balance of the average color
fn classify_temperature(stats: &ImageStatistics) -> ColorTemperature {
    let temp = (stats.average_color.r - stats.average_color.b) / 255.0;
    if temp > 0.1 {
        ColorTemperature::Warm
    } else if temp < -0.1 {
        ColorTemperature::Cool
    } else {
        ColorTemperature::Neutral
    }
}

fn classify_exposure(brightness: f32) -> Exposure {
    if brightness < 80.0 {
        Exposure::Underexposed
    } else if brightness > 200.0 {
        Exposure::Overexposed
    } else {
        Exposure::WellExposed
    }
}

/// Cumulative composition tags; every matching rule contributes
fn composition_tags(dominant: &[DominantColor], stats: &ImageStatistics) -> Vec<String> {
    let mut tags = Vec::new();

    if stats.contrast > 70.0 {
        tags.push("high contrast".to_string());
    }
    if stats.brightness < 100.0 {
        tags.push("deep shadows".to_string());
    }
    if stats.brightness > 180.0 {
        tags.push("bright lighting".to_string());
    }
    if dominant.len() < 4 {
        tags.push("limited palette".to_string());
    }
    if dominant.len() > 8 {
        tags.push("rich palette".to_string());
    }

    tags
}

/// Union of preset ids keyed by mood, style, and temperature,
/// deduplicated in insertion order and truncated to 3.
fn suggest_luts(mood: Mood, style: Style, temperature: ColorTemperature) -> Vec<String> {
    let mut suggestions: Vec<&str> = Vec::new();

    let mut extend = |ids: &[&'static str]| {
        for &id in ids {
            if !suggestions.contains(&id) {
                suggestions.push(id);
            }
        }
    };

    match mood {
        Mood::Misterioso => extend(&["film-noir", "cyberpunk"]),
        Mood::Vibrante => extend(&["cyberpunk", "fire-glow"]),
        Mood::Calido => extend(&["golden-hour", "vintage-film"]),
        Mood::Frio => extend(&["teal-orange", "film-noir"]),
        Mood::Dramatico => extend(&["fire-glow", "film-noir"]),
        _ => {}
    }

    match style {
        Style::FilmNoir => extend(&["film-noir", "vintage-film"]),
        Style::Cyberpunk => extend(&["cyberpunk", "fire-glow"]),
        Style::Vintage => extend(&["vintage-film", "golden-hour"]),
        _ => {}
    }

    match temperature {
        ColorTemperature::Warm => extend(&["golden-hour", "vintage-film"]),
        ColorTemperature::Cool => extend(&["teal-orange", "cyberpunk"]),
        ColorTemperature::Neutral => {}
    }

    suggestions
        .into_iter()
        .take(3)
        .map(str::to_string)
        .collect()
}
