//! `lutforge analyze` - print the color profile of an image

use lutforge_core::analyze_image;
use lutforge_core::models::ImageAnalysis;
use std::path::Path;

use crate::processing::decode_image;

/// Analyze an image and print its profile as text or YAML.
pub fn run_analyze(input: &Path, yaml: bool) -> Result<(), String> {
    let image = decode_image(input)?;
    let analysis = analyze_image(&image);

    if yaml {
        let rendered = serde_yaml::to_string(&analysis)
            .map_err(|e| format!("Failed to serialize analysis: {}", e))?;
        println!("{}", rendered);
    } else {
        print_report(input, &analysis);
    }

    Ok(())
}

fn print_report(input: &Path, analysis: &ImageAnalysis) {
    println!("Analysis of {}", input.display());
    println!(
        "  brightness: {:.1}  contrast: {:.1}  saturation: {:.2}",
        analysis.brightness, analysis.contrast, analysis.saturation
    );
    println!(
        "  mood: {}  style: {}  temperature: {}  exposure: {}",
        analysis.mood, analysis.style, analysis.color_temperature, analysis.exposure
    );
    println!(
        "  average color: ({:.0}, {:.0}, {:.0})",
        analysis.average_color.r, analysis.average_color.g, analysis.average_color.b
    );

    if !analysis.composition.is_empty() {
        println!("  composition: {}", analysis.composition.join(", "));
    }

    println!("  dominant colors:");
    for color in &analysis.dominant_colors {
        println!(
            "    {} {:>7.3}%  {}",
            color.hex,
            color.frequency * 100.0,
            color.name
        );
    }

    if !analysis.suggested_luts.is_empty() {
        println!("  suggested LUTs: {}", analysis.suggested_luts.join(", "));
    }
}
