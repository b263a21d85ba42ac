//! `lutforge generate` - synthesize LUT files from image analysis

use lutforge_core::lut::{synthesize_3dl, synthesize_cube, validate_lut, LutFormat};
use lutforge_core::mapping::ColorMapping;
use lutforge_core::models::LutConfig;
use lutforge_core::{analyze_image, verbose_println};
use std::path::Path;

use crate::parsers::parse_hex_color;
use crate::processing::{decode_image, output_path};

/// Options for one generate invocation
pub struct GenerateOptions<'a> {
    pub reference: &'a Path,
    pub target_image: Option<&'a Path>,
    pub target_color: Option<&'a str>,
    pub name: String,
    pub size: usize,
    pub formats: Vec<LutFormat>,
    pub out_dir: &'a Path,
}

/// Build the color mapping and write the requested LUT files.
pub fn run_generate(options: &GenerateOptions<'_>) -> Result<(), String> {
    if options.size < 2 {
        return Err(format!(
            "LUT size must be at least 2, got {}",
            options.size
        ));
    }

    let reference_image = decode_image(options.reference)?;
    let reference = analyze_image(&reference_image);
    verbose_println!(
        "[generate] reference: mood {}, style {}, {} dominant colors",
        reference.mood,
        reference.style,
        reference.dominant_colors.len()
    );

    let mapping = match (options.target_image, options.target_color) {
        (Some(path), None) => {
            let target_image = decode_image(path)?;
            let target = analyze_image(&target_image);
            ColorMapping::from_analyses(&reference, &target)
        }
        (None, Some(value)) => {
            let color = parse_hex_color(value)?;
            ColorMapping::toward_color(&reference.dominant_colors, color)
        }
        (Some(_), Some(_)) => {
            return Err("Specify either --target or --target-color, not both".to_string())
        }
        (None, None) => {
            return Err("A target image (--target) or color (--target-color) is required"
                .to_string())
        }
    };
    verbose_println!("[generate] sparse mapping with {} entries", mapping.len());

    let config = LutConfig::with_size(options.name.clone(), options.size);

    for &format in &options.formats {
        let content = match format {
            LutFormat::Cube => synthesize_cube(&mapping, &config, Some(&reference)),
            LutFormat::ThreeDl => synthesize_3dl(&mapping, &config, Some(&reference)),
        };

        let report = validate_lut(&content, config.size);
        if !report.is_valid {
            return Err(format!(
                "Generated {} LUT failed validation: {}",
                format.extension(),
                report.errors.join("; ")
            ));
        }

        let path = output_path(options.out_dir, &config.name, format);
        std::fs::write(&path, &content)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
