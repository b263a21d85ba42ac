//! `lutforge presets` - list and export the cinematic preset catalog

use lutforge_core::presets::{
    builtin_presets, load_preset_catalog, presets_dir, save_preset_catalog, validate_preset_name,
};
use std::path::{Path, PathBuf};

pub fn run_presets(
    catalog: Option<&Path>,
    export: Option<&str>,
    dir: Option<&Path>,
) -> Result<(), String> {
    if let Some(name) = export {
        let path = export_builtin_catalog(name, dir)?;
        println!("Saved built-in catalog to: {}", path.display());
        return Ok(());
    }

    let presets = match catalog {
        Some(path) => load_preset_catalog(path)?,
        None => builtin_presets(),
    };

    if presets.is_empty() {
        println!("No presets found.");
        return Ok(());
    }

    println!("{} presets:", presets.len());
    for preset in presets {
        println!(
            "  {:<14} {:<14} {:<11} intensity {:>3}  {}",
            preset.id, preset.name, preset.category, preset.intensity, preset.description
        );
    }
    Ok(())
}

/// Write the built-in catalog as `<name>.yml` into `dir`, or into the
/// user presets directory when no override is given.
fn export_builtin_catalog(name: &str, dir: Option<&Path>) -> Result<PathBuf, String> {
    validate_preset_name(name)?;

    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => presets_dir()?,
    };
    let path = dir.join(format!("{}.yml", name));
    save_preset_catalog(&builtin_presets(), &path)?;
    Ok(path)
}

// ============================================================================
// Tests
// ============================================================================
