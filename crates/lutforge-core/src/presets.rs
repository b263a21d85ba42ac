//! Preset catalog management
//!
//! The built-in cinematic catalog plus YAML load/save for user preset
//! catalogs. The analysis engine only consumes preset identifiers
//! (`suggested_luts`); everything else here serves presentation layers.

use crate::models::LutPreset;
use std::path::Path;

/// The built-in cinematic LUT catalog, in canonical order.
pub fn builtin_presets() -> Vec<LutPreset> {
    vec![
        LutPreset {
            id: "teal-orange".to_string(),
            name: "Teal & Orange".to_string(),
            description: "Clásico cinematográfico con contrastes cálidos y fríos".to_string(),
            category: "Cinematic".to_string(),
            intensity: 85,
            mood: "Dramático".to_string(),
        },
        LutPreset {
            id: "film-noir".to_string(),
            name: "Film Noir".to_string(),
            description: "Blanco y negro con altos contrastes y sombras profundas".to_string(),
            category: "Vintage".to_string(),
            intensity: 90,
            mood: "Misterioso".to_string(),
        },
        LutPreset {
            id: "golden-hour".to_string(),
            name: "Golden Hour".to_string(),
            description: "Cálidos tonos dorados perfectos para retratos".to_string(),
            category: "Warm".to_string(),
            intensity: 75,
            mood: "Romántico".to_string(),
        },
        LutPreset {
            id: "cyberpunk".to_string(),
            name: "Cyberpunk".to_string(),
            description: "Neones vibrantes y colores futuristas".to_string(),
            category: "Futuristic".to_string(),
            intensity: 95,
            mood: "Futurista".to_string(),
        },
        LutPreset {
            id: "vintage-film".to_string(),
            name: "Vintage Film".to_string(),
            description: "Simulación de película analógica con grano".to_string(),
            category: "Vintage".to_string(),
            intensity: 70,
            mood: "Nostálgico".to_string(),
        },
        LutPreset {
            id: "fire-glow".to_string(),
            name: "Fire Glow".to_string(),
            description: "Efectos de fuego y resplandor dramático".to_string(),
            category: "Dramatic".to_string(),
            intensity: 88,
            mood: "Intenso".to_string(),
        },
    ]
}

/// Look up a built-in preset by identifier.
pub fn find_preset(id: &str) -> Option<LutPreset> {
    builtin_presets().into_iter().find(|p| p.id == id)
}

/// Validate a preset name to prevent path traversal attacks.
/// Rejects names containing path separators, "..", or other dangerous patterns.
pub fn validate_preset_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Preset name cannot be empty".to_string());
    }
    if name.contains('/') || name.contains('\\') {
        return Err("Preset name cannot contain path separators".to_string());
    }
    if name.contains("..") {
        return Err("Preset name cannot contain '..'".to_string());
    }
    if name.starts_with('.') {
        return Err("Preset name cannot start with '.'".to_string());
    }
    if name.contains('\0') {
        return Err("Preset name cannot contain null bytes".to_string());
    }
    Ok(())
}

/// Load a preset catalog from a YAML file
pub fn load_preset_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<LutPreset>, String> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read preset file: {}", e))?;

    serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse preset YAML: {}", e))
}

/// Save a preset catalog to a YAML file
pub fn save_preset_catalog<P: AsRef<Path>>(presets: &[LutPreset], path: P) -> Result<(), String> {
    let yaml = serde_yaml::to_string(presets)
        .map_err(|e| format!("Failed to serialize presets: {}", e))?;

    std::fs::write(path, yaml).map_err(|e| format!("Failed to write preset file: {}", e))
}

/// Get the default presets directory, creating it if needed
pub fn presets_dir() -> Result<std::path::PathBuf, String> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| "Could not determine home directory".to_string())?;

    let presets_dir = home_dir.join("lutforge").join("presets");

    if !presets_dir.exists() {
        std::fs::create_dir_all(&presets_dir)
            .map_err(|e| format!("Failed to create presets directory: {}", e))?;
    }

    Ok(presets_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_catalog_order_and_ids() {
        let presets = builtin_presets();
        assert_eq!(presets.len(), 6);
        let ids: Vec<&str> = presets.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "teal-orange",
                "film-noir",
                "golden-hour",
                "cyberpunk",
                "vintage-film",
                "fire-glow"
            ]
        );
        for preset in &presets {
            assert!(preset.intensity <= 100);
        }
    }

    #[test]
    fn test_find_preset() {
        assert!(find_preset("cyberpunk").is_some());
        assert!(find_preset("does-not-exist").is_none());
    }

    #[test]
    fn test_suggested_ids_exist_in_catalog() {
        // Every id the classifier can suggest must resolve
        for id in [
            "film-noir",
            "cyberpunk",
            "fire-glow",
            "golden-hour",
            "vintage-film",
            "teal-orange",
        ] {
            assert!(find_preset(id).is_some(), "missing preset: {}", id);
        }
    }

    #[test]
    fn test_validate_preset_name() {
        assert!(validate_preset_name("my-look").is_ok());
        assert!(validate_preset_name("").is_err());
        assert!(validate_preset_name("a/b").is_err());
        assert!(validate_preset_name("a\\b").is_err());
        assert!(validate_preset_name("..").is_err());
        assert!(validate_preset_name(".hidden").is_err());
    }

    #[test]
    fn test_catalog_yaml_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.yml");

        let presets = builtin_presets();
        save_preset_catalog(&presets, &path).unwrap();
        let loaded = load_preset_catalog(&path).unwrap();
        assert_eq!(loaded, presets);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = load_preset_catalog("/nonexistent/catalog.yml");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to read preset file"));
    }
}
