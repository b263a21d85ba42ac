//! Image decoding and output path handling

use lutforge_core::lut::LutFormat;
use lutforge_core::models::DecodedImage;
use std::path::{Path, PathBuf};

/// Decode an image file into raw RGBA bytes for the analysis engine.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?
        .to_rgba8();

    let (width, height) = img.dimensions();
    DecodedImage::new(width, height, img.into_raw())
}

/// Replace characters that are awkward in file names with underscores.
pub fn sanitize_file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | ' ' => '_',
            other => other,
        })
        .collect();
    if stem.is_empty() {
        "untitled".to_string()
    } else {
        stem
    }
}

/// Build `<out_dir>/<sanitized name>.<format extension>`.
pub fn output_path(out_dir: &Path, name: &str, format: LutFormat) -> PathBuf {
    out_dir.join(format!(
        "{}.{}",
        sanitize_file_stem(name),
        format.extension()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(sanitize_file_stem("My Look"), "My_Look");
        assert_eq!(sanitize_file_stem("a/b:c"), "a_b_c");
        assert_eq!(sanitize_file_stem(""), "untitled");
        assert_eq!(sanitize_file_stem("clean-name"), "clean-name");
    }

    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("out"), "Night Look", LutFormat::Cube);
        assert_eq!(path, PathBuf::from("out/Night_Look.cube"));

        let path = output_path(Path::new("."), "x", LutFormat::ThreeDl);
        assert_eq!(path, PathBuf::from("./x.3dl"));
    }

    #[test]
    fn test_decode_missing_file_errors() {
        let result = decode_image("/nonexistent/image.png");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to decode"));
    }
}
