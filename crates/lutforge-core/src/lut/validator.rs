//! Structural and numeric validation of serialized LUT documents
//!
//! The validator re-parses generated (or externally supplied) LUT text
//! and reports every violation it finds; it never stops at the first
//! error and never panics on malformed input.

use crate::models::LutValidation;

/// Validate LUT text against an expected cubic grid size.
///
/// Blank lines, `#` comments, and header lines (`TITLE`,
/// `LUT_3D_SIZE`, `3DMESH`, `Mesh`) are skipped. A `3DMESH` header
/// switches range checking to the 12-bit [0, 4095] integer scale and
/// marks the breakpoint line after `Mesh` as a non-data line; all
/// other numeric lines with at least three tokens are data lines and
/// must total exactly `size^3`.
pub fn validate_lut(content: &str, size: usize) -> LutValidation {
    let mut errors = Vec::new();

    if content.trim().is_empty() {
        return LutValidation {
            is_valid: false,
            errors: vec!["LUT content is empty".to_string()],
        };
    }

    let mut is_mesh = false;
    let mut pending_breakpoints = false;
    let mut data_lines = 0usize;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.contains("TITLE") || line.contains("LUT_3D_SIZE") {
            continue;
        }
        if line.contains("3DMESH") {
            is_mesh = true;
            continue;
        }
        if line.contains("Mesh") {
            pending_breakpoints = true;
            continue;
        }

        // The first line after a Mesh header carries the grid
        // breakpoints, not color data; a size-2 mesh has only two
        // tokens on that line.
        if is_mesh && pending_breakpoints {
            pending_breakpoints = false;
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            continue;
        }

        match parse_triple(&tokens) {
            Some([r, g, b]) => {
                let (lo, hi, scale) = if is_mesh {
                    (0.0, 4095.0, "0-4095")
                } else {
                    (0.0, 1.0, "0-1")
                };
                if r < lo || r > hi || g < lo || g > hi || b < lo || b > hi {
                    errors.push(format!("Color values out of range ({}): {}", scale, line));
                }
            }
            None => errors.push(format!("Invalid color values: {}", line)),
        }
        data_lines += 1;
    }

    let expected = size * size * size;
    if data_lines != expected {
        errors.push(format!(
            "Expected {} data lines, found {}",
            expected, data_lines
        ));
    }

    LutValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Read the grid size a LUT document declares in its own headers
/// (`LUT_3D_SIZE N` or `Mesh 0 N`), if any.
pub fn declared_size(content: &str) -> Option<usize> {
    for line in content.lines() {
        let line = line.trim();
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("LUT_3D_SIZE") => return tokens.next()?.parse().ok(),
            Some("Mesh") => {
                let _zero = tokens.next()?;
                return tokens.next()?.parse().ok();
            }
            _ => {}
        }
    }
    None
}

fn parse_triple(tokens: &[&str]) -> Option<[f32; 3]> {
    let r: f32 = tokens[0].parse().ok()?;
    let g: f32 = tokens[1].parse().ok()?;
    let b: f32 = tokens[2].parse().ok()?;
    if r.is_nan() || g.is_nan() || b.is_nan() {
        return None;
    }
    Some([r, g, b])
}
