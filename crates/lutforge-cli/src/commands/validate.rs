//! `lutforge validate` - check an existing LUT file

use lutforge_core::lut::{declared_size, validate_lut};
use std::path::Path;

/// Validate a LUT file, taking the grid size from `--size` or from the
/// document's own headers.
pub fn run_validate(input: &Path, size: Option<usize>) -> Result<(), String> {
    let content = std::fs::read_to_string(input)
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    let size = match size.or_else(|| declared_size(&content)) {
        Some(size) => size,
        None => {
            return Err(format!(
                "{} declares no grid size; pass --size",
                input.display()
            ))
        }
    };

    let report = validate_lut(&content, size);
    if report.is_valid {
        println!("{}: valid (size {})", input.display(), size);
        Ok(())
    } else {
        for error in &report.errors {
            eprintln!("  {}", error);
        }
        Err(format!(
            "{} failed validation with {} error(s)",
            input.display(),
            report.errors.len()
        ))
    }
}
