//! LUT text serialization for the `.cube` and `.3dl` interchange formats

use crate::models::LutConfig;

/// Maximum 12-bit mesh value used by the `.3dl` format
pub const MESH_MAX: f32 = 4095.0;

/// Supported LUT interchange formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutFormat {
    Cube,
    ThreeDl,
}

impl LutFormat {
    /// File extension (without dot) for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            LutFormat::Cube => "cube",
            LutFormat::ThreeDl => "3dl",
        }
    }

    /// Parse a format name as given on a command line or in a config.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "cube" => Ok(LutFormat::Cube),
            "3dl" | "threedl" => Ok(LutFormat::ThreeDl),
            other => Err(format!(
                "Unsupported LUT format: {} (expected \"cube\" or \"3dl\")",
                other
            )),
        }
    }
}

/// Serialize a grid as `.cube` text.
///
/// Header is `TITLE` plus `LUT_3D_SIZE`; data lines are three floats
/// at 6 decimal places, clamped to [0, 1], one line per grid cell in
/// the grid's own order (r fastest, b slowest).
pub fn write_cube(grid: &[[f32; 3]], config: &LutConfig) -> String {
    let mut out = String::with_capacity(grid.len() * 27 + 64);
    out.push_str(&format!("TITLE \"{}\"\n\n", config.name));
    out.push_str(&format!("LUT_3D_SIZE {}\n\n", config.size));

    for cell in grid {
        out.push_str(&format!(
            "{:.6} {:.6} {:.6}\n",
            cell[0].clamp(0.0, 1.0),
            cell[1].clamp(0.0, 1.0),
            cell[2].clamp(0.0, 1.0)
        ));
    }

    out
}

/// Serialize a grid as `.3dl` text.
///
/// Header is `3DMESH`, a `Mesh 0 N` line, and one line of N ascending
/// 12-bit breakpoints; data lines are three integers in [0, 4095].
pub fn write_3dl(grid: &[[f32; 3]], config: &LutConfig) -> String {
    let mut out = String::with_capacity(grid.len() * 15 + 64);
    out.push_str("3DMESH\n");
    out.push_str(&format!("Mesh 0 {}\n", config.size));

    let denom = (config.size - 1) as f32;
    let breakpoints: Vec<String> = (0..config.size)
        .map(|i| ((i as f32 / denom) * MESH_MAX).round().to_string())
        .collect();
    out.push_str(&breakpoints.join(" "));
    out.push('\n');

    for cell in grid {
        let r = (cell[0].clamp(0.0, 1.0) * MESH_MAX).round() as u16;
        let g = (cell[1].clamp(0.0, 1.0) * MESH_MAX).round() as u16;
        let b = (cell[2].clamp(0.0, 1.0) * MESH_MAX).round() as u16;
        out.push_str(&format!("{} {} {}\n", r, g, b));
    }

    out
}
