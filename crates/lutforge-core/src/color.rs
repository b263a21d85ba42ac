//! RGB color helpers shared across the analysis and synthesis stages

/// Rec. 601 luma of an RGB triple (same scale as the inputs)
#[inline]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    0.299 * r + 0.587 * g + 0.114 * b
}

/// Per-pixel saturation: (max - min) / max, defined as 0 for black
#[inline]
pub fn pixel_saturation(r: u8, g: u8, b: u8) -> f32 {
    let max = r.max(g).max(b);
    if max == 0 {
        return 0.0;
    }
    let min = r.min(g).min(b);
    (max - min) as f32 / max as f32
}

/// Euclidean distance between two RGB triples
#[inline]
pub fn distance(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Format an RGB triple as a `#rrggbb` hex string
pub fn hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Heuristic human-readable name for an RGB triple.
///
/// Coarse first-match rules; the names feed the analysis report, not
/// any numeric decision.
pub fn color_name(r: u8, g: u8, b: u8) -> &'static str {
    if r > 200 && g > 200 && b > 200 {
        return "Blanco";
    }
    if r < 50 && g < 50 && b < 50 {
        return "Negro";
    }
    if r > g && r > b {
        return "Rojo";
    }
    if g > r && g > b {
        return "Verde";
    }
    if b > r && b > g {
        return "Azul";
    }
    if r > 200 && g > 150 && b < 100 {
        return "Naranja";
    }
    if r > 150 && g > 150 && b < 100 {
        return "Amarillo";
    }
    if r > 100 && g < 100 && b > 150 {
        return "Púrpura";
    }
    if r < 100 && g > 150 && b > 150 {
        return "Cian";
    }
    if r > 150 && g < 100 && b < 100 {
        return "Rosa";
    }
    "Gris"
}
