//! Argument parsing helpers

/// Parse a `#RRGGBB` (or `RRGGBB`) hex color into an RGB triple.
pub fn parse_hex_color(s: &str) -> Result<[u8; 3], String> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!(
            "Invalid color '{}': expected #RRGGBB hex notation",
            s
        ));
    }

    let r = u8::from_str_radix(&hex[0..2], 16)
        .map_err(|e| format!("Invalid red component in '{}': {}", s, e))?;
    let g = u8::from_str_radix(&hex[2..4], 16)
        .map_err(|e| format!("Invalid green component in '{}': {}", s, e))?;
    let b = u8::from_str_radix(&hex[4..6], 16)
        .map_err(|e| format!("Invalid blue component in '{}': {}", s, e))?;

    Ok([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff8000").unwrap(), [255, 128, 0]);
        assert_eq!(parse_hex_color("FF8000").unwrap(), [255, 128, 0]);
        assert_eq!(parse_hex_color("#000000").unwrap(), [0, 0, 0]);
    }

    #[test]
    fn test_parse_hex_color_rejects_malformed() {
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("not-a-color").is_err());
        assert!(parse_hex_color("#ff80zz").is_err());
        assert!(parse_hex_color("").is_err());
    }
}
