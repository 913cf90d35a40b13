//! Colour representation supporting the host property formats.

use serde::{Deserialize, Serialize};

/// Colour supporting multiple input formats.
///
/// The text form accepts either `"#RRGGBB"` / `"#RRGGBBAA"` hex or the
/// comma-separated `"r, g, b"` form used by wallpaper host properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Hex string or comma-separated channel list.
    Text(String),

    /// RGB array: `[r, g, b]` or `[r, g, b, a]`
    Array(Vec<u8>),

    /// Explicit RGBA
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 255 }
    }

    /// Convert to an RGBA tuple. Malformed text falls back to opaque black.
    pub fn to_rgba(&self) -> (u8, u8, u8, u8) {
        match self {
            Color::Text(s) => parse_text_color(s),
            Color::Array(arr) => {
                let r = arr.first().copied().unwrap_or(0);
                let g = arr.get(1).copied().unwrap_or(0);
                let b = arr.get(2).copied().unwrap_or(0);
                let a = arr.get(3).copied().unwrap_or(255);
                (r, g, b, a)
            }
            Color::Rgba { r, g, b, a } => (*r, *g, *b, *a),
        }
    }

    /// Whether the text form parses cleanly; array/rgba forms always do.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Color::Text(s) => try_parse_text_color(s).is_some(),
            Color::Array(arr) => arr.len() == 3 || arr.len() == 4,
            Color::Rgba { .. } => true,
        }
    }
}

fn parse_text_color(s: &str) -> (u8, u8, u8, u8) {
    try_parse_text_color(s).unwrap_or((0, 0, 0, 255))
}

fn try_parse_text_color(s: &str) -> Option<(u8, u8, u8, u8)> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    parse_channel_list(s)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8, u8)> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b, 255))
        }
        8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some((r, g, b, a))
        }
        _ => None,
    }
}

fn parse_channel_list(s: &str) -> Option<(u8, u8, u8, u8)> {
    let channels: Vec<u8> = s
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .ok()?;
    match channels.as_slice() {
        [r, g, b] => Some((*r, *g, *b, 255)),
        [r, g, b, a] => Some((*r, *g, *b, *a)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_string_form() {
        let c = Color::Text("255, 155, 249".to_string());
        assert_eq!(c.to_rgba(), (255, 155, 249, 255));
        assert!(c.is_well_formed());
    }

    #[test]
    fn test_hex_form() {
        let c = Color::Text("#14000f".to_string());
        assert_eq!(c.to_rgba(), (20, 0, 15, 255));

        let c = Color::Text("#14000f80".to_string());
        assert_eq!(c.to_rgba(), (20, 0, 15, 128));
    }

    #[test]
    fn test_array_form() {
        let c = Color::Array(vec![1, 2, 3]);
        assert_eq!(c.to_rgba(), (1, 2, 3, 255));

        let c = Color::Array(vec![1, 2, 3, 4]);
        assert_eq!(c.to_rgba(), (1, 2, 3, 4));
    }

    #[test]
    fn test_malformed_text_falls_back() {
        let c = Color::Text("not a colour".to_string());
        assert_eq!(c.to_rgba(), (0, 0, 0, 255));
        assert!(!c.is_well_formed());
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = r#""20, 0, 15""#;
        let c: Color = serde_json::from_str(json).unwrap();
        assert_eq!(c.to_rgba(), (20, 0, 15, 255));

        let json = r#"[255, 155, 249]"#;
        let c: Color = serde_json::from_str(json).unwrap();
        assert_eq!(c.to_rgba(), (255, 155, 249, 255));
    }
}
