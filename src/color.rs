// src/color.rs

//! Color model for tooltip styling, plus parsing of textual color values.
//!
//! Style inputs carry colors as strings (a hex triplet or a named color);
//! `Color::parse` is the single validation point: anything it rejects is
//! dropped by the style resolver rather than forwarded to the renderer.

use log::warn;
use serde::{Deserialize, Serialize};

/// The eight normal and eight bright ANSI-style named colors recognized in
/// textual style values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// Common sRGB values for the named colors, as most character-cell
    /// renderers resolve them.
    pub fn to_rgb(self) -> Color {
        match self {
            NamedColor::Black => Color::Rgb(0, 0, 0),
            NamedColor::Red => Color::Rgb(205, 0, 0),
            NamedColor::Green => Color::Rgb(0, 205, 0),
            NamedColor::Yellow => Color::Rgb(205, 205, 0),
            NamedColor::Blue => Color::Rgb(0, 0, 238),
            NamedColor::Magenta => Color::Rgb(205, 0, 205),
            NamedColor::Cyan => Color::Rgb(0, 205, 205),
            NamedColor::White => Color::Rgb(229, 229, 229),
            NamedColor::BrightBlack => Color::Rgb(127, 127, 127),
            NamedColor::BrightRed => Color::Rgb(255, 0, 0),
            NamedColor::BrightGreen => Color::Rgb(0, 255, 0),
            NamedColor::BrightYellow => Color::Rgb(255, 255, 0),
            NamedColor::BrightBlue => Color::Rgb(92, 92, 255),
            NamedColor::BrightMagenta => Color::Rgb(255, 0, 255),
            NamedColor::BrightCyan => Color::Rgb(0, 255, 255),
            NamedColor::BrightWhite => Color::Rgb(255, 255, 255),
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let named = match name {
            "black" => NamedColor::Black,
            "red" => NamedColor::Red,
            "green" => NamedColor::Green,
            "yellow" => NamedColor::Yellow,
            "blue" => NamedColor::Blue,
            "magenta" => NamedColor::Magenta,
            "cyan" => NamedColor::Cyan,
            "white" => NamedColor::White,
            "bright black" | "grey" | "gray" => NamedColor::BrightBlack,
            "bright red" => NamedColor::BrightRed,
            "bright green" => NamedColor::BrightGreen,
            "bright yellow" => NamedColor::BrightYellow,
            "bright blue" => NamedColor::BrightBlue,
            "bright magenta" => NamedColor::BrightMagenta,
            "bright cyan" => NamedColor::BrightCyan,
            "bright white" => NamedColor::BrightWhite,
            _ => return None,
        };
        Some(named)
    }
}

/// A color value passed down to the overlay renderer. "Use the
/// renderer's own default" is expressed as `Option<Color>::None` at the
/// call sites, not as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parses a textual color value: `#rgb`, `#rrggbb`, or a recognized
    /// color name (case-insensitive). Returns `None` for anything else;
    /// callers decide whether that is a warning or an error.
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        NamedColor::from_name(&s.to_ascii_lowercase()).map(Color::Named)
    }

    fn parse_hex(hex: &str) -> Option<Color> {
        match hex.len() {
            3 => {
                let mut c = [0u8; 3];
                for (i, ch) in hex.chars().enumerate() {
                    let v = ch.to_digit(16)? as u8;
                    c[i] = v * 16 + v; // expand 4-bit channel to 8-bit
                }
                Some(Color::Rgb(c[0], c[1], c[2]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// `Color::parse` plus a warning on rejection. Used by the style
    /// resolver, where an invalid override degrades to the next layer.
    pub fn parse_or_warn(s: &str, what: &str) -> Option<Color> {
        let parsed = Color::parse(s);
        if parsed.is_none() {
            warn!("ignoring invalid {} color value: {:?}", what, s);
        }
        parsed
    }
}
