// src/style.rs

//! Tooltip style records and layered default resolution.
//!
//! Colors resolve through three layers: explicit per-call override, then a
//! named theme, then the engine's baseline style. Each layer may decline
//! (leave a field unset), and invalid textual colors are dropped with a
//! warning so they fall through to the next layer rather than aborting the
//! show call.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Style input as callers and configuration files supply it. Colors are
/// textual and validated at resolution time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    /// Text color, e.g. `"black"` or `"#1a2b3c"`. `None` defers to the
    /// next layer.
    pub foreground: Option<String>,
    /// Overlay background color. `None` defers to the next layer.
    pub background: Option<String>,
    /// Outer border thickness in pixels.
    pub border_width: u16,
    /// Padding between the border and the text, in pixels.
    pub internal_border_width: u16,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        TooltipStyle {
            foreground: None,
            background: None,
            border_width: 1,
            internal_border_width: 2,
        }
    }
}

/// A fully resolved style, ready to hand to the renderer. `None` colors
/// mean "renderer's own default".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub border_width: u16,
    pub internal_border_width: u16,
}

/// A named color pair usable as the middle resolution layer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub foreground: Color,
    pub background: Color,
}

/// Built-in themes. The classic pale-yellow tooltip look is the `"light"`
/// entry; hosts wanting different palettes resolve styles themselves and
/// pass explicit overrides.
static THEMES: Lazy<HashMap<&'static str, Theme>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "light",
        Theme {
            foreground: Color::Rgb(0, 0, 0),
            background: Color::Rgb(255, 255, 224),
        },
    );
    m.insert(
        "dark",
        Theme {
            foreground: Color::Rgb(229, 229, 229),
            background: Color::Rgb(40, 40, 40),
        },
    );
    m
});

/// Looks up a built-in theme by name.
pub fn theme(name: &str) -> Option<Theme> {
    THEMES.get(name).copied()
}

/// Resolves the effective style: `override_style` wins, then the named
/// theme, then `base`. Border widths come from the override when one is
/// supplied (they are not optional fields), otherwise from `base`.
pub fn resolve_style(
    override_style: Option<&TooltipStyle>,
    theme_name: Option<&str>,
    base: &TooltipStyle,
) -> ResolvedStyle {
    let theme = theme_name.and_then(theme);

    let layered_color = |pick: fn(&TooltipStyle) -> Option<&String>,
                         themed: Option<Color>,
                         what: &str| {
        override_style
            .and_then(pick)
            .and_then(|s| Color::parse_or_warn(s, what))
            .or(themed)
            .or_else(|| pick(base).and_then(|s| Color::parse_or_warn(s, what)))
    };

    let widths = override_style.unwrap_or(base);
    ResolvedStyle {
        foreground: layered_color(
            |s| s.foreground.as_ref(),
            theme.map(|t| t.foreground),
            "foreground",
        ),
        background: layered_color(
            |s| s.background.as_ref(),
            theme.map(|t| t.background),
            "background",
        ),
        border_width: widths.border_width,
        internal_border_width: widths.internal_border_width,
    }
}
