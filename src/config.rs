// src/config.rs

//! Engine configuration.
//!
//! A small set of knobs that hosts may load from a configuration file
//! (TOML, JSON, ...) or fill in programmatically. Every field has a
//! documented default so a zero-config `Config::default()` behaves
//! sensibly.

use serde::{Deserialize, Serialize};

use crate::style::TooltipStyle;

/// Complete configuration for the tooltip engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds before a shown tooltip auto-dismisses when the caller does
    /// not pass an explicit timeout. Non-positive disables auto-hide.
    pub default_timeout_s: f64,
    /// Extra vertical pixels between text rows when sizing an overlay.
    pub line_spacing_px: u16,
    /// When the anchor's frame has a header region above its viewport,
    /// treat the host-reported glyph height as unreliable and use the
    /// frame's nominal cell height instead. A workaround for rendering
    /// surfaces whose per-glyph metrics are skewed by the header; hosts
    /// with trustworthy metrics can turn it off.
    pub header_breaks_glyph_metrics: bool,
    /// Baseline style applied beneath any per-call override and beneath
    /// the named theme, if one is configured.
    pub style: TooltipStyle,
    /// Named theme consulted between the per-call override and `style`.
    /// `None` skips the theme layer.
    pub theme: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_timeout_s: 5.0,
            line_spacing_px: 0,
            header_breaks_glyph_metrics: true,
            style: TooltipStyle::default(),
            theme: None,
        }
    }
}
