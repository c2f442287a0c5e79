// src/solver.rs

//! Position solving: logical anchor to absolute overlay corner.
//!
//! The solver turns an anchor (a content position inside a scrollable
//! viewport) into the absolute screen pixel where the overlay's top-left
//! corner goes. Horizontally the overlay is clamped into the display;
//! vertically it goes just below the anchor's glyph, flipping to just
//! above when it would run off the bottom. The single-axis flip keeps the
//! overlay horizontally aligned with the anchor while guaranteeing full
//! vertical visibility whenever the overlay fits the display at all.

use anyhow::Result;
use log::debug;

use crate::config::Config;
use crate::geometry::{clamp_px, FrameOrigin, OverlaySize, ScreenPoint};
use crate::host::{Anchor, FrameInspector, FrameView};
use crate::origin::OriginProvider;


/// Computes the absolute top-left corner for an overlay anchored at
/// `anchor`.
///
/// `size` enables size-aware clamping; without it only the horizontal
/// clamp and the coarse vertical heuristic apply. `origin` skips the
/// frame-origin query (and seeds the provider's memo); `dx` shifts the
/// anchor point horizontally before clamping.
///
/// An anchor scrolled out of view degrades to the viewport's top-left
/// corner rather than failing; the only error out of here is a failed
/// origin lookup.
pub fn solve<H>(
    host: &mut H,
    origins: &mut OriginProvider,
    config: &Config,
    anchor: &Anchor,
    size: Option<OverlaySize>,
    origin: Option<FrameOrigin>,
    dx: Option<i32>,
) -> Result<ScreenPoint>
where
    H: FrameInspector + FrameView + ?Sized,
{
    let origin = match origin {
        Some(o) => {
            origins.store(anchor.frame, o);
            o
        }
        None => origins.get(host, anchor.frame)?,
    };

    let snapshot = host.snapshot(anchor.frame);

    let (rel_x, rel_y, glyph_h) = match host.anchor_in_viewport(anchor) {
        Some(px) => (px.x, px.y, px.glyph_height_px),
        None => {
            debug!(
                "anchor {}:{} not visible in frame {}; using viewport corner",
                anchor.line, anchor.column, anchor.frame.0
            );
            (0, 0, snapshot.cell_height_px)
        }
    };

    // With a header region above the viewport the reported glyph height is
    // unreliable on some rendering surfaces; fall back to the frame's
    // nominal cell height (configurable).
    let char_h = if snapshot.has_header_region && config.header_breaks_glyph_metrics {
        snapshot.cell_height_px
    } else {
        glyph_h
    } as i32;

    let ax = origin.x + snapshot.viewport_left + rel_x + dx.unwrap_or(0);
    let ay = origin.y + snapshot.viewport_top + rel_y;

    let width = size.map_or(0, |s| s.width_px as i32);
    let height = size.map_or(0, |s| s.height_px as i32);
    let display_w = snapshot.display_width_px as i32;
    let display_h = snapshot.display_height_px as i32;

    let x = clamp_px(ax, 0, display_w - width);

    let mut y = ay + char_h;
    if y + height > display_h {
        // Flip above the anchor line instead of below it.
        y = ay - height;
    }
    let y = y.max(0);

    debug!(
        "solved anchor {}:{} on frame {} -> ({}, {})",
        anchor.line, anchor.column, anchor.frame.0, x, y
    );
    Ok(ScreenPoint { x, y })
}
