// src/geometry.rs

//! Pixel-space coordinate types shared by the solver, pointer avoidance,
//! and the session: points, overlay sizes, rectangles, and frame origins.
//!
//! All coordinates are absolute screen pixels unless a field name says
//! otherwise. Signed `i32` is used throughout because intermediate anchor
//! math (origin + viewport offset + relative position - overlay height)
//! can legitimately go negative before clamping.

use serde::{Deserialize, Serialize};

/// An opaque handle identifying a frame (a top-level window/display
/// surface hosting one or more viewports). The host assigns these; the
/// engine only compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub u64);

/// Absolute screen offset of a frame's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameOrigin {
    pub x: i32,
    pub y: i32,
}

/// A point in absolute screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

/// Pixel dimensions of an overlay. When the caller does not know the
/// overlay's size ahead of rendering, the solver works with a bare point
/// instead (see `Option<OverlaySize>` parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySize {
    pub width_px: u32,
    pub height_px: u32,
}

/// An axis-aligned rectangle in absolute screen pixels. `right` and
/// `bottom` are inclusive edge coordinates, matching how the pointer
/// avoidance routine reasons about "just outside" positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ScreenRect {
    /// Builds the rectangle covered by an overlay of `size` whose top-left
    /// corner sits at `pos`.
    pub fn from_overlay(pos: ScreenPoint, size: OverlaySize) -> Self {
        ScreenRect {
            left: pos.x,
            top: pos.y,
            right: pos.x + size.width_px as i32,
            bottom: pos.y + size.height_px as i32,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Clamps `v` into `[lo, hi]`. `hi` may be below `lo` when an overlay is
/// wider than the display; the lower bound wins so the overlay's left
/// edge stays on-screen.
pub fn clamp_px(v: i32, lo: i32, hi: i32) -> i32 {
    v.min(hi).max(lo)
}
