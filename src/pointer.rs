// src/pointer.rs

//! Pointer avoidance: keep the system pointer from sitting on top of a
//! freshly placed overlay.
//!
//! The pointer is moved to just outside the overlay rectangle's nearest
//! edge, skipping edges whose "just outside" position would leave the
//! display. Runs before the render command so the overlay never paints
//! over the pointer even for a single frame.

use log::{debug, trace};

use crate::geometry::{FrameId, ScreenRect};
use crate::host::{FrameView, PointerDevice};

/// Distance assigned to an edge whose escape position is off-display,
/// large enough that a viable edge always wins the minimum.
const NOT_VIABLE: i32 = 100_000;

/// Relocates the pointer out of `rect` if it currently overlaps (or nearly
/// overlaps) it. No-op when the pointer is unavailable or over a different
/// frame than the overlay's.
pub fn avoid_pointer<H>(host: &mut H, rect: ScreenRect, frame: FrameId)
where
    H: FrameView + PointerDevice + ?Sized,
{
    let pointer = match host.pointer() {
        Some(p) => p,
        None => {
            trace!("pointer unavailable; skipping avoidance");
            return;
        }
    };
    if pointer.frame != frame {
        trace!("pointer is over frame {}, overlay on {}; skipping avoidance", pointer.frame.0, frame.0);
        return;
    }

    let snapshot = host.snapshot(frame);
    let display_w = snapshot.display_width_px as i32;
    let display_h = snapshot.display_height_px as i32;

    // Escape positions just outside each edge, and the displacement the
    // pointer would travel to reach them. Positive displacement means the
    // pointer is on the inner side of that edge.
    let left_x = rect.left - 2;
    let right_x = rect.right + 1;
    let top_y = rect.top - 2;
    let bottom_y = rect.bottom + 1;

    let candidates = [
        (if left_x < 0 { NOT_VIABLE } else { pointer.x - left_x }, left_x, pointer.y),
        (if right_x >= display_w { NOT_VIABLE } else { right_x - pointer.x }, right_x, pointer.y),
        (if top_y < 0 { NOT_VIABLE } else { pointer.y - top_y }, pointer.x, top_y),
        (if bottom_y >= display_h { NOT_VIABLE } else { bottom_y - pointer.y }, pointer.x, bottom_y),
    ];

    // Ties break in array order: left, right, top, bottom.
    let mut best = candidates[0];
    for c in &candidates[1..] {
        if c.0 < best.0 {
            best = *c;
        }
    }
    let (d, x, y) = best;

    // A pointer more than a pixel outside every edge needs no help.
    if d > -2 {
        debug!("relocating pointer from ({}, {}) to ({}, {})", pointer.x, pointer.y, x, y);
        host.warp_pointer(x, y);
    }
}
