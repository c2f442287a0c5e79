// src/host.rs

//! The collaborator seam.
//!
//! Everything the engine cannot (and must not) do itself lives behind the
//! traits here: inspecting a frame's window for its screen offset, reading
//! viewport geometry, moving the pointer, painting the overlay, and
//! scheduling deferred work. The engine computes parameters and issues
//! commands; hosts implement these traits over their real windowing stack,
//! tests implement them with `MockHost`.

use std::process::Command;

use anyhow::{ensure, Context, Result};
use log::debug;

use crate::color::Color;
use crate::geometry::FrameId;

#[cfg(test)]
pub mod mock;

/// Per-frame metrics reported by the host. One snapshot is taken per solve
/// call; the engine never caches these (only the frame origin is cached,
/// since obtaining it is the one expensive query).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    /// Left edge of the viewport, in pixels relative to the frame origin.
    pub viewport_left: i32,
    /// Top edge of the viewport, in pixels relative to the frame origin.
    pub viewport_top: i32,
    /// Nominal character cell width for the frame's font.
    pub cell_width_px: u16,
    /// Nominal character cell height for the frame's font.
    pub cell_height_px: u16,
    /// Total display width in pixels.
    pub display_width_px: u32,
    /// Total display height in pixels.
    pub display_height_px: u32,
    /// Whether a header region sits above the viewport. See
    /// `Config::header_breaks_glyph_metrics`.
    pub has_header_region: bool,
}

/// The logical content position an overlay is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub frame: FrameId,
    /// Content line, 0-based, in the anchor's viewport.
    pub line: usize,
    /// Content column, 0-based.
    pub column: usize,
}

/// An anchor's pixel position relative to its viewport's top-left corner,
/// plus the rendered height of the glyph at that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorPixel {
    pub x: i32,
    pub y: i32,
    pub glyph_height_px: u16,
}

/// Current pointer position and the frame it is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPos {
    pub x: i32,
    pub y: i32,
    pub frame: FrameId,
}

/// Parameters of a render command, mirroring the options the renderer
/// primitive recognizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayParams {
    pub left: i32,
    pub top: i32,
    pub border_width: u16,
    pub internal_border_width: u16,
    /// Explicit text color; `None` leaves the renderer's default in place.
    pub foreground: Option<Color>,
    /// Explicit background color; `None` leaves the renderer's default.
    pub background: Option<Color>,
}

/// Handle for a scheduled dismissal, returned by `TimerHost::schedule_dismiss`
/// and cancelled by value. Handles are host-assigned and never reused while
/// the timer is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Answers frame-origin queries with a textual report (see
/// `origin::parse_origin_report` for the expected shape). This is the one
/// collaborator call that may block on I/O.
pub trait FrameInspector {
    fn origin_report(&mut self, frame: FrameId) -> Result<String>;
}

/// Read-only view of frame and viewport geometry.
pub trait FrameView {
    fn snapshot(&self, frame: FrameId) -> FrameSnapshot;

    /// The anchor's viewport-relative pixel position, or `None` when the
    /// anchor is currently scrolled out of view.
    fn anchor_in_viewport(&self, anchor: &Anchor) -> Option<AnchorPixel>;
}

/// The system pointer.
pub trait PointerDevice {
    /// `None` when no numeric pointer position is available (e.g. no
    /// pointer device, or the host cannot say which frame owns it).
    fn pointer(&self) -> Option<PointerPos>;

    fn warp_pointer(&mut self, x: i32, y: i32);
}

/// The external routine that actually paints (and hides) the floating
/// overlay window.
pub trait OverlayRenderer {
    /// Shows `text` in an overlay over `frame` with the given parameters.
    /// With `timeout_s` set, the renderer self-dismisses after that many
    /// seconds.
    fn show_overlay(
        &mut self,
        text: &str,
        frame: FrameId,
        params: &OverlayParams,
        timeout_s: Option<f64>,
    ) -> Result<()>;

    /// Moves the currently visible overlay without re-rendering its content.
    fn move_overlay(&mut self, left: i32, top: i32) -> Result<()>;

    /// Dismisses any overlay this subsystem has showing. Idempotent.
    fn hide_overlay(&mut self);
}

/// The host's event-loop timer facility, reduced to the one-shot dismissal
/// this engine needs. Cancellation is by handle so unrelated scheduled
/// work is never disturbed.
pub trait TimerHost {
    fn schedule_dismiss(&mut self, delay_s: f64) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

/// Convenience bundle: a type providing every collaborator. Blanket-implemented,
/// so hosts only implement the five component traits.
pub trait Host: FrameInspector + FrameView + PointerDevice + OverlayRenderer + TimerHost {}

impl<T: FrameInspector + FrameView + PointerDevice + OverlayRenderer + TimerHost> Host for T {}

/// A `FrameInspector` that shells out to an xwininfo-style command,
/// appending the frame id as the final argument and returning stdout as
/// the report.
#[derive(Debug, Clone)]
pub struct ShellFrameInspector {
    program: String,
    args: Vec<String>,
}

impl ShellFrameInspector {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        ShellFrameInspector {
            program: program.into(),
            args,
        }
    }
}

impl FrameInspector for ShellFrameInspector {
    fn origin_report(&mut self, frame: FrameId) -> Result<String> {
        debug!("querying frame inspector {:?} for frame {}", self.program, frame.0);
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(frame.0.to_string())
            .output()
            .with_context(|| format!("failed to run frame inspector {:?}", self.program))?;
        ensure!(
            output.status.success(),
            "frame inspector {:?} exited with {}",
            self.program,
            output.status
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
