// src/session.rs

//! Tooltip session orchestration.
//!
//! A `TooltipSession` owns the per-session state the components need (the
//! origin memo, the pending-dismissal handle, the configuration) and
//! runs the show pipeline: solve the position, resolve the style, nudge
//! the pointer out of the way, issue the render command, and manage the
//! auto-hide timer. All rendering and timing is delegated to the host.

use anyhow::Result;
use log::debug;

use crate::config::Config;
use crate::geometry::{FrameOrigin, OverlaySize, ScreenPoint, ScreenRect};
use crate::host::{Anchor, Host, OverlayParams};
use crate::metrics::{measure_text, to_pixels};
use crate::origin::OriginProvider;
use crate::pointer::avoid_pointer;
use crate::solver::solve;
use crate::style::{resolve_style, TooltipStyle};
use crate::timer::AutoHideTimer;

#[cfg(test)]
mod tests;

/// Optional inputs to `show`/`show_auto_sized`. Everything unset falls
/// back to the session's configuration.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Per-call style override (top resolution layer).
    pub style: Option<TooltipStyle>,
    /// Auto-hide timeout in seconds; `None` uses the configured default,
    /// non-positive disables auto-hide and cancels any pending dismissal.
    pub timeout_s: Option<f64>,
    /// Overlay pixel size; enables size-aware clamping and pointer
    /// avoidance.
    pub size: Option<OverlaySize>,
    /// Known frame origin; skips the inspector query.
    pub origin: Option<FrameOrigin>,
    /// Horizontal pixel offset applied to the anchor point.
    pub dx: Option<i32>,
}

/// Live tooltip orchestration state. One session manages one overlay at a
/// time; a later `show` replaces the earlier one (last render wins, and
/// its dismissal is the one pending).
#[derive(Debug)]
pub struct TooltipSession {
    config: Config,
    origins: OriginProvider,
    timer: AutoHideTimer,
}

impl TooltipSession {
    pub fn new(config: Config) -> Self {
        TooltipSession {
            config,
            origins: OriginProvider::new(),
            timer: AutoHideTimer::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shows `text` anchored at `anchor` and returns the overlay's
    /// position relative to the frame origin, so callers can keep
    /// reasoning in frame-local coordinates without re-querying.
    ///
    /// The only error is a failed frame-origin lookup; style and pointer
    /// anomalies degrade locally.
    pub fn show<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        text: &str,
        anchor: &Anchor,
        opts: &ShowOptions,
    ) -> Result<ScreenPoint> {
        let pos = solve(
            host,
            &mut self.origins,
            &self.config,
            anchor,
            opts.size,
            opts.origin,
            opts.dx,
        )?;

        let style = resolve_style(
            opts.style.as_ref(),
            self.config.theme.as_deref(),
            &self.config.style,
        );

        // Move the pointer out of the way before the overlay covers it.
        if let Some(size) = opts.size {
            avoid_pointer(host, ScreenRect::from_overlay(pos, size), anchor.frame);
        }

        let params = OverlayParams {
            left: pos.x,
            top: pos.y,
            border_width: style.border_width,
            internal_border_width: style.internal_border_width,
            foreground: style.foreground,
            background: style.background,
        };
        let timeout_s = opts.timeout_s.unwrap_or(self.config.default_timeout_s);

        if timeout_s > 0.0 {
            host.show_overlay(text, anchor.frame, &params, Some(timeout_s))?;
            self.timer.schedule(host, timeout_s);
        } else {
            host.show_overlay(text, anchor.frame, &params, None)?;
            self.timer.cancel_pending(host);
        }

        // The solve above memoized the origin; this cannot re-query.
        let origin = self.origins.get(host, anchor.frame)?;
        Ok(ScreenPoint {
            x: pos.x - origin.x,
            y: pos.y - origin.y,
        })
    }

    /// `show`, but sized from the text itself using the frame's current
    /// cell metrics and the effective border widths.
    pub fn show_auto_sized<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        text: &str,
        anchor: &Anchor,
        opts: &ShowOptions,
    ) -> Result<ScreenPoint> {
        let snapshot = host.snapshot(anchor.frame);
        let widths = opts.style.as_ref().unwrap_or(&self.config.style);
        let size = to_pixels(
            measure_text(text),
            snapshot.cell_width_px,
            snapshot.cell_height_px,
            self.config.line_spacing_px,
            widths.border_width,
            widths.internal_border_width,
        );
        debug!("auto-sized overlay to {}x{}", size.width_px, size.height_px);
        let opts = ShowOptions {
            size: Some(size),
            ..opts.clone()
        };
        self.show(host, text, anchor, &opts)
    }

    /// Recomputes the position for a live overlay and moves it, leaving
    /// style and timers untouched.
    pub fn reposition<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        anchor: &Anchor,
        size: Option<OverlaySize>,
        origin: Option<FrameOrigin>,
        dx: Option<i32>,
    ) -> Result<ScreenPoint> {
        let pos = solve(host, &mut self.origins, &self.config, anchor, size, origin, dx)?;
        if let Some(size) = size {
            avoid_pointer(host, ScreenRect::from_overlay(pos, size), anchor.frame);
        }
        host.move_overlay(pos.x, pos.y)?;
        Ok(pos)
    }

    /// Unconditionally dismisses the overlay and cancels any pending
    /// auto-hide, so a stale timer can never fire against a later overlay.
    pub fn hide<H: Host + ?Sized>(&mut self, host: &mut H) {
        host.hide_overlay();
        self.timer.cancel_pending(host);
    }

    /// The dismissal action itself: hosts invoke this from the scheduled
    /// callback when the auto-hide delay elapses.
    pub fn dismiss<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.timer.mark_fired();
        host.hide_overlay();
    }

    /// Drops the memoized origin for `frame` (e.g. after the host moved
    /// the frame's window).
    pub fn invalidate_origin(&mut self, frame: crate::geometry::FrameId) {
        self.origins.invalidate(frame);
    }
}
