// src/host/mock.rs

//! A scripted host for tests: canned snapshots, anchors, pointer state,
//! and inspector reports, plus a log of every command the engine issued.

use std::collections::HashMap;

use anyhow::{bail, Result};

use super::{
    Anchor, AnchorPixel, FrameId, FrameInspector, FrameSnapshot, FrameView, OverlayParams,
    OverlayRenderer, PointerDevice, PointerPos, TimerHandle, TimerHost,
};

/// Everything the engine asked the host to do, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostAction {
    ShowOverlay {
        text: String,
        frame: FrameId,
        params: OverlayParams,
        timeout_s: Option<f64>,
    },
    MoveOverlay {
        left: i32,
        top: i32,
    },
    HideOverlay,
    WarpPointer {
        x: i32,
        y: i32,
    },
    ScheduleDismiss {
        handle: TimerHandle,
        delay_s: f64,
    },
    Cancel {
        handle: TimerHandle,
    },
}

pub struct MockHost {
    /// Inspector report returned for every frame; `None` simulates an
    /// inspector failure.
    pub report: Option<String>,
    pub snapshot: FrameSnapshot,
    /// Anchors the view can currently see. Missing entries are treated as
    /// scrolled out of view.
    pub visible_anchors: HashMap<(FrameId, usize, usize), AnchorPixel>,
    pub pointer: Option<PointerPos>,
    pub actions: Vec<HostAction>,
    next_handle: u64,
    pub inspector_calls: usize,
}

impl MockHost {
    pub fn new() -> Self {
        MockHost {
            report: Some("Frame report\nAbsolute position: X: 0 Y: 0\n".to_string()),
            snapshot: FrameSnapshot {
                viewport_left: 0,
                viewport_top: 0,
                cell_width_px: 8,
                cell_height_px: 16,
                display_width_px: 800,
                display_height_px: 600,
                has_header_region: false,
            },
            visible_anchors: HashMap::new(),
            pointer: None,
            actions: Vec::new(),
            next_handle: 1,
            inspector_calls: 0,
        }
    }

    /// Makes the inspector report an origin of `(x, y)`.
    pub fn with_origin(mut self, x: i32, y: i32) -> Self {
        self.report = Some(format!("Frame report\nAbsolute position: X: {} Y: {}\n", x, y));
        self
    }

    pub fn add_anchor(&mut self, anchor: Anchor, px: AnchorPixel) {
        self.visible_anchors
            .insert((anchor.frame, anchor.line, anchor.column), px);
    }

    /// Handles scheduled and not yet cancelled, in schedule order.
    pub fn pending_dismissals(&self) -> Vec<TimerHandle> {
        let mut pending = Vec::new();
        for action in &self.actions {
            match action {
                HostAction::ScheduleDismiss { handle, .. } => pending.push(*handle),
                HostAction::Cancel { handle } => pending.retain(|h| h != handle),
                _ => {}
            }
        }
        pending
    }
}

impl FrameInspector for MockHost {
    fn origin_report(&mut self, _frame: FrameId) -> Result<String> {
        self.inspector_calls += 1;
        match &self.report {
            Some(r) => Ok(r.clone()),
            None => bail!("mock frame inspector unavailable"),
        }
    }
}

impl FrameView for MockHost {
    fn snapshot(&self, _frame: FrameId) -> FrameSnapshot {
        self.snapshot
    }

    fn anchor_in_viewport(&self, anchor: &Anchor) -> Option<AnchorPixel> {
        self.visible_anchors
            .get(&(anchor.frame, anchor.line, anchor.column))
            .copied()
    }
}

impl PointerDevice for MockHost {
    fn pointer(&self) -> Option<PointerPos> {
        self.pointer
    }

    fn warp_pointer(&mut self, x: i32, y: i32) {
        self.actions.push(HostAction::WarpPointer { x, y });
        if let Some(p) = self.pointer.as_mut() {
            p.x = x;
            p.y = y;
        }
    }
}

impl OverlayRenderer for MockHost {
    fn show_overlay(
        &mut self,
        text: &str,
        frame: FrameId,
        params: &OverlayParams,
        timeout_s: Option<f64>,
    ) -> Result<()> {
        self.actions.push(HostAction::ShowOverlay {
            text: text.to_string(),
            frame,
            params: *params,
            timeout_s,
        });
        Ok(())
    }

    fn move_overlay(&mut self, left: i32, top: i32) -> Result<()> {
        self.actions.push(HostAction::MoveOverlay { left, top });
        Ok(())
    }

    fn hide_overlay(&mut self) {
        self.actions.push(HostAction::HideOverlay);
    }
}

impl TimerHost for MockHost {
    fn schedule_dismiss(&mut self, delay_s: f64) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.actions.push(HostAction::ScheduleDismiss { handle, delay_s });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.actions.push(HostAction::Cancel { handle });
    }
}
