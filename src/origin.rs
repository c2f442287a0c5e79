// src/origin.rs

//! Frame origin lookup and caching.
//!
//! A frame's absolute screen offset comes from an external inspector (an
//! xwininfo-style subprocess behind `host::FrameInspector`) whose textual
//! report we parse. The query is the engine's only expensive collaborator
//! call, so results are memoized per frame in an `OriginProvider` value
//! that callers thread through. There is no process-wide cache.

use std::collections::HashMap;

use anyhow::{Context, Result};
use log::{debug, trace};

use crate::geometry::{FrameId, FrameOrigin};
use crate::host::FrameInspector;

/// The report line carrying the coordinates must start with this marker.
pub const ORIGIN_MARKER: &str = "Absolute position:";

/// Extracts the integer following `label` in `line`.
fn field_after(line: &str, label: &str) -> Option<i32> {
    let rest = &line[line.find(label)? + label.len()..];
    let rest = rest.trim_start();
    let end = rest
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+')))
        .count();
    rest[..end].parse().ok()
}

/// Parses a frame inspector report: the first line starting with
/// `ORIGIN_MARKER` must carry `X:` and `Y:` integer fields. A report
/// without them is a hard error; an origin of `(0, 0)` would silently
/// misplace every overlay on that frame.
pub fn parse_origin_report(report: &str) -> Result<FrameOrigin> {
    let line = report
        .lines()
        .map(str::trim_start)
        .find(|l| l.starts_with(ORIGIN_MARKER))
        .with_context(|| format!("frame inspector report has no {:?} line", ORIGIN_MARKER))?;
    let x = field_after(line, "X:")
        .with_context(|| format!("no X: field in report line {:?}", line))?;
    let y = field_after(line, "Y:")
        .with_context(|| format!("no Y: field in report line {:?}", line))?;
    Ok(FrameOrigin { x, y })
}

/// Per-frame origin memo, threaded through calls instead of living in
/// global state. A session owns one; standalone solver users can make
/// their own.
#[derive(Debug, Default)]
pub struct OriginProvider {
    cache: HashMap<FrameId, FrameOrigin>,
}

impl OriginProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// The origin for `frame`, querying the inspector only on a cache miss.
    pub fn get<I: FrameInspector + ?Sized>(
        &mut self,
        inspector: &mut I,
        frame: FrameId,
    ) -> Result<FrameOrigin> {
        if let Some(origin) = self.cache.get(&frame) {
            trace!("origin cache hit for frame {}: {:?}", frame.0, origin);
            return Ok(*origin);
        }
        self.refresh(inspector, frame)
    }

    /// Re-queries the inspector unconditionally and updates the memo.
    pub fn refresh<I: FrameInspector + ?Sized>(
        &mut self,
        inspector: &mut I,
        frame: FrameId,
    ) -> Result<FrameOrigin> {
        let report = inspector
            .origin_report(frame)
            .with_context(|| format!("origin lookup failed for frame {}", frame.0))?;
        let origin = parse_origin_report(&report)
            .with_context(|| format!("origin lookup failed for frame {}", frame.0))?;
        debug!("frame {} origin is ({}, {})", frame.0, origin.x, origin.y);
        self.cache.insert(frame, origin);
        Ok(origin)
    }

    /// Records an origin the caller obtained out of band (e.g. passed
    /// explicitly to `solve`), so later calls skip the query too.
    pub fn store(&mut self, frame: FrameId, origin: FrameOrigin) {
        self.cache.insert(frame, origin);
    }

    /// Drops the memo for `frame`; the next `get` re-queries.
    pub fn invalidate(&mut self, frame: FrameId) {
        self.cache.remove(&frame);
    }
}
