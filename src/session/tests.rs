// src/session/tests.rs

use test_log::test;

use crate::color::Color;
use crate::config::Config;
use crate::geometry::{FrameId, OverlaySize};
use crate::host::mock::{HostAction, MockHost};
use crate::host::{Anchor, AnchorPixel, PointerPos};
use crate::session::{ShowOptions, TooltipSession};
use crate::style::TooltipStyle;

const FRAME: FrameId = FrameId(1);

fn anchor(line: usize, column: usize) -> Anchor {
    Anchor {
        frame: FRAME,
        line,
        column,
    }
}

fn host_with_anchor(a: Anchor) -> MockHost {
    let mut host = MockHost::new().with_origin(0, 0);
    host.add_anchor(
        a,
        AnchorPixel {
            x: (a.column * 8) as i32,
            y: (a.line * 16) as i32,
            glyph_height_px: 16,
        },
    );
    host
}

fn shown_overlays(host: &MockHost) -> Vec<&HostAction> {
    host.actions
        .iter()
        .filter(|a| matches!(a, HostAction::ShowOverlay { .. }))
        .collect()
}

/// Parameters and timeout of the most recent render command.
fn last_shown(host: &MockHost) -> (crate::host::OverlayParams, Option<f64>) {
    host.actions
        .iter()
        .rev()
        .find_map(|a| match a {
            HostAction::ShowOverlay { params, timeout_s, .. } => Some((*params, *timeout_s)),
            _ => None,
        })
        .expect("no ShowOverlay action recorded")
}

#[test]
fn show_returns_frame_relative_position() {
    let a = anchor(5, 10);
    let mut host = host_with_anchor(a);
    host.report = Some("Absolute position: X: 100 Y: 50\n".to_string());
    let mut session = TooltipSession::new(Config::default());

    let rel = session
        .show(
            &mut host,
            "hello",
            &a,
            &ShowOptions {
                size: Some(OverlaySize {
                    width_px: 100,
                    height_px: 40,
                }),
                ..Default::default()
            },
        )
        .unwrap();

    // Absolute position is (180, 146); relative strips the origin.
    assert_eq!((rel.x, rel.y), (80, 96));
    let (params, timeout_s) = last_shown(&host);
    assert_eq!((params.left, params.top), (180, 146));
    // With no per-call timeout the session falls back to its config.
    assert_eq!(timeout_s, Some(session.config().default_timeout_s));
    assert_eq!(session.config().default_timeout_s, 5.0);
}

#[test]
fn pointer_is_moved_before_the_render_command() {
    let a = anchor(5, 10);
    let mut host = host_with_anchor(a);
    // Pointer inside the soon-to-be overlay rect (80..180, 96..136).
    host.pointer = Some(PointerPos {
        x: 100,
        y: 100,
        frame: FRAME,
    });
    let mut session = TooltipSession::new(Config::default());
    session
        .show(
            &mut host,
            "hi",
            &a,
            &ShowOptions {
                size: Some(OverlaySize {
                    width_px: 100,
                    height_px: 40,
                }),
                ..Default::default()
            },
        )
        .unwrap();

    let warp_idx = host
        .actions
        .iter()
        .position(|a| matches!(a, HostAction::WarpPointer { .. }))
        .expect("pointer should have been warped");
    let show_idx = host
        .actions
        .iter()
        .position(|a| matches!(a, HostAction::ShowOverlay { .. }))
        .unwrap();
    assert!(warp_idx < show_idx, "warp must precede render");
}

#[test]
fn sizeless_show_skips_pointer_avoidance() {
    let a = anchor(5, 10);
    let mut host = host_with_anchor(a);
    host.pointer = Some(PointerPos {
        x: 100,
        y: 100,
        frame: FRAME,
    });
    let mut session = TooltipSession::new(Config::default());
    session.show(&mut host, "hi", &a, &ShowOptions::default()).unwrap();
    assert!(!host
        .actions
        .iter()
        .any(|a| matches!(a, HostAction::WarpPointer { .. })));
}

#[test]
fn zero_timeout_show_cancels_a_prior_pending_dismissal() {
    let a = anchor(5, 10);
    let mut host = host_with_anchor(a);
    let mut session = TooltipSession::new(Config::default());

    session
        .show(
            &mut host,
            "first",
            &a,
            &ShowOptions {
                timeout_s: Some(5.0),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(host.pending_dismissals().len(), 1);

    session
        .show(
            &mut host,
            "second",
            &a,
            &ShowOptions {
                timeout_s: Some(0.0),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(host.pending_dismissals().is_empty());
    match host.actions.last().unwrap() {
        HostAction::Cancel { .. } => {}
        HostAction::ShowOverlay { timeout_s, .. } => assert_eq!(*timeout_s, None),
        other => panic!("unexpected trailing action {:?}", other),
    }
}

#[test]
fn replacing_a_tooltip_replaces_its_dismissal() {
    let a = anchor(5, 10);
    let mut host = host_with_anchor(a);
    let mut session = TooltipSession::new(Config::default());

    session
        .show(&mut host, "first", &a, &ShowOptions { timeout_s: Some(5.0), ..Default::default() })
        .unwrap();
    session
        .show(&mut host, "second", &a, &ShowOptions { timeout_s: Some(7.0), ..Default::default() })
        .unwrap();

    let pending = host.pending_dismissals();
    assert_eq!(pending.len(), 1, "only the newest dismissal may remain");
    assert_eq!(shown_overlays(&host).len(), 2);
}

#[test]
fn hide_dismisses_and_cancels() {
    let a = anchor(5, 10);
    let mut host = host_with_anchor(a);
    let mut session = TooltipSession::new(Config::default());
    session
        .show(&mut host, "x", &a, &ShowOptions { timeout_s: Some(5.0), ..Default::default() })
        .unwrap();
    session.hide(&mut host);
    assert!(host.pending_dismissals().is_empty());
    assert!(host
        .actions
        .iter()
        .any(|a| matches!(a, HostAction::HideOverlay)));
}

#[test]
fn auto_sized_show_measures_the_text() {
    let a = anchor(2, 0);
    let mut host = host_with_anchor(a);
    let mut session = TooltipSession::new(Config::default());
    session
        .show_auto_sized(&mut host, "abc\nlonger", &a, &ShowOptions::default())
        .unwrap();

    // 6 columns x 2 rows at 8x16 cells, border 1 + internal border 2.
    let (params, _) = last_shown(&host);
    assert_eq!(params.border_width, 1);
    assert_eq!(params.internal_border_width, 2);
    // Anchor pixel is (0, 32); the sized overlay goes just below at 48.
    assert_eq!((params.left, params.top), (0, 48));
}

#[test]
fn auto_sized_with_disabled_timeout_still_positions() {
    let a = anchor(2, 0);
    let mut host = host_with_anchor(a);
    let mut session = TooltipSession::new(Config::default());
    let rel = session
        .show_auto_sized(
            &mut host,
            "abc\nxyz",
            &a,
            &ShowOptions {
                timeout_s: Some(-1.0),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!((rel.x, rel.y), (0, 48));
    assert!(host.pending_dismissals().is_empty());
    let (_, timeout_s) = last_shown(&host);
    assert_eq!(timeout_s, None);
}

#[test]
fn invalid_style_colors_are_omitted_not_fatal() {
    let a = anchor(5, 10);
    let mut host = host_with_anchor(a);
    let mut session = TooltipSession::new(Config::default());
    session
        .show(
            &mut host,
            "x",
            &a,
            &ShowOptions {
                style: Some(TooltipStyle {
                    foreground: Some("definitely-not-a-color".into()),
                    background: Some("#00ff00".into()),
                    ..TooltipStyle::default()
                }),
                ..Default::default()
            },
        )
        .unwrap();
    let (params, _) = last_shown(&host);
    assert_eq!(params.foreground, None);
    assert_eq!(params.background, Some(Color::Rgb(0, 255, 0)));
}

#[test]
fn configured_theme_supplies_missing_colors() {
    let a = anchor(5, 10);
    let mut host = host_with_anchor(a);
    let config = Config {
        theme: Some("light".to_string()),
        ..Config::default()
    };
    let mut session = TooltipSession::new(config);
    session.show(&mut host, "x", &a, &ShowOptions::default()).unwrap();
    let (params, _) = last_shown(&host);
    assert_eq!(params.foreground, Some(Color::Rgb(0, 0, 0)));
    assert_eq!(params.background, Some(Color::Rgb(255, 255, 224)));
}

#[test]
fn reposition_moves_without_rerendering() {
    let a = anchor(5, 10);
    let mut host = host_with_anchor(a);
    let mut session = TooltipSession::new(Config::default());
    session.show(&mut host, "x", &a, &ShowOptions::default()).unwrap();

    let b = anchor(8, 2);
    host.add_anchor(
        b,
        AnchorPixel {
            x: 16,
            y: 128,
            glyph_height_px: 16,
        },
    );
    let p = session.reposition(&mut host, &b, None, None, None).unwrap();
    assert_eq!((p.x, p.y), (16, 144));
    assert!(matches!(
        host.actions.last(),
        Some(HostAction::MoveOverlay { left: 16, top: 144 })
    ));
}

#[test]
fn dismiss_marks_the_timer_fired() {
    let a = anchor(5, 10);
    let mut host = host_with_anchor(a);
    let mut session = TooltipSession::new(Config::default());
    session
        .show(&mut host, "x", &a, &ShowOptions { timeout_s: Some(5.0), ..Default::default() })
        .unwrap();

    // Host's timer fires: the callback dismisses through the session.
    session.dismiss(&mut host);
    let cancels_before = host
        .actions
        .iter()
        .filter(|a| matches!(a, HostAction::Cancel { .. }))
        .count();
    // A later hide must not cancel the already-fired handle.
    session.hide(&mut host);
    let cancels_after = host
        .actions
        .iter()
        .filter(|a| matches!(a, HostAction::Cancel { .. }))
        .count();
    assert_eq!(cancels_before, cancels_after);
}
