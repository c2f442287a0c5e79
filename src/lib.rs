// src/lib.rs

//! `termtip`: tooltip geometry and lifecycle engine for character-cell
//! display surfaces.
//!
//! Given a logical anchor inside a scrollable viewport, the engine
//! computes where a floating overlay goes in absolute screen pixels
//! (sized from text and font metrics, clamped into the display, flipped
//! above the anchor when it would overflow the bottom), keeps the system
//! pointer from overlapping it, and manages the overlay's timed
//! auto-dismissal. It renders nothing itself: window management, font
//! metrics, the overlay painter, the pointer device, and the timer
//! facility are host collaborators behind the traits in [`host`].
//!
//! Typical use: implement the [`host::Host`] traits over your windowing
//! stack, build a [`session::TooltipSession`] from a [`config::Config`],
//! and call [`session::TooltipSession::show_auto_sized`].

pub mod color;
pub mod config;
pub mod geometry;
pub mod host;
pub mod metrics;
pub mod origin;
pub mod pointer;
pub mod session;
pub mod solver;
pub mod style;
pub mod timer;

pub use color::Color;
pub use config::Config;
pub use geometry::{FrameId, FrameOrigin, OverlaySize, ScreenPoint, ScreenRect};
pub use host::{Anchor, FrameSnapshot, Host, OverlayParams, TimerHandle};
pub use metrics::{measure_text, pixel_height, pixel_width, TextExtent};
pub use session::{ShowOptions, TooltipSession};
pub use style::{resolve_style, ResolvedStyle, TooltipStyle};
