//! Circular jog-wheel input handling, decoupled from any rendering or
//! windowing API.
//!
//! The host adapts its native pointer events into [`InputEvent`]s and feeds
//! them to a dial; the dial answers with the value changes the host should
//! apply and a redraw hint. Two dials are provided: [`JogWheel`], a
//! multi-target scoring dial where drag speed scales sensitivity, and
//! [`ClockRing`], a 12-hour face for picking a duration in minutes.
//!
//! The core never draws. Renderers consume the per-frame snapshots
//! ([`wheel::WheelFrame`], [`ring::RingFrame`]) with whatever 2D API the
//! host has.

pub mod config;
pub mod events;
pub mod geom;
pub mod ring;
pub mod timer;
pub mod velocity;
pub mod wheel;

pub use config::DialConfig;
pub use events::{InputEvent, PointerId};
pub use geom::Point;
pub use ring::{ClockRing, RingAction, RingEvent};
pub use wheel::{JogWheel, TargetId, WheelAction, WheelEvent};
