use crate::geom::Point;
use derive_more::{Display, From, Into};

/// Identifies one touch point within a gesture. The primary pointer drives
/// value selection; any other pointer drives the secondary gesture modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct PointerId(usize);

impl PointerId {
    pub const PRIMARY: PointerId = PointerId(0);

    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }
}

/// The abstract input events a dial understands. The host adapts its native
/// pointer events into these; timestamps are host-relative milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press {
        pointer: PointerId,
        position: Point,
        timestamp_ms: u64,
    },
    Move {
        pointer: PointerId,
        position: Point,
        timestamp_ms: u64,
    },
    Release {
        pointer: PointerId,
        position: Point,
        timestamp_ms: u64,
    },
    /// Platform-initiated interruption (an intervening system gesture). Always
    /// honored immediately; nothing is committed.
    Cancel { timestamp_ms: u64 },
}

impl InputEvent {
    pub fn timestamp_ms(&self) -> u64 {
        match *self {
            InputEvent::Press { timestamp_ms, .. }
            | InputEvent::Move { timestamp_ms, .. }
            | InputEvent::Release { timestamp_ms, .. }
            | InputEvent::Cancel { timestamp_ms } => timestamp_ms,
        }
    }
}
