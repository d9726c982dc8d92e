pub mod frame;
pub mod layout;
pub mod model;

pub use frame::{TickMark, WedgeArc, WheelFrame};
pub use layout::WedgeLayout;
pub use model::{GesturePhase, JogWheel, TargetId, WheelAction, WheelEvent};

/// Degrees between ticks at multiplier 1.
pub const TICK_DISTANCE: f64 = 15.0;
/// Degrees of arc left open for a target's label.
pub const NAME_GAP: f64 = 20.0;
/// Size of a wedge's selectable area around its centerline, in degrees.
pub const TOUCH_SLOP: f64 = 15.0;
/// Rotation assigned to target 0.
// TODO: vary this by the number of targets
pub const BASE_ANGLE: f64 = 225.0;
/// Velocity estimator cadence: 60 updates per second.
pub const RPM_PERIOD_MS: u64 = 1000 / 60;
