pub mod geometry;
pub mod model;

pub use geometry::RingGeometry;
pub use model::{
    ClockRing, DurationLabel, DurationUnit, NudgeDirection, RingAction, RingEvent, RingFrame,
};

pub const MINUTES_PER_HALF_DAY: u16 = 720;
/// Clock faces start at 12:00, but our angles start at 3:00.
pub const CLOCK_ANGLE_OFFSET: u16 = 270;
/// Padding between the face and the widget bounds.
pub const INSETS: f64 = 6.0;
/// The volume slider never restores below this fraction.
pub const MIN_VOLUME: f64 = 0.1;
/// Touches out to this fraction of the radius still count as on the ring.
pub const DIAL_TOUCH_FACTOR: f64 = 1.3;
/// Touches inside this fraction of the radius hit the nudge buttons instead.
pub const NUDGE_TOUCH_FACTOR: f64 = 0.8;
