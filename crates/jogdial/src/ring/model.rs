use super::geometry::RingGeometry;
use super::{CLOCK_ANGLE_OFFSET, MINUTES_PER_HALF_DAY};
use crate::config::RingConfig;
use crate::events::{InputEvent, PointerId};
use crate::geom::{Point, point_to_angle};
use strum::Display as StrumDisplay;

/// Value reports from the ring, in the order the host should apply them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingEvent {
    /// The selected duration changed.
    MinutesChanged(u16),
    /// The restore-volume fraction changed.
    VolumeChanged(f64),
    /// Volume mode toggled; the large slider shows while true.
    VolumeSliding(bool),
}

/// What the host should do after feeding an event in. A single input can
/// produce more than one report (entering volume mode both toggles the
/// slider and sets a volume).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RingAction {
    pub events: Vec<RingEvent>,
    pub should_redraw: bool,
}

impl RingAction {
    fn none() -> Self {
        Self::default()
    }

    fn redraw() -> Self {
        Self {
            events: Vec::new(),
            should_redraw: true,
        }
    }

    fn emit(event: RingEvent) -> Self {
        Self {
            events: vec![event],
            should_redraw: true,
        }
    }

    fn merge(mut self, other: RingAction) -> Self {
        self.events.extend(other.events);
        self.should_redraw |= other.should_redraw;
        self
    }
}

/// Which half of the inner disc a nudge touch is on. `Up` adds a granularity
/// step to the duration, `Down` removes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Idle,
    /// The primary pointer is sweeping a duration around the ring.
    Dialing,
    /// The primary pointer is held on one of the inner nudge buttons.
    Nudging,
    /// `pointer` owns the volume slider; the dial resumes when it lifts if
    /// a drag was interrupted to get here.
    VolumeSliding {
        pointer: PointerId,
        resume_dialing: bool,
    },
}

/// A slider around a clock face, to select a duration up to half a day.
///
/// The angle between the start position (the current wall-clock time, set
/// with [`ClockRing::set_start`]) and the touch maps to minutes, snapped to
/// the configured granularity. Two secondary modes are mutually exclusive
/// with the sweep: the inner nudge buttons and the corner volume slider;
/// entering the volume mode suspends duration updates until it ends.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockRing {
    config: RingConfig,
    geometry: Option<RingGeometry>,
    /// Degrees for the start of the sweep, anchored to the wall clock.
    start_angle: u16,
    minutes: u16,
    volume: f64,
    mode: Mode,
    nudge: Option<NudgeDirection>,
}

impl Default for ClockRing {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockRing {
    pub fn new() -> Self {
        Self::with_config(RingConfig::default())
    }

    pub fn with_config(config: RingConfig) -> Self {
        Self {
            config,
            geometry: None,
            start_angle: CLOCK_ANGLE_OFFSET,
            minutes: 0,
            volume: 0.8,
            mode: Mode::Idle,
            nudge: None,
        }
    }

    /// Host layout pass; input is ignored until the first one.
    pub fn set_layout(&mut self, width: f64, height: f64) {
        self.geometry = Some(RingGeometry::new(width, height));
    }

    pub fn geometry(&self) -> Option<&RingGeometry> {
        self.geometry.as_ref()
    }

    /// Anchors the face so the sweep starts at the current wall-clock time;
    /// `minute_of_day` is minutes since midnight.
    pub fn set_start(&mut self, minute_of_day: u16) {
        let mut half_day_minute = minute_of_day % (2 * MINUTES_PER_HALF_DAY);
        if half_day_minute > MINUTES_PER_HALF_DAY {
            half_day_minute -= MINUTES_PER_HALF_DAY;
        }
        // 720 minutes per half-day, 360 degrees per circle
        self.start_angle = (half_day_minute / 2 + CLOCK_ANGLE_OFFSET) % 360;
    }

    pub fn start_angle(&self) -> u16 {
        self.start_angle
    }

    pub fn minutes(&self) -> u16 {
        self.minutes
    }

    pub fn set_minutes(&mut self, minutes: u16) {
        self.minutes = minutes.min(MINUTES_PER_HALF_DAY);
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(self.config.min_volume, 1.0);
    }

    pub fn handle_event(&mut self, event: InputEvent) -> RingAction {
        match event {
            InputEvent::Press {
                pointer, position, ..
            } => self.press(pointer, position),
            InputEvent::Move {
                pointer, position, ..
            } => self.drag_to(pointer, position),
            InputEvent::Release {
                pointer, position, ..
            } => self.release(pointer, position),
            InputEvent::Cancel { .. } => self.cancel(),
        }
    }

    fn press(&mut self, pointer: PointerId, position: Point) -> RingAction {
        let Some(geometry) = &self.geometry else {
            return RingAction::none();
        };
        let hits_volume = geometry.hits_volume_button(position);
        let hits_nudge = geometry.hits_nudge_area(position);
        let hits_dial = geometry.hits_dial(position);
        let fraction = geometry.volume_fraction(position);
        let nudge = nudge_direction(geometry.center, position);
        let degrees = point_to_angle(geometry.center, position);

        match self.mode {
            Mode::Idle | Mode::Dialing if hits_volume => {
                let resume_dialing = self.mode == Mode::Dialing;
                self.mode = Mode::VolumeSliding {
                    pointer,
                    resume_dialing,
                };
                log::debug!("volume sliding started");
                RingAction::emit(RingEvent::VolumeSliding(true)).merge(self.slide_volume(fraction))
            }
            Mode::Idle if pointer.is_primary() && hits_nudge => {
                self.mode = Mode::Nudging;
                self.nudge = Some(nudge);
                RingAction::redraw()
            }
            Mode::Idle if pointer.is_primary() && hits_dial => {
                self.mode = Mode::Dialing;
                self.update_minutes(self.minutes_from_angle(degrees))
            }
            _ => RingAction::none(),
        }
    }

    fn drag_to(&mut self, pointer: PointerId, position: Point) -> RingAction {
        let Some(geometry) = &self.geometry else {
            return RingAction::none();
        };
        let fraction = geometry.volume_fraction(position);
        let hits_nudge = geometry.hits_nudge_area(position);
        let nudge = nudge_direction(geometry.center, position);
        let degrees = point_to_angle(geometry.center, position);

        match self.mode {
            Mode::VolumeSliding { pointer: owner, .. } if owner == pointer => {
                self.slide_volume(fraction)
            }
            Mode::Dialing if pointer.is_primary() => {
                self.update_minutes(self.minutes_from_angle(degrees))
            }
            Mode::Nudging if pointer.is_primary() => {
                self.nudge = hits_nudge.then_some(nudge);
                RingAction::redraw()
            }
            _ => RingAction::none(),
        }
    }

    fn release(&mut self, pointer: PointerId, position: Point) -> RingAction {
        let Some(geometry) = &self.geometry else {
            return RingAction::none();
        };
        let fraction = geometry.volume_fraction(position);
        let hits_nudge = geometry.hits_nudge_area(position);
        let degrees = point_to_angle(geometry.center, position);

        match self.mode {
            Mode::VolumeSliding {
                pointer: owner,
                resume_dialing,
            } if owner == pointer => {
                self.mode = if resume_dialing {
                    Mode::Dialing
                } else {
                    Mode::Idle
                };
                log::debug!("volume sliding ended at {:.2}", self.volume);
                self.slide_volume(fraction)
                    .merge(RingAction::emit(RingEvent::VolumeSliding(false)))
            }
            Mode::Dialing if pointer.is_primary() => {
                self.mode = Mode::Idle;
                self.update_minutes(self.minutes_from_angle(degrees))
            }
            Mode::Nudging if pointer.is_primary() => {
                self.mode = Mode::Idle;
                let nudge = self.nudge.take();
                match nudge {
                    // only a release still on the buttons commits the nudge
                    Some(direction) if hits_nudge => self.apply_nudge(direction),
                    _ => RingAction::redraw(),
                }
            }
            _ => RingAction::none(),
        }
    }

    fn cancel(&mut self) -> RingAction {
        self.nudge = None;
        if self.mode == Mode::Idle {
            return RingAction::none();
        }
        let was_sliding = matches!(self.mode, Mode::VolumeSliding { .. });
        self.mode = Mode::Idle;
        log::debug!("ring gesture cancelled");
        if was_sliding {
            RingAction::emit(RingEvent::VolumeSliding(false))
        } else {
            RingAction::redraw()
        }
    }

    /// Converts a touch angle to minutes: the sweep from the start angle,
    /// doubled (720 minutes per 360 degrees), snapped to the granularity.
    /// The wrap prefers a full half-day over zero.
    fn minutes_from_angle(&self, degrees: f64) -> u16 {
        let angle = degrees as i32;
        let sweep = 360 + angle - self.start_angle as i32;
        let snapped = round_to_granularity(sweep * 2, self.config.snap.minutes() as i32);
        let minutes = if snapped > MINUTES_PER_HALF_DAY as i32 {
            snapped - MINUTES_PER_HALF_DAY as i32
        } else {
            snapped
        };
        minutes as u16
    }

    fn update_minutes(&mut self, minutes: u16) -> RingAction {
        if minutes == self.minutes {
            return RingAction::none();
        }
        self.minutes = minutes;
        log::debug!("duration set to {} minutes", minutes);
        RingAction::emit(RingEvent::MinutesChanged(minutes))
    }

    fn slide_volume(&mut self, fraction: f64) -> RingAction {
        let volume = fraction.clamp(self.config.min_volume, 1.0);
        if volume == self.volume {
            return RingAction::none();
        }
        self.volume = volume;
        RingAction::emit(RingEvent::VolumeChanged(volume))
    }

    fn apply_nudge(&mut self, direction: NudgeDirection) -> RingAction {
        let step = self.config.snap.minutes();
        let mut minutes = match direction {
            NudgeDirection::Up => self.minutes + step,
            NudgeDirection::Down => self.minutes + MINUTES_PER_HALF_DAY - step,
        };
        if minutes > MINUTES_PER_HALF_DAY {
            minutes -= MINUTES_PER_HALF_DAY;
        }
        self.update_minutes(minutes)
    }

    fn frame_nudge(&self) -> Option<NudgeDirection> {
        self.nudge
    }
}

fn nudge_direction(center: Point, position: Point) -> NudgeDirection {
    if position.x > center.x {
        NudgeDirection::Up
    } else {
        NudgeDirection::Down
    }
}

/// Rounds to the nearest multiple of `granularity`, halves up. Not strictly
/// necessary, but it keeps fat-fingered touches from landing on awkward
/// durations.
fn round_to_granularity(minutes: i32, granularity: i32) -> i32 {
    (minutes + (granularity + 1) / 2) / granularity * granularity
}

/// The duration text split the way a renderer stacks it: a big number over
/// a small unit, with unicode vulgar fractions for partial hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationLabel {
    pub text: String,
    pub unit: DurationUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum DurationUnit {
    Minutes,
    Hour,
    Hours,
}

impl DurationLabel {
    pub fn for_minutes(minutes: u16) -> Self {
        let (text, unit) = if minutes < 60 {
            (minutes.to_string(), DurationUnit::Minutes)
        } else if minutes == 60 {
            ("1".to_string(), DurationUnit::Hour)
        } else {
            let hours = minutes / 60;
            let text = match minutes % 60 {
                0 => hours.to_string(),
                15 => format!("{hours}\u{00bc}"),
                30 => format!("{hours}\u{00bd}"),
                45 => format!("{hours}\u{00be}"),
                m => format!("{hours}:{m:02}"),
            };
            (text, DurationUnit::Hours)
        };
        Self { text, unit }
    }
}

/// One frame's worth of ring state for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RingFrame {
    pub start_angle: f64,
    /// Degrees of arc from the start angle: minutes / 2.
    pub sweep_angle: f64,
    pub minutes: u16,
    pub duration: DurationLabel,
    pub volume: f64,
    pub volume_sliding: bool,
    /// A nudge button currently held down, if any.
    pub nudge: Option<NudgeDirection>,
}

impl RingFrame {
    pub fn capture(ring: &ClockRing) -> Self {
        Self {
            start_angle: ring.start_angle() as f64,
            sweep_angle: ring.minutes() as f64 / 2.0,
            minutes: ring.minutes(),
            duration: DurationLabel::for_minutes(ring.minutes()),
            volume: ring.volume(),
            volume_sliding: matches!(ring.mode, Mode::VolumeSliding { .. }),
            nudge: ring.frame_nudge(),
        }
    }
}
