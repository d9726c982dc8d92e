use super::RPM_PERIOD_MS;
use super::layout::WedgeLayout;
use crate::config::WheelConfig;
use crate::events::InputEvent;
use crate::geom::{Point, angle_delta, point_to_angle};
use crate::timer::Ticker;
use crate::velocity::{self, RpmTracker};
use derive_more::{Display, From, Into};

/// Index of one selectable wedge around the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct TargetId(usize);

impl TargetId {
    pub fn as_index(self) -> usize {
        self.0
    }
}

/// Where the control is in the press-to-release lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    /// The primary pointer is adjusting `target`.
    Selecting { target: TargetId },
    /// A secondary pointer is down; accumulation is held until it lifts.
    Suspended { target: TargetId },
}

/// Value reports, in the order the host should apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    /// Provisional; may fire many times during a drag. Presentation only.
    Selecting { target: TargetId, value: i64 },
    /// Final commit; apply this to the host's model.
    Selected { target: TargetId, value: i64 },
    /// The gesture was interrupted; nothing was committed.
    Cancelled,
}

/// What the host should do after feeding an event in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelAction {
    pub event: Option<WheelEvent>,
    pub should_redraw: bool,
}

impl WheelAction {
    fn none() -> Self {
        Self::default()
    }

    fn redraw() -> Self {
        Self {
            event: None,
            should_redraw: true,
        }
    }

    fn emit(event: WheelEvent) -> Self {
        Self {
            event: Some(event),
            should_redraw: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Drag {
    pub(super) target: TargetId,
    /// Running total in degrees; the discrete selection is
    /// `floor(accumulated / tick_distance)`.
    pub(super) accumulated: f64,
    /// `None` right after a resume, so the next move re-anchors.
    pub(super) last_degrees: Option<f64>,
    pub(super) suspended: bool,
}

/// A slider around a circle to select an integer value per target.
///
/// Feed it [`InputEvent`]s and call [`JogWheel::tick`] at the cadence
/// reported by [`JogWheel::next_tick_ms`]; it answers with [`WheelAction`]s.
/// The wheel holds the current discrete value of every target so a fresh
/// gesture can start from it; the host writes values back with
/// [`JogWheel::set_value`] when it applies a `Selected` event.
#[derive(Debug, Clone, PartialEq)]
pub struct JogWheel {
    layout: WedgeLayout,
    config: WheelConfig,
    center: Point,
    values: Vec<i64>,
    tracker: RpmTracker,
    ticker: Ticker,
    drag: Option<Drag>,
}

impl JogWheel {
    pub fn new(target_count: usize) -> Self {
        Self::with_config(target_count, WheelConfig::default())
    }

    pub fn with_config(target_count: usize, config: WheelConfig) -> Self {
        Self {
            layout: WedgeLayout::new(target_count).with_touch_slop(config.touch_slop),
            config,
            center: Point::default(),
            values: vec![0; target_count],
            tracker: RpmTracker::new(),
            ticker: Ticker::new(RPM_PERIOD_MS),
            drag: None,
        }
    }

    /// Host layout pass: where the dial center sits in event coordinates.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn layout(&self) -> &WedgeLayout {
        &self.layout
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn value(&self, target: TargetId) -> i64 {
        self.values[target.as_index()]
    }

    pub fn set_value(&mut self, target: TargetId, value: i64) {
        self.values[target.as_index()] = value;
    }

    pub fn set_values(&mut self, values: Vec<i64>) {
        assert_eq!(values.len(), self.layout.target_count());
        self.values = values;
    }

    pub fn phase(&self) -> GesturePhase {
        match &self.drag {
            None => GesturePhase::Idle,
            Some(drag) if drag.suspended => GesturePhase::Suspended {
                target: drag.target,
            },
            Some(drag) => GesturePhase::Selecting {
                target: drag.target,
            },
        }
    }

    pub fn speed_multiplier(&self) -> f64 {
        velocity::speed_multiplier(self.tracker.rpm(), self.config.speed_scale)
    }

    /// When the velocity estimator next wants [`JogWheel::tick`], while a
    /// gesture is active.
    pub fn next_tick_ms(&self) -> Option<u64> {
        self.ticker.next_due_ms()
    }

    /// Periodic velocity recompute, driven by the host's loop.
    pub fn tick(&mut self, now_ms: u64) -> WheelAction {
        if !self.ticker.fire(now_ms) {
            return WheelAction::none();
        }
        if let Some(drag) = &self.drag
            && let Some(degrees) = drag.last_degrees
        {
            let rpm = self.tracker.sample(now_ms, degrees);
            log::trace!("rpm {:.1}", rpm);
        }
        WheelAction::redraw()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> WheelAction {
        match event {
            InputEvent::Press {
                pointer,
                position,
                timestamp_ms,
            } => {
                if pointer.is_primary() {
                    self.press(position, timestamp_ms)
                } else {
                    self.suspend()
                }
            }
            InputEvent::Move {
                pointer, position, ..
            } => {
                if pointer.is_primary() {
                    self.drag_to(position, false)
                } else {
                    WheelAction::none()
                }
            }
            InputEvent::Release {
                pointer,
                position,
                timestamp_ms,
            } => {
                if pointer.is_primary() {
                    self.release(position)
                } else {
                    self.resume(timestamp_ms)
                }
            }
            InputEvent::Cancel { .. } => self.cancel(),
        }
    }

    fn press(&mut self, position: Point, now_ms: u64) -> WheelAction {
        if self.drag.is_some() {
            return WheelAction::none();
        }
        let degrees = point_to_angle(self.center, position);
        let Some(target) = self.layout.angle_to_target(degrees) else {
            return WheelAction::none(); // too far from every wedge
        };
        let target = TargetId::from(target);

        // Center the first touch on the middle of the current tick interval
        // so the floor() mapping doesn't immediately jump to a neighbor.
        let accumulated = (self.value(target) as f64 + 0.5) * self.config.tick_distance;

        self.tracker.reset();
        self.ticker.start(now_ms);
        self.drag = Some(Drag {
            target,
            accumulated,
            last_degrees: Some(degrees),
            suspended: false,
        });

        let value = self.selection(accumulated);
        log::debug!("gesture started on target {} at {:.1}°", target, degrees);
        WheelAction::emit(WheelEvent::Selecting { target, value })
    }

    fn drag_to(&mut self, position: Point, committing: bool) -> WheelAction {
        let degrees = point_to_angle(self.center, position);
        let multiplier = self.speed_multiplier();
        let tick_distance = self.config.tick_distance;

        let Some(drag) = self.drag.as_mut() else {
            return WheelAction::none();
        };
        if drag.suspended {
            return WheelAction::none();
        }
        if let Some(last) = drag.last_degrees {
            drag.accumulated += angle_delta(last, degrees) * multiplier;
        }
        drag.last_degrees = Some(degrees);

        let target = drag.target;
        let value = (drag.accumulated / tick_distance).floor() as i64;
        if committing {
            WheelAction::emit(WheelEvent::Selected { target, value })
        } else {
            WheelAction::emit(WheelEvent::Selecting { target, value })
        }
    }

    fn release(&mut self, position: Point) -> WheelAction {
        let (target, accumulated, suspended) = match &self.drag {
            None => return WheelAction::none(),
            Some(drag) => (drag.target, drag.accumulated, drag.suspended),
        };
        let action = if suspended {
            // Primary lifted while a secondary pointer held the drag: commit
            // whatever was accumulated before the suspension.
            WheelAction::emit(WheelEvent::Selected {
                target,
                value: self.selection(accumulated),
            })
        } else {
            // The release position contributes a final delta before the commit.
            self.drag_to(position, true)
        };
        self.drag = None;
        self.ticker.stop();
        self.tracker.reset();
        log::debug!("gesture committed on target {}", target);
        action
    }

    fn cancel(&mut self) -> WheelAction {
        if self.drag.take().is_none() {
            return WheelAction::none();
        }
        self.ticker.stop();
        self.tracker.reset();
        log::debug!("gesture cancelled");
        WheelAction::emit(WheelEvent::Cancelled)
    }

    /// A secondary pointer pressed: hold accumulation until it lifts.
    fn suspend(&mut self) -> WheelAction {
        let Some(drag) = self.drag.as_mut() else {
            return WheelAction::none();
        };
        if drag.suspended {
            return WheelAction::none();
        }
        drag.suspended = true;
        self.ticker.stop();
        self.tracker.reset();
        log::debug!("gesture suspended by secondary pointer");
        WheelAction::redraw()
    }

    /// The secondary pointer lifted: resume, re-anchoring on the next move.
    fn resume(&mut self, now_ms: u64) -> WheelAction {
        let Some(drag) = self.drag.as_mut() else {
            return WheelAction::none();
        };
        if !drag.suspended {
            return WheelAction::none();
        }
        drag.suspended = false;
        drag.last_degrees = None;
        self.ticker.start(now_ms);
        log::debug!("gesture resumed");
        WheelAction::redraw()
    }

    fn selection(&self, accumulated: f64) -> i64 {
        (accumulated / self.config.tick_distance).floor() as i64
    }

    pub(super) fn drag(&self) -> Option<&Drag> {
        self.drag.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::PointerId;
    use crate::geom::point_on_circle;

    const CENTER: Point = Point { x: 200.0, y: 200.0 };
    const RADIUS: f64 = 150.0;

    fn wheel_with_values(values: Vec<i64>) -> JogWheel {
        let mut wheel = JogWheel::new(values.len());
        wheel.set_center(CENTER);
        wheel.set_values(values);
        wheel
    }

    fn press(wheel: &mut JogWheel, degrees: f64, at: u64) -> WheelAction {
        wheel.handle_event(InputEvent::Press {
            pointer: PointerId::PRIMARY,
            position: point_on_circle(CENTER, RADIUS, degrees),
            timestamp_ms: at,
        })
    }

    fn drag(wheel: &mut JogWheel, degrees: f64, at: u64) -> WheelAction {
        wheel.handle_event(InputEvent::Move {
            pointer: PointerId::PRIMARY,
            position: point_on_circle(CENTER, RADIUS, degrees),
            timestamp_ms: at,
        })
    }

    fn release(wheel: &mut JogWheel, degrees: f64, at: u64) -> WheelAction {
        wheel.handle_event(InputEvent::Release {
            pointer: PointerId::PRIMARY,
            position: point_on_circle(CENTER, RADIUS, degrees),
            timestamp_ms: at,
        })
    }

    #[test]
    fn test_press_on_wedge_reports_current_value() {
        let mut wheel = wheel_with_values(vec![0, 7, 0, 0]);
        // target 1 centerline: 315 degrees
        let action = press(&mut wheel, 315.0, 0);
        assert_eq!(
            action.event,
            Some(WheelEvent::Selecting {
                target: TargetId::from(1),
                value: 7,
            })
        );
        assert_eq!(
            wheel.phase(),
            GesturePhase::Selecting {
                target: TargetId::from(1)
            }
        );
    }

    #[test]
    fn test_press_between_wedges_is_ignored() {
        let mut wheel = wheel_with_values(vec![0, 0, 0, 0]);
        let action = press(&mut wheel, 90.0, 0);
        assert_eq!(action, WheelAction::default());
        assert_eq!(wheel.phase(), GesturePhase::Idle);
        assert_eq!(wheel.next_tick_ms(), None);
    }

    #[test]
    fn test_one_tick_of_drag_moves_one_unit() {
        let mut wheel = wheel_with_values(vec![0, 0, 3, 0]);
        press(&mut wheel, 45.0, 0);
        // multiplier is 1 before any velocity sample, so 15 degrees = 1 unit
        let action = drag(&mut wheel, 60.0, 16);
        assert_eq!(
            action.event,
            Some(WheelEvent::Selecting {
                target: TargetId::from(2),
                value: 4,
            })
        );
    }

    #[test]
    fn test_counter_clockwise_drag_moves_down() {
        let mut wheel = wheel_with_values(vec![0, 0, 3, 0]);
        press(&mut wheel, 45.0, 0);
        let action = drag(&mut wheel, 30.0, 16);
        assert_eq!(
            action.event,
            Some(WheelEvent::Selecting {
                target: TargetId::from(2),
                value: 2,
            })
        );
    }

    #[test]
    fn test_drag_across_the_seam_accumulates() {
        let mut wheel = wheel_with_values(vec![0, 0, 0, 0, 0, 0, 0, 0]);
        // 8 targets puts target 3 at 0 degrees
        press(&mut wheel, 355.0, 0);
        let action = drag(&mut wheel, 10.0, 16);
        assert_eq!(
            action.event,
            Some(WheelEvent::Selecting {
                target: TargetId::from(3),
                value: 1,
            })
        );
    }

    #[test]
    fn test_release_commits_and_returns_to_idle() {
        let mut wheel = wheel_with_values(vec![0, 0, 3, 0]);
        press(&mut wheel, 45.0, 0);
        drag(&mut wheel, 60.0, 16);
        let action = release(&mut wheel, 75.0, 32);
        assert_eq!(
            action.event,
            Some(WheelEvent::Selected {
                target: TargetId::from(2),
                value: 5,
            })
        );
        assert_eq!(wheel.phase(), GesturePhase::Idle);
        assert_eq!(wheel.next_tick_ms(), None);
    }

    #[test]
    fn test_cancel_discards_without_commit() {
        let mut wheel = wheel_with_values(vec![0, 0, 3, 0]);
        press(&mut wheel, 45.0, 0);
        drag(&mut wheel, 120.0, 16);
        let action = wheel.handle_event(InputEvent::Cancel { timestamp_ms: 32 });
        assert_eq!(action.event, Some(WheelEvent::Cancelled));
        assert_eq!(wheel.phase(), GesturePhase::Idle);

        // a fresh gesture starts from the unmodified value
        let action = press(&mut wheel, 45.0, 100);
        assert_eq!(
            action.event,
            Some(WheelEvent::Selecting {
                target: TargetId::from(2),
                value: 3,
            })
        );
    }

    #[test]
    fn test_values_can_go_negative() {
        let mut wheel = wheel_with_values(vec![0, 0, 0, 0]);
        press(&mut wheel, 45.0, 0);
        let action = drag(&mut wheel, 15.0, 16);
        assert_eq!(
            action.event,
            Some(WheelEvent::Selecting {
                target: TargetId::from(2),
                value: -2,
            })
        );
    }

    #[test]
    fn test_fast_spin_raises_the_multiplier() {
        let mut wheel = wheel_with_values(vec![0, 0, 0, 0]);
        press(&mut wheel, 45.0, 0);
        let mut now = 0;
        let mut degrees = 45.0;
        for _ in 0..10 {
            now += 16;
            degrees += 8.0;
            drag(&mut wheel, degrees, now);
            wheel.tick(now);
        }
        // 8 degrees per 16ms is ~83 rpm; multiplier should be well above 1
        assert!(wheel.speed_multiplier() > 1.0);
    }

    #[test]
    fn test_slow_drag_keeps_multiplier_neutral() {
        let mut wheel = wheel_with_values(vec![0, 0, 0, 0]);
        press(&mut wheel, 45.0, 0);
        let mut now = 0;
        for i in 0..10 {
            now += 16;
            drag(&mut wheel, 45.0 + i as f64 * 0.05, now);
            wheel.tick(now);
        }
        assert_eq!(wheel.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_secondary_pointer_suspends_accumulation() {
        let mut wheel = wheel_with_values(vec![0, 0, 3, 0]);
        press(&mut wheel, 45.0, 0);
        drag(&mut wheel, 60.0, 16);

        let action = wheel.handle_event(InputEvent::Press {
            pointer: PointerId::from(1),
            position: point_on_circle(CENTER, RADIUS, 200.0),
            timestamp_ms: 32,
        });
        assert_eq!(action.event, None);
        assert!(action.should_redraw);
        assert_eq!(
            wheel.phase(),
            GesturePhase::Suspended {
                target: TargetId::from(2)
            }
        );

        // primary moves are held while suspended
        let action = drag(&mut wheel, 120.0, 48);
        assert_eq!(action, WheelAction::default());

        // secondary lifts; the next move re-anchors without a jump
        wheel.handle_event(InputEvent::Release {
            pointer: PointerId::from(1),
            position: point_on_circle(CENTER, RADIUS, 200.0),
            timestamp_ms: 64,
        });
        let action = drag(&mut wheel, 150.0, 80);
        assert_eq!(
            action.event,
            Some(WheelEvent::Selecting {
                target: TargetId::from(2),
                value: 4,
            })
        );

        // and accumulation continues from there
        let action = drag(&mut wheel, 165.0, 96);
        assert_eq!(
            action.event,
            Some(WheelEvent::Selecting {
                target: TargetId::from(2),
                value: 5,
            })
        );
    }

    #[test]
    fn test_ticker_runs_only_during_a_gesture() {
        let mut wheel = wheel_with_values(vec![0, 0, 0, 0]);
        assert_eq!(wheel.next_tick_ms(), None);
        press(&mut wheel, 45.0, 1000);
        assert_eq!(wheel.next_tick_ms(), Some(1000));
        assert!(wheel.tick(1000).should_redraw);
        assert_eq!(wheel.next_tick_ms(), Some(1000 + RPM_PERIOD_MS));
        release(&mut wheel, 45.0, 1016);
        assert_eq!(wheel.next_tick_ms(), None);
        assert!(!wheel.tick(2000).should_redraw);
    }
}
