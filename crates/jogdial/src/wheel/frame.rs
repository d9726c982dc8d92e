use super::model::{GesturePhase, JogWheel, TargetId};

/// A single tick mark, positioned in degrees around the dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub angle: f64,
    /// Running tick index: every fifth is major, even/odd alternate shading.
    pub index: i64,
    /// 0 at the touch position, approaching 1 at the far side of the dial.
    pub fade: f64,
}

impl TickMark {
    pub fn is_major(&self) -> bool {
        self.index % 5 == 0
    }

    pub fn is_even(&self) -> bool {
        self.index % 2 == 0
    }
}

/// The arc one target occupies when the wheel is idle, with room left open
/// for its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgeArc {
    pub target: TargetId,
    /// Centerline angle, where the label goes.
    pub angle: f64,
    pub arc_start: f64,
    pub arc_sweep: f64,
}

/// One frame's worth of wheel state. The core never draws; a renderer turns
/// this into arcs, ticks and labels with whatever 2D API the host has.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelFrame {
    pub phase: GesturePhase,
    pub accumulated: f64,
    pub selection: i64,
    pub multiplier: f64,
    /// Empty unless a gesture is active.
    pub ticks: Vec<TickMark>,
    /// The idle layout, always present for hosts that dim it during a drag.
    pub wedges: Vec<WedgeArc>,
}

impl WheelFrame {
    /// Snapshots the wheel for rendering.
    ///
    /// Ticks are anchored to the touch position rather than the dial: the
    /// mark for the value just below the running total sits
    /// `(accumulated - tick_below) / multiplier` degrees behind the touch,
    /// and marks repeat every `tick_distance / multiplier` degrees. That way
    /// the scale compresses at speed without shifting the currently selected
    /// value.
    pub fn capture(wheel: &JogWheel) -> Self {
        let phase = wheel.phase();
        let multiplier = wheel.speed_multiplier();
        let tick_distance = wheel.config().tick_distance;
        let wedges = wedge_arcs(wheel);

        let Some(drag) = wheel.drag() else {
            return Self {
                phase,
                accumulated: 0.0,
                selection: 0,
                multiplier,
                ticks: Vec::new(),
                wedges,
            };
        };

        let accumulated = drag.accumulated;
        let selection = (accumulated / tick_distance).floor() as i64;
        let ticks = match drag.last_degrees {
            Some(touch_degrees) => {
                let tick_below = selection as f64 * tick_distance;
                let anchor = touch_degrees - (accumulated - tick_below) / multiplier;
                let spacing = tick_distance / multiplier;
                tick_marks(anchor, spacing, selection)
            }
            // between a resume and the next move there is no touch anchor
            None => Vec::new(),
        };

        Self {
            phase,
            accumulated,
            selection,
            multiplier,
            ticks,
            wedges,
        }
    }
}

fn wedge_arcs(wheel: &JogWheel) -> Vec<WedgeArc> {
    let layout = wheel.layout();
    let name_gap = wheel.config().name_gap;
    (0..layout.target_count())
        .map(|target| {
            let angle = layout.target_to_angle(target);
            WedgeArc {
                target: TargetId::from(target),
                angle,
                arc_start: (angle + name_gap / 2.0).rem_euclid(360.0),
                arc_sweep: layout.slice() - name_gap,
            }
        })
        .collect()
}

/// Marks out to half the circle on either side of the anchor, fading with
/// distance from the touch.
fn tick_marks(anchor: f64, spacing: f64, selection: i64) -> Vec<TickMark> {
    let mut ticks = Vec::new();

    // clockwise from the tick below the touch
    let mut index = selection;
    let mut distance = 0.0;
    while distance < 180.0 {
        ticks.push(TickMark {
            angle: (anchor + distance).rem_euclid(360.0),
            index,
            fade: distance / 180.0,
        });
        index += 1;
        distance += spacing;
    }

    // counter-clockwise from the tick beneath that
    let mut index = selection - 1;
    let mut distance = spacing;
    while distance < 180.0 {
        ticks.push(TickMark {
            angle: (anchor - distance).rem_euclid(360.0),
            index,
            fade: distance / 180.0,
        });
        index -= 1;
        distance += spacing;
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{InputEvent, PointerId};
    use crate::geom::{Point, point_on_circle};

    const CENTER: Point = Point { x: 200.0, y: 200.0 };

    fn selecting_wheel() -> JogWheel {
        let mut wheel = JogWheel::new(4);
        wheel.set_center(CENTER);
        wheel.set_values(vec![0, 0, 3, 0]);
        wheel.handle_event(InputEvent::Press {
            pointer: PointerId::PRIMARY,
            position: point_on_circle(CENTER, 150.0, 45.0),
            timestamp_ms: 0,
        });
        wheel
    }

    #[test]
    fn test_idle_frame_has_wedges_but_no_ticks() {
        let wheel = JogWheel::new(4);
        let frame = WheelFrame::capture(&wheel);
        assert_eq!(frame.phase, GesturePhase::Idle);
        assert!(frame.ticks.is_empty());
        assert_eq!(frame.wedges.len(), 4);

        let wedge = &frame.wedges[2];
        assert_eq!(wedge.angle, 45.0);
        assert_eq!(wedge.arc_start, 55.0);
        assert_eq!(wedge.arc_sweep, 70.0);
    }

    #[test]
    fn test_selecting_frame_reports_running_state() {
        let wheel = selecting_wheel();
        let frame = WheelFrame::capture(&wheel);
        assert_eq!(frame.selection, 3);
        assert_eq!(frame.accumulated, 3.5 * 15.0);
        assert_eq!(frame.multiplier, 1.0);
        assert!(!frame.ticks.is_empty());
    }

    #[test]
    fn test_ticks_are_spaced_by_tick_distance_at_multiplier_one() {
        let wheel = selecting_wheel();
        let frame = WheelFrame::capture(&wheel);

        // the selected tick sits half a tick behind the touch at 45 degrees
        let selected = frame
            .ticks
            .iter()
            .find(|t| t.index == frame.selection)
            .unwrap();
        assert!((selected.angle - 37.5).abs() < 1e-9);
        assert_eq!(selected.fade, 0.0);

        let next = frame
            .ticks
            .iter()
            .find(|t| t.index == frame.selection + 1)
            .unwrap();
        assert!((next.angle - 52.5).abs() < 1e-9);

        // 12 marks clockwise and 11 back cover the circle at 15 degrees apart
        assert_eq!(frame.ticks.len(), 23);
        for tick in &frame.ticks {
            assert!(tick.fade >= 0.0 && tick.fade < 1.0);
        }
    }

    #[test]
    fn test_major_and_even_alternation() {
        let major = TickMark {
            angle: 0.0,
            index: 10,
            fade: 0.0,
        };
        assert!(major.is_major());
        assert!(major.is_even());
        let minor = TickMark {
            angle: 0.0,
            index: 7,
            fade: 0.0,
        };
        assert!(!minor.is_major());
        assert!(!minor.is_even());
    }
}
