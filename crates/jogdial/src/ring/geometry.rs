use super::{DIAL_TOUCH_FACTOR, INSETS, NUDGE_TOUCH_FACTOR};
use crate::geom::{Point, Rect};

/// Touch regions derived from the widget bounds on each layout pass. None of
/// this is algorithmic state; it is recomputed whenever the host resizes.
#[derive(Debug, Clone, PartialEq)]
pub struct RingGeometry {
    pub center: Point,
    pub diameter: f64,
    /// The full clock face.
    pub outer_circle: Rect,
    /// The inner disc holding the duration text and nudge buttons.
    pub button_circle: Rect,
    /// The small volume triangle in the corner.
    pub volume_button: Rect,
    /// The large volume triangle shown while sliding.
    pub volume_slider: Rect,
    /// A quarter bigger than the button on the left and bottom, so a fat
    /// finger still lands on it.
    volume_touch_region: Rect,
}

impl RingGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        let center = Point::new(width / 2.0, height / 2.0);
        let diameter = width.min(height) - 2.0 * INSETS;
        let thickness = diameter / 15.0;

        let left = (width - diameter) / 2.0;
        let top = (height - diameter) / 2.0;
        let bottom = top + diameter;
        let right = left + diameter;
        let outer_circle = Rect::new(left, top, right, bottom);

        let offset = thickness * 2.0;
        let button_diameter = diameter - offset * 2.0;
        let button_circle = Rect::new(
            left + offset,
            top + offset,
            left + offset + button_diameter,
            top + offset + button_diameter,
        );

        let volume_left = (INSETS * 2.0).max(center.x - diameter);
        let volume_right = (width - INSETS * 2.0).min(center.x + diameter);
        let volume_height = (volume_right - volume_left) / 2.0;
        let volume_button_size = diameter * 0.25;
        let volume_slider = Rect::new(volume_left, bottom - volume_height, volume_right, bottom);
        let volume_button = Rect::new(
            volume_left,
            bottom - volume_button_size,
            volume_left + volume_button_size,
            bottom,
        );
        let volume_touch_region = Rect::new(
            volume_button.left - volume_button.width() / 4.0,
            volume_button.top,
            volume_button.right,
            volume_button.bottom + volume_button.height() / 4.0,
        );

        Self {
            center,
            diameter,
            outer_circle,
            button_circle,
            volume_button,
            volume_slider,
            volume_touch_region,
        }
    }

    pub fn hits_volume_button(&self, position: Point) -> bool {
        self.volume_touch_region.contains(position)
    }

    /// Fraction along the volume slider for a touch, unclamped.
    pub fn volume_fraction(&self, position: Point) -> f64 {
        (position.x - self.volume_slider.left) / self.volume_slider.width()
    }

    pub fn hits_nudge_area(&self, position: Point) -> bool {
        self.center.distance_to(position) < self.diameter * NUDGE_TOUCH_FACTOR / 2.0
    }

    pub fn hits_dial(&self, position: Point) -> bool {
        self.center.distance_to(position) < self.diameter * DIAL_TOUCH_FACTOR / 2.0
    }

    #[cfg(test)]
    pub(crate) fn volume_touch_region(&self) -> Rect {
        self.volume_touch_region
    }
}
