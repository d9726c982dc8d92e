use super::{BASE_ANGLE, TOUCH_SLOP};
use crate::geom::{Point, angle_delta, point_to_angle};

/// Angular wedge layout: each target owns an equal slice of the circle,
/// rotated so target 0 sits at the base angle.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeLayout {
    target_count: usize,
    base_angle: f64,
    touch_slop: f64,
}

impl WedgeLayout {
    pub fn new(target_count: usize) -> Self {
        assert!(target_count > 0, "a wheel needs at least one target");
        Self {
            target_count,
            base_angle: BASE_ANGLE,
            touch_slop: TOUCH_SLOP,
        }
    }

    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Degrees of circle each target owns.
    pub fn slice(&self) -> f64 {
        360.0 / self.target_count as f64
    }

    /// Centerline angle for `target`, in `[0, 360)`.
    pub fn target_to_angle(&self, target: usize) -> f64 {
        (self.base_angle + target as f64 * self.slice()).rem_euclid(360.0)
    }

    /// The target whose centerline lies within the touch slop of `degrees`,
    /// or `None` if the angle is too far from every target.
    pub fn angle_to_target(&self, degrees: f64) -> Option<usize> {
        let slice_angle = (degrees - self.base_angle).rem_euclid(360.0);
        let candidate = (slice_angle / self.slice()).round() as usize % self.target_count;
        let distance = angle_delta(self.target_to_angle(candidate), degrees).abs();
        (distance < self.touch_slop).then_some(candidate)
    }

    pub fn hit_test(&self, center: Point, position: Point) -> Option<usize> {
        self.angle_to_target(point_to_angle(center, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centerlines_divide_the_circle() {
        let layout = WedgeLayout::new(4);
        assert_eq!(layout.slice(), 90.0);
        assert_eq!(layout.target_to_angle(0), 225.0);
        assert_eq!(layout.target_to_angle(1), 315.0);
        assert_eq!(layout.target_to_angle(2), 45.0);
        assert_eq!(layout.target_to_angle(3), 135.0);
    }

    #[test]
    fn test_press_near_centerline_selects() {
        let layout = WedgeLayout::new(4);
        assert_eq!(layout.angle_to_target(45.0), Some(2));
        assert_eq!(layout.angle_to_target(45.0 + 14.9), Some(2));
        assert_eq!(layout.angle_to_target(45.0 - 14.9), Some(2));
    }

    #[test]
    fn test_press_between_wedges_selects_nothing() {
        let layout = WedgeLayout::new(4);
        // midway between targets 2 and 3, outside both slops
        assert_eq!(layout.angle_to_target(90.0), None);
        assert_eq!(layout.angle_to_target(45.0 + 15.1), None);
    }

    #[test]
    fn test_resolution_across_the_seam() {
        // 8 targets puts a centerline at 0 degrees
        let layout = WedgeLayout::new(8);
        assert_eq!(layout.target_to_angle(3), 0.0);
        assert_eq!(layout.angle_to_target(359.0), Some(3));
        assert_eq!(layout.angle_to_target(1.0), Some(3));
    }

    #[test]
    fn test_hit_test_uses_dial_center() {
        let layout = WedgeLayout::new(4);
        let center = Point::new(200.0, 200.0);
        // 45 degrees: down-right of center
        let position = Point::new(300.0, 300.0);
        assert_eq!(layout.hit_test(center, position), Some(2));
    }
}
