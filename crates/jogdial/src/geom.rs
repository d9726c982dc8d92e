use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Axis-aligned rectangle, used for the clock ring's secondary touch regions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

/// Degrees in `[0, 360)` for the vector from `center` to `point`: 0° at
/// 3 o'clock, increasing clockwise (screen coordinates, y down). A touch
/// exactly at the center is degenerate and maps to 0°.
pub fn point_to_angle(center: Point, point: Point) -> f64 {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    dy.atan2(dx).to_degrees().rem_euclid(360.0)
}

/// Shortest-path difference `new - old` in `(-180, 180]`, correct across the
/// 0/360 seam: `angle_delta(350.0, 10.0) == 20.0`.
pub fn angle_delta(old_degrees: f64, new_degrees: f64) -> f64 {
    let delta = new_degrees - old_degrees;
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// The point at `degrees` around the circle of `radius` about `center`.
pub fn point_on_circle(center: Point, radius: f64, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_delta_wraparound() {
        assert_eq!(angle_delta(350.0, 10.0), 20.0);
        assert_eq!(angle_delta(10.0, 350.0), -20.0);
        assert_eq!(angle_delta(0.0, 90.0), 90.0);
        assert_eq!(angle_delta(90.0, 0.0), -90.0);
    }

    #[test]
    fn test_angle_delta_antisymmetric() {
        let angles: [f64; 8] = [0.0, 10.0, 45.0, 90.0, 170.0, 200.0, 350.0, 359.5];
        for a in angles {
            for b in angles {
                if (a - b).abs() == 180.0 {
                    continue; // both directions are equally short
                }
                assert_eq!(angle_delta(a, b), -angle_delta(b, a), "a={a} b={b}");
            }
        }
    }

    #[test]
    fn test_angle_delta_range() {
        for a in 0..360 {
            for b in 0..360 {
                let delta = angle_delta(a as f64, b as f64);
                assert!(delta > -180.0 && delta <= 180.0, "delta({a},{b})={delta}");
            }
        }
    }

    #[test]
    fn test_point_to_angle_quadrants() {
        let center = Point::new(100.0, 100.0);
        let cases = [
            (Point::new(200.0, 100.0), 0.0),
            (Point::new(100.0, 200.0), 90.0),
            (Point::new(0.0, 100.0), 180.0),
            (Point::new(100.0, 0.0), 270.0),
        ];
        for (point, expected) in cases {
            assert!((point_to_angle(center, point) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_point_to_angle_center_is_degenerate() {
        let center = Point::new(50.0, 50.0);
        assert_eq!(point_to_angle(center, center), 0.0);
    }

    #[test]
    fn test_point_on_circle_round_trip() {
        let center = Point::new(200.0, 200.0);
        for degrees in [0.0, 45.0, 123.0, 270.0, 359.0] {
            let point = point_on_circle(center, 150.0, degrees);
            assert!((point_to_angle(center, point) - degrees).abs() < 1e-9);
            assert!((center.distance_to(point) - 150.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(15.0, 19.0)));
        assert!(!rect.contains(Point::new(20.0, 15.0)));
        assert!(!rect.contains(Point::new(5.0, 15.0)));
    }
}
