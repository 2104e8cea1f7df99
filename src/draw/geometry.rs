//! Surface-space points and the two-point geometry behind rectangles and circles.

/// A position in surface-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Rectangle anchored at `anchor` and reaching `opposite`.
///
/// Returns `(x, y, width, height)` with signed extents: dragging up or left
/// yields negative width/height rather than a normalized rectangle.
pub fn rect_between(anchor: Point, opposite: Point) -> (f64, f64, f64, f64) {
    (
        anchor.x,
        anchor.y,
        opposite.x - anchor.x,
        opposite.y - anchor.y,
    )
}

/// Euclidean distance from `center` to `edge`, used as a circle radius.
pub fn radius_between(center: Point, edge: Point) -> f64 {
    (edge.x - center.x).hypot(edge.y - center.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_between_keeps_anchor_and_signed_extents() {
        let rect = rect_between(Point::new(10.0, 10.0), Point::new(30.0, 25.0));
        assert_eq!(rect, (10.0, 10.0, 20.0, 15.0));

        let flipped = rect_between(Point::new(30.0, 25.0), Point::new(10.0, 10.0));
        assert_eq!(flipped, (30.0, 25.0, -20.0, -15.0));
    }

    #[test]
    fn radius_is_pythagorean_distance() {
        let r = radius_between(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((r - 5.0).abs() < f64::EPSILON);
        assert_eq!(radius_between(Point::new(7.0, 7.0), Point::new(7.0, 7.0)), 0.0);
    }

    #[test]
    fn finiteness_check() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::INFINITY).is_finite());
    }
}
