//! Integer screen points.

use crate::angle::Angle;
use crate::trig::{TRIG_MAX_RATIO, cos_lookup, sin_lookup};

/// A point in display coordinates: x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// End of a radial line of length `radius` drawn from `center` at `angle`.
pub fn radial_endpoint(angle: Angle, radius: i32, center: Point) -> Point {
    let ratio = i64::from(TRIG_MAX_RATIO);
    let radius = i64::from(radius);
    let dx = i64::from(sin_lookup(angle)) * radius / ratio;
    let dy = -i64::from(cos_lookup(angle)) * radius / ratio;
    Point::new(center.x + dx as i32, center.y + dy as i32)
}
