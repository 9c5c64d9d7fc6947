//! The dial and the per-frame geometry computed from it.

use thiserror::Error;

use crate::angle::{Angle, hour_angle, minute_angle};
use crate::point::{Point, radial_endpoint};
use crate::shape::{Shape, angle_to_shape};
use crate::time::ClockTime;

/// Dial center on the reference 144x168 display.
pub const DEFAULT_CENTER: Point = Point::new(84, 72);

/// Hour hand length.
pub const HOUR_RADIUS: i32 = 40;

/// Minute hand length.
pub const MINUTE_RADIUS: i32 = 60;

/// Longest hand a dial accepts.
pub const MAX_RADIUS: i32 = 1 << 15;

/// Errors raised when describing a dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FaceError {
    #[error("hand radius must be positive, got {0}")]
    NonPositiveRadius(i32),
    #[error("hand radius {0} exceeds the maximum of {max}", max = MAX_RADIUS)]
    RadiusTooLarge(i32),
    #[error("hour radius {hour} must be smaller than minute radius {minute}")]
    HourNotInsideMinute { hour: i32, minute: i32 },
}

/// Which hand a piece of geometry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Hour,
    Minute,
}

impl Hand {
    pub fn name(self) -> &'static str {
        match self {
            Hand::Hour => "hour",
            Hand::Minute => "minute",
        }
    }
}

/// Everything needed to draw one hand for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadialGeometry {
    pub hand: Hand,
    pub angle: Angle,
    /// Polygon drawn around the center, `None` for the plain circle.
    pub shape: Option<Shape>,
    /// Far end of the line from the dial center.
    pub line_end: Point,
}

impl RadialGeometry {
    /// Catalog index of the shape, or -1 when there is none.
    pub fn shape_index(&self) -> i8 {
        self.shape.map_or(crate::shape::NO_SHAPE, |s| s.index() as i8)
    }
}

/// Geometry for both hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceGeometry {
    pub hour: RadialGeometry,
    pub minute: RadialGeometry,
}

impl FaceGeometry {
    /// Hands in drawing order.
    pub fn hands(&self) -> [RadialGeometry; 2] {
        [self.hour, self.minute]
    }
}

/// A dial: where the hands pivot and how long they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    center: Point,
    hour_radius: i32,
    minute_radius: i32,
}

impl Default for Face {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            hour_radius: HOUR_RADIUS,
            minute_radius: MINUTE_RADIUS,
        }
    }
}

impl Face {
    /// Describe a dial. Radii must lie in `1..=MAX_RADIUS` and the hour hand
    /// must be strictly shorter than the minute hand.
    pub fn new(center: Point, hour_radius: i32, minute_radius: i32) -> Result<Self, FaceError> {
        for radius in [hour_radius, minute_radius] {
            if radius <= 0 {
                return Err(FaceError::NonPositiveRadius(radius));
            }
            if radius > MAX_RADIUS {
                return Err(FaceError::RadiusTooLarge(radius));
            }
        }
        if hour_radius >= minute_radius {
            return Err(FaceError::HourNotInsideMinute {
                hour: hour_radius,
                minute: minute_radius,
            });
        }
        Ok(Self {
            center,
            hour_radius,
            minute_radius,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Length of the given hand.
    pub fn radius(&self, hand: Hand) -> i32 {
        match hand {
            Hand::Hour => self.hour_radius,
            Hand::Minute => self.minute_radius,
        }
    }

    /// Geometry for one hand at a given angle.
    pub fn hand(&self, hand: Hand, angle: Angle) -> RadialGeometry {
        RadialGeometry {
            hand,
            angle,
            shape: angle_to_shape(angle),
            line_end: radial_endpoint(angle, self.radius(hand), self.center),
        }
    }

    /// Compute the full frame for a time.
    pub fn render(&self, time: ClockTime) -> FaceGeometry {
        FaceGeometry {
            hour: self.hand(Hand::Hour, hour_angle(time)),
            minute: self.hand(Hand::Minute, minute_angle(time)),
        }
    }
}

/// Compute the frame for a time on the default dial.
pub fn render_frame(time: ClockTime) -> FaceGeometry {
    Face::default().render(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> ClockTime {
        ClockTime::new(hour, minute, second).unwrap()
    }

    #[test]
    fn test_render_three_oclock() {
        let frame = render_frame(at(3, 0, 0));
        assert_eq!(frame.hour.hand, Hand::Hour);
        assert_eq!(frame.hour.angle, Angle::QUARTER);
        assert_eq!(frame.hour.line_end, Point::new(124, 72));
        assert_eq!(frame.hour.shape, Some(Shape::Quadrilateral));

        assert_eq!(frame.minute.angle, Angle::ZERO);
        assert_eq!(frame.minute.line_end, Point::new(84, 12));
        assert_eq!(frame.minute.shape_index(), 0);
    }

    #[test]
    fn test_render_is_deterministic() {
        let time = at(10, 48, 31);
        assert_eq!(render_frame(time), render_frame(time));
    }

    #[test]
    fn test_sentinel_shape_index() {
        // 45 minutes is three quarters of a turn.
        let frame = render_frame(at(0, 45, 0));
        assert_eq!(frame.minute.shape, None);
        assert_eq!(frame.minute.shape_index(), -1);
    }

    #[test]
    fn test_hands_order() {
        let frame = render_frame(at(1, 2, 3));
        let [first, second] = frame.hands();
        assert_eq!(first.hand, Hand::Hour);
        assert_eq!(second.hand, Hand::Minute);
    }

    #[test]
    fn test_custom_face() {
        let face = Face::new(Point::new(0, 0), 10, 20).unwrap();
        let frame = face.render(at(6, 0, 0));
        assert_eq!(frame.hour.line_end, Point::new(0, 10));
        assert_eq!(frame.minute.line_end, Point::new(0, -20));
        assert_eq!(face.radius(Hand::Hour), 10);
    }

    #[test]
    fn test_face_rejects_bad_radii() {
        assert_eq!(
            Face::new(DEFAULT_CENTER, 60, 60),
            Err(FaceError::HourNotInsideMinute {
                hour: 60,
                minute: 60
            })
        );
        assert_eq!(
            Face::new(DEFAULT_CENTER, 0, 60),
            Err(FaceError::NonPositiveRadius(0))
        );
        assert_eq!(
            Face::new(DEFAULT_CENTER, 40, -5),
            Err(FaceError::NonPositiveRadius(-5))
        );
    }

    #[test]
    fn test_face_rejects_huge_radius() {
        assert_eq!(
            Face::new(DEFAULT_CENTER, 40, 50_000_000),
            Err(FaceError::RadiusTooLarge(50_000_000))
        );
        assert!(Face::new(DEFAULT_CENTER, 40, MAX_RADIUS).is_ok());
    }

    #[test]
    fn test_default_face() {
        let face = Face::default();
        assert_eq!(face.center(), DEFAULT_CENTER);
        assert!(face.radius(Hand::Hour) < face.radius(Hand::Minute));
    }
}
