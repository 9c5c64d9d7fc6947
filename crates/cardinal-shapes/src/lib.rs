//! Polygon templates for the cardinal watch face.
//!
//! Points are offsets from the dial center in screen orientation (y grows
//! down), before rotation.

use cardinal_core::{Angle, Hand, Point, Shape, trig::rotate};

/// Characteristic radius of the hour templates.
pub const HOUR_TEMPLATE_RADIUS: i32 = 40;

/// Characteristic radius of the minute templates.
pub const MINUTE_TEMPLATE_RADIUS: i32 = 60;

/// Hour hand polygons (40 unit radius), triangle through hexagon.
pub const HOUR_SHAPES: [&[Point]; 4] = [
    // triangle
    &[Point::new(0, 40), Point::new(35, -20), Point::new(-35, -20)],
    // quadrilateral
    &[
        Point::new(0, 40),
        Point::new(40, 0),
        Point::new(0, -40),
        Point::new(-40, 0),
    ],
    // pentagon
    &[
        Point::new(0, 40),
        Point::new(44, -13),
        Point::new(24, -42),
        Point::new(-24, -42),
        Point::new(-44, -13),
    ],
    // hexagon
    &[
        Point::new(0, 40),
        Point::new(34, 20),
        Point::new(34, -20),
        Point::new(0, -40),
        Point::new(-34, -20),
        Point::new(-34, 20),
    ],
];

/// Minute hand polygons (60 unit radius), triangle through hexagon.
pub const MINUTE_SHAPES: [&[Point]; 4] = [
    // triangle
    &[Point::new(0, 60), Point::new(52, -30), Point::new(-52, -30)],
    // quadrilateral
    &[
        Point::new(0, 60),
        Point::new(60, 0),
        Point::new(0, -60),
        Point::new(-60, 0),
    ],
    // pentagon
    &[
        Point::new(0, 60),
        Point::new(66, -17),
        Point::new(36, -63),
        Point::new(-36, -63),
        Point::new(-66, -17),
    ],
    // hexagon
    &[
        Point::new(0, 60),
        Point::new(51, 30),
        Point::new(51, -30),
        Point::new(0, -60),
        Point::new(-51, -30),
        Point::new(-51, 30),
    ],
];

/// Unrotated template for a hand and shape.
pub fn template(hand: Hand, shape: Shape) -> &'static [Point] {
    match hand {
        Hand::Hour => HOUR_SHAPES[shape.index()],
        Hand::Minute => MINUTE_SHAPES[shape.index()],
    }
}

/// Radius the templates for `hand` were drawn at.
pub fn template_radius(hand: Hand) -> i32 {
    match hand {
        Hand::Hour => HOUR_TEMPLATE_RADIUS,
        Hand::Minute => MINUTE_TEMPLATE_RADIUS,
    }
}

/// Place a template on the dial.
///
/// # Arguments
/// * `hand` - Which hand's template set to use
/// * `shape` - Polygon to draw
/// * `angle` - Rotation, clockwise from 12 o'clock
/// * `center` - Dial center the outline is moved to
/// * `radius` - Hand length; templates are scaled from their own radius
///
/// # Returns
/// The outline's vertices in display coordinates, in template order.
pub fn outline(hand: Hand, shape: Shape, angle: Angle, center: Point, radius: i32) -> Vec<Point> {
    let base = i64::from(template_radius(hand));
    let scale = |v: i32| (i64::from(v) * i64::from(radius) / base) as i32;
    template(hand, shape)
        .iter()
        .map(|p| Point::new(scale(p.x), scale(p.y)))
        .map(|p| rotate(p, angle) + center)
        .collect()
}
