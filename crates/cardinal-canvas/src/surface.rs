//! The drawing contract between face geometry and whatever displays it.

use cardinal_core::{Face, FaceGeometry, Point, RadialGeometry};
use cardinal_shapes::outline;
use tracing::debug;

/// A host-owned drawing context.
///
/// Coordinates are display coordinates with y growing down. Implementations
/// draw outlines only; nothing is filled.
pub trait Surface {
    /// Draw a straight line between two points.
    fn draw_line(&mut self, from: Point, to: Point);

    /// Draw a circle outline.
    fn draw_circle(&mut self, center: Point, radius: i32);

    /// Draw a closed polygon outline through `points`.
    fn draw_polygon(&mut self, points: &[Point]) {
        let Some(&first) = points.first() else {
            return;
        };
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1]);
        }
        if let Some(&last) = points.last()
            && points.len() > 1
        {
            self.draw_line(last, first);
        }
    }
}

/// Paint a single hand: the radial line, then its shape.
///
/// With `draw_shapes` set, a hand without a catalog polygon gets a circle of
/// its own radius, otherwise the rotated polygon outline.
pub fn paint_hand<S: Surface + ?Sized>(
    surface: &mut S,
    face: &Face,
    hand: &RadialGeometry,
    draw_shapes: bool,
) {
    debug!(
        hand = hand.hand.name(),
        angle = hand.angle.units(),
        shape = hand.shape_index(),
        "painting hand"
    );

    let center = face.center();
    surface.draw_line(center, hand.line_end);

    if !draw_shapes {
        return;
    }
    let radius = face.radius(hand.hand);
    match hand.shape {
        None => surface.draw_circle(center, radius),
        Some(shape) => {
            let points = outline(hand.hand, shape, hand.angle, center, radius);
            surface.draw_polygon(&points);
        }
    }
}

/// Paint both hands, hour first.
pub fn paint_face<S: Surface + ?Sized>(
    surface: &mut S,
    face: &Face,
    frame: &FaceGeometry,
    draw_shapes: bool,
) {
    for hand in frame.hands() {
        paint_hand(surface, face, &hand, draw_shapes);
    }
}
