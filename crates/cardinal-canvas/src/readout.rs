//! Plain-text description of a frame, one line per hand.

use cardinal_core::{FaceGeometry, RadialGeometry};

/// Describe one hand: angle in units and degrees, shape index and name, line end.
pub fn describe_hand(hand: &RadialGeometry) -> String {
    let shape = hand.shape.map_or("circle", |s| s.name());
    format!(
        "{:<6} angle {:>5} ({:>5.1}°)  shape {:>2} {:<13}  end {}",
        hand.hand.name(),
        hand.angle.units(),
        hand.angle.degrees(),
        hand.shape_index(),
        shape,
        hand.line_end,
    )
}

/// Describe both hands of a frame.
pub fn readout(frame: &FaceGeometry) -> Vec<String> {
    frame.hands().iter().map(describe_hand).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardinal_core::{ClockTime, render_frame};

    #[test]
    fn test_readout_three_oclock() {
        let frame = render_frame(ClockTime::new(3, 0, 0).unwrap());
        let lines = readout(&frame);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "hour   angle 16384 ( 90.0°)  shape  1 quadrilateral  end (124, 72)"
        );
        assert_eq!(
            lines[1],
            "minute angle     0 (  0.0°)  shape  0 triangle       end (84, 12)"
        );
    }

    #[test]
    fn test_readout_names_circle() {
        let frame = render_frame(ClockTime::new(9, 0, 0).unwrap());
        assert!(readout(&frame)[0].contains("shape -1 circle"));
    }
}
