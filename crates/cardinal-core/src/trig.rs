//! Fixed-point trigonometry in [`Angle`] units.
//!
//! Values are scaled so that 1.0 maps to [`TRIG_MAX_RATIO`]. A quarter-wave
//! table is built once and folded into the other three quadrants, which keeps
//! the cardinal angles exact (`sin` of a quarter turn is exactly the ratio).

use std::f64::consts::FRAC_PI_2;
use std::sync::LazyLock;

use crate::angle::{Angle, FULL_TURN};
use crate::point::Point;

/// Fixed-point representation of 1.0.
pub const TRIG_MAX_RATIO: i32 = 0xffff;

/// Table steps per quarter turn.
const STEPS: usize = 256;

const QUARTER: u32 = FULL_TURN / 4;

/// Units of angle covered by one table step.
const STEP_UNITS: u32 = QUARTER / STEPS as u32;

static QUARTER_WAVE: LazyLock<[i32; STEPS + 1]> = LazyLock::new(|| {
    let mut table = [0; STEPS + 1];
    for (i, entry) in table.iter_mut().enumerate() {
        let radians = FRAC_PI_2 * i as f64 / STEPS as f64;
        *entry = (radians.sin() * f64::from(TRIG_MAX_RATIO)).round() as i32;
    }
    table
});

/// Sine over the first quadrant, `offset` in `[0, QUARTER]`.
fn quarter_sin(offset: u32) -> i32 {
    let index = (offset / STEP_UNITS) as usize;
    let frac = (offset % STEP_UNITS) as i32;
    let base = QUARTER_WAVE[index];
    if frac == 0 {
        return base;
    }
    let next = QUARTER_WAVE[index + 1];
    base + (next - base) * frac / STEP_UNITS as i32
}

/// Fixed-point sine, in `[-TRIG_MAX_RATIO, TRIG_MAX_RATIO]`.
pub fn sin_lookup(angle: Angle) -> i32 {
    let units = angle.units();
    let offset = units % QUARTER;
    match units / QUARTER {
        0 => quarter_sin(offset),
        1 => quarter_sin(QUARTER - offset),
        2 => -quarter_sin(offset),
        _ => -quarter_sin(QUARTER - offset),
    }
}

/// Fixed-point cosine, in `[-TRIG_MAX_RATIO, TRIG_MAX_RATIO]`.
pub fn cos_lookup(angle: Angle) -> i32 {
    sin_lookup(angle + Angle::QUARTER)
}

/// Rotate an offset about the origin, clockwise in screen coordinates.
pub fn rotate(point: Point, angle: Angle) -> Point {
    let cos = i64::from(cos_lookup(angle));
    let sin = i64::from(sin_lookup(angle));
    let ratio = i64::from(TRIG_MAX_RATIO);
    let (x, y) = (i64::from(point.x), i64::from(point.y));
    Point::new(
        (x * cos / ratio - y * sin / ratio) as i32,
        (y * cos / ratio + x * sin / ratio) as i32,
    )
}
