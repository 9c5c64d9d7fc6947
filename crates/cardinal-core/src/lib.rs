//! Core types for the cardinal watch face.
//!
//! The geometric engine lives here: wall-clock time goes in, per-hand angles,
//! shape selections and line endpoints come out. Everything in this crate is
//! pure computation; drawing is left to whatever implements the surface in
//! `cardinal-canvas`.

mod angle;
mod face;
mod point;
mod shape;
mod time;
pub mod trig;

pub use angle::{Angle, FULL_TURN, hour_angle, minute_angle};
pub use face::{
    DEFAULT_CENTER, Face, FaceError, FaceGeometry, HOUR_RADIUS, Hand, MAX_RADIUS, MINUTE_RADIUS,
    RadialGeometry, render_frame,
};
pub use point::{Point, radial_endpoint};
pub use shape::{NO_SHAPE, Shape, angle_to_shape, shape_index};
pub use time::{ClockSource, ClockTime, ClockTimeError, FixedClock, LocalClock};
