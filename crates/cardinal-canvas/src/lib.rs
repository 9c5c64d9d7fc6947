//! Drawing for the cardinal watch face.
//!
//! [`Surface`] is the contract a display backend implements; the painting
//! functions turn a frame's geometry into lines, circles and polygon
//! outlines on it. [`WatchFace`] is the ratatui widget built on a braille
//! canvas, and [`readout`] gives the same frame as text.

mod readout;
mod surface;
mod widget;

pub use readout::{describe_hand, readout};
pub use surface::{Surface, paint_face, paint_hand};
pub use widget::{CanvasSurface, DisplaySize, WatchFace};
