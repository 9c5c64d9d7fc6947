//! Terminal rendering of a face through ratatui's braille canvas.

use cardinal_core::{Face, FaceGeometry, Point};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Context, Line},
    },
};

use crate::surface::{Surface, paint_face};

/// Width and height of the virtual display, in display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: u16,
    pub height: u16,
}

impl Default for DisplaySize {
    fn default() -> Self {
        Self {
            width: 144,
            height: 168,
        }
    }
}

/// A [`Surface`] over a ratatui canvas context.
///
/// Canvas y grows upward, so every point is flipped against the display
/// height.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
    color: Color,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, size: DisplaySize, color: Color) -> Self {
        Self {
            ctx,
            height: f64::from(size.height),
            color,
        }
    }

    fn flip(&self, point: Point) -> (f64, f64) {
        (f64::from(point.x), self.height - f64::from(point.y))
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn draw_line(&mut self, from: Point, to: Point) {
        let (x1, y1) = self.flip(from);
        let (x2, y2) = self.flip(to);
        self.ctx.draw(&Line {
            x1,
            y1,
            x2,
            y2,
            color: self.color,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: i32) {
        let (x, y) = self.flip(center);
        self.ctx.draw(&Circle {
            x,
            y,
            radius: f64::from(radius),
            color: self.color,
        });
    }
}

/// Widget drawing both hands of a frame.
#[derive(Debug, Clone, Copy)]
pub struct WatchFace<'a> {
    face: &'a Face,
    frame: &'a FaceGeometry,
    size: DisplaySize,
    color: Color,
    draw_shapes: bool,
}

impl<'a> WatchFace<'a> {
    pub fn new(face: &'a Face, frame: &'a FaceGeometry) -> Self {
        Self {
            face,
            frame,
            size: DisplaySize::default(),
            color: Color::Cyan,
            draw_shapes: true,
        }
    }

    pub fn size(mut self, size: DisplaySize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Draw the catalog polygons (or circles) as well as the lines.
    pub fn draw_shapes(mut self, draw_shapes: bool) -> Self {
        self.draw_shapes = draw_shapes;
        self
    }
}

impl Widget for WatchFace<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.size;
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, f64::from(size.width)])
            .y_bounds([0.0, f64::from(size.height)])
            .paint(|ctx| {
                let mut surface = CanvasSurface::new(ctx, size, self.color);
                paint_face(&mut surface, self.face, self.frame, self.draw_shapes);
            })
            .render(area, buf);
    }
}
