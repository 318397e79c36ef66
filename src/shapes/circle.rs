// src/shapes/circle.rs

use crate::color::Color;
use crate::frame::Frame;
use crate::shapes::{Drawable, Line};
use crate::vector::Vector;

/// A circle around `position`: an outline of `width` pixels in the
/// foreground color, filled with the background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub position: Vector,
    pub radius: u32,
    pub foreground: Color,
    pub background: Color,
    pub width: u32,
}

impl Circle {
    /// A black outline, one pixel wide, with a transparent fill.
    pub const fn new(position: Vector, radius: u32) -> Self {
        Circle {
            position,
            radius,
            foreground: Color::BLACK,
            background: Color::TRANSPARENT,
            width: 1,
        }
    }

    pub const fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub const fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Draws a diamond-shaped block of `width` pixels around `at`.
    fn outline_pixel(&self, frame: &mut dyn Frame, at: Vector) {
        let width = self.width.min(i16::MAX as u32) as i32;
        let start = width / 2;
        let end = width - start;
        for x in -start..end {
            for y in -start..end {
                if x.abs() + y.abs() < width {
                    frame.write(self.position + at + Vector::new(x, y), self.foreground);
                }
            }
        }
    }

    fn span(&self, frame: &mut dyn Frame, from: Vector, length: i32) {
        Line::new(self.position + from, Vector::new(length, 0))
            .with_color(self.background)
            .draw(frame);
    }

    // Midpoint circle: walk one octant, mirror each point into all eight.
    fn midpoint(&self, frame: &mut dyn Frame, fill: bool) {
        let radius = self.radius.min(i16::MAX as u32) as i32;
        let mut f = 1 - radius;
        let mut dd_fx = 1;
        let mut dd_fy = -2 * radius;
        let mut x = 0;
        let mut y = radius;

        if fill {
            frame.write(self.position + Vector::new(0, radius), self.background);
            frame.write(self.position + Vector::new(0, -radius), self.background);
            self.span(frame, Vector::new(-radius, 0), 2 * radius);
        } else {
            for at in [(0, radius), (0, -radius), (radius, 0), (-radius, 0)] {
                self.outline_pixel(frame, Vector::new(at.0, at.1));
            }
        }

        while x < y {
            if f >= 0 {
                y -= 1;
                dd_fy += 2;
                f += dd_fy;
            }
            x += 1;
            dd_fx += 2;
            f += dd_fx;

            if fill {
                self.span(frame, Vector::new(-x, y), 2 * x);
                self.span(frame, Vector::new(-x, -y), 2 * x);
                self.span(frame, Vector::new(-y, x), 2 * y);
                self.span(frame, Vector::new(-y, -x), 2 * y);
            } else {
                for at in [
                    (x, y),
                    (-x, y),
                    (x, -y),
                    (-x, -y),
                    (y, x),
                    (-y, x),
                    (y, -x),
                    (-y, -x),
                ] {
                    self.outline_pixel(frame, Vector::new(at.0, at.1));
                }
            }
        }
    }
}

impl Drawable for Circle {
    fn draw(&self, frame: &mut dyn Frame) {
        if self.radius < 1 {
            return;
        }
        if !self.background.is_transparent() {
            self.midpoint(frame, true);
        }
        self.midpoint(frame, false);
    }
}
