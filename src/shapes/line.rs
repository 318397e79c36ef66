// src/shapes/line.rs

use crate::color::Color;
use crate::frame::Frame;
use crate::shapes::Drawable;
use crate::vector::Vector;

/// A straight line from `position` extending by `size`.
///
/// `size` is the extent of the line, not its end point: the pixel at
/// `position + size` is not drawn. Lines wider than one pixel are drawn as
/// runs perpendicular to the major axis, centred on the ideal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub position: Vector,
    pub size: Vector,
    pub foreground: Color,
    pub width: u32,
}

impl Line {
    /// A black line, one pixel wide.
    pub const fn new(position: Vector, size: Vector) -> Self {
        Line {
            position,
            size,
            foreground: Color::BLACK,
            width: 1,
        }
    }

    pub const fn with_color(mut self, foreground: Color) -> Self {
        self.foreground = foreground;
        self
    }

    pub const fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}

impl Drawable for Line {
    fn draw(&self, frame: &mut dyn Frame) {
        if self.width < 1 || self.foreground.is_transparent() {
            return;
        }
        let width = self.width.min(i16::MAX as u32) as i32;
        let i0 = -(width / 2);
        let i1 = width + i0;

        // Bresenham, walking the major axis; steep lines swap x and y.
        let (mut x1, mut y1) = (self.size.x as i32, self.size.y as i32);
        let steep = y1.abs() >= x1.abs();
        let offset = if steep {
            std::mem::swap(&mut x1, &mut y1);
            Vector::new(1, 0)
        } else {
            Vector::new(0, 1)
        };
        let xstep = if x1 < 0 { -1 } else { 1 };
        let ystep = if y1 < 0 { -1 } else { 1 };
        let dx = x1.abs();
        let dy = y1.abs();
        let two_dy = 2 * dy;
        let two_dy_two_dx = two_dy - 2 * dx;
        let mut error = two_dy - dx;

        let mut y = 0;
        let mut x = 0;
        while x != x1 {
            let at = if steep {
                Vector::new(y, x)
            } else {
                Vector::new(x, y)
            };
            for i in i0..i1 {
                frame.write(self.position + at + offset * i, self.foreground);
            }
            if error > 0 {
                error += two_dy_two_dx;
                y += ystep;
            } else {
                error += two_dy;
            }
            x += xstep;
        }
    }
}
