// src/frame/canvas.rs

//! An in-memory frame that owns its pixels.

use crate::color::Color;
use crate::frame::{Frame, FrameBase};
use crate::image::Image;
use crate::vector::Vector;
use log::trace;

/// A frame backed by a row-major array of colors, initially white.
///
/// Like a display, a canvas has no transparent pixels: a transparent write
/// leaves the pixel as it was.
#[derive(Debug, Clone)]
pub struct Canvas {
    base: FrameBase,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a white canvas; negative dimensions are treated as zero.
    pub fn new(size: Vector) -> Self {
        let size = size.max(Vector::ORIGIN);
        let area = size.x as usize * size.y as usize;
        trace!("Canvas::new: size {} ({} pixels)", size, area);
        Canvas {
            base: FrameBase::new(size),
            pixels: vec![Color::WHITE; area],
        }
    }

    fn index(&self, position: Vector) -> usize {
        position.x as usize + position.y as usize * self.base.size().x as usize
    }

    /// The color at `position`, or transparent outside the canvas.
    pub fn pixel(&self, position: Vector) -> Color {
        if Frame::is_valid(self, position) {
            self.pixels[self.index(position)]
        } else {
            Color::TRANSPARENT
        }
    }

    /// The rows of the canvas, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.base.size().x.max(1) as usize)
    }
}

impl Frame for Canvas {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn checked_write(&mut self, position: Vector, color: Color) {
        if color.is_transparent() {
            return;
        }
        let index = self.index(position);
        self.pixels[index] = color;
    }

    fn checked_clear(&mut self) {
        let background = self.base.background();
        self.pixels.fill(background);
    }
}

impl Image for Canvas {
    fn size(&self) -> Vector {
        self.base.size()
    }

    fn checked_read(&self, position: Vector) -> Color {
        self.pixels[self.index(position)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_starts_white() {
        let canvas = Canvas::new(Vector::new(3, 2));
        assert_eq!(canvas.pixels.len(), 6);
        assert!(canvas.pixels.iter().all(|&c| c == Color::WHITE));
        assert_eq!(Frame::background(&canvas), Color::WHITE);
    }

    #[test_log::test]
    fn test_transparent_write_keeps_pixel() {
        let mut canvas = Canvas::new(Vector::new(3, 2));
        canvas.write(Vector::new(2, 1), Color::RED);
        canvas.write(Vector::new(2, 1), Color::TRANSPARENT);
        assert_eq!(canvas.pixel(Vector::new(2, 1)), Color::RED);
        assert_eq!(canvas.read(Vector::new(2, 1)), Color::RED);
    }

    #[test_log::test]
    fn test_negative_size_is_empty() {
        let mut canvas = Canvas::new(Vector::new(-4, 5));
        assert_eq!(Frame::size(&canvas), Vector::new(0, 5));
        canvas.write(Vector::ORIGIN, Color::RED);
        canvas.clear(Color::BLUE);
        assert_eq!(canvas.pixel(Vector::ORIGIN), Color::TRANSPARENT);
    }

    #[test_log::test]
    fn test_rows() {
        let mut canvas = Canvas::new(Vector::new(2, 3));
        canvas.write(Vector::new(1, 2), Color::BLUE);
        let rows: Vec<&[Color]> = canvas.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[Color::WHITE, Color::BLUE][..]);
    }
}
