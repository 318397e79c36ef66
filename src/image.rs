// src/image.rs

//! Read-only pixel sources: the `Image` trait and the two in-memory photo
//! formats.

use crate::color::Color;
use crate::frame::Frame;
use crate::vector::Vector;

/// A rectangular, read-only source of pixels.
pub trait Image {
    fn size(&self) -> Vector;

    /// Reads a pixel that is known to lie within the image.
    fn checked_read(&self, position: Vector) -> Color;

    fn is_valid(&self, position: Vector) -> bool {
        position.is_within(self.size())
    }

    /// The pixel at `position`, or transparent outside the image.
    fn read(&self, position: Vector) -> Color {
        if self.is_valid(position) {
            self.checked_read(position)
        } else {
            Color::TRANSPARENT
        }
    }

    /// Writes every non-transparent pixel to `frame`, with the top-left
    /// corner of the image at `position`.
    fn draw(&self, frame: &mut dyn Frame, position: Vector) {
        let size = self.size();
        for y in 0..size.y {
            for x in 0..size.x {
                let p = Vector { x, y };
                let color = self.read(p);
                if !color.is_transparent() {
                    frame.write(position + p, color);
                }
            }
        }
    }
}

/// A color photo stored as 3 bytes (r, g, b) per pixel, row by row.
#[derive(Debug, Clone, Copy)]
pub struct RgbPhoto<'a> {
    size: Vector,
    data: &'a [u8],
}

impl<'a> RgbPhoto<'a> {
    pub const fn new(size: Vector, data: &'a [u8]) -> Self {
        RgbPhoto { size, data }
    }
}

impl Image for RgbPhoto<'_> {
    fn size(&self) -> Vector {
        self.size
    }

    fn checked_read(&self, position: Vector) -> Color {
        let base = 3 * (position.x as usize + position.y as usize * self.size.x as usize);
        match self.data.get(base..base + 3) {
            Some(&[r, g, b]) => Color::new(r as i32, g as i32, b as i32),
            _ => Color::TRANSPARENT,
        }
    }
}

/// A black and white photo stored as 1 bit per pixel, x fastest, least
/// significant bit first.
#[derive(Debug, Clone, Copy)]
pub struct BwPhoto<'a> {
    size: Vector,
    data: &'a [u8],
    foreground: Color,
    background: Color,
}

impl<'a> BwPhoto<'a> {
    /// A photo whose set bits read black and clear bits white.
    pub const fn new(size: Vector, data: &'a [u8]) -> Self {
        BwPhoto {
            size,
            data,
            foreground: Color::BLACK,
            background: Color::WHITE,
        }
    }

    pub const fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Whether the bit for `position` is set. Out-of-range bits read clear.
    pub fn bool_read(&self, position: Vector) -> bool {
        if !position.is_within(self.size) {
            return false;
        }
        let a = position.x as usize + position.y as usize * self.size.x as usize;
        self.data
            .get(a / 8)
            .map_or(false, |&byte| byte & (1u8 << (a % 8)) != 0)
    }
}

impl Image for BwPhoto<'_> {
    fn size(&self) -> Vector {
        self.size
    }

    fn checked_read(&self, position: Vector) -> Color {
        if self.bool_read(position) {
            self.foreground
        } else {
            self.background
        }
    }
}
