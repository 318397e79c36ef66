// src/frame/mod.rs

//! The `Frame` trait: a fixed-size, bounds-checked pixel write surface.
//!
//! A concrete frame supplies `checked_write` (and, optionally, a faster
//! `checked_clear`); everything else comes from the provided methods. The
//! decorator frames in the submodules wrap one or more borrowed frames and
//! transform or redirect the writes they receive.

mod buffer;
mod canvas;
mod filter;
mod snapshot;
mod subframe;
mod tee;

pub use buffer::Buffer;
pub use canvas::Canvas;
pub use filter::{Filter, FilterFn, WriterFn};
pub use snapshot::Snapshot;
pub use subframe::Subframe;
pub use tee::Tee;

use crate::color::Color;
use crate::vector::Vector;

/// State shared by every frame: its fixed size and the most recently used
/// background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameBase {
    size: Vector,
    background: Color,
}

impl FrameBase {
    /// A frame of `size` pixels with a white background.
    pub const fn new(size: Vector) -> Self {
        FrameBase {
            size,
            background: Color::WHITE,
        }
    }

    pub const fn size(&self) -> Vector {
        self.size
    }

    pub const fn background(&self) -> Color {
        self.background
    }

    pub(crate) fn set_background(&mut self, color: Color) {
        self.background = color;
    }
}

/// A rectangular pixel surface.
///
/// Writes outside `[0, size)` are silently dropped; nothing here can fail.
pub trait Frame {
    fn base(&self) -> &FrameBase;

    fn base_mut(&mut self) -> &mut FrameBase;

    /// Writes a pixel that is known to lie within the frame.
    fn checked_write(&mut self, position: Vector, color: Color);

    /// Fills the whole frame with the current background color.
    fn checked_clear(&mut self) {
        fill_pixels(self);
    }

    /// Pushes any pending writes to the underlying surface.
    fn flush(&mut self) {}

    /// Maps a position in this frame to the coordinates of the frame it
    /// decorates.
    fn translate_outfrom(&self, position: Vector) -> Vector {
        position
    }

    /// The inverse of `translate_outfrom`.
    fn translate_into(&self, position: Vector) -> Vector {
        position
    }

    fn size(&self) -> Vector {
        self.base().size()
    }

    fn background(&self) -> Color {
        self.base().background()
    }

    fn is_valid(&self, position: Vector) -> bool {
        position.is_within(self.size())
    }

    fn write(&mut self, position: Vector, color: Color) {
        if self.is_valid(position) {
            self.checked_write(position, color);
        }
    }

    /// Records `color` as the background and fills the frame with it.
    /// A transparent clear leaves the contents untouched.
    fn clear(&mut self, color: Color) {
        self.base_mut().set_background(color);
        if !color.is_transparent() {
            self.checked_clear();
        }
    }
}

/// Writes the background color to every pixel, walking rows and columns in
/// the direction of the (possibly negative) frame size.
pub fn fill_pixels<F: Frame + ?Sized>(frame: &mut F) {
    let size = frame.size();
    let step = size.direction();
    let background = frame.background();
    let mut y: i16 = 0;
    while y != size.y {
        let mut x: i16 = 0;
        while x != size.x {
            frame.write(Vector { x, y }, background);
            x += step.x;
        }
        y += step.y;
    }
}

#[cfg(test)]
mod tests;
