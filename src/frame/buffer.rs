// src/frame/buffer.rs

use crate::color::Color;
use crate::frame::{Frame, FrameBase};
use crate::vector::Vector;
use log::{debug, trace};

/// Collects writes in memory and forwards them to the target on `flush`.
///
/// Only non-transparent buffered pixels reach the target, so a flush after
/// a handful of writes touches only those pixels.
pub struct Buffer<'a> {
    base: FrameBase,
    target: &'a mut dyn Frame,
    pixels: Vec<Color>,
}

impl<'a> Buffer<'a> {
    /// A buffer covering the whole of `target`.
    pub fn new(target: &'a mut dyn Frame) -> Self {
        let size = target.size();
        let area = size.x.unsigned_abs() as usize * size.y.unsigned_abs() as usize;
        trace!("Buffer::new: size {} ({} pixels)", size, area);
        Buffer {
            base: FrameBase::new(size),
            target,
            pixels: vec![Color::TRANSPARENT; area],
        }
    }

    // Sizes may be negative on either axis, so index by magnitude.
    fn index(&self, position: Vector) -> usize {
        let width = self.base.size().x.unsigned_abs() as usize;
        position.x.unsigned_abs() as usize + position.y.unsigned_abs() as usize * width
    }

    /// The number of buffered pixels that the next flush will write.
    pub fn pending(&self) -> usize {
        self.pixels.iter().filter(|c| !c.is_transparent()).count()
    }
}

impl Frame for Buffer<'_> {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn checked_write(&mut self, position: Vector, color: Color) {
        // transparent already marks an untouched pixel
        if color.is_transparent() {
            return;
        }
        let index = self.index(position);
        self.pixels[index] = color;
    }

    fn flush(&mut self) {
        let size = self.base.size();
        let step = size.direction();
        let mut written = 0usize;
        let mut y: i16 = 0;
        while y != size.y {
            let mut x: i16 = 0;
            while x != size.x {
                let p = Vector { x, y };
                let index = self.index(p);
                let color = self.pixels[index];
                if !color.is_transparent() {
                    self.target.write(p, color);
                    self.pixels[index] = Color::TRANSPARENT;
                    written += 1;
                }
                x += step.x;
            }
            y += step.y;
        }
        debug!("Buffer::flush: wrote {} pixels", written);
        self.target.flush();
    }
}
