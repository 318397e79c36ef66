// src/frame/snapshot.rs

use crate::color::Color;
use crate::frame::{Frame, FrameBase};
use crate::image::Image;
use crate::vector::Vector;
use log::trace;

/// A write-through frame that also records every non-transparent pixel, so
/// the picture drawn so far can be read back later (for instance to export
/// it).
pub struct Snapshot<'a> {
    base: FrameBase,
    target: &'a mut dyn Frame,
    pixels: Vec<Color>,
}

impl<'a> Snapshot<'a> {
    pub fn new(target: &'a mut dyn Frame) -> Self {
        let size = target.size();
        let area = size.x.unsigned_abs() as usize * size.y.unsigned_abs() as usize;
        trace!("Snapshot::new: size {} ({} pixels)", size, area);
        Snapshot {
            base: FrameBase::new(size),
            target,
            pixels: vec![Color::TRANSPARENT; area],
        }
    }

    fn index(&self, position: Vector) -> usize {
        let width = self.base.size().x.unsigned_abs() as usize;
        position.x.unsigned_abs() as usize + position.y.unsigned_abs() as usize * width
    }
}

impl Frame for Snapshot<'_> {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn checked_write(&mut self, position: Vector, color: Color) {
        if !color.is_transparent() {
            let index = self.index(position);
            self.pixels[index] = color;
        }
        self.target.write(position, color);
    }

    fn flush(&mut self) {
        self.target.flush();
    }
}

/// The recorded pixels; positions never written read transparent.
impl Image for Snapshot<'_> {
    fn size(&self) -> Vector {
        self.base.size()
    }

    fn checked_read(&self, position: Vector) -> Color {
        self.pixels[self.index(position)]
    }
}
