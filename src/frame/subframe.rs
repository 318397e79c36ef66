// src/frame/subframe.rs

use crate::color::Color;
use crate::frame::{Frame, FrameBase};
use crate::vector::Vector;
use log::trace;

/// A rectangular part of a parent frame.
///
/// The region starts at `top_left` in the parent and extends by `direction`;
/// a negative component mirrors that axis, so local x grows leftwards (or
/// local y upwards) in the parent. A swapped subframe additionally exchanges
/// x and y of the mapped point. Its size is still the absolute direction.
pub struct Subframe<'a> {
    base: FrameBase,
    master: &'a mut dyn Frame,
    top_left: Vector,
    step: Vector,
    swap: bool,
}

impl<'a> Subframe<'a> {
    pub fn new(master: &'a mut dyn Frame, top_left: Vector, direction: Vector) -> Self {
        Subframe::build(master, top_left, direction, false)
    }

    /// A subframe whose translated coordinates have x and y exchanged.
    pub fn swapped(master: &'a mut dyn Frame, top_left: Vector, direction: Vector) -> Self {
        Subframe::build(master, top_left, direction, true)
    }

    fn build(master: &'a mut dyn Frame, top_left: Vector, direction: Vector, swap: bool) -> Self {
        let size = direction.abs();
        trace!(
            "Subframe: top_left {}, direction {}, swap {}, size {}",
            top_left,
            direction,
            swap,
            size
        );
        Subframe {
            base: FrameBase::new(size),
            master,
            top_left,
            step: direction.direction(),
            swap,
        }
    }
}

impl Frame for Subframe<'_> {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn checked_write(&mut self, position: Vector, color: Color) {
        let outer = self.translate_outfrom(position);
        self.master.write(outer, color);
    }

    fn flush(&mut self) {
        self.master.flush();
    }

    fn translate_outfrom(&self, position: Vector) -> Vector {
        let outer = self.top_left + position * self.step;
        if self.swap {
            outer.mirrored()
        } else {
            outer
        }
    }

    fn translate_into(&self, position: Vector) -> Vector {
        let outer = if self.swap { position.mirrored() } else { position };
        // step components are -1, 0 or 1, so multiplying again undoes them
        (outer - self.top_left) * self.step
    }
}
