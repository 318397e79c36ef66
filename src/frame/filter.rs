// src/frame/filter.rs

use crate::color::Color;
use crate::frame::{Frame, FrameBase};
use crate::vector::Vector;
use log::trace;

/// Maps a color before it is forwarded.
pub type FilterFn<'a> = Box<dyn Fn(Color) -> Color + 'a>;

/// Writes one (already filtered) pixel to the target; receives the target,
/// the position, the color and the filter's current background.
pub type WriterFn<'a> = Box<dyn FnMut(&mut dyn Frame, Vector, Color, Color) + 'a>;

/// Passes writes through a color transform on their way to one target.
///
/// The writer hook replaces the single-pixel write, which allows effects
/// such as pixel duplication.
pub struct Filter<'a> {
    base: FrameBase,
    target: &'a mut dyn Frame,
    filter: FilterFn<'a>,
    writer: WriterFn<'a>,
}

impl<'a> Filter<'a> {
    /// An identity filter.
    pub fn new(target: &'a mut dyn Frame) -> Self {
        let size = target.size();
        trace!("Filter::new: size {}", size);
        Filter {
            base: FrameBase::new(size),
            target,
            filter: Box::new(|c: Color| c),
            writer: Box::new(|frame: &mut dyn Frame, position: Vector, color: Color, _: Color| {
                frame.write(position, color)
            }),
        }
    }

    pub fn with_filter(mut self, filter: impl Fn(Color) -> Color + 'a) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn with_writer(
        mut self,
        writer: impl FnMut(&mut dyn Frame, Vector, Color, Color) + 'a,
    ) -> Self {
        self.writer = Box::new(writer);
        self
    }
}

impl Frame for Filter<'_> {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn checked_write(&mut self, position: Vector, color: Color) {
        let color = (self.filter)(color);
        let background = self.base.background();
        (self.writer)(&mut *self.target, position, color, background);
    }

    fn checked_clear(&mut self) {
        let background = (self.filter)(self.base.background());
        self.base.set_background(background);
        self.target.clear(background);
    }

    fn flush(&mut self) {
        self.target.flush();
    }
}
