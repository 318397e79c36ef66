// src/shapes/mod.rs

//! Drawable primitives: lines, rectangles and circles.
//!
//! Each primitive is a plain value (anchor position, colors, stroke width
//! and its own geometry) that can be drawn any number of times. Drawing
//! only issues `Frame::write` calls, relative to the anchor position.

mod circle;
mod line;
mod rectangle;

pub use circle::Circle;
pub use line::Line;
pub use rectangle::{Rectangle, Relief};

use crate::frame::Frame;

/// Something that can render itself onto a frame.
pub trait Drawable {
    fn draw(&self, frame: &mut dyn Frame);
}
