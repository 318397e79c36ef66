// src/lib.rs

//! A small 2D rendering engine for pixel displays.
//!
//! Drawing happens on a [`Frame`]: a fixed-size, bounds-checked pixel
//! surface. Decorator frames wrap other frames to buffer, record, fan out,
//! filter or remap the writes they receive, and drawables (lines,
//! rectangles, circles, images and text) render themselves through
//! `Frame::write`.

pub mod color;
pub mod config;
pub mod font;
pub mod frame;
pub mod image;
pub mod shapes;
pub mod text;
pub mod vector;

pub use color::{Color, ParseColorError};
pub use font::{default_font, CharImage, Font, InlineFont};
pub use frame::{Buffer, Canvas, Filter, Frame, FrameBase, Snapshot, Subframe, Tee};
pub use image::{BwPhoto, Image, RgbPhoto};
pub use shapes::{Circle, Drawable, Line, Rectangle, Relief};
pub use text::{Alignment, Format, Text};
pub use vector::Vector;
