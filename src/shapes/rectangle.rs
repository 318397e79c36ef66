// src/shapes/rectangle.rs

use crate::color::Color;
use crate::frame::{Frame, Subframe};
use crate::shapes::{Drawable, Line};
use crate::vector::Vector;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the border of a rectangle is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relief {
    /// All sides in the foreground color.
    #[default]
    Flat,
    /// Top and left bright, bottom and right dark.
    Raised,
    /// Top and left dark, bottom and right bright.
    Sunken,
}

impl Relief {
    /// Raised becomes sunken and vice versa; flat stays flat.
    pub const fn flip(self) -> Relief {
        match self {
            Relief::Flat => Relief::Flat,
            Relief::Raised => Relief::Sunken,
            Relief::Sunken => Relief::Raised,
        }
    }
}

impl fmt::Display for Relief {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Relief::Flat => "flat",
            Relief::Raised => "raised",
            Relief::Sunken => "sunken",
        };
        write!(f, "{}", name)
    }
}

/// An axis-aligned rectangle with a border of `width` pixels and an
/// interior filled with the background color.
///
/// `size` is the far corner relative to `position`, so a size of `(9,9)`
/// covers the 10x10 pixels from `position` to `position + (9,9)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub position: Vector,
    pub size: Vector,
    pub foreground: Color,
    pub background: Color,
    pub width: u32,
    pub bright: Color,
    pub dark: Color,
    pub relief: Relief,
}

impl Rectangle {
    /// A flat black border, one pixel wide, with a transparent interior.
    pub const fn new(position: Vector, size: Vector) -> Self {
        Rectangle {
            position,
            size,
            foreground: Color::BLACK,
            background: Color::TRANSPARENT,
            width: 1,
            bright: Color::BLACK,
            dark: Color::BLACK,
            relief: Relief::Flat,
        }
    }

    /// Sets the foreground and derives the relief colors from it: bright
    /// is the foreground itself, dark a quarter of it.
    pub fn with_foreground(mut self, foreground: Color) -> Self {
        self.foreground = foreground;
        self.bright = foreground;
        self.dark = foreground / 4;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_relief(mut self, relief: Relief) -> Self {
        self.relief = relief;
        self
    }

    /// Overrides the relief colors; call after `with_foreground`.
    pub fn with_shades(mut self, bright: Color, dark: Color) -> Self {
        self.bright = bright;
        self.dark = dark;
        self
    }

    fn border_colors(&self) -> (Color, Color) {
        match self.relief {
            Relief::Flat => (self.foreground, self.foreground),
            Relief::Raised => (self.bright, self.dark),
            Relief::Sunken => (self.dark, self.bright),
        }
    }
}

/// Whether `v` points the same way as `direction` on both axes.
fn same_quadrant(v: Vector, direction: Vector) -> bool {
    (v.x as i32 * direction.x as i32) > 0 && (v.y as i32 * direction.y as i32) > 0
}

impl Drawable for Rectangle {
    fn draw(&self, frame: &mut dyn Frame) {
        if self.size.x == 0 || self.size.y == 0 {
            trace!("Rectangle::draw: empty size {}", self.size);
            return;
        }
        let (near, far) = self.border_colors();
        let direction = self.size.direction();
        let width = self.width.min(i16::MAX as u32) as i32;

        for i in 0..width {
            let s = direction * i;
            let d = self.size - s * 2;
            // rings of a border wider than half the rectangle would turn
            // inside out
            if (d.x as i32 * direction.x as i32) < 0 || (d.y as i32 * direction.y as i32) < 0 {
                break;
            }
            let corner = self.position + s;
            Line::new(corner, d.x_projection())
                .with_color(near)
                .draw(frame);
            Line::new(corner + d.x_projection(), d.y_projection())
                .with_color(far)
                .draw(frame);
            Line::new(corner + d, -d.x_projection())
                .with_color(far)
                .draw(frame);
            Line::new(corner + d.y_projection(), -d.y_projection())
                .with_color(near)
                .draw(frame);
        }

        let margin = direction * width;
        let inner = (self.size + direction) - margin * 2;
        if !same_quadrant(inner, direction) {
            trace!("Rectangle::draw: border leaves no interior");
            return;
        }
        Subframe::new(frame, self.position + margin, inner).clear(self.background);
    }
}
