// src/font/mod.rs

//! Fonts: a mapping from printable ASCII characters to glyph bitmaps.
//!
//! `InlineFont` keeps every glyph side by side in a single black and white
//! strip, with a table of horizontal offsets into it. `CharImage` presents
//! one glyph as an `Image` so it can be drawn like any other picture.

mod builtin;

pub use builtin::default_font;

use crate::color::Color;
use crate::image::{BwPhoto, Image};
use crate::vector::Vector;

/// The first character covered by a font table.
pub const FIRST_CHAR: char = ' ';

/// The number of characters covered by a font table (`' '..='~'`).
pub const CHAR_COUNT: usize = 95;

/// A source of character glyphs.
pub trait Font {
    /// Whether every glyph has the size of a cell.
    fn is_fixed(&self) -> bool;

    /// The size of a character cell; its height is the line height.
    fn cell_size(&self) -> Vector;

    fn has(&self, c: char) -> bool;

    /// Whether pixel `p` of the glyph for `c` is set.
    fn read(&self, c: char, p: Vector) -> bool;

    /// The size of the glyph for `c`; zero width when the font lacks it.
    fn char_size(&self, c: char) -> Vector;
}

/// Position of `c` in a font table.
fn table_index(c: char) -> Option<usize> {
    let code = c as u32;
    let first = FIRST_CHAR as u32;
    if code >= first && code < first + CHAR_COUNT as u32 {
        Some((code - first) as usize)
    } else {
        None
    }
}

/// A font stored as one strip of glyphs.
///
/// `start[i]` is the x offset of the glyph for character `' ' + i` in the
/// strip, or -1 when the font has no such glyph. A proportional font takes
/// each glyph width from the distance to the next non-negative offset, so
/// the table needs one entry more than the number of characters. A glyph
/// with no later offset has zero width.
#[derive(Debug, Clone, Copy)]
pub struct InlineFont<'a> {
    fixed: bool,
    cell: Vector,
    start: &'a [i32],
    strip: BwPhoto<'a>,
}

impl<'a> InlineFont<'a> {
    pub const fn new(fixed: bool, cell: Vector, start: &'a [i32], strip: BwPhoto<'a>) -> Self {
        InlineFont {
            fixed,
            cell,
            start,
            strip,
        }
    }

    fn offset(&self, c: char) -> Option<i32> {
        let index = table_index(c)?;
        self.start.get(index).copied().filter(|&s| s >= 0)
    }
}

impl Font for InlineFont<'_> {
    fn is_fixed(&self) -> bool {
        self.fixed
    }

    fn cell_size(&self) -> Vector {
        self.cell
    }

    fn has(&self, c: char) -> bool {
        self.offset(c).is_some()
    }

    fn read(&self, c: char, p: Vector) -> bool {
        match self.offset(c) {
            Some(start) => self.strip.bool_read(p + Vector::new(start, 0)),
            None => false,
        }
    }

    fn char_size(&self, c: char) -> Vector {
        let Some(start) = self.offset(c) else {
            return Vector::new(0, self.cell.y as i32);
        };
        if self.fixed {
            return self.cell;
        }
        let width = table_index(c)
            .and_then(|i| self.start.get(i + 1..))
            .and_then(|rest| rest.iter().copied().find(|&s| s >= 0))
            .map_or(0, |next| (next - start).max(0));
        Vector::new(width, self.cell.y as i32)
    }
}

/// The image of a single character: set pixels in the foreground color,
/// the rest in the background color (transparent by default).
#[derive(Clone, Copy)]
pub struct CharImage<'a> {
    font: &'a dyn Font,
    c: char,
    size: Vector,
    foreground: Color,
    background: Color,
}

impl<'a> CharImage<'a> {
    pub fn new(font: &'a dyn Font, c: char) -> Self {
        CharImage {
            font,
            c,
            size: font.char_size(c),
            foreground: Color::BLACK,
            background: Color::TRANSPARENT,
        }
    }

    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }
}

impl Image for CharImage<'_> {
    fn size(&self) -> Vector {
        self.size
    }

    fn checked_read(&self, position: Vector) -> Color {
        if self.font.read(self.c, position) {
            self.foreground
        } else {
            self.background
        }
    }
}
