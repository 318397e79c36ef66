// src/text/mod.rs

//! Formatted text: layout options (`Format`) bound to a borrowed string
//! (`Text`), drawn glyph by glyph into a margin-inset area of a frame.

mod layout;

pub use layout::{line_chars, line_count, line_width, measure_line, LineMeasure, Spreader};

use crate::color::Color;
use crate::font::{default_font, CharImage, Font};
use crate::frame::{Frame, Subframe};
use crate::image::Image;
use crate::vector::Vector;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placement of text along one axis of its drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Against the left or top edge.
    #[default]
    Near,
    /// Against the right or bottom edge.
    Far,
    Centre,
    /// Stretched over the whole area by widening the gaps.
    Fill,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alignment::Near => "near",
            Alignment::Far => "far",
            Alignment::Centre => "centre",
            Alignment::Fill => "fill",
        };
        write!(f, "{}", name)
    }
}

/// Layout options for drawing text.
#[derive(Clone, Copy)]
pub struct Format<'a> {
    pub font: &'a dyn Font,
    pub horizontal: Alignment,
    pub vertical: Alignment,
    /// Break lines that are wider than the drawing area.
    pub wrap: bool,
    /// Extra pixels between glyphs (x) and between lines (y).
    pub spacing: Vector,
    pub top_left_margin: Vector,
    pub bottom_right_margin: Vector,
    pub foreground: Color,
    pub background: Color,
}

impl Default for Format<'static> {
    /// The default font, aligned top-left without wrapping, black on
    /// transparent, with 2 pixel margins all round.
    fn default() -> Self {
        Format::new(default_font())
    }
}

impl<'a> Format<'a> {
    pub fn new(font: &'a dyn Font) -> Self {
        Format {
            font,
            horizontal: Alignment::Near,
            vertical: Alignment::Near,
            wrap: false,
            spacing: Vector::ORIGIN,
            top_left_margin: Vector::new(2, 2),
            bottom_right_margin: Vector::new(2, 2),
            foreground: Color::BLACK,
            background: Color::TRANSPARENT,
        }
    }

    /// The same options with another font.
    pub fn with_font<'b>(&self, font: &'b dyn Font) -> Format<'b> {
        Format {
            font,
            horizontal: self.horizontal,
            vertical: self.vertical,
            wrap: self.wrap,
            spacing: self.spacing,
            top_left_margin: self.top_left_margin,
            bottom_right_margin: self.bottom_right_margin,
            foreground: self.foreground,
            background: self.background,
        }
    }

    pub fn with_alignment(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_spacing(mut self, spacing: Vector) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_margins(mut self, top_left: Vector, bottom_right: Vector) -> Self {
        self.top_left_margin = top_left;
        self.bottom_right_margin = bottom_right;
        self
    }

    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }
}

impl fmt::Display for Format<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ h={} v={} wrap={} sp={} tlm={} brm={} fg={} bg={} }}",
            self.horizontal,
            self.vertical,
            self.wrap,
            self.spacing,
            self.top_left_margin,
            self.bottom_right_margin,
            self.foreground,
            self.background
        )
    }
}

impl fmt::Debug for Format<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Format")
            .field("cell", &self.font.cell_size())
            .field("horizontal", &self.horizontal)
            .field("vertical", &self.vertical)
            .field("wrap", &self.wrap)
            .field("spacing", &self.spacing)
            .field("top_left_margin", &self.top_left_margin)
            .field("bottom_right_margin", &self.bottom_right_margin)
            .field("foreground", &self.foreground)
            .field("background", &self.background)
            .finish()
    }
}

/// A string together with the format to draw it in.
#[derive(Debug, Clone, Copy)]
pub struct Text<'a> {
    pub text: &'a str,
    pub format: Format<'a>,
}

impl<'a> Text<'a> {
    pub fn new(text: &'a str, format: Format<'a>) -> Self {
        Text { text, format }
    }

    /// Draws the text into `frame`, laid out in the area that starts at
    /// `position + top_left_margin` and ends `bottom_right_margin` before
    /// the far edge of the frame.
    pub fn draw(&self, frame: &mut dyn Frame, position: Vector) {
        let format = &self.format;
        let anchor = position + format.top_left_margin;
        let extent = (frame.size() - (anchor + format.bottom_right_margin)).max(Vector::ORIGIN);
        let mut area = Subframe::new(frame, anchor, extent);
        let bound = area.size();

        let cell = format.font.cell_size();
        let lines = line_count(self.text, bound.x as i32, format);
        let extra = (bound.y as i32 - lines as i32 * cell.y as i32).max(0);
        trace!(
            "Text::draw: {} lines in {}, {} spare rows, format {}",
            lines,
            bound,
            extra,
            format
        );

        let mut pen = Vector::ORIGIN;
        match format.vertical {
            Alignment::Far => pen.y += extra as i16,
            Alignment::Centre => pen.y += (extra / 2) as i16,
            _ => {}
        }
        let mut rows = Spreader::new(extra, lines as i32 + 1);
        let mut start = 0;
        while start < self.text.len() {
            if format.vertical == Alignment::Fill {
                pen += Vector::new(0, rows.next_adjust());
            }
            let rest = &self.text[start..];
            let line = measure_line(rest, bound.x as i32, format);
            self.draw_line(&mut area, pen, &rest[..line.len], &line, bound.x as i32);
            match line.next {
                Some(next) => {
                    start += next;
                    pen = (pen + cell + format.spacing).y_projection();
                }
                None => break,
            }
        }
    }

    fn draw_line(
        &self,
        area: &mut dyn Frame,
        mut pen: Vector,
        line: &str,
        measure: &LineMeasure,
        bound: i32,
    ) {
        let format = &self.format;
        let extra = (bound - measure.width).max(0);
        match format.horizontal {
            Alignment::Far => pen += Vector::new(extra, 0),
            Alignment::Centre => pen += Vector::new(extra / 2, 0),
            _ => {}
        }
        let mut gaps = Spreader::new(extra, measure.chars.saturating_sub(1) as i32);
        for (n, c) in line.chars().enumerate() {
            if format.horizontal == Alignment::Fill && n > 0 {
                pen += Vector::new(gaps.next_adjust(), 0);
            }
            let glyph = CharImage::new(format.font, c).with_colors(format.foreground, format.background);
            glyph.draw(area, pen);
            pen += Vector::new(glyph.size().x as i32 + format.spacing.x as i32, 0);
        }
    }
}

#[cfg(test)]
mod tests;
