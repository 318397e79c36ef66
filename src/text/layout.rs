// src/text/layout.rs

//! Line measurement and space distribution for text layout.
//!
//! Counting lines and drawing them both go through `measure_line`, so the
//! line breaks used to compute vertical alignment are the ones that are
//! actually drawn.

use crate::text::Format;

/// The extent of one formatted line at the start of some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMeasure {
    /// Width in pixels of the glyphs (and the spacing between them) that
    /// fit within the bound.
    pub width: i32,
    /// Number of characters that fit within the bound.
    pub chars: usize,
    /// Byte length of the line, excluding any terminating `'\n'`.
    pub len: usize,
    /// Byte offset at which the next line starts, if there is one.
    pub next: Option<usize>,
}

/// Measures the first line of `text` for a drawing area `bound` pixels wide.
///
/// The line ends at a `'\n'`. With wrapping enabled it also ends before the
/// first character that would cross the bound, but always holds at least
/// one character. Without wrapping, characters past the bound still belong
/// to the line (they are drawn clipped) but add nothing to `width` or
/// `chars`.
pub fn measure_line(text: &str, bound: i32, format: &Format<'_>) -> LineMeasure {
    let mut width = 0;
    let mut chars = 0;
    let mut clipped = false;
    for (offset, c) in text.char_indices() {
        if c == '\n' {
            return LineMeasure {
                width,
                chars,
                len: offset,
                next: Some(offset + 1),
            };
        }
        if clipped {
            continue;
        }
        let gap = if chars > 0 { format.spacing.x as i32 } else { 0 };
        let cost = format.font.char_size(c).x as i32 + gap;
        if width + cost > bound {
            if !format.wrap {
                clipped = true;
                continue;
            }
            if chars > 0 {
                return LineMeasure {
                    width,
                    chars,
                    len: offset,
                    next: Some(offset),
                };
            }
            // a glyph wider than the whole area gets a line of its own
            let end = offset + c.len_utf8();
            let rest = &text[end..];
            let next = if rest.starts_with('\n') {
                Some(end + 1)
            } else if rest.is_empty() {
                None
            } else {
                Some(end)
            };
            return LineMeasure {
                width: cost.min(bound).max(0),
                chars: 1,
                len: end,
                next,
            };
        }
        width += cost;
        chars += 1;
    }
    LineMeasure {
        width,
        chars,
        len: text.len(),
        next: None,
    }
}

/// Width in pixels of the first line of `text`.
pub fn line_width(text: &str, bound: i32, format: &Format<'_>) -> i32 {
    measure_line(text, bound, format).width
}

/// Number of characters of the first line of `text` that fit the bound.
pub fn line_chars(text: &str, bound: i32, format: &Format<'_>) -> usize {
    measure_line(text, bound, format).chars
}

/// Number of lines needed to draw `text`: one, plus one per hard or soft
/// line break.
pub fn line_count(text: &str, bound: i32, format: &Format<'_>) -> usize {
    let mut count = 1;
    let mut start = 0;
    while let Some(next) = measure_line(&text[start..], bound, format).next {
        count += 1;
        start += next;
    }
    count
}

/// Spreads `extra` pixels over `gaps` gaps, carrying the rounding
/// remainder from one gap to the next so the adjustments sum to `extra`.
#[derive(Debug, Clone, Copy)]
pub struct Spreader {
    extra: i32,
    gaps: i32,
    missing: i32,
}

impl Spreader {
    pub fn new(extra: i32, gaps: i32) -> Self {
        Spreader {
            extra,
            gaps: gaps.max(0),
            missing: 0,
        }
    }

    /// The adjustment to apply at the next gap.
    pub fn next_adjust(&mut self) -> i32 {
        self.missing += self.extra;
        let adjust = self.missing / self.gaps.max(1);
        self.missing -= adjust * self.gaps;
        adjust
    }
}
