// src/text/tests.rs

use super::*;
use crate::frame::Canvas;

fn bare() -> Format<'static> {
    Format::default().with_margins(Vector::ORIGIN, Vector::ORIGIN)
}

/// The x coordinates of black pixels in row `y`.
fn black_columns(canvas: &Canvas, y: i32) -> Vec<i16> {
    (0..Frame::size(canvas).x)
        .filter(|&x| canvas.pixel(Vector { x, y: y as i16 }) == Color::BLACK)
        .collect()
}

#[test_log::test]
fn test_spreader_carries_remainder() {
    let mut spreader = Spreader::new(20, 3);
    let adjusts: Vec<i32> = (0..3).map(|_| spreader.next_adjust()).collect();
    assert_eq!(adjusts, vec![6, 7, 7]);
    assert_eq!(adjusts.iter().sum::<i32>(), 20);
}

#[test_log::test]
fn test_spreader_without_slack() {
    let mut spreader = Spreader::new(0, 4);
    assert!((0..4).all(|_| spreader.next_adjust() == 0));
}

#[test_log::test]
fn test_line_count() {
    let format = bare();
    assert_eq!(line_count("", 100, &format), 1);
    assert_eq!(line_count("ab\ncd", 100, &format), 2);
    assert_eq!(line_count("abc\n", 100, &format), 2);
    assert_eq!(line_count("abcd", 12, &format), 1);
    assert_eq!(line_count("abcd", 12, &format.with_wrap(true)), 2);
    assert_eq!(line_count("abcd\nef", 12, &format.with_wrap(true)), 3);
}

#[test_log::test]
fn test_measure_wrapped_line_with_spacing() {
    let format = bare().with_wrap(true).with_spacing(Vector::new(1, 0));
    let line = measure_line("abc", 13, &format);
    assert_eq!(
        line,
        LineMeasure {
            width: 13,
            chars: 2,
            len: 2,
            next: Some(2),
        }
    );
    assert_eq!(line_width("abc", 13, &format), 13);
    assert_eq!(line_chars("abc", 13, &format), 2);
}

#[test_log::test]
fn test_measure_unwrapped_line_keeps_clipped_chars() {
    let format = bare().with_spacing(Vector::new(1, 0));
    let line = measure_line("abcd\nx", 13, &format);
    assert_eq!(line.width, 13);
    assert_eq!(line.chars, 2);
    assert_eq!(line.len, 4);
    assert_eq!(line.next, Some(5));
}

#[test_log::test]
fn test_oversized_glyph_gets_own_line() {
    let format = bare().with_wrap(true);
    let line = measure_line("ab", 3, &format);
    assert_eq!(line.chars, 1);
    assert_eq!(line.width, 3);
    assert_eq!(line.next, Some(1));
    assert_eq!(line_count("ab", 3, &format), 2);
    assert_eq!(line_count("a\nb", 3, &format), 2);
    assert_eq!(line_count("ab", 0, &format), 2);
}

#[test_log::test]
fn test_horizontal_alignment() {
    for (alignment, column) in [
        (Alignment::Near, 2),
        (Alignment::Far, 36),
        (Alignment::Centre, 19),
    ] {
        let mut canvas = Canvas::new(Vector::new(40, 20));
        let format = bare().with_alignment(alignment, Alignment::Near);
        Text::new("|", format).draw(&mut canvas, Vector::ORIGIN);
        assert_eq!(black_columns(&canvas, 3), vec![column], "{}", alignment);
    }
}

#[test_log::test]
fn test_fill_alignment_spreads_glyphs() {
    let mut canvas = Canvas::new(Vector::new(20, 10));
    let format = bare().with_alignment(Alignment::Fill, Alignment::Near);
    Text::new("||", format).draw(&mut canvas, Vector::ORIGIN);
    assert_eq!(black_columns(&canvas, 0), vec![2, 16]);
}

#[test_log::test]
fn test_vertical_alignment() {
    for (alignment, top) in [
        (Alignment::Near, 0),
        (Alignment::Far, 12),
        (Alignment::Centre, 6),
        (Alignment::Fill, 6),
    ] {
        let mut canvas = Canvas::new(Vector::new(10, 20));
        let format = bare().with_alignment(Alignment::Near, alignment);
        Text::new("|", format).draw(&mut canvas, Vector::ORIGIN);
        let rows: Vec<i32> = (0..20)
            .filter(|&y| !black_columns(&canvas, y).is_empty())
            .collect();
        assert_eq!(rows, (top..top + 7).collect::<Vec<_>>(), "{}", alignment);
    }
}

#[test_log::test]
fn test_vertical_fill_spreads_lines() {
    // 14 spare rows over 3 gaps: 4 above the first line, 5 between lines
    let mut canvas = Canvas::new(Vector::new(10, 30));
    let format = bare().with_alignment(Alignment::Near, Alignment::Fill);
    Text::new("|\n|", format).draw(&mut canvas, Vector::ORIGIN);
    let rows: Vec<i32> = (0..30)
        .filter(|&y| !black_columns(&canvas, y).is_empty())
        .collect();
    let expected: Vec<i32> = (4..=10).chain(17..=23).collect();
    assert_eq!(rows, expected);
    assert_eq!(black_columns(&canvas, 17), vec![2]);
}

#[test_log::test]
fn test_wrapped_text_breaks_where_drawn() {
    let mut canvas = Canvas::new(Vector::new(12, 20));
    let format = bare().with_wrap(true);
    Text::new("||||", format).draw(&mut canvas, Vector::ORIGIN);
    assert_eq!(black_columns(&canvas, 0), vec![2, 8]);
    assert_eq!(black_columns(&canvas, 8), vec![2, 8]);
    assert!(black_columns(&canvas, 16).is_empty());
}

#[test_log::test]
fn test_line_spacing_and_hard_breaks() {
    let mut canvas = Canvas::new(Vector::new(12, 30));
    let format = bare().with_spacing(Vector::new(0, 2));
    Text::new("|\n|", format).draw(&mut canvas, Vector::ORIGIN);
    assert_eq!(black_columns(&canvas, 0), vec![2]);
    assert!(black_columns(&canvas, 8).is_empty());
    assert_eq!(black_columns(&canvas, 10), vec![2]);
}

#[test_log::test]
fn test_margins_and_position() {
    let mut canvas = Canvas::new(Vector::new(20, 20));
    Text::new("|", Format::default()).draw(&mut canvas, Vector::new(1, 0));
    assert!(black_columns(&canvas, 1).is_empty());
    assert_eq!(black_columns(&canvas, 2), vec![5]);
}

#[test_log::test]
fn test_text_outside_frame_draws_nothing() {
    let mut canvas = Canvas::new(Vector::new(20, 20));
    Text::new("hello", Format::default()).draw(&mut canvas, Vector::new(30, 30));
    assert!(canvas.rows().flatten().all(|&c| c == Color::WHITE));
}

#[test_log::test]
fn test_glyph_background_is_painted() {
    let mut canvas = Canvas::new(Vector::new(20, 10));
    let format = bare().with_colors(Color::BLUE, Color::RED);
    Text::new("|", format).draw(&mut canvas, Vector::ORIGIN);
    assert_eq!(canvas.pixel(Vector::new(2, 0)), Color::BLUE);
    assert_eq!(canvas.pixel(Vector::new(0, 0)), Color::RED);
    assert_eq!(canvas.pixel(Vector::new(5, 7)), Color::RED);
    assert_eq!(canvas.pixel(Vector::new(6, 0)), Color::WHITE);
}

#[test_log::test]
fn test_format_display() {
    let shown = Format::default().to_string();
    assert!(shown.contains("tlm=(2,2)"));
    assert!(shown.contains("bg=(transparent)"));
    assert_eq!(Alignment::Centre.to_string(), "centre");
}
