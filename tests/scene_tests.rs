use core_gfx::config::Config;
use core_gfx::{
    default_font, Buffer, Canvas, Circle, Color, Drawable, Filter, Font, Format, Frame, Image,
    Line, Rectangle, Relief, Snapshot, Subframe, Tee, Text, Vector,
};

fn count(canvas: &Canvas, color: Color) -> usize {
    canvas.rows().flatten().filter(|&&c| c == color).count()
}

#[test]
fn test_buffered_scene_reaches_canvas_only_on_flush() {
    let mut canvas = Canvas::new(Vector::new(32, 32));
    {
        let mut buffer = Buffer::new(&mut canvas);
        Rectangle::new(Vector::new(1, 1), Vector::new(9, 9))
            .with_background(Color::RED)
            .with_width(2)
            .draw(&mut buffer);
        Circle::new(Vector::new(20, 20), 5).draw(&mut buffer);
        assert!(buffer.pending() > 0);
    }
    assert_eq!(count(&canvas, Color::WHITE), 32 * 32);

    let mut buffer = Buffer::new(&mut canvas);
    Rectangle::new(Vector::new(1, 1), Vector::new(9, 9))
        .with_background(Color::RED)
        .with_width(2)
        .draw(&mut buffer);
    buffer.flush();
    assert_eq!(buffer.pending(), 0);
    drop(buffer);
    assert_eq!(count(&canvas, Color::RED), 36);
    assert_eq!(count(&canvas, Color::BLACK), 64);
    assert_eq!(canvas.pixel(Vector::new(3, 3)), Color::RED);
}

#[test]
fn test_snapshot_records_what_tee_fans_out() {
    let mut screen = Canvas::new(Vector::new(16, 16));
    let mut mirror = Canvas::new(Vector::new(8, 8));
    let mut snapshot = Snapshot::new(&mut screen);
    {
        let mut tee = Tee::new(&mut snapshot, &mut mirror);
        Line::new(Vector::new(0, 4), Vector::new(16, 0))
            .with_color(Color::GREEN)
            .draw(&mut tee);
        tee.flush();
    }
    for x in 0..16 {
        assert_eq!(snapshot.read(Vector::new(x, 4)), Color::GREEN);
    }
    assert!(snapshot.read(Vector::new(0, 5)).is_transparent());

    let mut copy = Canvas::new(Vector::new(16, 16));
    snapshot.draw(&mut copy, Vector::ORIGIN);
    drop(snapshot);
    assert_eq!(count(&screen, Color::GREEN), 16);
    assert_eq!(count(&copy, Color::GREEN), 16);
    assert_eq!(count(&mirror, Color::GREEN), 8);
}

#[test]
fn test_mirrored_panels_are_reflections() {
    let mut canvas = Canvas::new(Vector::new(41, 20));
    {
        let mut left = Subframe::new(&mut canvas, Vector::ORIGIN, Vector::new(20, 20));
        Line::new(Vector::new(2, 3), Vector::new(10, 4)).draw(&mut left);
    }
    {
        let mut right = Subframe::new(&mut canvas, Vector::new(40, 0), Vector::new(-20, 20));
        Line::new(Vector::new(2, 3), Vector::new(10, 4)).draw(&mut right);
    }
    for y in 0..20 {
        for x in 0..20 {
            assert_eq!(
                canvas.pixel(Vector::new(x, y)),
                canvas.pixel(Vector::new(40 - x, y)),
                "at ({},{})",
                x,
                y
            );
        }
    }
    assert_eq!(count(&canvas, Color::BLACK), 20);
}

#[test]
fn test_filter_duplicates_pixels_at_double_scale() {
    let mut canvas = Canvas::new(Vector::new(20, 20));
    {
        let mut zoom = Filter::new(&mut canvas).with_writer(|frame, p, color, _| {
            for d in [Vector::ORIGIN, Vector::new(1, 0), Vector::new(0, 1), Vector::ONE] {
                frame.write(p * 2 + d, color);
            }
        });
        Rectangle::new(Vector::ORIGIN, Vector::new(4, 4)).draw(&mut zoom);
    }
    // a 5x5 ring of 16 pixels, each now a 2x2 block
    assert_eq!(count(&canvas, Color::BLACK), 64);
    assert_eq!(canvas.pixel(Vector::new(9, 9)), Color::BLACK);
    assert_eq!(canvas.pixel(Vector::new(4, 4)), Color::WHITE);
}

#[test]
fn test_text_in_raised_panel() {
    let mut canvas = Canvas::new(Vector::new(60, 20));
    Rectangle::new(Vector::ORIGIN, Vector::new(59, 19))
        .with_foreground(Color::WHITE)
        .with_relief(Relief::Sunken)
        .draw(&mut canvas);
    Text::new("Hi!", Format::default()).draw(&mut canvas, Vector::ORIGIN);

    let font = default_font();
    let glyphs: i32 = "Hi!".chars().map(|c| font.char_size(c).x as i32).sum();
    assert_eq!(glyphs, 18);
    // 'H' has a full-height left stem at the margin
    for y in 2..9 {
        assert_eq!(canvas.pixel(Vector::new(2, y)), Color::BLACK);
    }
    assert_eq!(canvas.pixel(Vector::new(0, 0)), Color::new(63, 63, 63));
}

#[test]
fn test_config_drives_format() {
    let config = Config::from_json(
        r#"{ "text": { "horizontal": "far", "vertical": "near", "wrap": false,
                       "top_left_margin": { "x": 0, "y": 0 },
                       "bottom_right_margin": { "x": 0, "y": 0 } } }"#,
    )
    .unwrap();
    let mut canvas = Canvas::new(Vector::new(30, 10));
    Text::new("|", config.text.format()).draw(&mut canvas, Vector::ORIGIN);
    assert_eq!(canvas.pixel(Vector::new(26, 0)), Color::BLACK);
    assert_eq!(count(&canvas, Color::BLACK), 7);
    assert_eq!(Image::size(&canvas), Frame::size(&canvas));
}
