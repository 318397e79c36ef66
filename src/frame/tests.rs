// src/frame/tests.rs

use super::*;

/// Records every pixel write it receives, in order.
struct Recorder {
    base: FrameBase,
    writes: Vec<(Vector, Color)>,
    flushes: usize,
}

impl Recorder {
    fn new(size: Vector) -> Self {
        Recorder {
            base: FrameBase::new(size),
            writes: Vec::new(),
            flushes: 0,
        }
    }
}

impl Frame for Recorder {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn checked_write(&mut self, position: Vector, color: Color) {
        self.writes.push((position, color));
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

#[test_log::test]
fn test_out_of_bounds_writes_are_dropped() {
    let mut frame = Recorder::new(Vector::new(4, 3));
    for p in [
        Vector::new(-1, 0),
        Vector::new(0, -1),
        Vector::new(4, 0),
        Vector::new(0, 3),
        Vector::new(100, 100),
    ] {
        frame.write(p, Color::RED);
    }
    assert!(frame.writes.is_empty());
    frame.write(Vector::new(3, 2), Color::RED);
    assert_eq!(frame.writes, vec![(Vector::new(3, 2), Color::RED)]);
}

#[test_log::test]
fn test_background_starts_white() {
    let frame = Recorder::new(Vector::new(2, 2));
    assert_eq!(frame.background(), Color::WHITE);
}

#[test_log::test]
fn test_clear_visits_every_pixel_with_background() {
    let mut frame = Recorder::new(Vector::new(3, 2));
    frame.clear(Color::GREEN);
    assert_eq!(frame.background(), Color::GREEN);
    assert_eq!(frame.writes.len(), 6);
    assert_eq!(frame.writes[0].0, Vector::new(0, 0));
    assert_eq!(frame.writes[1].0, Vector::new(1, 0));
    assert_eq!(frame.writes[5].0, Vector::new(2, 1));
    assert!(frame.writes.iter().all(|&(_, c)| c == Color::GREEN));
}

#[test_log::test]
fn test_transparent_clear_only_records_background() {
    let mut frame = Recorder::new(Vector::new(3, 2));
    frame.clear(Color::TRANSPARENT);
    assert!(frame.writes.is_empty());
    assert!(frame.background().is_transparent());
}

#[test_log::test]
fn test_clear_follows_negative_size() {
    let mut frame = Recorder::new(Vector::new(-2, 2));
    frame.clear(Color::BLUE);
    let visited: Vec<Vector> = frame.writes.iter().map(|&(p, _)| p).collect();
    assert_eq!(
        visited,
        vec![
            Vector::new(0, 0),
            Vector::new(-1, 0),
            Vector::new(0, 1),
            Vector::new(-1, 1),
        ]
    );
}

#[test_log::test]
fn test_default_translation_is_identity() {
    let frame = Recorder::new(Vector::new(2, 2));
    let p = Vector::new(-7, 9);
    assert_eq!(frame.translate_into(p), p);
    assert_eq!(frame.translate_outfrom(p), p);
}

#[test_log::test]
fn test_decorators_propagate_flush() {
    let mut frame = Recorder::new(Vector::new(4, 4));
    {
        let mut sub = Subframe::new(&mut frame, Vector::ONE, Vector::new(2, 2));
        let mut buffer = Buffer::new(&mut sub);
        buffer.write(Vector::ORIGIN, Color::RED);
        buffer.flush();
    }
    assert_eq!(frame.flushes, 1);
    assert_eq!(frame.writes, vec![(Vector::ONE, Color::RED)]);

    {
        let mut snapshot = Snapshot::new(&mut frame);
        let mut filter = Filter::new(&mut snapshot);
        filter.flush();
    }
    assert_eq!(frame.flushes, 2);
}

#[test_log::test]
fn test_buffer_over_negative_sized_frame() {
    let mut frame = Recorder::new(Vector::new(-3, 2));
    let mut buffer = Buffer::new(&mut frame);
    buffer.write(Vector::new(-2, 1), Color::RED);
    buffer.write(Vector::new(1, 1), Color::RED);
    assert_eq!(buffer.pending(), 1);
    buffer.flush();
    drop(buffer);
    assert_eq!(frame.writes, vec![(Vector::new(-2, 1), Color::RED)]);
}
