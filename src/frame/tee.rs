// src/frame/tee.rs

use crate::color::Color;
use crate::frame::{Frame, FrameBase};
use crate::vector::Vector;
use log::trace;

const SLOTS: usize = 4;

/// Fans every write, clear and flush out to two, three or four frames.
///
/// The tee is as large as the largest target on each axis; writes are still
/// bounds-checked by each target, so a position that lies outside a smaller
/// target only reaches the others.
pub struct Tee<'a> {
    base: FrameBase,
    targets: [Option<&'a mut dyn Frame>; SLOTS],
}

impl<'a> Tee<'a> {
    pub fn new(a: &'a mut dyn Frame, b: &'a mut dyn Frame) -> Self {
        Tee::from_slots([Some(a), Some(b), None, None])
    }

    pub fn with_three(a: &'a mut dyn Frame, b: &'a mut dyn Frame, c: &'a mut dyn Frame) -> Self {
        Tee::from_slots([Some(a), Some(b), Some(c), None])
    }

    pub fn with_four(
        a: &'a mut dyn Frame,
        b: &'a mut dyn Frame,
        c: &'a mut dyn Frame,
        d: &'a mut dyn Frame,
    ) -> Self {
        Tee::from_slots([Some(a), Some(b), Some(c), Some(d)])
    }

    fn from_slots(targets: [Option<&'a mut dyn Frame>; SLOTS]) -> Self {
        let size = Vector::max_of(targets.iter().flatten().map(|t| t.size()));
        trace!(
            "Tee: {} targets, size {}",
            targets.iter().flatten().count(),
            size
        );
        Tee {
            base: FrameBase::new(size),
            targets,
        }
    }

    fn each_target(&mut self, mut f: impl FnMut(&mut dyn Frame)) {
        for target in self.targets.iter_mut().flatten() {
            f(&mut **target);
        }
    }
}

impl Frame for Tee<'_> {
    fn base(&self) -> &FrameBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FrameBase {
        &mut self.base
    }

    fn checked_write(&mut self, position: Vector, color: Color) {
        self.each_target(|t| t.write(position, color));
    }

    fn checked_clear(&mut self) {
        let background = self.base.background();
        self.each_target(|t| t.clear(background));
    }

    fn flush(&mut self) {
        self.each_target(|t| t.flush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Canvas;

    #[test_log::test]
    fn test_size_is_componentwise_max() {
        let mut a = Canvas::new(Vector::new(5, 5));
        let mut b = Canvas::new(Vector::new(8, 3));
        let mut tee = Tee::new(&mut a, &mut b);
        assert_eq!(tee.size(), Vector::new(8, 5));

        tee.write(Vector::new(6, 4), Color::RED);
        tee.write(Vector::new(6, 2), Color::BLUE);
        tee.write(Vector::new(1, 1), Color::GREEN);
        drop(tee);

        assert!(a.rows().flatten().all(|&c| c != Color::RED && c != Color::BLUE));
        assert!(b.rows().flatten().all(|&c| c != Color::RED));
        assert_eq!(b.pixel(Vector::new(6, 2)), Color::BLUE);
        assert_eq!(a.pixel(Vector::new(1, 1)), Color::GREEN);
        assert_eq!(b.pixel(Vector::new(1, 1)), Color::GREEN);
    }

    #[test_log::test]
    fn test_clear_fans_out() {
        let mut a = Canvas::new(Vector::new(2, 2));
        let mut b = Canvas::new(Vector::new(3, 1));
        let mut c = Canvas::new(Vector::new(1, 1));
        let mut tee = Tee::with_three(&mut a, &mut b, &mut c);
        tee.clear(Color::YELLOW);
        drop(tee);
        for canvas in [&a, &b, &c] {
            assert!(canvas.rows().flatten().all(|&p| p == Color::YELLOW));
            assert_eq!(canvas.background(), Color::YELLOW);
        }
    }

    #[test_log::test]
    fn test_transparent_clear_is_not_forwarded() {
        let mut a = Canvas::new(Vector::new(2, 2));
        let mut b = Canvas::new(Vector::new(2, 2));
        let mut tee = Tee::new(&mut a, &mut b);
        tee.clear(Color::TRANSPARENT);
        assert!(tee.background().is_transparent());
        drop(tee);
        assert_eq!(a.background(), Color::WHITE);
    }
}
