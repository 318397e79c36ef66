// src/vector.rs

//! Defines `Vector`, the integer coordinate pair used for positions,
//! displacements and sizes on a pixel grid.
//!
//! By convention `(0,0)` is the top-left pixel of a frame. Coordinates are
//! 16-bit; arithmetic is done in `i32` and truncated back, so results wrap
//! rather than panic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A relative or absolute location on an integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: i16,
    pub y: i16,
}

/// Returns -1, 0 or 1.
const fn sign(v: i16) -> i16 {
    (v > 0) as i16 - (v < 0) as i16
}

/// Whether `v` lies in `[0, bound)` or, for a negative bound, in `(bound, 0]`.
const fn axis_within(v: i16, bound: i16) -> bool {
    (v >= 0 && v < bound) || (v <= 0 && v > bound)
}

impl Vector {
    /// The vector (0,0).
    pub const ORIGIN: Vector = Vector { x: 0, y: 0 };

    /// The vector (1,1).
    pub const ONE: Vector = Vector { x: 1, y: 1 };

    /// Creates a vector; values outside the 16-bit range are truncated.
    pub const fn new(x: i32, y: i32) -> Self {
        Vector {
            x: x as i16,
            y: y as i16,
        }
    }

    /// The signum of each component.
    pub const fn direction(self) -> Vector {
        Vector {
            x: sign(self.x),
            y: sign(self.y),
        }
    }

    /// The vector mirrored into the first quadrant.
    pub const fn abs(self) -> Vector {
        Vector::new((self.x as i32).abs(), (self.y as i32).abs())
    }

    /// The vector with y set to 0.
    pub const fn x_projection(self) -> Vector {
        Vector { x: self.x, y: 0 }
    }

    /// The vector with x set to 0.
    pub const fn y_projection(self) -> Vector {
        Vector { x: 0, y: self.y }
    }

    /// The vector mirrored in the y=x line (x and y swapped).
    pub const fn mirrored(self) -> Vector {
        Vector {
            x: self.y,
            y: self.x,
        }
    }

    /// Reports whether `self` lies within the box spanned by the origin and
    /// `bound`: the edges through the origin are included, the edges through
    /// `bound` are excluded. Works for bounds in any quadrant.
    pub const fn is_within(self, bound: Vector) -> bool {
        axis_within(self.x, bound.x) && axis_within(self.y, bound.y)
    }

    /// The componentwise maximum of two vectors.
    pub fn max(self, other: Vector) -> Vector {
        Vector {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// The componentwise maximum of all `vectors`, never below the origin.
    pub fn max_of<I: IntoIterator<Item = Vector>>(vectors: I) -> Vector {
        vectors.into_iter().fold(Vector::ORIGIN, Vector::max)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x as i32 + rhs.x as i32, self.y as i32 + rhs.y as i32)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x as i32 - rhs.x as i32, self.y as i32 - rhs.y as i32)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-(self.x as i32), -(self.y as i32))
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, n: i32) -> Vector {
        Vector::new(self.x as i32 * n, self.y as i32 * n)
    }
}

impl Mul<Vector> for i32 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

/// Componentwise product.
impl Mul for Vector {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        Vector::new(self.x as i32 * rhs.x as i32, self.y as i32 * rhs.y as i32)
    }
}

impl MulAssign<i32> for Vector {
    fn mul_assign(&mut self, n: i32) {
        *self = *self * n;
    }
}

/// Division by zero leaves the vector unchanged.
impl Div<i32> for Vector {
    type Output = Vector;

    fn div(self, n: i32) -> Vector {
        if n == 0 {
            return self;
        }
        Vector::new(self.x as i32 / n, self.y as i32 / n)
    }
}

impl DivAssign<i32> for Vector {
    fn div_assign(&mut self, n: i32) {
        *self = *self / n;
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
