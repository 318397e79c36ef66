// src/color.rs

//! Defines `Color` (8-bit RGB plus a transparency flag), its arithmetic,
//! the basic named colors, and parsing from strings.
//!
//! The color model is emissive: adding colors (or multiplying by an integer
//! larger than 1) moves towards white, subtracting moves towards black.
//! Transparency is recessive when colors are combined: the result of an
//! addition, subtraction or mix is transparent only when both operands are.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A color in 3 x 8 bit RGB format, or transparent.
///
/// The channels of a transparent color are stored as zero and carry no
/// meaning; all transparent colors compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    transparent: bool,
    r: u8,
    g: u8,
    b: u8,
}

/// Clips an intermediate channel value to 0..=255 (0 when transparent).
const fn clip(value: i32, transparent: bool) -> u8 {
    if transparent || value < 0 {
        0
    } else if value > 0xFF {
        0xFF
    } else {
        value as u8
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::new(0xFF, 0, 0);
    pub const GREEN: Color = Color::new(0, 0xFF, 0);
    pub const BLUE: Color = Color::new(0, 0, 0xFF);
    pub const GRAY: Color = Color::new(0x80, 0x80, 0x80);
    pub const YELLOW: Color = Color::new(0xFF, 0xFF, 0);
    pub const CYAN: Color = Color::new(0, 0xFF, 0xFF);
    pub const MAGENTA: Color = Color::new(0xFF, 0, 0xFF);
    pub const TRANSPARENT: Color = Color::with_transparency(0, 0, 0, true);
    pub const VIOLET: Color = Color::from_rgb(0xEE82EE);
    pub const SIENNA: Color = Color::from_rgb(0xA0522D);
    pub const PURPLE: Color = Color::from_rgb(0x800080);
    pub const PINK: Color = Color::from_rgb(0xFFC8CB);
    pub const SILVER: Color = Color::from_rgb(0xC0C0C0);
    pub const BROWN: Color = Color::from_rgb(0xA52A2A);
    pub const SALMON: Color = Color::from_rgb(0xFA8072);

    /// Creates an opaque color; each component is clipped to 0..=255.
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Color::with_transparency(r, g, b, false)
    }

    const fn with_transparency(r: i32, g: i32, b: i32, transparent: bool) -> Self {
        Color {
            transparent,
            r: clip(r, transparent),
            g: clip(g, transparent),
            b: clip(b, transparent),
        }
    }

    /// Creates a color from a `0xRRGGBB` value; `from_rgb(0xFF00FF)` is magenta.
    pub const fn from_rgb(rgb: u32) -> Self {
        Color::new(
            ((rgb >> 16) & 0xFF) as i32,
            ((rgb >> 8) & 0xFF) as i32,
            (rgb & 0xFF) as i32,
        )
    }

    pub const fn is_transparent(&self) -> bool {
        self.transparent
    }

    /// Red component; meaningful only for opaque colors.
    pub const fn red(&self) -> u8 {
        self.r
    }

    /// Green component; meaningful only for opaque colors.
    pub const fn green(&self) -> u8 {
        self.g
    }

    /// Blue component; meaningful only for opaque colors.
    pub const fn blue(&self) -> u8 {
        self.b
    }

    /// The `0xRRGGBB` value of this color (0 for transparent).
    pub const fn to_rgb(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// The average of this color and `other`.
    pub const fn mixed_with(&self, other: Color) -> Color {
        Color::with_transparency(
            (self.r as i32 + other.r as i32) / 2,
            (self.g as i32 + other.g as i32) / 2,
            (self.b as i32 + other.b as i32) / 2,
            self.transparent && other.transparent,
        )
    }

    /// Looks up one of the basic named colors (lowercase name).
    pub fn named(name: &str) -> Option<Color> {
        let color = match name {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "red" => Color::RED,
            "green" => Color::GREEN,
            "blue" => Color::BLUE,
            "gray" | "grey" => Color::GRAY,
            "yellow" => Color::YELLOW,
            "cyan" => Color::CYAN,
            "magenta" => Color::MAGENTA,
            "transparent" => Color::TRANSPARENT,
            "violet" => Color::VIOLET,
            "sienna" => Color::SIENNA,
            "purple" => Color::PURPLE,
            "pink" => Color::PINK,
            "silver" => Color::SILVER,
            "brown" => Color::BROWN,
            "salmon" => Color::SALMON,
            _ => return None,
        };
        Some(color)
    }
}

impl Default for Color {
    /// Black, as for the `0x000000` value.
    fn default() -> Self {
        Color::BLACK
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        if self.transparent {
            other.transparent
        } else {
            !other.transparent && self.r == other.r && self.g == other.g && self.b == other.b
        }
    }
}

impl Eq for Color {}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::with_transparency(
            self.r as i32 + rhs.r as i32,
            self.g as i32 + rhs.g as i32,
            self.b as i32 + rhs.b as i32,
            self.transparent && rhs.transparent,
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::with_transparency(
            self.r as i32 - rhs.r as i32,
            self.g as i32 - rhs.g as i32,
            self.b as i32 - rhs.b as i32,
            self.transparent && rhs.transparent,
        )
    }
}

impl SubAssign for Color {
    fn sub_assign(&mut self, rhs: Color) {
        *self = *self - rhs;
    }
}

/// The inverse color.
impl Neg for Color {
    type Output = Color;

    fn neg(self) -> Color {
        Color::with_transparency(
            0xFF - self.r as i32,
            0xFF - self.g as i32,
            0xFF - self.b as i32,
            self.transparent,
        )
    }
}

impl Mul<i32> for Color {
    type Output = Color;

    fn mul(self, n: i32) -> Color {
        Color::with_transparency(
            self.r as i32 * n,
            self.g as i32 * n,
            self.b as i32 * n,
            self.transparent,
        )
    }
}

impl MulAssign<i32> for Color {
    fn mul_assign(&mut self, n: i32) {
        *self = *self * n;
    }
}

/// Division works towards black; division by zero leaves the color unchanged.
impl Div<i32> for Color {
    type Output = Color;

    fn div(self, n: i32) -> Color {
        if n == 0 {
            return self;
        }
        Color::with_transparency(
            self.r as i32 / n,
            self.g as i32 / n,
            self.b as i32 / n,
            self.transparent,
        )
    }
}

impl DivAssign<i32> for Color {
    fn div_assign(&mut self, n: i32) {
        *self = *self / n;
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.transparent {
            write!(f, "(transparent)")
        } else {
            write!(f, "({:02X},{:02X},{:02X})", self.r, self.g, self.b)
        }
    }
}

/// Error returned when a string does not describe a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex notation with a digit count other than six.
    BadLength(usize),
    /// Hex notation containing a non-hex character.
    BadDigit(String),
    /// Neither hex notation nor a known color name.
    UnknownName(String),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::BadLength(n) => {
                write!(f, "expected 6 hex digits, found {}", n)
            }
            ParseColorError::BadDigit(s) => write!(f, "invalid hex color '{}'", s),
            ParseColorError::UnknownName(s) => write!(f, "unknown color name '{}'", s),
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Accepts `#rrggbb`, `0xrrggbb`, bare `rrggbb`, a basic color name, or
/// `transparent`.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"));
        match hex {
            Some(digits) => {
                if digits.len() != 6 {
                    return Err(ParseColorError::BadLength(digits.len()));
                }
                u32::from_str_radix(digits, 16)
                    .map(Color::from_rgb)
                    .map_err(|_| ParseColorError::BadDigit(s.to_string()))
            }
            None => {
                if let Some(color) = Color::named(&s.to_ascii_lowercase()) {
                    return Ok(color);
                }
                if s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit()) {
                    if let Ok(rgb) = u32::from_str_radix(s, 16) {
                        return Ok(Color::from_rgb(rgb));
                    }
                }
                Err(ParseColorError::UnknownName(s.to_string()))
            }
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        if color.is_transparent() {
            "transparent".to_string()
        } else {
            format!("#{:06x}", color.to_rgb())
        }
    }
}
