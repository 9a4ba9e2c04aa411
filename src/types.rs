//! Geometric primitives and color values.

use std::fmt;

/// Color name used for every unset fill and stroke.
pub const NONE_COLOR: &str = "none";

/// A point in user space
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// An explicit RGB triple.
///
/// Channels are conventionally in `0..=255` but are never clamped; whatever
/// is stored is what gets written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Rgb {
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Rgb { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// A paint value for `fill` and `stroke`.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// No value at all. Written as `"none"`.
    Unset,
    /// A color keyword such as `red`, or the `none` sentinel
    Named(String),
    Rgb(Rgb),
}

impl Color {
    /// The `none` color, which is also the default.
    pub fn none() -> Self {
        Color::Named(NONE_COLOR.to_string())
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::none()
    }
}

/// Unquoted SVG text for the color.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Unset => f.write_str(NONE_COLOR),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(rgb) => write!(f, "{}", rgb),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color::Named(name)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<(i32, i32, i32)> for Color {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Color::Rgb(Rgb::new(r, g, b))
    }
}
