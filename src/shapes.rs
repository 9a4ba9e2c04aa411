//! Shape types
//!
//! Each shape knows its element name and how to write its own attributes
//! and closing syntax. [`ShapeKind`] is the closed set a document stores.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::style::{StyleAttrs, Styled};
use crate::types::Point;
use crate::writer::SvgWriter;

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// SVG element name
    fn tag(&self) -> &'static str;

    /// Write everything after `<tag `: attributes, then `/>` or
    /// `>content</tag>`.
    fn write_body(&self, w: &mut SvgWriter<'_>) -> fmt::Result;
}

/// Every shape a document can hold.
#[enum_dispatch(Shape)]
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Circle,
    Polyline,
    Text,
}

macro_rules! impl_styled {
    ($($ty:ty),*) => {
        $(
            impl Styled for $ty {
                fn style(&self) -> &StyleAttrs { &self.style }
                fn style_mut(&mut self) -> &mut StyleAttrs { &mut self.style }
            }
        )*
    };
}

impl_styled!(Circle, Polyline, Text);

// ============================================================================
// Circle
// ============================================================================

/// A circle shape
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub style: StyleAttrs,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: Point::default(),
            radius: 1.0,
            style: StyleAttrs::default(),
        }
    }
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center(mut self, center: impl Into<Point>) -> Self {
        self.center = center.into();
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

impl Shape for Circle {
    fn tag(&self) -> &'static str {
        "circle"
    }

    fn write_body(&self, w: &mut SvgWriter<'_>) -> fmt::Result {
        w.num_attr("cx", self.center.x)?;
        w.num_attr("cy", self.center.y)?;
        w.num_attr("r", self.radius)?;
        self.style.write_attrs(w)?;
        w.raw("/>")
    }
}

// ============================================================================
// Polyline
// ============================================================================

/// An open path through a sequence of points
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub style: StyleAttrs,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex. Duplicates are kept.
    pub fn add_point(mut self, point: impl Into<Point>) -> Self {
        self.points.push(point.into());
        self
    }
}

impl Shape for Polyline {
    fn tag(&self) -> &'static str {
        "polyline"
    }

    fn write_body(&self, w: &mut SvgWriter<'_>) -> fmt::Result {
        w.raw("points=\"")?;
        for p in &self.points {
            w.num(p.x)?;
            w.raw(",")?;
            w.num(p.y)?;
            w.raw(" ")?;
        }
        w.raw("\" ")?;
        self.style.write_attrs(w)?;
        w.raw("/>")
    }
}

// ============================================================================
// Text
// ============================================================================

/// A text label anchored at a point
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub point: Point,
    pub offset: Point,
    pub font_size: u32,
    pub font_family: Option<String>,
    pub data: String,
    pub style: StyleAttrs,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            point: Point::default(),
            offset: Point::default(),
            font_size: 1,
            font_family: None,
            data: String::new(),
            style: StyleAttrs::default(),
        }
    }
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_point(mut self, point: impl Into<Point>) -> Self {
        self.point = point.into();
        self
    }

    /// Written as `dx`/`dy`.
    pub fn with_offset(mut self, offset: impl Into<Point>) -> Self {
        self.offset = offset.into();
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }
}

impl Shape for Text {
    fn tag(&self) -> &'static str {
        "text"
    }

    fn write_body(&self, w: &mut SvgWriter<'_>) -> fmt::Result {
        w.num_attr("x", self.point.x)?;
        w.num_attr("y", self.point.y)?;
        w.num_attr("dx", self.offset.x)?;
        w.num_attr("dy", self.offset.y)?;
        w.int_attr("font-size", self.font_size)?;
        if let Some(family) = &self.font_family {
            w.str_attr("font-family", family)?;
        }
        self.style.write_attrs(w)?;
        w.raw(">")?;
        w.text(&self.data)?;
        w.raw("</text>")
    }
}
