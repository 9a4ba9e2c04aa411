//! Stroke and fill attributes shared by every shape

use std::fmt;

use crate::format::escape_attr;
use crate::log::warn;
use crate::types::Color;
use crate::writer::SvgWriter;

/// Presentation attributes common to all shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleAttrs {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub stroke_linecap: Option<String>,
    pub stroke_linejoin: Option<String>,
}

impl Default for StyleAttrs {
    fn default() -> Self {
        Self {
            fill: Color::none(),
            stroke: Color::none(),
            stroke_width: 1.0,
            stroke_linecap: None,
            stroke_linejoin: None,
        }
    }
}

impl StyleAttrs {
    /// Write the style attributes, each followed by a space.
    ///
    /// Order is fixed: `fill`, `stroke`, `stroke-width`, then `stroke-linecap`
    /// and `stroke-linejoin` only when set.
    pub(crate) fn write_attrs(&self, w: &mut SvgWriter<'_>) -> fmt::Result {
        write_color(w, "fill", &self.fill)?;
        write_color(w, "stroke", &self.stroke)?;
        w.num_attr("stroke-width", self.stroke_width)?;
        if let Some(cap) = &self.stroke_linecap {
            w.str_attr("stroke-linecap", cap)?;
        }
        if let Some(join) = &self.stroke_linejoin {
            w.str_attr("stroke-linejoin", join)?;
        }
        Ok(())
    }
}

fn write_color(w: &mut SvgWriter<'_>, name: &str, color: &Color) -> fmt::Result {
    match color {
        Color::Unset => {
            warn!(attribute = name, "unset color written as none");
            write!(w.out, "{}=\"none\" ", name)
        }
        Color::Named(value) if w.options.escape => {
            write!(w.out, "{}=\"{}\" ", name, escape_attr(value))
        }
        Color::Named(value) => write!(w.out, "{}=\"{}\" ", name, value),
        Color::Rgb(rgb) => write!(w.out, "{}=\"{}\" ", name, rgb),
    }
}

/// Fluent setters for shapes that carry [`StyleAttrs`].
///
/// Every setter consumes the shape and hands it back, so style and
/// shape-specific setters chain in any order:
///
/// ```
/// use svgdoc::{Circle, Point, Styled};
///
/// let circle = Circle::new()
///     .with_fill_color("red")
///     .with_center(Point::new(5.0, 10.0))
///     .with_stroke_width(2.0);
/// assert_eq!(circle.style().stroke_width, 2.0);
/// ```
pub trait Styled: Sized {
    fn style(&self) -> &StyleAttrs;

    fn style_mut(&mut self) -> &mut StyleAttrs;

    fn with_fill_color(mut self, color: impl Into<Color>) -> Self {
        self.style_mut().fill = color.into();
        self
    }

    fn with_stroke_color(mut self, color: impl Into<Color>) -> Self {
        self.style_mut().stroke = color.into();
        self
    }

    /// No validation; zero and negative widths are written as given.
    fn with_stroke_width(mut self, width: f64) -> Self {
        self.style_mut().stroke_width = width;
        self
    }

    fn with_stroke_line_cap(mut self, linecap: impl Into<String>) -> Self {
        self.style_mut().stroke_linecap = Some(linecap.into());
        self
    }

    fn with_stroke_line_join(mut self, linejoin: impl Into<String>) -> Self {
        self.style_mut().stroke_linejoin = Some(linejoin.into());
        self
    }
}
