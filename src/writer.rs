//! Attribute-level output helpers used by every shape.

use std::fmt::{self, Write};

use crate::format::{escape_attr, escape_text};
use crate::options::RenderOptions;

/// A text sink paired with the options that govern how values are printed.
pub struct SvgWriter<'a> {
    pub out: &'a mut dyn Write,
    pub options: RenderOptions,
}

impl<'a> SvgWriter<'a> {
    pub fn new(out: &'a mut dyn Write, options: RenderOptions) -> Self {
        Self { out, options }
    }

    pub fn raw(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }

    pub fn num(&mut self, value: f64) -> fmt::Result {
        self.options.number_format.write(&mut *self.out, value)
    }

    /// `name="value" ` with the number printed per [`RenderOptions::number_format`].
    pub fn num_attr(&mut self, name: &str, value: f64) -> fmt::Result {
        write!(self.out, "{}=\"", name)?;
        self.num(value)?;
        self.out.write_str("\" ")
    }

    /// `name="value" ` for an integer attribute.
    pub fn int_attr(&mut self, name: &str, value: impl fmt::Display) -> fmt::Result {
        write!(self.out, "{}=\"{}\" ", name, value)
    }

    /// `name="value" ` for a free-form string attribute.
    pub fn str_attr(&mut self, name: &str, value: &str) -> fmt::Result {
        if self.options.escape {
            write!(self.out, "{}=\"{}\" ", name, escape_attr(value))
        } else {
            write!(self.out, "{}=\"{}\" ", name, value)
        }
    }

    /// Character data between tags.
    pub fn text(&mut self, content: &str) -> fmt::Result {
        if self.options.escape {
            self.out.write_str(&escape_text(content))
        } else {
            self.out.write_str(content)
        }
    }
}
