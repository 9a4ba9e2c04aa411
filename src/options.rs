//! Render configuration

use crate::format::NumberFormat;

/// Settings that control how a document is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub number_format: NumberFormat,
    /// Escape XML special characters in text content and string attributes.
    /// When off, strings are written byte for byte.
    pub escape: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::Shortest,
            escape: true,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print numbers with `sig_figs` significant figures instead of the
    /// shortest exact form.
    pub fn with_precision(mut self, sig_figs: u8) -> Self {
        self.number_format = NumberFormat::Significant(sig_figs);
        self
    }

    /// Write text content and attribute strings without escaping.
    /// The caller is then responsible for well-formed output.
    pub fn raw_text(mut self) -> Self {
        self.escape = false;
        self
    }
}
