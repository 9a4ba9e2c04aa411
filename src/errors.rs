//! Error types for document rendering
//!
//! Building shapes cannot fail. The only failure is the output sink refusing
//! a write.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that occur while writing a document to a sink
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("failed to write SVG output")]
    #[diagnostic(code(svgdoc::render::io))]
    Io(#[from] std::io::Error),

    #[error("formatter rejected SVG output")]
    #[diagnostic(code(svgdoc::render::format))]
    Format(#[from] std::fmt::Error),
}
