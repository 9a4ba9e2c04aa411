//! The document container and its serializer

use std::fmt;
use std::io;

use crate::errors::RenderError;
use crate::log::{debug, trace};
use crate::options::RenderOptions;
use crate::shapes::{Shape, ShapeKind};
use crate::writer::SvgWriter;

/// XML declaration and opening `<svg>` tag written before any shape.
pub const SVG_HEADER: &str =
    r#"<?xml version="1.0" encoding="UTF-8" ?><svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;

/// Closing tag written after the last shape.
pub const SVG_FOOTER: &str = "</svg>";

/// An ordered collection of shapes that renders to an SVG document.
///
/// Shapes are owned by the document from the moment they are added and are
/// rendered in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    shapes: Vec<ShapeKind>,
    options: RenderOptions,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            shapes: Vec::new(),
            options,
        }
    }

    /// Append a shape.
    pub fn add(&mut self, shape: impl Into<ShapeKind>) -> &mut Self {
        self.shapes.push(shape.into());
        self
    }

    /// Append a shape if there is one; `None` is ignored.
    pub fn add_opt(&mut self, shape: Option<impl Into<ShapeKind>>) -> &mut Self {
        match shape {
            Some(shape) => self.add(shape),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[ShapeKind] {
        &self.shapes
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Write the document to a `fmt::Write` sink.
    pub fn render_fmt<W: fmt::Write>(&self, out: &mut W) -> Result<(), RenderError> {
        self.write_svg(out)?;
        Ok(())
    }

    /// Write the document to an `io::Write` sink.
    ///
    /// The first I/O error from the sink is returned as [`RenderError::Io`].
    pub fn render<W: io::Write>(&self, out: &mut W) -> Result<(), RenderError> {
        let mut sink = IoSink { inner: out, error: None };
        match self.write_svg(&mut sink) {
            Ok(()) => Ok(()),
            Err(e) => match sink.error.take() {
                Some(io_err) => Err(RenderError::Io(io_err)),
                None => Err(RenderError::Format(e)),
            },
        }
    }

    /// Render into a new `String`.
    pub fn to_svg_string(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_fmt(&mut out)?;
        Ok(out)
    }

    fn write_svg(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        debug!(shapes = self.shapes.len(), "rendering document");
        let mut w = SvgWriter::new(out, self.options);
        w.raw(SVG_HEADER)?;
        for shape in &self.shapes {
            trace!(tag = shape.tag(), "writing element");
            w.raw("<")?;
            w.raw(shape.tag())?;
            w.raw(" ")?;
            shape.write_body(&mut w)?;
        }
        w.raw(SVG_FOOTER)?;
        debug!("document rendered");
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_svg(f)
    }
}

impl<S: Into<ShapeKind>> Extend<S> for Document {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.shapes.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<ShapeKind>> FromIterator<S> for Document {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut doc = Document::new();
        doc.extend(iter);
        doc
    }
}

/// Adapts an `io::Write` to `fmt::Write`, keeping the real I/O error.
struct IoSink<'a, W: io::Write> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Polyline, Text};
    use crate::style::Styled;
    use crate::types::Point;

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.to_string(), format!("{}{}", SVG_HEADER, SVG_FOOTER));
    }

    #[test]
    fn add_chains_and_counts() {
        let mut doc = Document::new();
        doc.add(Circle::new()).add(Polyline::new()).add(Text::new());
        assert_eq!(doc.len(), 3);
        let tags: Vec<_> = doc.shapes().iter().map(|s| s.tag()).collect();
        assert_eq!(tags, ["circle", "polyline", "text"]);
    }

    #[test]
    fn extend_with_none_is_noop() {
        let mut doc = Document::new();
        doc.extend(None::<Circle>);
        assert!(doc.is_empty());
        doc.extend(Some(Circle::new()));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn document_owns_its_copy() {
        let circle = Circle::new().with_radius(2.0);
        let mut doc = Document::new();
        doc.add(circle.clone());
        let changed = circle.with_radius(9.0).with_fill_color("red");
        assert_eq!(changed.radius, 9.0);
        assert!(doc.to_string().contains(r#"r="2" fill="none""#));
    }

    #[test]
    fn render_paths_agree() {
        let doc: Document = vec![
            Circle::new().with_center(Point::new(1.0, 2.0)),
            Circle::new().with_radius(0.5),
        ]
        .into_iter()
        .collect();

        let mut bytes = Vec::new();
        doc.render(&mut bytes).unwrap();
        let mut fmt_out = String::new();
        doc.render_fmt(&mut fmt_out).unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap(), fmt_out);
        assert_eq!(doc.to_svg_string().unwrap(), fmt_out);
        assert_eq!(doc.to_string(), fmt_out);
    }

    #[test]
    fn render_is_repeatable() {
        let mut doc = Document::new();
        doc.add(Text::new().with_data("again"));
        assert_eq!(doc.to_string(), doc.to_string());
    }

    #[test]
    fn io_errors_propagate() {
        let mut doc = Document::new();
        doc.add(Circle::new());
        let err = doc.render(&mut FailingWriter).unwrap_err();
        match err {
            RenderError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn options_reach_shapes() {
        let mut doc = Document::with_options(RenderOptions::new().with_precision(2));
        doc.add(Circle::new().with_radius(1.0 / 3.0));
        assert!(doc.to_string().contains(r#"r="0.33""#));
    }

    #[test]
    fn fixed_precision_keeps_subnormal_coordinates() {
        let mut doc = Document::with_options(RenderOptions::new().with_precision(6));
        doc.add(Circle::new().with_center(Point::new(1e-310, 2.0)));
        let svg = doc.to_string();
        assert!(svg.contains(r#"cx="1e-310" cy="2""#), "{svg}");

        let mut doc = Document::with_options(RenderOptions::new().with_precision(20));
        doc.add(Circle::new().with_radius(1e-295));
        let svg = doc.to_string();
        assert!(!svg.contains("NaN"), "{svg}");
    }

    #[test]
    fn add_opt_skips_none() {
        let mut doc = Document::new();
        doc.add_opt(None::<Text>)
            .add_opt(Some(Text::new().with_data("kept")))
            .add_opt(None::<Polyline>);
        assert_eq!(doc.len(), 1);
        assert!(doc.to_string().contains(">kept</text>"));
    }

    #[test]
    fn document_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Document>();
    }
}
