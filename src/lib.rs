//! Build SVG documents from typed shapes.
//!
//! ```
//! use svgdoc::{Circle, Document, Point, Polyline, Styled, Text};
//!
//! let mut doc = Document::new();
//! doc.add(
//!     Circle::new()
//!         .with_center(Point::new(5.0, 10.0))
//!         .with_radius(3.0),
//! )
//! .add(
//!     Polyline::new()
//!         .add_point((0.0, 0.0))
//!         .add_point((1.0, 1.0))
//!         .with_stroke_color("black"),
//! )
//! .add(Text::new().with_point((1.0, 2.0)).with_font_size(12).with_data("hi"));
//!
//! let svg = doc.to_string();
//! assert!(svg.starts_with("<?xml"));
//! assert!(svg.ends_with("</svg>"));
//! ```

pub mod document;
pub mod errors;
pub mod format;
pub mod log;
pub mod options;
pub mod shapes;
pub mod style;
pub mod types;
pub mod writer;

pub use document::Document;
pub use errors::RenderError;
pub use format::NumberFormat;
pub use options::RenderOptions;
pub use shapes::{Circle, Polyline, Shape, ShapeKind, Text};
pub use style::{StyleAttrs, Styled};
pub use types::{Color, NONE_COLOR, Point, Rgb};
