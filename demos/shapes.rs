//! Writes a small document to stdout.
//!
//! Run with: cargo run --example shapes --features tracing
//! and set RUST_LOG=svgdoc=trace to see render events.

use svgdoc::{Circle, Document, Point, Polyline, Rgb, Styled, Text};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut doc = Document::new();
    doc.add(
        Polyline::new()
            .add_point((100.0, 20.0))
            .add_point((40.0, 120.0))
            .add_point((160.0, 120.0))
            .add_point((100.0, 20.0))
            .with_stroke_color("purple")
            .with_stroke_width(4.0)
            .with_stroke_line_cap("round")
            .with_stroke_line_join("round"),
    )
    .add(
        Circle::new()
            .with_center(Point::new(100.0, 85.0))
            .with_radius(25.0)
            .with_fill_color(Rgb::new(255, 215, 0))
            .with_stroke_color("black"),
    )
    .add(
        Text::new()
            .with_point((100.0, 160.0))
            .with_offset((-30.0, 0.0))
            .with_font_size(18)
            .with_font_family("Verdana")
            .with_data("Triangle & circle")
            .with_fill_color("black"),
    );

    let stdout = std::io::stdout();
    doc.render(&mut stdout.lock())?;
    println!();
    Ok(())
}
