//! Number and text formatting for SVG output

use std::borrow::Cow;
use std::fmt::{self, Write};

/// How real numbers are printed in attribute values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Shortest text that parses back to the same `f64` (`5`, `1.5`, `0.1`).
    #[default]
    Shortest,
    /// Round to this many significant figures and trim trailing zeros,
    /// like C's `%g` at that precision.
    Significant(u8),
}

impl NumberFormat {
    pub fn write(self, out: &mut dyn Write, value: f64) -> fmt::Result {
        match self {
            NumberFormat::Shortest => write!(out, "{}", value),
            NumberFormat::Significant(sig_figs) => {
                out.write_str(&fmt_num_precision(value, sig_figs.max(1) as i32))
            }
        }
    }
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    if !scale.is_finite() || scale == 0.0 {
        return fmt_num_exponent(value, sig_figs);
    }
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Scientific notation at `sig_figs` significant figures, mantissa zeros
/// trimmed. Used when the decimal scale factor would overflow.
fn fmt_num_exponent(value: f64, sig_figs: i32) -> String {
    let s = format!("{:.prec$e}", value, prec = (sig_figs - 1).max(0) as usize);
    match s.split_once('e') {
        Some((mantissa, exp)) if mantissa.contains('.') => {
            let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
            format!("{}e{}", mantissa, exp)
        }
        _ => s,
    }
}

/// Escape character data for use between tags.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    escape_with(s, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '"' => Some("&quot;"),
        _ => None,
    })
}

fn escape_with(s: &str, entity: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    if !s.chars().any(|c| entity(c).is_some()) {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match entity(c) {
            Some(e) => result.push_str(e),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}
