#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod tracing_config;

/// Returns the text of the 1-based `line` of `source`, without its line ending.
pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


/// Renders a diagnostic against the source it was reported in.
///
/// ```text
/// Error: UnterminatedString (strings cannot span lines, ...)
/// -> main.palio:3
///   |
/// 3 | msg = "hello
///   | unterminated string "\"hello" reaches end of line
/// ```
pub fn render_error(error: &Error, file: &str, source: &str) -> String {
    let line = error.get_line();
    let line_text = get_line_at_position(source, line).unwrap_or("");

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    // Writing into a String cannot fail.
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}:{}", file, line);
    let _ = writeln!(out, "{:>padding$}", "|");
    let _ = writeln!(out, "{} | {}", line_string, line_text.trim());
    let _ = writeln!(out, "{:>padding$} {}", "|", error.get_kind());

    out
}
