//! Lexical diagnostics.
//!
//! This module defines the errors the scanner reports while tokenizing:
//!
//! - Error structures carrying the 1-based source line
//! - The error taxonomy (invalid character, unterminated string, bare `!`)
//! - Tips shown alongside rendered diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
