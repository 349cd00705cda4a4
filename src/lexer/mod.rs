//! Lexical analysis for PALIO source text.
//!
//! The scanner is a hand-written deterministic finite automaton that turns
//! a source buffer into a flat stream of tokens:
//!
//! - Keywords (`pg-if`, `pg-while`, ...) and identifiers
//! - Integer and float literals, kept as their source text
//! - Double-quoted string literals, quotes included
//! - Operators, delimiters and `#` line comments
//!
//! Every token records the line it started on. Lexical errors are reported
//! as diagnostics and never stop the scan.

pub mod lexer;
pub mod tokens;
