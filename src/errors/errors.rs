use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::InvalidOperator { .. } => "InvalidOperator",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString {
                reached: StringEnd::Line,
                ..
            } => ErrorTip::Suggestion(String::from(
                "strings cannot span lines, close it with `\"` before the line ends",
            )),
            ErrorImpl::UnterminatedString {
                reached: StringEnd::Input,
                ..
            } => ErrorTip::Suggestion(String::from(
                "the file ended before the closing `\"`",
            )),
            ErrorImpl::InvalidOperator { operator } => ErrorTip::Suggestion(format!(
                "`{}` is only valid as part of `{}=`, did you mean `pg-not`?",
                operator, operator
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid character {character:?}")]
    InvalidCharacter { character: char },
    #[error("unterminated string {lexeme:?} reaches end of {reached}")]
    UnterminatedString { lexeme: String, reached: StringEnd },
    #[error("{operator:?} is not a valid standalone operator")]
    InvalidOperator { operator: char },
}

/// Where an unterminated string literal was cut off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringEnd {
    Line,
    Input,
}

impl Display for StringEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringEnd::Line => write!(f, "line"),
            StringEnd::Input => write!(f, "input"),
        }
    }
}
