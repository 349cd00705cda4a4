//! Unit tests for lexical diagnostics.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, StringEnd};

fn unterminated(reached: StringEnd) -> Error {
    Error::new(
        ErrorImpl::UnterminatedString {
            lexeme: "\"abc".to_string(),
            reached,
        },
        4,
    )
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::InvalidCharacter { character: '@' }, 10);

    assert_eq!(error.get_error_name(), "InvalidCharacter");
    assert_eq!(error.get_line(), 10);
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InvalidCharacter { character: '@' }
    );
}

#[test]
fn test_error_names() {
    assert_eq!(
        unterminated(StringEnd::Line).get_error_name(),
        "UnterminatedString"
    );
    assert_eq!(
        Error::new(ErrorImpl::InvalidOperator { operator: '!' }, 1).get_error_name(),
        "InvalidOperator"
    );
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::InvalidCharacter { character: '$' }, 3);
    assert_eq!(error.to_string(), "line 3: invalid character '$'");

    let error = Error::new(ErrorImpl::InvalidOperator { operator: '!' }, 7);
    assert_eq!(
        error.to_string(),
        "line 7: '!' is not a valid standalone operator"
    );
}

#[test]
fn test_unterminated_string_display() {
    assert_eq!(
        unterminated(StringEnd::Line).to_string(),
        "line 4: unterminated string \"\\\"abc\" reaches end of line"
    );
    assert_eq!(
        unterminated(StringEnd::Input).to_string(),
        "line 4: unterminated string \"\\\"abc\" reaches end of input"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::InvalidCharacter { character: '@' }, 1);

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::InvalidOperator { operator: '!' }, 1);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("!=")),
        ErrorTip::None => panic!("expected a suggestion for a bare `!`"),
    }
}

#[test]
fn test_unterminated_string_tips_differ() {
    let line_tip = unterminated(StringEnd::Line).get_tip().to_string();
    let input_tip = unterminated(StringEnd::Input).get_tip().to_string();

    assert!(line_tip.contains("cannot span lines"));
    assert!(input_tip.contains("file ended"));
    assert_ne!(line_tip, input_tip);
}

#[test]
fn test_error_is_std_error() {
    let error: Box<dyn std::error::Error> =
        Box::new(Error::new(ErrorImpl::InvalidCharacter { character: '?' }, 2));

    assert_eq!(error.to_string(), "line 2: invalid character '?'");
}
