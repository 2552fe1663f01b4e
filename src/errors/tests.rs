//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.ts".to_string()))
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, at(42));

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.ts");
}

#[test]
fn test_error_names() {
    let cases = vec![
        (ErrorImpl::UnrecognisedCharacter { character: '#' }, "UnrecognisedCharacter"),
        (ErrorImpl::UnterminatedString, "UnterminatedString"),
        (
            ErrorImpl::UnexpectedToken {
                expected: "Equals".to_string(),
                found: "Int".to_string(),
                token: "1".to_string(),
            },
            "UnexpectedToken",
        ),
        (ErrorImpl::ExpectedExpression { token: "*".to_string() }, "ExpectedExpression"),
        (ErrorImpl::NumberParseError { token: "99999999999999999999".to_string() }, "NumberParseError"),
        (ErrorImpl::EmptyProgram, "EmptyProgram"),
        (ErrorImpl::NestingTooDeep { limit: 128 }, "NestingTooDeep"),
    ];

    for (kind, name) in cases {
        assert_eq!(Error::new(kind, at(0)).get_error_name(), name);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, at(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_unexpected_token_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "RParen".to_string(),
            found: "EOF".to_string(),
            token: "".to_string(),
        },
        at(7),
    );

    assert_eq!(error.get_tip().to_string(), "expected `RParen`, found ``");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(ErrorImpl::UnterminatedString, at(3));

    assert_eq!(error.to_string(), "unterminated string literal at test.ts:3");
}

#[test]
fn test_unrecognised_character_message() {
    let kind = ErrorImpl::UnrecognisedCharacter { character: '\t' };

    assert_eq!(kind.to_string(), "unrecognised character: '\\t'");
}
