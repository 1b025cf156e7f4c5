//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Location;
use std::rc::Rc;

fn at(line: u32, column: u32) -> Location {
    Location {
        source_name: Rc::new("test.py".to_string()),
        line,
        column,
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, at(1, 5));

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_kind(), &ErrorImpl::UnexpectedCharacter { character: '@' });
}

#[test]
fn test_error_location() {
    let error = Error::new(ErrorImpl::BadIndentation, at(7, 1));

    assert_eq!(error.get_location().line, 7);
    assert_eq!(error.get_location().column, 1);
    assert_eq!(error.get_location().source_name.as_str(), "test.py");
}

#[test]
fn test_messages() {
    assert_eq!(ErrorImpl::BadIndentation.to_string(), "Bad indentation.");
    assert_eq!(
        ErrorImpl::UnexpectedCharacter { character: '$' }.to_string(),
        "Unexpected character: $"
    );
    assert_eq!(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string()
        }
        .to_string(),
        "Integer literal out of range: 99999999999999999999"
    );
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(ErrorImpl::BadIndentation, at(3, 1));

    assert_eq!(error.to_string(), "test.py:3:1: Bad indentation.");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, at(1, 1));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '"' }, at(1, 1));

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }

    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "123".to_string(),
        },
        at(1, 1),
    );
    assert_eq!(
        error.get_tip().to_string(),
        "Invalid number: `123`, is it above the integer limit?"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
