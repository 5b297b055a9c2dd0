//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::DanglingOperator { operator: '*' },
        Position(10, Rc::new("test.src".to_string())),
    );

    assert_eq!(error.get_error_name(), "DanglingOperator");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.src".to_string()));
    let error = Error::new(ErrorImpl::DanglingOperator { operator: '=' }, pos.clone());

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_dangling_operator_tip() {
    let error = Error::new(
        ErrorImpl::DanglingOperator { operator: '*' },
        Position(0, Rc::new("test.src".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => assert!(suggestion.contains('*')),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_unclassifiable_lexeme_error() {
    let error = Error::new(
        ErrorImpl::UnclassifiableLexeme {
            lexeme: "*=".to_string(),
        },
        Position(0, Rc::new("test.src".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnclassifiableLexeme");
}

#[test]
fn test_error_impl_display() {
    let error = ErrorImpl::DanglingOperator { operator: '*' };
    assert_eq!(error.to_string(), "source ended with a dangling '*'");

    let error = ErrorImpl::UnclassifiableLexeme {
        lexeme: "a b".to_string(),
    };
    assert_eq!(error.to_string(), "unclassifiable lexeme: \"a b\"");
}

#[test]
fn test_error_tip_display() {
    assert_eq!(ErrorTip::None.to_string(), "");
    assert_eq!(
        ErrorTip::Suggestion("try this".to_string()).to_string(),
        "try this"
    );
}
