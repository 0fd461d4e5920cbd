//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::types::Type;
use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position() -> Position {
    Position::new(3, 4, &Rc::new("test.gee".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "!".to_string(),
        },
        position(),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "else".to_string(),
        },
        position(),
    );

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 4);
    assert_eq!(error.get_position().to_string(), "test.gee:3:5");
}

#[test]
fn test_syntax_error_kinds() {
    let causes = vec![
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        ErrorImpl::UnexpectedTokenDetailed {
            token: ")".to_string(),
            message: "expected `:`".to_string(),
        },
        ErrorImpl::UnexpectedEndOfInput {
            expected: "expected `;`".to_string(),
        },
    ];

    for cause in causes {
        assert_eq!(Error::new(cause, position()).kind(), ErrorKind::Syntax);
    }
}

#[test]
fn test_type_error_kinds() {
    let causes = vec![
        ErrorImpl::TypeMatchError {
            operator: "+".to_string(),
            left: Type::Number,
            right: Type::Boolean,
        },
        ErrorImpl::OperandTypeError {
            operator: "*".to_string(),
            operand: Type::Boolean,
        },
        ErrorImpl::ConditionTypeError {
            statement: "while".to_string(),
            received: Type::Number,
        },
        ErrorImpl::VariableTypeChanged {
            variable: "x".to_string(),
            expected: Type::Number,
            received: Type::Boolean,
        },
        ErrorImpl::VariableNotDeclared {
            variable: "x".to_string(),
        },
        ErrorImpl::StringNotSupported {
            value: "'hi'".to_string(),
        },
    ];

    for cause in causes {
        assert_eq!(Error::new(cause, position()).kind(), ErrorKind::Type);
    }
}

#[test]
fn test_type_mismatch_message() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            operator: "+".to_string(),
            left: Type::Number,
            right: Type::Boolean,
        },
        position(),
    );

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(
        error.to_string(),
        "Type Error: number + boolean (at test.gee:3:5)"
    );
    assert_eq!(
        error.get_tip().to_string(),
        "Operands of `+` have different types: number and boolean"
    );
}

#[test]
fn test_variable_not_declared_error() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string(),
        },
        position(),
    );

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    assert_eq!(
        error.to_string(),
        "Type Error: \"foo\" is referenced before being defined (at test.gee:3:5)"
    );
}

#[test]
fn test_condition_error_tip() {
    let error = Error::new(
        ErrorImpl::ConditionTypeError {
            statement: "if".to_string(),
            received: Type::Number,
        },
        position(),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "`if` condition must be boolean, found number"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Test suggestion".to_string());
    assert_eq!(format!("{}", tip), "Test suggestion");

    let tip_none = ErrorTip::None;
    assert_eq!(format!("{}", tip_none), "");
}
