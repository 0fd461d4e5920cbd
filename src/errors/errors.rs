use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::Type, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// The two failure classes of the pipeline. Both are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Type,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "Syntax"),
            ErrorKind::Type => write!(f, "Type"),
        }
    }
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. } => ErrorKind::Syntax,
            ErrorImpl::TypeMatchError { .. }
            | ErrorImpl::OperandTypeError { .. }
            | ErrorImpl::ConditionTypeError { .. }
            | ErrorImpl::VariableTypeChanged { .. }
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::StringNotSupported { .. } => ErrorKind::Type,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::OperandTypeError { .. } => "OperandTypeError",
            ErrorImpl::ConditionTypeError { .. } => "ConditionTypeError",
            ErrorImpl::VariableTypeChanged { .. } => "VariableTypeChanged",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::StringNotSupported { .. } => "StringNotSupported",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a line break?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("Input ended, {}", expected))
            }
            ErrorImpl::TypeMatchError {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Operands of `{}` have different types: {} and {}",
                operator, left, right
            )),
            ErrorImpl::OperandTypeError { operator, operand } => ErrorTip::Suggestion(format!(
                "Operator `{}` cannot be applied to {} operands",
                operator, operand
            )),
            ErrorImpl::ConditionTypeError {
                statement,
                received,
            } => ErrorTip::Suggestion(format!(
                "`{}` condition must be boolean, found {}",
                statement, received
            )),
            ErrorImpl::VariableTypeChanged {
                variable,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Variable `{}` is {} and cannot be assigned a {}",
                variable, expected, received
            )),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is referenced before being defined",
                variable
            )),
            ErrorImpl::StringNotSupported { .. } => {
                ErrorTip::Suggestion(String::from("Strings have no type in Gee"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Error: {} (at {})",
            self.kind(),
            self.internal_error,
            self.position
        )
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input, {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("{left} {operator} {right}")]
    TypeMatchError {
        operator: String,
        left: Type,
        right: Type,
    },
    #[error("operator {operator} is not defined for {operand}")]
    OperandTypeError { operator: String, operand: Type },
    #[error("{statement} expression is not a boolean, found {received}")]
    ConditionTypeError { statement: String, received: Type },
    #[error("{variable:?} is {expected}, cannot assign {received}")]
    VariableTypeChanged {
        variable: String,
        expected: Type,
        received: Type,
    },
    #[error("{variable:?} is referenced before being defined")]
    VariableNotDeclared { variable: String },
    #[error("string {value} has no type")]
    StringNotSupported { value: String },
}
