use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The compilation stage an error originates from.
///
/// `Lex`, `Parse` and `Type` are user-facing; `Internal` marks an
/// invariant violation in the code generator (a node kind that an
/// earlier stage should have rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
    Type,
    Internal,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => ErrorKind::Lex,
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lex,
            ErrorImpl::NumberParseError { .. } => ErrorKind::Lex,
            ErrorImpl::UnexpectedToken { .. } => ErrorKind::Parse,
            ErrorImpl::UnexpectedTokenDetailed { .. } => ErrorKind::Parse,
            ErrorImpl::UnexpectedEndOfInput => ErrorKind::Parse,
            ErrorImpl::OperandTypeMismatch { .. } => ErrorKind::Type,
            ErrorImpl::ConditionTypeMismatch { .. } => ErrorKind::Type,
            ErrorImpl::BranchTypeMismatch { .. } => ErrorKind::Type,
            ErrorImpl::VariableAlreadyDeclared { .. } => ErrorKind::Type,
            ErrorImpl::VariableNotDeclared { .. } => ErrorKind::Type,
            ErrorImpl::NotImplementedError => ErrorKind::Type,
            ErrorImpl::UnhandledNode { .. } => ErrorKind::Internal,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::OperandTypeMismatch { .. } => "OperandTypeMismatch",
            ErrorImpl::ConditionTypeMismatch { .. } => "ConditionTypeMismatch",
            ErrorImpl::BranchTypeMismatch { .. } => "BranchTypeMismatch",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::NotImplementedError => "NotImplementedError",
            ErrorImpl::UnhandledNode { .. } => "UnhandledNode",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal reaches the end of the input, did you miss a closing quote?",
            )),
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::OperandTypeMismatch { operator, left, right } => {
                ErrorTip::Suggestion(format!(
                    "Operands of `{}` have types `{}` and `{}`",
                    operator, left, right
                ))
            }
            ErrorImpl::ConditionTypeMismatch { received } => ErrorTip::Suggestion(format!(
                "Condition of an `if` must be `bool`, received `{}`",
                received
            )),
            ErrorImpl::BranchTypeMismatch { then_type, else_type } => {
                ErrorTip::Suggestion(format!(
                    "Branches of an `if` expression must have the same type: `{}` vs `{}`",
                    then_type, else_type
                ))
            }
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::NotImplementedError => ErrorTip::Suggestion(String::from(
                "This feature is expected to be handled, but has not yet been implemented",
            )),
            ErrorImpl::UnhandledNode { node } => ErrorTip::Suggestion(format!(
                "The code generator received a `{}` node it cannot emit",
                node
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {}", self.position, self.internal_error)
    }
}

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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("operand types of {operator:?} do not match: {left:?} and {right:?}")]
    OperandTypeMismatch {
        operator: String,
        left: String,
        right: String,
    },
    #[error("condition must be bool, received {received:?}")]
    ConditionTypeMismatch { received: String },
    #[error("branch types do not match: {then_type:?} and {else_type:?}")]
    BranchTypeMismatch {
        then_type: String,
        else_type: String,
    },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("not implemented error")]
    NotImplementedError,
    #[error("unhandled node: {node:?}")]
    UnhandledNode { node: String },
}
