use std::fmt::Display;

use thiserror::Error;

use crate::Position;

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

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::DanglingOperator { .. } => "DanglingOperator",
            ErrorImpl::UnclassifiableLexeme { .. } => "UnclassifiableLexeme",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::DanglingOperator { operator } => ErrorTip::Suggestion(format!(
                "Source ends with a bare `{}`, did you forget the rest of the expression?",
                operator
            )),
            ErrorImpl::UnclassifiableLexeme { lexeme } => ErrorTip::Suggestion(format!(
                "Lexeme `{}` does not belong to any token category; this is a defect in the scanner, not in the source text",
                lexeme
            )),
        }
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
    #[error("source ended with a dangling {operator:?}")]
    DanglingOperator { operator: char },
    #[error("unclassifiable lexeme: {lexeme:?}")]
    UnclassifiableLexeme { lexeme: String },
}
