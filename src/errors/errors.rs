use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
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

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn class(&self) -> ErrorClass {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => ErrorClass::TokenType,
            ErrorImpl::NoPrefixParseFn { .. } => ErrorClass::Operator,
            ErrorImpl::IntegerParseError { .. } => ErrorClass::Literal,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
        }
    }

    pub fn get_tip(&self) -> String {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => match expected {
                TokenKind::Ident => String::from("a binding needs a name, e.g. `let x = 5;`"),
                TokenKind::Assign => String::from("expected `=` between the name and its value"),
                _ => format!("insert a {} token here", expected),
            },
            ErrorImpl::NoPrefixParseFn { kind, token } => format!(
                "`{}` ({}) cannot start an expression",
                token, kind
            ),
            ErrorImpl::IntegerParseError { token } => format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                token
            ),
        }
    }
}

/// Failure classes a parse can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// An expected token kind was not in peek position
    TokenType,
    /// No handler is registered for an operator token
    Operator,
    /// An integer literal could not be represented
    Literal,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind, token: String },
    #[error("could not parse {token:?} as integer")]
    IntegerParseError { token: String },
}
