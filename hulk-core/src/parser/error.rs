use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::prelude::TokenKind, utils::prelude::SrcSpan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenContext {
    Grouping,
    Call,
    Declaration,
    Condition,
}

impl Display for ParenContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grouping => write!(f, "parenthesized expression"),
            Self::Call => write!(f, "function call"),
            Self::Declaration => write!(f, "function declaration"),
            Self::Condition => write!(f, "`if` condition"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    UnexpectedToken {
        found: TokenKind,
        expected: TokenKind,
    },
    UnclosedParenthesis {
        context: ParenContext,
    },
    MissingIn {
        found: TokenKind,
    },
    MissingTerminator {
        found: TokenKind,
    },
    NestingTooDeep {
        limit: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("syntax error: {}", self.details().0)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub location: SrcSpan
}

impl ParseError {
    pub fn new(error: ParseErrorType, location: SrcSpan) -> Self {
        Self { error, location }
    }

    pub fn details(&self) -> (String, &'static str) {
        match &self.error {
            ParseErrorType::UnexpectedToken { found, expected } => (
                format!("received {found} while expecting {expected}"),
                "not expected here",
            ),
            ParseErrorType::UnclosedParenthesis { context } => (
                format!("missing `)` in {context}"),
                "unbalanced parenthesis",
            ),
            ParseErrorType::MissingIn { found } => (
                format!("received {found} while expecting the keyword `in` of a `let` expression"),
                "`let` bindings must be followed by `in`",
            ),
            ParseErrorType::MissingTerminator { found } => (
                format!("received {found} while expecting `;` or end of input"),
                "statements must be separated by `;`",
            ),
            ParseErrorType::NestingTooDeep { limit } => (
                format!("expression nesting exceeds {limit} levels"),
                "too deeply nested",
            ),
        }
    }
}
