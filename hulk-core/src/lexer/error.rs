use thiserror::Error;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnrecognizedCharacter { ch: char },
    UnterminatedString,
    InvalidNumber { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lexical error: {}", self.details().0)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn new(error: LexicalErrorType, location: SrcSpan) -> Self {
        Self { error, location }
    }

    /// Short message plus the label shown under the offending span.
    pub fn details(&self) -> (String, &'static str) {
        match &self.error {
            LexicalErrorType::UnrecognizedCharacter { ch } => {
                (format!("unexpected character `{}`", ch.escape_debug()), "not part of the language")
            },
            LexicalErrorType::UnterminatedString => {
                ("unterminated string literal".to_string(), "missing closing `\"`")
            },
            LexicalErrorType::InvalidNumber { text } => {
                (format!("cannot represent `{text}` as a number"), "invalid number")
            }
        }
    }
}
