use thiserror::Error;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    UndeclaredVariable {
        name: String,
    },
    UnknownFunction {
        name: String,
        arity: usize,
    },
    RecursionLimitExceeded {
        limit: usize,
    },
    NestingTooDeep {
        limit: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}: {}", self.class(), self.details().0)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub location: SrcSpan
}

impl RuntimeError {
    pub fn new(error: RuntimeErrorType, location: SrcSpan) -> Self {
        Self { error, location }
    }

    pub fn class(&self) -> &'static str {
        match self.error {
            RuntimeErrorType::UndeclaredVariable { .. }
            | RuntimeErrorType::UnknownFunction { .. } => "reference error",
            RuntimeErrorType::RecursionLimitExceeded { .. }
            | RuntimeErrorType::NestingTooDeep { .. } => "runtime error",
        }
    }

    pub fn details(&self) -> (String, &'static str) {
        match &self.error {
            RuntimeErrorType::UndeclaredVariable { name } => (
                format!("variable `{name}` is not declared"),
                "not found in this scope",
            ),
            RuntimeErrorType::UnknownFunction { name, arity } => (
                format!("function `{name}` receiving {arity} argument(s) is not defined"),
                "unknown function",
            ),
            RuntimeErrorType::RecursionLimitExceeded { limit } => (
                format!("recursion limit exceeded: more than {limit} nested function calls"),
                "call stopped here",
            ),
            RuntimeErrorType::NestingTooDeep { limit } => (
                format!("expression nested deeper than {limit} levels during evaluation"),
                "evaluation stopped here",
            ),
        }
    }
}
