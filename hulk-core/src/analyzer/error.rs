use thiserror::Error;

use crate::{
    environment::prelude::ValueType,
    parser::prelude::{BinaryOperator, UnaryOperator},
    utils::prelude::SrcSpan
};

#[derive(Debug, Clone, PartialEq)]
pub enum SemanticErrorType {
    /// `-true`, `!1`
    InvalidUnaryOperand {
        operator: UnaryOperator,
        operand: ValueType,
    },
    /// `true + 1`, `"a" == 1`
    InvalidBinaryOperands {
        operator: BinaryOperator,
        left: ValueType,
        right: ValueType,
    },
    /// `if (1) 2 else 3`
    NonBooleanCondition {
        found: ValueType,
    },
    /// `sin("x")`
    InvalidBuiltinArgument {
        function: &'static str,
        expected: ValueType,
        found: ValueType,
    },
    /// A second `function f(x) => ...` while `f/1` is already registered.
    DuplicateFunction {
        name: String,
        arity: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("semantic error: {}", self.details().0)]
pub struct SemanticError {
    pub error: SemanticErrorType,
    pub location: SrcSpan
}

impl SemanticError {
    pub fn new(error: SemanticErrorType, location: SrcSpan) -> Self {
        Self { error, location }
    }

    pub fn details(&self) -> (String, &'static str) {
        match &self.error {
            SemanticErrorType::InvalidUnaryOperand { operator, operand } => (
                format!("operator `{operator}` cannot be applied to operand of type {operand}"),
                "invalid operand",
            ),
            SemanticErrorType::InvalidBinaryOperands { operator, left, right } => (
                format!("operator `{operator}` cannot be applied to operands of type {left} and {right}"),
                "incompatible operands",
            ),
            SemanticErrorType::NonBooleanCondition { found } => (
                format!("received {found} while expecting a Boolean condition"),
                "condition must be a Boolean",
            ),
            SemanticErrorType::InvalidBuiltinArgument { function, expected, found } => (
                format!("function `{function}` receives {expected}, not {found}"),
                "invalid argument",
            ),
            SemanticErrorType::DuplicateFunction { name, arity } => (
                format!("function `{name}` with {arity} parameter(s) is already defined"),
                "duplicate declaration",
            ),
        }
    }
}
