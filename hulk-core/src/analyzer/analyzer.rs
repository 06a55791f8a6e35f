use crate::{
    environment::prelude::{Value, ValueType},
    parser::prelude::{BinaryOperator, UnaryOperator},
    utils::prelude::SrcSpan
};

use super::error::{SemanticError, SemanticErrorType};

/// Operand types accepted by a unary operator.
pub fn get_allowed_types_for_unary(operator: UnaryOperator) -> &'static [ValueType] {
    match operator {
        UnaryOperator::Plus | UnaryOperator::Minus => &[ValueType::Number],
        UnaryOperator::Not => &[ValueType::Boolean],
    }
}

/// Operand types accepted on both sides of a binary operator. An empty slice
/// means any type is accepted.
pub fn get_allowed_types_for(operator: BinaryOperator) -> &'static [ValueType] {
    match operator {
        BinaryOperator::Add
        | BinaryOperator::Subtract
        | BinaryOperator::Multiply
        | BinaryOperator::Divide
        | BinaryOperator::Power
        | BinaryOperator::Modulo
        | BinaryOperator::Less
        | BinaryOperator::LessOrEqual
        | BinaryOperator::Greater
        | BinaryOperator::GreaterOrEqual => &[ValueType::Number],
        BinaryOperator::And
        | BinaryOperator::Or
        | BinaryOperator::LogicalAnd
        | BinaryOperator::LogicalOr => &[ValueType::Boolean],
        BinaryOperator::Equal
        | BinaryOperator::NotEqual
        | BinaryOperator::Concat => &[],
    }
}

pub fn is_valid_unary(operator: UnaryOperator, operand: ValueType) -> bool {
    get_allowed_types_for_unary(operator).contains(&operand)
}

pub fn is_valid_binary(operator: BinaryOperator, left: ValueType, right: ValueType) -> bool {
    match operator {
        BinaryOperator::Concat => true,
        // no cross-kind comparison
        BinaryOperator::Equal | BinaryOperator::NotEqual => left == right,
        _ => {
            let allowed = get_allowed_types_for(operator);

            allowed.contains(&left) && allowed.contains(&right)
        }
    }
}

pub fn check_unary(
    operator: UnaryOperator,
    operand: &Value,
    location: SrcSpan
) -> Result<(), SemanticError> {
    let operand = operand.value_type();

    match is_valid_unary(operator, operand) {
        true => Ok(()),
        false => Err(SemanticError::new(
            SemanticErrorType::InvalidUnaryOperand { operator, operand },
            location
        ))
    }
}

pub fn check_binary(
    operator: BinaryOperator,
    left: &Value,
    right: &Value,
    location: SrcSpan
) -> Result<(), SemanticError> {
    let (left, right) = (left.value_type(), right.value_type());

    match is_valid_binary(operator, left, right) {
        true => Ok(()),
        false => Err(SemanticError::new(
            SemanticErrorType::InvalidBinaryOperands { operator, left, right },
            location
        ))
    }
}

pub fn check_condition(condition: &Value, location: SrcSpan) -> Result<bool, SemanticError> {
    match condition {
        Value::Boolean(value) => Ok(*value),
        other => Err(SemanticError::new(
            SemanticErrorType::NonBooleanCondition { found: other.value_type() },
            location
        ))
    }
}

pub fn check_number_argument(
    function: &'static str,
    argument: &Value,
    location: SrcSpan
) -> Result<f64, SemanticError> {
    match argument {
        Value::Number(value) => Ok(*value),
        other => Err(SemanticError::new(
            SemanticErrorType::InvalidBuiltinArgument {
                function,
                expected: ValueType::Number,
                found: other.value_type()
            },
            location
        ))
    }
}
