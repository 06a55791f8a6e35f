use crate::{
    analyzer::prelude::{check_binary, check_condition, check_unary},
    environment::prelude::{Environment, Value},
    functions::prelude::{FunctionDescriptor, FunctionKind, FunctionRegistry},
    parser::prelude::{Binding, BinaryOperator, Expression, Identifier, UnaryOperator},
    utils::prelude::{Error, SrcSpan}
};

use super::error::{RuntimeError, RuntimeErrorType};

/// Default ceiling on nested user function calls.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Expression nesting budgeted for every level of call depth.
const NESTING_PER_CALL: usize = 16;

/// Stack reserved per level of expression nesting. One level is the
/// `eval`, `eval_expression` and helper frames together.
const FRAME_SIZE: usize = 4 * 1024;

const BASE_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 1024 * 1024 * 1024;

/// Expression nesting allowed for a call ceiling of `max_depth`. Capped so
/// the stack it needs never exceeds `MAX_STACK_SIZE`.
pub fn nesting_limit(max_depth: usize) -> usize {
    max_depth.saturating_add(1)
        .saturating_mul(NESTING_PER_CALL)
        .min((MAX_STACK_SIZE - BASE_STACK_SIZE) / FRAME_SIZE)
}

/// Stack size a thread needs to evaluate with a call ceiling of
/// `max_depth` without overflowing.
pub fn stack_size(max_depth: usize) -> usize {
    BASE_STACK_SIZE + nesting_limit(max_depth) * FRAME_SIZE
}

/// Walks one statement at a time. The environment is threaded through the
/// calls explicitly; the only shared state is the function registry.
pub struct Evaluator<'a> {
    functions: &'a mut FunctionRegistry,
    calls: usize,
    max_depth: usize,
    depth: usize,
    max_nesting: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(functions: &'a mut FunctionRegistry) -> Self {
        Self::with_max_depth(functions, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(functions: &'a mut FunctionRegistry, max_depth: usize) -> Self {
        Self {
            functions,
            calls: 0,
            max_depth,
            depth: 0,
            max_nesting: nesting_limit(max_depth),
        }
    }

    /// Active user function calls.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Current expression nesting.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn eval(&mut self, expression: &Expression, env: &Environment) -> Result<Value, Error> {
        if self.depth >= self.max_nesting {
            return Err(RuntimeError::new(
                RuntimeErrorType::NestingTooDeep { limit: self.max_nesting },
                expression.location()
            ).into());
        }

        self.depth += 1;
        let result = self.eval_expression(expression, env);
        self.depth -= 1;

        result
    }

    fn eval_expression(&mut self, expression: &Expression, env: &Environment) -> Result<Value, Error> {
        match expression {
            Expression::Literal { value, .. } => Ok(Value::from(value.clone())),
            Expression::Unary { operator, operand, location } => {
                self.eval_unary(*operator, operand, *location, env)
            },
            Expression::Binary { left, operator, right, location } => {
                self.eval_binary(left, *operator, right, *location, env)
            },
            Expression::Parenthesized { expression, .. } => self.eval(expression, env),
            Expression::Variable(identifier) => eval_variable(identifier, env),
            Expression::Conditional { condition, resolution, alternative, .. } => {
                let value = self.eval(condition, env)?;

                // only the taken branch is evaluated
                match check_condition(&value, condition.location())? {
                    true => self.eval(resolution, env),
                    false => self.eval(alternative, env)
                }
            },
            Expression::LetBinding { bindings, body, .. } => self.eval_let(bindings, body, env),
            Expression::FunctionDeclaration { name, params, body, .. } => {
                let descriptor = FunctionDescriptor::user_defined(
                    name.value.clone(),
                    params.iter().map(|param| param.value.clone()).collect(),
                    (**body).clone()
                );

                self.functions.declare(descriptor, name.location)?;

                Ok(Value::Nothing)
            },
            Expression::FunctionCall { name, args, location } => {
                self.eval_call(name, args, *location, env)
            }
        }
    }

    fn eval_unary(
        &mut self,
        operator: UnaryOperator,
        operand: &Expression,
        location: SrcSpan,
        env: &Environment
    ) -> Result<Value, Error> {
        let operand = self.eval(operand, env)?;

        check_unary(operator, &operand, location)?;

        Ok(apply_unary(operator, operand).unwrap_or_default())
    }

    fn eval_binary(
        &mut self,
        left: &Expression,
        operator: BinaryOperator,
        right: &Expression,
        location: SrcSpan,
        env: &Environment
    ) -> Result<Value, Error> {
        // both sides are always evaluated, `&&` and `||` included
        let left = self.eval(left, env)?;
        let right = self.eval(right, env)?;

        check_binary(operator, &left, &right, location)?;

        Ok(apply_binary(operator, left, right).unwrap_or_default())
    }

    /// Initializers see only the outer environment, never their siblings.
    fn eval_let(
        &mut self,
        bindings: &[Binding],
        body: &Expression,
        env: &Environment
    ) -> Result<Value, Error> {
        let mut values = Vec::with_capacity(bindings.len());

        for binding in bindings {
            let value = self.eval(&binding.value, env)?;
            values.push((binding.name.value.clone(), value));
        }

        let scope = env.extend(values);

        self.eval(body, &scope)
    }

    fn eval_call(
        &mut self,
        name: &Identifier,
        args: &[Expression],
        location: SrcSpan,
        env: &Environment
    ) -> Result<Value, Error> {
        let mut values = Vec::with_capacity(args.len());

        for arg in args {
            values.push(self.eval(arg, env)?);
        }

        let kind = match self.functions.get(&name.value, values.len()) {
            Some(descriptor) => descriptor.kind.clone(),
            None => return Err(RuntimeError::new(
                RuntimeErrorType::UnknownFunction {
                    name: name.value.clone(),
                    arity: values.len()
                },
                location
            ).into())
        };

        match kind {
            FunctionKind::Builtin(builtin) => Ok(builtin.apply(values, location)?),
            FunctionKind::UserDefined { params, body } => {
                // the callee sees its parameters and nothing else
                let scope = params.into_iter()
                    .zip(values)
                    .collect::<Environment>();

                if self.calls >= self.max_depth {
                    return Err(RuntimeError::new(
                        RuntimeErrorType::RecursionLimitExceeded { limit: self.max_depth },
                        location
                    ).into());
                }

                self.calls += 1;
                let result = self.eval(&body, &scope);
                self.calls -= 1;

                result
            }
        }
    }
}

fn eval_variable(identifier: &Identifier, env: &Environment) -> Result<Value, Error> {
    match env.get(&identifier.value) {
        Some(value) => Ok(value.clone()),
        None => Err(RuntimeError::new(
            RuntimeErrorType::UndeclaredVariable { name: identifier.value.clone() },
            identifier.location
        ).into())
    }
}

/// `None` when the operand kind does not fit the operator.
pub fn apply_unary(operator: UnaryOperator, operand: Value) -> Option<Value> {
    match (operator, operand) {
        (UnaryOperator::Plus, Value::Number(value)) => Some(Value::Number(value)),
        (UnaryOperator::Minus, Value::Number(value)) => Some(Value::Number(-value)),
        (UnaryOperator::Not, Value::Boolean(value)) => Some(Value::Boolean(!value)),
        _ => None
    }
}

/// `None` when the operand kinds do not fit the operator.
pub fn apply_binary(operator: BinaryOperator, left: Value, right: Value) -> Option<Value> {
    use BinaryOperator::*;

    let value = match (operator, left, right) {
        (Concat, left, right) => Value::String(format!("{left}{right}")),
        (Equal, left, right) if left.value_type() == right.value_type() => Value::Boolean(left == right),
        (NotEqual, left, right) if left.value_type() == right.value_type() => Value::Boolean(left != right),
        (operator, Value::Number(left), Value::Number(right)) => match operator {
            Add => Value::Number(left + right),
            Subtract => Value::Number(left - right),
            Multiply => Value::Number(left * right),
            Divide => Value::Number(left / right),
            Power => Value::Number(left.powf(right)),
            Modulo => Value::Number(left % right),
            Less => Value::Boolean(left < right),
            LessOrEqual => Value::Boolean(left <= right),
            Greater => Value::Boolean(left > right),
            GreaterOrEqual => Value::Boolean(left >= right),
            _ => return None
        },
        (operator, Value::Boolean(left), Value::Boolean(right)) => match operator {
            And | LogicalAnd => Value::Boolean(left && right),
            Or | LogicalOr => Value::Boolean(left || right),
            _ => return None
        },
        _ => return None
    };

    Some(value)
}
