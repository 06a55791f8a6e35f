use std::{fmt::Display, sync::Arc};

use crate::{
    analyzer::prelude::{check_number_argument, SemanticError},
    environment::prelude::Value,
    parser::prelude::Expression,
    utils::prelude::SrcSpan
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Print,
}

impl Builtin {
    pub const ALL: [Builtin; 4] = [Builtin::Sin, Builtin::Cos, Builtin::Tan, Builtin::Print];

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Sin => "sin",
            Builtin::Cos => "cos",
            Builtin::Tan => "tan",
            Builtin::Print => "print",
        }
    }

    pub fn arity(&self) -> usize {
        1
    }

    /// Applies the builtin to already evaluated arguments. The caller
    /// guarantees `args.len() == self.arity()`.
    pub fn apply(&self, mut args: Vec<Value>, location: SrcSpan) -> Result<Value, SemanticError> {
        let argument = args.pop().unwrap_or_default();

        let result = match self {
            // identity; the line result shows the value
            Builtin::Print => return Ok(argument),
            Builtin::Sin => check_number_argument(self.name(), &argument, location)?.sin(),
            Builtin::Cos => check_number_argument(self.name(), &argument, location)?.cos(),
            Builtin::Tan => check_number_argument(self.name(), &argument, location)?.tan(),
        };

        Ok(Value::Number(result))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionKind {
    Builtin(Builtin),
    UserDefined {
        params: Vec<String>,
        body: Arc<Expression>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDescriptor {
    pub name: String,
    pub arity: usize,
    pub kind: FunctionKind,
}

impl FunctionDescriptor {
    pub fn builtin(builtin: Builtin) -> Self {
        Self {
            name: builtin.name().to_string(),
            arity: builtin.arity(),
            kind: FunctionKind::Builtin(builtin)
        }
    }

    pub fn user_defined(name: String, params: Vec<String>, body: Expression) -> Self {
        Self {
            name,
            arity: params.len(),
            kind: FunctionKind::UserDefined {
                params,
                body: Arc::new(body)
            }
        }
    }

    pub fn signature(&self) -> FunctionSignature {
        FunctionSignature {
            name: self.name.clone(),
            arity: self.arity
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSignature {
    pub name: String,
    pub arity: usize,
}

impl Display for FunctionSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}
