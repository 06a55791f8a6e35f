use std::thread;

use crate::{
    environment::prelude::{Environment, Value},
    eval::prelude::{stack_size, Evaluator, DEFAULT_MAX_DEPTH},
    functions::prelude::{FunctionRegistry, FunctionSignature},
    parser::prelude::{parse_program, Expression},
    utils::prelude::Error
};

/// Call ceiling used when no evaluation thread can be spawned and the
/// statements run on the caller's stack instead.
const INLINE_MAX_DEPTH: usize = 8;

/// Outcome of interpreting one line: one value per statement, in order, and
/// every diagnostic reported while processing the line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Interpretation {
    pub results: Vec<Value>,
    pub errors: Vec<Error>,
}

impl Interpretation {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Diagnostics as human-readable text.
    pub fn diagnostics(&self) -> Vec<String> {
        self.errors.iter()
            .map(Error::to_string)
            .collect()
    }
}

/// Interpreter state that outlives a single line: the function registry
/// and the recursion ceiling. Diagnostics are reset on every line.
#[derive(Debug, Clone)]
pub struct Session {
    functions: FunctionRegistry,
    diagnostics: Vec<Error>,
    max_depth: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            functions: FunctionRegistry::with_builtins(),
            diagnostics: vec![],
            max_depth,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Diagnostics of the last interpreted line.
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn reset_diagnostics(&mut self) {
        self.diagnostics.clear();
    }

    pub fn list_functions(&self) -> Vec<FunctionSignature> {
        self.functions.list()
    }

    pub fn interpret(&mut self, line: &str) -> Interpretation {
        self.reset_diagnostics();

        let parsed = parse_program(line);

        let mut early = parsed.lex_errors.into_iter()
            .map(Error::from)
            .chain(parsed.errors.into_iter().map(Error::from))
            .collect::<Vec<Error>>();

        // lexing and parsing happen in one pass over the line
        early.sort_by_key(|error| error.location().start);
        self.diagnostics.extend(early);

        let statements = &parsed.program.statements;
        let functions = &mut self.functions;
        let max_depth = self.max_depth;

        // the evaluation stack grows with the call ceiling, so it gets a
        // thread sized for it
        let spawned = thread::scope(|scope| {
            thread::Builder::new()
                .name("hulk-eval".into())
                .stack_size(stack_size(max_depth))
                .spawn_scoped(scope, move || evaluate(functions, statements, max_depth))
                .map(|handle| handle.join())
        });

        let outcomes = match spawned {
            Ok(Ok(outcomes)) => outcomes,
            Ok(Err(panic)) => std::panic::resume_unwind(panic),
            Err(_) => evaluate(
                &mut self.functions,
                statements,
                max_depth.min(INLINE_MAX_DEPTH)
            ),
        };

        let mut results = Vec::with_capacity(outcomes.len());

        for outcome in outcomes {
            results.push(match outcome {
                Ok(value) => value,
                Err(error) => {
                    self.diagnostics.push(error);
                    Value::Nothing
                }
            });
        }

        Interpretation {
            results,
            errors: self.diagnostics.clone(),
        }
    }
}

/// Evaluates every parsed statement in order. A statement dropped by the
/// parser yields `Nothing` without a diagnostic of its own.
fn evaluate(
    functions: &mut FunctionRegistry,
    statements: &[Option<Expression>],
    max_depth: usize
) -> Vec<Result<Value, Error>> {
    statements.iter()
        .map(|statement| match statement {
            Some(statement) => Evaluator::with_max_depth(functions, max_depth)
                .eval(statement, &Environment::new()),
            None => Ok(Value::Nothing)
        })
        .collect()
}

/// Interprets `line` in a fresh session.
pub fn interpret(line: &str) -> Interpretation {
    Session::new().interpret(line)
}
