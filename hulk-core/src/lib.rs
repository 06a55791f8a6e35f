//! Lexer, parser, semantic checks and tree-walking evaluator for a small
//! expression language in the HULK family.
//!
//! ```
//! use hulk_core::{Session, Value};
//!
//! let mut session = Session::new();
//! session.interpret("function sq(x) => x * x");
//!
//! let outcome = session.interpret("sq(3) + 1; \"n = \" @ sq(2)");
//!
//! assert_eq!(outcome.results, vec![Value::Number(10.0), Value::String("n = 4".into())]);
//! assert!(outcome.errors.is_empty());
//! ```

pub mod lexer;
pub mod parser;
pub mod environment;
pub mod analyzer;
pub mod functions;
pub mod eval;
pub mod session;
pub mod utils;

pub use environment::prelude::Value;
pub use eval::prelude::DEFAULT_MAX_DEPTH;
pub use functions::prelude::FunctionSignature;
pub use session::prelude::{interpret, Interpretation, Session};
pub use utils::prelude::Error;
