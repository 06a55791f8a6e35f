use pretty_assertions::assert_eq;

use crate::{
    analyzer::prelude::SemanticErrorType,
    environment::prelude::Value,
    lexer::prelude::Literal,
    parser::prelude::Expression,
    utils::prelude::SrcSpan
};

use super::prelude::{Builtin, FunctionDescriptor, FunctionKind, FunctionRegistry, FunctionSignature};

fn constant(value: f64) -> Expression {
    Expression::Literal {
        value: Literal::Number(value),
        location: SrcSpan::default()
    }
}

fn signatures(registry: &FunctionRegistry) -> Vec<String> {
    registry.list()
        .iter()
        .map(FunctionSignature::to_string)
        .collect()
}

#[test]
fn test_seed_builtins() {
    let mut registry = FunctionRegistry::with_builtins();

    assert_eq!(signatures(&registry), vec!["sin/1", "cos/1", "tan/1", "print/1"]);

    registry.seed_builtins();

    assert_eq!(registry.len(), 4);
    assert!(matches!(
        registry.get("print", 1).map(|f| &f.kind),
        Some(FunctionKind::Builtin(Builtin::Print))
    ));
}

#[test]
fn test_identity_is_name_and_arity() {
    let mut registry = FunctionRegistry::new();

    let one = FunctionDescriptor::user_defined("f".into(), vec!["x".into()], constant(1.0));
    let two = FunctionDescriptor::user_defined("f".into(), vec!["x".into(), "y".into()], constant(2.0));

    assert!(registry.declare(one, SrcSpan::default()).is_ok());
    assert!(registry.declare(two, SrcSpan::default()).is_ok());

    assert!(registry.contains("f", 1));
    assert!(registry.contains("f", 2));
    assert!(!registry.contains("f", 0));
    assert!(!registry.contains("g", 1));
}

#[test]
fn test_duplicate_declaration_keeps_first() {
    let mut registry = FunctionRegistry::new();
    let at = SrcSpan::from(0, 20);

    let first = FunctionDescriptor::user_defined("f".into(), vec!["x".into()], constant(1.0));
    let second = FunctionDescriptor::user_defined("f".into(), vec!["y".into()], constant(2.0));

    registry.declare(first.clone(), at).unwrap();

    let error = registry.declare(second, at).unwrap_err();

    assert_eq!(
        error.error,
        SemanticErrorType::DuplicateFunction { name: "f".into(), arity: 1 }
    );
    assert_eq!(registry.get("f", 1), Some(&first));
}

#[test]
fn test_builtins_cannot_be_redeclared() {
    let mut registry = FunctionRegistry::with_builtins();

    let sin = FunctionDescriptor::user_defined("sin".into(), vec!["x".into()], constant(0.0));

    assert!(registry.declare(sin, SrcSpan::default()).is_err());

    let sin2 = FunctionDescriptor::user_defined("sin".into(), vec!["x".into(), "y".into()], constant(0.0));

    assert!(registry.declare(sin2, SrcSpan::default()).is_ok());
    assert_eq!(signatures(&registry).last().map(String::as_str), Some("sin/2"));
}

#[test]
fn test_builtin_apply() {
    let at = SrcSpan::default();

    assert_eq!(Builtin::Sin.apply(vec![Value::Number(0.0)], at), Ok(Value::Number(0.0)));
    assert_eq!(Builtin::Cos.apply(vec![Value::Number(0.0)], at), Ok(Value::Number(1.0)));
    assert_eq!(Builtin::Tan.apply(vec![Value::Number(0.0)], at), Ok(Value::Number(0.0)));
    assert_eq!(Builtin::Print.apply(vec![Value::from("hi")], at), Ok(Value::from("hi")));

    let error = Builtin::Sin.apply(vec![Value::Boolean(true)], at).unwrap_err();

    assert!(matches!(error.error, SemanticErrorType::InvalidBuiltinArgument { function: "sin", .. }));
}
