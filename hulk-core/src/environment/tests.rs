use pretty_assertions::assert_eq;

use crate::lexer::prelude::Literal;
use super::prelude::{Environment, Value, ValueType};

#[test]
fn test_extend_leaves_parent_untouched() {
    let outer = Environment::new().extend([("x".to_string(), Value::Number(1.0))]);
    let inner = outer.extend([
        ("x".to_string(), Value::Number(2.0)),
        ("y".to_string(), Value::from("two")),
    ]);

    assert_eq!(outer.get("x"), Some(&Value::Number(1.0)));
    assert_eq!(outer.get("y"), None);
    assert_eq!(outer.len(), 1);

    assert_eq!(inner.get("x"), Some(&Value::Number(2.0)));
    assert_eq!(inner.get("y"), Some(&Value::String("two".into())));
}

#[test]
fn test_collect_into_environment() {
    let env = vec![("a".to_string(), Value::Boolean(true))]
        .into_iter()
        .collect::<Environment>();

    assert!(env.contains("a"));
    assert!(!env.contains("b"));
    assert!(Environment::default().is_empty());
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Number(42.0).to_string(), "42");
    assert_eq!(Value::Number(0.5).to_string(), "0.5");
    assert_eq!(Value::Number(-3.25).to_string(), "-3.25");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::from("hi").to_string(), "hi");
    assert_eq!(Value::Nothing.to_string(), "");
}

#[test]
fn test_value_from_literal() {
    assert_eq!(Value::from(Literal::Number(1.5)), Value::Number(1.5));
    assert_eq!(Value::from(Literal::Str("s".into())), Value::String("s".into()));
    assert_eq!(Value::from(Literal::Bool(true)).value_type(), ValueType::Boolean);
    assert!(Value::default().is_nothing());
}
