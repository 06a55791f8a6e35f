use pretty_assertions::assert_eq;

use crate::lexer::prelude::{Literal, TokenKind};
use super::prelude::{
    parse_program, BinaryOperator, Expression, ParenContext, ParseErrorType, Parser,
    UnaryOperator, MAX_NESTING_DEPTH
};

fn parse_single(input: &str) -> Expression {
    let parsed = parse_program(input);

    assert!(!parsed.has_errors(), "unexpected errors: {:?} {:?}", parsed.lex_errors, parsed.errors);
    assert_eq!(parsed.program.statements.len(), 1);

    parsed.program.statements.into_iter()
        .next()
        .flatten()
        .expect("statement should parse")
}

fn first_error(input: &str) -> ParseErrorType {
    let parsed = parse_program(input);

    assert_eq!(parsed.errors.len(), 1, "expected exactly one error, got {:?}", parsed.errors);

    parsed.errors[0].error.clone()
}

fn number(expression: &Expression) -> f64 {
    match expression {
        Expression::Literal { value: Literal::Number(value), .. } => *value,
        other => panic!("expected number literal, got {other:?}")
    }
}

#[test]
fn test_product_binds_tighter_than_sum() {
    match parse_single("2 + 3 * 4") {
        Expression::Binary { left, operator: BinaryOperator::Add, right, .. } => {
            assert_eq!(number(&left), 2.0);
            assert!(matches!(*right, Expression::Binary { operator: BinaryOperator::Multiply, .. }));
        },
        other => panic!("unexpected tree {other:?}")
    }
}

#[test]
fn test_subtraction_is_left_associative() {
    match parse_single("10 - 3 - 2") {
        Expression::Binary { left, operator: BinaryOperator::Subtract, right, .. } => {
            assert!(matches!(*left, Expression::Binary { operator: BinaryOperator::Subtract, .. }));
            assert_eq!(number(&right), 2.0);
        },
        other => panic!("unexpected tree {other:?}")
    }
}

#[test]
fn test_unary_binds_tighter_than_exponent() {
    match parse_single("-2 ^ 2") {
        Expression::Binary { left, operator: BinaryOperator::Power, .. } => {
            assert!(matches!(*left, Expression::Unary { operator: UnaryOperator::Minus, .. }));
        },
        other => panic!("unexpected tree {other:?}")
    }
}

#[test]
fn test_exponent_binds_tighter_than_product() {
    match parse_single("2 * 3 ^ 2") {
        Expression::Binary { operator: BinaryOperator::Multiply, right, .. } => {
            assert!(matches!(*right, Expression::Binary { operator: BinaryOperator::Power, .. }));
        },
        other => panic!("unexpected tree {other:?}")
    }
}

#[test]
fn test_concat_and_modulo_share_sum_level() {
    match parse_single("\"a\" @ 7 % 4 * 2") {
        Expression::Binary { left, operator: BinaryOperator::Modulo, right, .. } => {
            assert!(matches!(*left, Expression::Binary { operator: BinaryOperator::Concat, .. }));
            assert!(matches!(*right, Expression::Binary { operator: BinaryOperator::Multiply, .. }));
        },
        other => panic!("unexpected tree {other:?}")
    }
}

#[test]
fn test_logical_binds_loosest() {
    match parse_single("1 < 2 && 3 + 1 >= 2 | false") {
        Expression::Binary { left, operator: BinaryOperator::Or, .. } => {
            match *left {
                Expression::Binary { left, operator: BinaryOperator::LogicalAnd, right, .. } => {
                    assert!(matches!(*left, Expression::Binary { operator: BinaryOperator::Less, .. }));
                    assert!(matches!(*right, Expression::Binary { operator: BinaryOperator::GreaterOrEqual, .. }));
                },
                other => panic!("unexpected tree {other:?}")
            }
        },
        other => panic!("unexpected tree {other:?}")
    }
}

#[test]
fn test_let_bindings() {
    match parse_single("let x = 1, y = x + 1 in x @ y") {
        Expression::LetBinding { bindings, body, .. } => {
            let names = bindings.iter()
                .map(|binding| binding.name.value.as_str())
                .collect::<Vec<&str>>();

            assert_eq!(names, vec!["x", "y"]);
            assert!(matches!(*body, Expression::Binary { operator: BinaryOperator::Concat, .. }));
        },
        other => panic!("unexpected tree {other:?}")
    }
}

#[test]
fn test_conditional() {
    match parse_single("if (a == 1) \"one\" else if (a == 2) \"two\" else \"many\"") {
        Expression::Conditional { condition, alternative, .. } => {
            assert!(matches!(*condition, Expression::Binary { operator: BinaryOperator::Equal, .. }));
            assert!(matches!(*alternative, Expression::Conditional { .. }));
        },
        other => panic!("unexpected tree {other:?}")
    }
}

#[test]
fn test_calls_and_variables() {
    match parse_single("f(x, g(), 1 + 2)") {
        Expression::FunctionCall { name, args, .. } => {
            assert_eq!(name.value, "f");
            assert_eq!(args.len(), 3);
            assert!(matches!(&args[0], Expression::Variable(ident) if ident.value == "x"));
            assert!(matches!(&args[1], Expression::FunctionCall { args, .. } if args.is_empty()));
        },
        other => panic!("unexpected tree {other:?}")
    }
}

#[test]
fn test_constants_are_literals() {
    assert_eq!(number(&parse_single("PI")), std::f64::consts::PI);
    assert!(matches!(
        parse_single("true"),
        Expression::Literal { value: Literal::Bool(true), .. }
    ));
}

#[test]
fn test_declaration() {
    match parse_single("function add(x, y) => x + y") {
        Expression::FunctionDeclaration { name, params, body, .. } => {
            assert_eq!(name.value, "add");
            assert_eq!(params.iter().map(|p| p.value.clone()).collect::<Vec<String>>(), vec!["x", "y"]);
            assert!(matches!(*body, Expression::Binary { operator: BinaryOperator::Add, .. }));
        },
        other => panic!("unexpected tree {other:?}")
    }

    assert!(matches!(
        parse_single("function zero() => 0"),
        Expression::FunctionDeclaration { params, .. } if params.is_empty()
    ));
}

#[test]
fn test_display() {
    let input = "function f(x, y) => let z = x ^ 2 in if (z > y) -z else (z @ \"!\")";

    assert_eq!(parse_single(input).to_string(), input);
}

#[test]
fn test_locations() {
    let expression = parse_single("  1 + foo(2)");

    assert_eq!(expression.location().start, 2);
    assert_eq!(expression.location().end, 12);
}

#[test]
fn test_multiple_statements() {
    let parsed = parse_program("function f(x) => x; f(1); 2;");

    assert!(!parsed.has_errors());
    assert_eq!(parsed.program.statements.len(), 3);
    assert!(parsed.program.statements.iter().all(Option::is_some));
}

#[test]
fn test_unbalanced_grouping() {
    assert_eq!(
        first_error("(1 + 2"),
        ParseErrorType::UnclosedParenthesis { context: ParenContext::Grouping }
    );
}

#[test]
fn test_unbalanced_call() {
    assert_eq!(
        first_error("f(1, 2"),
        ParseErrorType::UnclosedParenthesis { context: ParenContext::Call }
    );
}

#[test]
fn test_unbalanced_declaration() {
    assert_eq!(
        first_error("function f(x"),
        ParseErrorType::UnclosedParenthesis { context: ParenContext::Declaration }
    );
}

#[test]
fn test_missing_in() {
    assert_eq!(
        first_error("let x = 1 x"),
        ParseErrorType::MissingIn { found: TokenKind::Identifier }
    );
}

#[test]
fn test_missing_terminator() {
    assert_eq!(
        first_error("1 2"),
        ParseErrorType::MissingTerminator { found: TokenKind::Literal }
    );
}

#[test]
fn test_missing_else() {
    assert_eq!(
        first_error("if (true) 1"),
        ParseErrorType::UnexpectedToken { found: TokenKind::EndOfInput, expected: TokenKind::Else }
    );
}

#[test]
fn test_literal_required() {
    let parsed = parse_program(")");

    assert_eq!(
        parsed.errors[0].error,
        ParseErrorType::UnexpectedToken { found: TokenKind::RParen, expected: TokenKind::Literal }
    );
    assert_eq!(
        parsed.errors[0].to_string(),
        "syntax error: received `)` while expecting a literal"
    );
}

#[test]
fn test_match_kind_placeholder() {
    let mut parser = Parser::new(") 1");

    let placeholder = parser.match_kind(TokenKind::Literal);

    assert_eq!(placeholder.kind, TokenKind::Literal);
    assert_eq!(placeholder.text, "");
    assert_eq!(parser.current().kind, TokenKind::RParen);
    assert_eq!(parser.peek(1).kind, TokenKind::Literal);
    assert_eq!(parser.peek(10).kind, TokenKind::EndOfInput);
}

#[test]
fn test_recovery_resumes_at_next_statement() {
    let parsed = parse_program("(1 + ; 2 * 3");

    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.program.statements.len(), 2);
    assert!(parsed.program.statements[0].is_none());
    assert!(matches!(
        parsed.program.statements[1],
        Some(Expression::Binary { operator: BinaryOperator::Multiply, .. })
    ));
}

#[test]
fn test_single_error_per_malformed_statement() {
    let parsed = parse_program("let = ( in ; if 1 2 3 ; 4");

    assert_eq!(parsed.errors.len(), 2);
    assert_eq!(parsed.program.statements.len(), 3);
    assert!(parsed.program.statements[2].is_some());
}

#[test]
fn test_lexical_error_drops_its_statement_only() {
    let parsed = parse_program("1 + $ 2; 3");

    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.lex_errors.len(), 1);
    assert!(parsed.program.statements[0].is_none());
    assert!(parsed.program.statements[1].is_some());
}

#[test]
fn test_lexical_error_silences_its_statement() {
    let parsed = parse_program("1 $ 2; 3 4");

    assert_eq!(parsed.lex_errors.len(), 1);
    // only the second statement gets a syntax error of its own
    assert_eq!(parsed.errors.len(), 1, "{:?}", parsed.errors);
    assert_eq!(parsed.errors[0].location.start, 9);
    assert!(parsed.program.statements.iter().all(Option::is_none));
}

#[test]
fn test_nesting_ceiling() {
    let depth = MAX_NESTING_DEPTH + 10;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(
        first_error(&input),
        ParseErrorType::NestingTooDeep { limit: MAX_NESTING_DEPTH }
    );
}

#[test]
fn test_empty_line() {
    let parsed = parse_program("   ");

    assert!(!parsed.has_errors());
    assert!(parsed.program.statements.is_empty());
}
