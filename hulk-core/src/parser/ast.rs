use std::fmt::Display;

use crate::{
    lexer::prelude::{Literal, TokenKind},
    utils::prelude::SrcSpan
};

/// One statement per `;`-separated slot of the line. A slot whose statement
/// was dropped by error recovery holds `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Option<Expression>>,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self.statements.iter()
            .map(|statement| match statement {
                Some(statement) => statement.to_string(),
                None => "<error>".to_string()
            })
            .collect::<Vec<String>>();

        write!(f, "{}", statements.join("; "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
}

impl UnaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => Self::Plus,
            TokenKind::Minus => Self::Minus,
            TokenKind::Bang => Self::Not,
            _ => return None
        })
    }

    pub fn as_literal(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "!",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    Concat,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,
    And,
    Or,
    LogicalAnd,
    LogicalOr,
}

impl BinaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Subtract,
            TokenKind::Star => Self::Multiply,
            TokenKind::Slash => Self::Divide,
            TokenKind::Caret => Self::Power,
            TokenKind::Percent => Self::Modulo,
            TokenKind::At => Self::Concat,
            TokenKind::Less => Self::Less,
            TokenKind::LessEqual => Self::LessOrEqual,
            TokenKind::Greater => Self::Greater,
            TokenKind::GreaterEqual => Self::GreaterOrEqual,
            TokenKind::EqualEqual => Self::Equal,
            TokenKind::NotEqual => Self::NotEqual,
            TokenKind::Ampersand => Self::And,
            TokenKind::Pipe => Self::Or,
            TokenKind::AmpersandAmpersand => Self::LogicalAnd,
            TokenKind::PipePipe => Self::LogicalOr,
            _ => return None
        })
    }

    pub fn as_literal(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Modulo => "%",
            Self::Concat => "@",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&",
            Self::Or => "|",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// let <identifier> = <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: Identifier,
    pub value: Expression,
}

impl Display for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal {
        value: Literal,
        location: SrcSpan
    },
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
        location: SrcSpan
    },
    Binary {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
        location: SrcSpan
    },
    Parenthesized {
        expression: Box<Expression>,
        location: SrcSpan
    },
    Variable(Identifier),
    // if ( <condition> ) <expression> else <expression>
    Conditional {
        condition: Box<Expression>,
        resolution: Box<Expression>,
        alternative: Box<Expression>,
        location: SrcSpan
    },
    // let <binding> {, <binding> } in <expression>
    LetBinding {
        bindings: Vec<Binding>,
        body: Box<Expression>,
        location: SrcSpan
    },
    // function <name> ( [<param> {, <param>}] ) => <expression>
    FunctionDeclaration {
        name: Identifier,
        params: Vec<Identifier>,
        body: Box<Expression>,
        location: SrcSpan
    },
    FunctionCall {
        name: Identifier,
        args: Vec<Expression>,
        location: SrcSpan
    },
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Variable(ident) => ident.location,
            Self::Literal { location, .. }
            | Self::Unary { location, .. }
            | Self::Binary { location, .. }
            | Self::Parenthesized { location, .. }
            | Self::Conditional { location, .. }
            | Self::LetBinding { location, .. }
            | Self::FunctionDeclaration { location, .. }
            | Self::FunctionCall { location, .. } => *location
        }
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items.iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Unary { operator, operand, .. } => write!(f, "{operator}{operand}"),
            Self::Binary { left, operator, right, .. } => write!(f, "{left} {operator} {right}"),
            Self::Parenthesized { expression, .. } => write!(f, "({expression})"),
            Self::Variable(ident) => write!(f, "{ident}"),
            Self::Conditional { condition, resolution, alternative, .. } => {
                write!(f, "if ({condition}) {resolution} else {alternative}")
            },
            Self::LetBinding { bindings, body, .. } => {
                write!(f, "let {} in {body}", join(bindings))
            },
            Self::FunctionDeclaration { name, params, body, .. } => {
                write!(f, "function {name}({}) => {body}", join(params))
            },
            Self::FunctionCall { name, args, .. } => write!(f, "{name}({})", join(args))
        }
    }
}
