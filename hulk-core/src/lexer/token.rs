use std::fmt::Display;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Arithmetic
    Plus, // +
    Minus, // -
    Star, // *
    Slash, // /
    Caret, // ^
    Percent, // %
    At, // @

    // Logical
    Bang, // !
    Ampersand, // &
    AmpersandAmpersand, // &&
    Pipe, // |
    PipePipe, // ||

    // Relational
    Equal, // =
    EqualEqual, // ==
    NotEqual, // !=
    Less, // <
    LessEqual, // <=
    Greater, // >
    GreaterEqual, // >=

    // Punctuation
    LParen, // (
    RParen, // )
    Comma, // ,
    Arrow, // =>
    Semicolon, // ;

    // Literals and names
    Literal,
    Identifier,

    // Keywords
    Let,
    If,
    Then,
    Else,
    In,
    Function,
    True,
    False,
    Constant, // PI, E

    Whitespace,
    EndOfLine,
    EndOfInput,
    BadToken,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Let
            | TokenKind::If
            | TokenKind::Then
            | TokenKind::Else
            | TokenKind::In
            | TokenKind::Function
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Constant
        )
    }

    /// Tokens the parser never sees.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::EndOfLine | TokenKind::BadToken
        )
    }

    pub fn as_literal(&self) -> &'static str {
        match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Caret => "^",
            TokenKind::Percent => "%",
            TokenKind::At => "@",
            TokenKind::Bang => "!",
            TokenKind::Ampersand => "&",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::Pipe => "|",
            TokenKind::PipePipe => "||",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Arrow => "=>",
            TokenKind::Semicolon => ";",
            TokenKind::Literal => "literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Let => "let",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::In => "in",
            TokenKind::Function => "function",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Constant => "constant",
            TokenKind::Whitespace => "whitespace",
            TokenKind::EndOfLine => "end of line",
            TokenKind::EndOfInput => "end of input",
            TokenKind::BadToken => "bad token",
        }
    }
}

/// Human form used in syntax diagnostics, e.g. "a literal", "`)`", "the keyword `in`".
impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Literal => write!(f, "a literal"),
            TokenKind::Identifier => write!(f, "an identifier"),
            TokenKind::Constant => write!(f, "a constant"),
            TokenKind::Whitespace
            | TokenKind::EndOfLine
            | TokenKind::EndOfInput
            | TokenKind::BadToken => write!(f, "{}", self.as_literal()),
            kind if kind.is_keyword() => write!(f, "the keyword `{}`", kind.as_literal()),
            kind => write!(f, "`{}`", kind.as_literal()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(value) => write!(f, "{value}"),
            Literal::Str(value) => write!(f, "\"{value}\""),
            Literal::Bool(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: SrcSpan,
    pub text: String,
    pub literal: Option<Literal>,
}

impl Token {
    pub fn new(kind: TokenKind, location: SrcSpan, text: impl Into<String>) -> Self {
        Self {
            kind,
            location,
            text: text.into(),
            literal: None,
        }
    }

    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    /// Stand-in produced by the parser when an expected token is missing.
    pub fn placeholder(kind: TokenKind, at: u32) -> Self {
        Self::new(kind, SrcSpan::point(at), "")
    }

    pub fn offset(&self) -> u32 {
        self.location.start
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} '{}' [{}]", self.kind, self.text.escape_debug(), self.location.start)?;

        if let Some(literal) = &self.literal {
            write!(f, " ({literal})")?;
        }

        Ok(())
    }
}
