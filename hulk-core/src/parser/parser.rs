use crate::{
    lexer::prelude::{Lexer, LexicalError, Literal, Token, TokenKind, lexer_from_str},
    utils::prelude::SrcSpan
};
use super::error::{ParenContext, ParseError, ParseErrorType};
use super::ast::{Binding, BinaryOperator, Expression, Identifier, Program, UnaryOperator};

/// Nesting ceiling for recursive descent; deeper input is a syntax error
/// instead of a native stack overflow.
pub const MAX_NESTING_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Precedence {
    Lowest,
    Logical,
    Comparison,
    Sum,
    Product,
    Exponent,
    Prefix
}

impl From<BinaryOperator> for Precedence {
    fn from(value: BinaryOperator) -> Self {
        match value {
            BinaryOperator::Power => Self::Exponent,
            BinaryOperator::Multiply | BinaryOperator::Divide => Self::Product,
            BinaryOperator::Add | BinaryOperator::Subtract |
            BinaryOperator::Concat | BinaryOperator::Modulo => Self::Sum,
            BinaryOperator::Less | BinaryOperator::Greater |
            BinaryOperator::LessOrEqual | BinaryOperator::GreaterOrEqual |
            BinaryOperator::Equal | BinaryOperator::NotEqual => Self::Comparison,
            BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr |
            BinaryOperator::And | BinaryOperator::Or => Self::Logical,
        }
    }
}

#[derive(Debug)]
pub struct Parsed {
    pub program: Program,
    pub lex_errors: Vec<LexicalError>,
    pub errors: Vec<ParseError>,
}

impl Parsed {
    pub fn has_errors(&self) -> bool {
        !self.lex_errors.is_empty() || !self.errors.is_empty()
    }
}

impl From<Token> for Identifier {
    fn from(value: Token) -> Self {
        Identifier {
            value: value.text,
            location: value.location
        }
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    lex_errors: Vec<LexicalError>,
    errors: Vec<ParseError>,

    // set by the first error of a statement, cleared at the next boundary
    panicking: bool,
    slot_start: u32,
    depth: usize,
}

impl Parser {
    pub fn new(src: &str) -> Self {
        Self::from_lexer(lexer_from_str(src))
    }

    pub fn from_lexer<T: Iterator<Item = (u32, char)>>(mut lexer: Lexer<T>) -> Self {
        let tokens = lexer.by_ref()
            .filter(|token| !token.kind.is_trivia())
            .collect::<Vec<Token>>();

        Self {
            tokens,
            position: 0,
            lex_errors: lexer.take_errors(),
            errors: vec![],
            panicking: false,
            slot_start: 0,
            depth: 0,
        }
    }

    pub fn peek(&self, distance: usize) -> &Token {
        // the lexer always ends the buffer with `EndOfInput`
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[(self.position + distance).min(last)]
    }

    pub fn current(&self) -> &Token {
        self.peek(0)
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.current().clone();

        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }

        token
    }

    /// Consumes the current token when it is of the `expected` kind. Otherwise
    /// records a diagnostic and hands back a synthetic token so the caller
    /// can keep going.
    pub fn match_kind(&mut self, expected: TokenKind) -> Token {
        if self.current().kind == expected {
            return self.next_token();
        }

        let found = self.current();
        let error = ParseError::new(
            ParseErrorType::UnexpectedToken { found: found.kind, expected },
            found.location
        );
        let placeholder = Token::placeholder(expected, found.offset());

        self.report(error);

        placeholder
    }

    /// Keeps only the first diagnostic of a statement. A lexical error
    /// earlier in the same statement counts as that first diagnostic.
    fn report(&mut self, error: ParseError) {
        if !self.panicking && !self.follows_lex_error(error.location.start) {
            self.errors.push(error);
        }

        self.panicking = true;
    }

    fn follows_lex_error(&self, offset: u32) -> bool {
        self.lex_errors.iter()
            .any(|error| error.location.start >= self.slot_start && error.location.start <= offset)
    }

    fn expect_closing(&mut self, context: ParenContext) -> Token {
        match self.current().kind {
            TokenKind::RParen => self.next_token(),
            TokenKind::EndOfInput | TokenKind::Semicolon => {
                let location = self.current().location;
                self.report(ParseError::new(
                    ParseErrorType::UnclosedParenthesis { context },
                    location
                ));

                Token::placeholder(TokenKind::RParen, location.start)
            },
            _ => self.match_kind(TokenKind::RParen)
        }
    }

    fn synchronize(&mut self) {
        while !matches!(
            self.current().kind,
            TokenKind::Semicolon | TokenKind::EndOfInput
        ) {
            self.next_token();
        }
    }

    pub fn parse(mut self) -> Parsed {
        let mut statements = vec![];

        while self.current().kind != TokenKind::EndOfInput {
            self.panicking = false;

            let statement = match self.current().kind {
                TokenKind::Function => self.parse_declaration(),
                _ => self.parse_expression(Precedence::Lowest)
            };

            let terminator = self.current().clone();

            if !matches!(terminator.kind, TokenKind::Semicolon | TokenKind::EndOfInput) {
                self.report(ParseError::new(
                    ParseErrorType::MissingTerminator { found: terminator.kind },
                    terminator.location
                ));
            }

            if self.panicking {
                self.synchronize();
            }

            let slot_end = self.current().location.start;
            let lexically_clean = !self.lex_errors.iter()
                .any(|error| error.location.start >= self.slot_start && error.location.start < slot_end);

            statements.push(match (self.panicking, lexically_clean) {
                (false, true) => Some(statement),
                _ => None
            });

            if self.current().kind == TokenKind::Semicolon {
                self.slot_start = self.next_token().location.end;
            }
        }

        Parsed {
            program: Program { statements },
            lex_errors: self.lex_errors,
            errors: self.errors,
        }
    }

    // function <name> ( [<param> {, <param>}] ) => <expression>
    fn parse_declaration(&mut self) -> Expression {
        let start = self.next_token().location;

        let name = Identifier::from(self.match_kind(TokenKind::Identifier));
        self.match_kind(TokenKind::LParen);

        let mut params = vec![];

        if self.current().kind == TokenKind::Identifier {
            loop {
                params.push(Identifier::from(self.match_kind(TokenKind::Identifier)));

                if self.panicking || self.current().kind != TokenKind::Comma {
                    break;
                }

                self.next_token();
            }
        }

        self.expect_closing(ParenContext::Declaration);
        self.match_kind(TokenKind::Arrow);

        let body = self.parse_expression(Precedence::Lowest);
        let location = start.to(body.location());

        Expression::FunctionDeclaration {
            name,
            params,
            body: Box::new(body),
            location
        }
    }

    pub fn parse_expression(&mut self, parent: Precedence) -> Expression {
        let location = self.current().location;

        if self.panicking {
            return error_expression(location);
        }

        if self.depth >= MAX_NESTING_DEPTH {
            self.report(ParseError::new(
                ParseErrorType::NestingTooDeep { limit: MAX_NESTING_DEPTH },
                location
            ));

            return error_expression(location);
        }

        self.depth += 1;
        let expression = self.parse_binary(parent);
        self.depth -= 1;

        expression
    }

    fn parse_binary(&mut self, parent: Precedence) -> Expression {
        let mut left = match UnaryOperator::from_token(self.current().kind) {
            Some(operator) if Precedence::Prefix >= parent => {
                let start = self.next_token().location;
                let operand = self.parse_expression(Precedence::Prefix);
                let location = start.to(operand.location());

                Expression::Unary {
                    operator,
                    operand: Box::new(operand),
                    location
                }
            },
            _ => self.parse_term()
        };

        while !self.panicking {
            let operator = match BinaryOperator::from_token(self.current().kind) {
                Some(operator) => operator,
                None => break
            };

            let precedence = Precedence::from(operator);

            if precedence <= parent {
                break;
            }

            self.next_token();

            let right = self.parse_expression(precedence);
            let location = left.location().to(right.location());

            left = Expression::Binary {
                left: Box::new(left),
                operator,
                right: Box::new(right),
                location
            };
        }

        left
    }

    fn parse_term(&mut self) -> Expression {
        let token = self.current().clone();

        match token.kind {
            TokenKind::LParen => {
                self.next_token();

                let expression = self.parse_expression(Precedence::Lowest);
                let close = self.expect_closing(ParenContext::Grouping);

                Expression::Parenthesized {
                    expression: Box::new(expression),
                    location: token.location.to(close.location)
                }
            },
            TokenKind::If => self.parse_conditional(),
            TokenKind::Let => self.parse_let(),
            TokenKind::Identifier if self.peek(1).kind == TokenKind::LParen => self.parse_call(),
            TokenKind::Identifier => Expression::Variable(Identifier::from(self.next_token())),
            TokenKind::True | TokenKind::False | TokenKind::Constant => {
                self.next_token();
                literal_expression(token)
            },
            _ => literal_expression(self.match_kind(TokenKind::Literal))
        }
    }

    // if ( <expression> ) <expression> else <expression>
    fn parse_conditional(&mut self) -> Expression {
        let start = self.next_token().location;

        self.match_kind(TokenKind::LParen);
        let condition = self.parse_expression(Precedence::Lowest);
        self.expect_closing(ParenContext::Condition);

        let resolution = self.parse_expression(Precedence::Lowest);

        self.match_kind(TokenKind::Else);
        let alternative = self.parse_expression(Precedence::Lowest);

        let location = start.to(alternative.location());

        Expression::Conditional {
            condition: Box::new(condition),
            resolution: Box::new(resolution),
            alternative: Box::new(alternative),
            location
        }
    }

    // let <name> = <expression> {, <name> = <expression> } in <expression>
    fn parse_let(&mut self) -> Expression {
        let start = self.next_token().location;
        let mut bindings = vec![];

        loop {
            let name = Identifier::from(self.match_kind(TokenKind::Identifier));
            self.match_kind(TokenKind::Equal);
            let value = self.parse_expression(Precedence::Lowest);

            bindings.push(Binding { name, value });

            if self.panicking || self.current().kind != TokenKind::Comma {
                break;
            }

            self.next_token();
        }

        if self.current().kind == TokenKind::In {
            self.next_token();
        } else {
            let found = self.current();
            let error = ParseError::new(ParseErrorType::MissingIn { found: found.kind }, found.location);

            self.report(error);
        }

        let body = self.parse_expression(Precedence::Lowest);
        let location = start.to(body.location());

        Expression::LetBinding {
            bindings,
            body: Box::new(body),
            location
        }
    }

    // <name> ( [<expression> {, <expression>}] )
    fn parse_call(&mut self) -> Expression {
        let name = Identifier::from(self.next_token());
        self.next_token();

        let mut args = vec![];

        if self.current().kind != TokenKind::RParen {
            loop {
                args.push(self.parse_expression(Precedence::Lowest));

                if self.panicking || self.current().kind != TokenKind::Comma {
                    break;
                }

                self.next_token();
            }
        }

        let close = self.expect_closing(ParenContext::Call);
        let location = name.location.to(close.location);

        Expression::FunctionCall {
            name,
            args,
            location
        }
    }
}

fn literal_expression(token: Token) -> Expression {
    Expression::Literal {
        // a literal without a value was already diagnosed by the lexer
        value: token.literal.unwrap_or(Literal::Number(f64::NAN)),
        location: token.location
    }
}

/// Stand-in for an expression that failed to parse. Never evaluated: the
/// statement holding it is dropped.
fn error_expression(location: SrcSpan) -> Expression {
    Expression::Literal {
        value: Literal::Bool(false),
        location
    }
}

pub fn parse_program(src: &str) -> Parsed {
    Parser::new(src).parse()
}
