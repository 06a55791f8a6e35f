use std::fmt::Display;

use super::error::{LexicalError, LexicalErrorType};
use super::token::{Literal, Token, TokenKind};
use crate::utils::prelude::SrcSpan;

pub fn str_to_keyword(word: &str) -> Option<(TokenKind, Option<Literal>)> {
	Some(match word {
		"let" => (TokenKind::Let, None),
		"if" => (TokenKind::If, None),
		"then" => (TokenKind::Then, None),
		"else" => (TokenKind::Else, None),
		"in" => (TokenKind::In, None),
		"function" => (TokenKind::Function, None),

		"true" => (TokenKind::True, Some(Literal::Bool(true))),
		"false" => (TokenKind::False, Some(Literal::Bool(false))),

		"PI" => (TokenKind::Constant, Some(Literal::Number(std::f64::consts::PI))),
		"E" => (TokenKind::Constant, Some(Literal::Number(std::f64::consts::E))),

		_ => return None
	})
}

/// Hand-written scanner over one line. `ch`/`next_ch` give the two
/// characters of lookahead needed for `==`, `=>`, `&&` and friends.
#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,

	finished: bool,
	errors: Vec<LexicalError>,
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f,
			"Lexer {{\n\tposition: {},\n\tnext_position: {},\n\tch: {:?}, next_ch: {:?}\n}}",
			self.position, self.next_position, self.ch, self.next_ch
		)
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
			next_ch: None,
            input,

			finished: false,
			errors: vec![],
        };

        lexer.next_char();
        lexer.next_char();

        lexer
    }

	pub fn errors(&self) -> &[LexicalError] {
		&self.errors
	}

	pub fn take_errors(&mut self) -> Vec<LexicalError> {
		std::mem::take(&mut self.errors)
	}

    pub fn next_token(&mut self) -> Token {
		let ch = match self.ch {
			Some(ch) => ch,
			None => return Token::placeholder(TokenKind::EndOfInput, self.position),
		};

		match ch {
			'+' => self.eat_one_char(TokenKind::Plus),
			'-' => self.eat_one_char(TokenKind::Minus),
			'*' => self.eat_one_char(TokenKind::Star),
			'/' => self.eat_one_char(TokenKind::Slash),
			'^' => self.eat_one_char(TokenKind::Caret),
			'%' => self.eat_one_char(TokenKind::Percent),
			'@' => self.eat_one_char(TokenKind::At),
			'(' => self.eat_one_char(TokenKind::LParen),
			')' => self.eat_one_char(TokenKind::RParen),
			',' => self.eat_one_char(TokenKind::Comma),
			';' => self.eat_one_char(TokenKind::Semicolon),
			'=' => match self.next_ch {
				Some('=') => self.eat_two_chars(TokenKind::EqualEqual),
				Some('>') => self.eat_two_chars(TokenKind::Arrow),
				_ => self.eat_one_char(TokenKind::Equal),
			},
			'!' => match self.next_ch {
				Some('=') => self.eat_two_chars(TokenKind::NotEqual),
				_ => self.eat_one_char(TokenKind::Bang),
			},
			'<' => match self.next_ch {
				Some('=') => self.eat_two_chars(TokenKind::LessEqual),
				_ => self.eat_one_char(TokenKind::Less),
			},
			'>' => match self.next_ch {
				Some('=') => self.eat_two_chars(TokenKind::GreaterEqual),
				_ => self.eat_one_char(TokenKind::Greater),
			},
			'&' => match self.next_ch {
				Some('&') => self.eat_two_chars(TokenKind::AmpersandAmpersand),
				_ => self.eat_one_char(TokenKind::Ampersand),
			},
			'|' => match self.next_ch {
				Some('|') => self.eat_two_chars(TokenKind::PipePipe),
				_ => self.eat_one_char(TokenKind::Pipe),
			},
			'"' => self.lex_string(),
			'\n' => self.eat_one_char(TokenKind::EndOfLine),
			'\r' if self.next_ch == Some('\n') => self.eat_two_chars(TokenKind::EndOfLine),
			c if c.is_ascii_digit() => self.lex_number(),
			c if c.is_alphabetic() || c == '_' => self.lex_ident(),
			c if c.is_whitespace() => self.lex_whitespace(),
			c => {
				let token = self.eat_one_char(TokenKind::BadToken);

				self.errors.push(LexicalError::new(
					LexicalErrorType::UnrecognizedCharacter { ch: c },
					token.location,
				));

				token
			}
		}
    }

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;

				Some(ch)
			},
			None => {
				self.position = self.next_position;
				self.next_position = self.position
					+ self.next_ch.map_or(0, |c| c.len_utf8() as u32);

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	fn eat_while(&mut self, text: &mut String, predicate: impl Fn(char) -> bool) {
		while let Some(ch) = self.ch.filter(|c| predicate(*c)) {
			text.push(ch);
			self.next_char();
		}
	}

	fn eat_one_char(&mut self, kind: TokenKind) -> Token {
		let start = self.position;
		let text = self.next_char().map(String::from).unwrap_or_default();

		Token::new(kind, SrcSpan::from(start, self.position), text)
	}

	fn eat_two_chars(&mut self, kind: TokenKind) -> Token {
		let start = self.position;
		let text = [self.next_char(), self.next_char()]
			.into_iter()
			.flatten()
			.collect::<String>();

		Token::new(kind, SrcSpan::from(start, self.position), text)
	}

	fn lex_whitespace(&mut self) -> Token {
		let start = self.position;
		let mut text = String::new();

		self.eat_while(&mut text, |c| c.is_whitespace() && c != '\n' && c != '\r');

		if text.is_empty() {
			// a lone '\r' not followed by '\n'
			return self.eat_one_char(TokenKind::Whitespace);
		}

		Token::new(TokenKind::Whitespace, SrcSpan::from(start, self.position), text)
	}

	fn lex_ident(&mut self) -> Token {
        let start = self.position;
		let mut ident = String::new();

		self.eat_while(&mut ident, |c| c.is_alphanumeric() || c == '_');

        let location = SrcSpan::from(start, self.position);

        match str_to_keyword(&ident) {
			Some((kind, Some(literal))) => Token::new(kind, location, ident).with_literal(literal),
			Some((kind, None)) => Token::new(kind, location, ident),
			None => Token::new(TokenKind::Identifier, location, ident),
		}
	}

	fn lex_number(&mut self) -> Token {
		let start = self.position;
		let mut value = String::new();

		self.eat_while(&mut value, |c| c.is_ascii_digit());

		if self.ch == Some('.') {
			value.push('.');
			self.next_char();
			self.eat_while(&mut value, |c| c.is_ascii_digit());
		}

		let location = SrcSpan::from(start, self.position);

		match value.parse::<f64>() {
			Ok(number) if number.is_finite() => {
				Token::new(TokenKind::Literal, location, value).with_literal(Literal::Number(number))
			},
			_ => {
				self.errors.push(LexicalError::new(
					LexicalErrorType::InvalidNumber { text: value.clone() },
					location,
				));

				Token::new(TokenKind::Literal, location, value)
			}
		}
	}

	fn lex_string(&mut self) -> Token {
		let start = self.position;
		let mut text = String::new();

		text.extend(self.next_char()); // opening quote

		let mut content = String::new();
		self.eat_while(&mut content, |c| c != '"');
		text.push_str(&content);

		match self.next_char() {
			Some(quote) => text.push(quote),
			None => self.errors.push(LexicalError::new(
				LexicalErrorType::UnterminatedString,
				SrcSpan::from(start, self.position),
			)),
		}

		Token::new(TokenKind::Literal, SrcSpan::from(start, self.position), text)
			.with_literal(Literal::Str(content))
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = Token;

	/// Yields every token including a single trailing `EndOfInput`.
	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		let token = self.next_token();
		self.finished = token.kind == TokenKind::EndOfInput;

		Some(token)
	}
}

pub fn lexer_from_str(src: &str) -> Lexer<impl Iterator<Item = (u32, char)> + '_> {
	Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)))
}

/// Lexes a whole line, returning every token (ending with `EndOfInput`) and
/// the lexical diagnostics in encounter order.
pub fn tokenize(src: &str) -> (Vec<Token>, Vec<LexicalError>) {
	let mut lexer = lexer_from_str(src);
	let tokens = lexer.by_ref().collect::<Vec<Token>>();

	(tokens, lexer.take_errors())
}
