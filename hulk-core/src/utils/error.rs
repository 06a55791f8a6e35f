use std::io::Write;

use termcolor::{Buffer, WriteColor};
use thiserror::Error;

use crate::{
    analyzer::prelude::SemanticError,
    eval::prelude::{RuntimeError, RuntimeErrorType},
    lexer::prelude::LexicalError,
    parser::prelude::ParseError,
    utils::prelude::SrcSpan
};
use super::diagnostic::{Diagnostic, Label, Location, LINE_NAME};

/// Any diagnostic the interpreter can report for a line. The `Display`
/// form is the plain message handed back by `Session::interpret`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    pub fn location(&self) -> SrcSpan {
        match self {
            Error::Lexical(error) => error.location,
            Error::Parse(error) => error.location,
            Error::Semantic(error) => error.location,
            Error::Runtime(error) => error.location,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Error::Lexical(_) => "Lexical error",
            Error::Parse(_) => "Syntax error",
            Error::Semantic(_) => "Semantic error",
            Error::Runtime(RuntimeError {
                error: RuntimeErrorType::RecursionLimitExceeded { .. }
                    | RuntimeErrorType::NestingTooDeep { .. },
                ..
            }) => "Runtime error",
            Error::Runtime(_) => "Reference error",
        }
    }

    pub fn details(&self) -> (String, &'static str) {
        match self {
            Error::Lexical(error) => error.details(),
            Error::Parse(error) => error.details(),
            Error::Semantic(error) => error.details(),
            Error::Runtime(error) => error.details(),
        }
    }

    pub fn pretty_string(&self, src: &str) -> String {
        let mut nocolor = Buffer::no_color();

        // writing into an in-memory buffer
        let _ = self.pretty(&mut nocolor, src);

        String::from_utf8_lossy(nocolor.as_slice()).into_owned()
    }

    pub fn pretty<W: WriteColor>(&self, buf: &mut W, src: &str) -> std::io::Result<()> {
        self.to_diagnostic(src).write(buf)?;
        writeln!(buf)
    }

    /// `src` must be the line the error was reported for. A span that
    /// does not fit it (an error raised inside the body of a function
    /// declared on an earlier line) is rendered without source.
    pub fn to_diagnostic<'a>(&self, src: &'a str) -> Diagnostic<'a> {
        let (text, label) = self.details();
        let span = self.location();

        let location = match fits(span, src) {
            true => Some(Location {
                src,
                name: LINE_NAME.to_string(),
                label: Label {
                    text: Some(label.to_string()),
                    span,
                },
            }),
            false => None
        };

        Diagnostic {
            title: self.title().into(),
            text,
            location,
        }
    }
}

fn fits(span: SrcSpan, src: &str) -> bool {
    let (start, end) = (span.start as usize, span.end as usize);

    start <= end
        && end <= src.len()
        && src.is_char_boundary(start)
        && src.is_char_boundary(end)
}
