mod cli;

use std::process::ExitCode;

use clap::Parser;
use hulk_core::{
    lexer::prelude::tokenize,
    parser::prelude::parse_program,
    Error, Session, DEFAULT_MAX_DEPTH
};

#[derive(Parser)]
#[command(version, about = "Interpreter for a small HULK-style expression language")]
enum Command {
    /// Interprets each line in order within one session, so functions
    /// declared on a line are callable from the following ones
    Eval {
        /// Lines to interpret
        #[arg(required = true)]
        lines: Vec<String>,
        /// Maximum nested function calls before reporting a recursion error
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Prints the token stream of a line
    Lex {
        line: String,
    },
    /// Prints the parsed statements of a line
    Parse {
        line: String,
        /// Print ast instead of parsed source code
        #[arg(long, default_value_t = false)]
        print_ast: bool,
    },
    /// Lists the functions available in a fresh session
    Functions,
}

fn main() -> ExitCode {
    let outcome = match Command::parse() {
        Command::Eval { lines, max_depth } => eval(&lines, max_depth),
        Command::Lex { line } => lex(&line),
        Command::Parse { line, print_ast } => parse(&line, print_ast),
        Command::Functions => {
            for signature in Session::new().list_functions() {
                println!("{signature}");
            }

            Ok(0)
        }
    };

    match outcome {
        Ok(0) => ExitCode::SUCCESS,
        Ok(count) => match cli::print_failed(count) {
            Ok(()) => ExitCode::from(1),
            Err(_) => ExitCode::from(2),
        },
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

/// Returns the number of diagnostics reported.
fn eval(lines: &[String], max_depth: usize) -> std::io::Result<usize> {
    let mut session = Session::with_max_depth(max_depth);
    let mut count = 0;

    for line in lines {
        let outcome = session.interpret(line);

        for value in outcome.results.iter().filter(|value| !value.is_nothing()) {
            println!("{value}");
        }

        cli::print_diagnostics(line, &outcome.errors)?;
        count += outcome.errors.len();
    }

    Ok(count)
}

fn lex(line: &str) -> std::io::Result<usize> {
    let (tokens, errors) = tokenize(line);

    for token in tokens {
        println!("{token}");
    }

    let errors = errors.into_iter()
        .map(Error::from)
        .collect::<Vec<Error>>();

    cli::print_diagnostics(line, &errors)?;

    Ok(errors.len())
}

fn parse(line: &str, print_ast: bool) -> std::io::Result<usize> {
    let parsed = parse_program(line);

    for statement in &parsed.program.statements {
        match statement {
            Some(statement) if print_ast => println!("{statement:#?}"),
            Some(statement) => println!("{statement}"),
            None => println!("<error>"),
        }
    }

    let mut errors = parsed.lex_errors.into_iter()
        .map(Error::from)
        .chain(parsed.errors.into_iter().map(Error::from))
        .collect::<Vec<Error>>();

    errors.sort_by_key(|error| error.location().start);

    cli::print_diagnostics(line, &errors)?;

    Ok(errors.len())
}
