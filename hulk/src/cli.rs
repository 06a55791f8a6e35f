use std::io::{IsTerminal, Write};

use hulk_core::Error;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

pub(crate) fn print_failed(count: usize) -> std::io::Result<()> {
    print_colourful_prefix("Failed", Color::Red, &format!("{count} diagnostic(s) reported"))
}

pub fn print_colourful_prefix(prefix: &str, color: Color, text: &str) -> std::io::Result<()> {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();
    buffer.set_color(
        ColorSpec::new()
            .set_intense(true)
            .set_bold(true)
            .set_fg(Some(color)),
    )?;
    write!(buffer, "{prefix: >11}")?;
    buffer.set_color(&ColorSpec::new())?;
    writeln!(buffer, " {text}")?;
    buffer_writer.print(&buffer)
}

/// Renders every error against `line` on stderr.
pub fn print_diagnostics(line: &str, errors: &[Error]) -> std::io::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }

    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();

    for error in errors {
        error.pretty(&mut buffer, line)?;
    }

    buffer_writer.print(&buffer)
}

pub fn stderr_buffer_writer() -> BufferWriter {
    BufferWriter::stderr(color_choice())
}

fn colour_forced() -> bool {
    if let Ok(force) = std::env::var("FORCE_COLOR") {
        !force.is_empty()
    } else {
        false
    }
}

fn color_choice() -> ColorChoice {
    if colour_forced() {
        ColorChoice::Always
    } else if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
