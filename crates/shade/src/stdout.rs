//! Free functions writing to standard output.
//!
//! Each call locks stdout for its whole duration, so the escape codes and
//! text of one call are never interleaved with another thread's call.

use std::io;

use crate::{Color, ColorPrinter, PrintError};

fn locked() -> ColorPrinter<io::StdoutLock<'static>> {
    ColorPrinter::new(io::stdout().lock())
}

/// # Errors
///
/// Returns the error from writing to stdout.
pub fn set_color(color: Color) -> io::Result<()> {
    locked().set_color(color)
}

/// # Errors
///
/// Returns the error from writing to stdout.
pub fn reset_color() -> io::Result<()> {
    locked().reset_color()
}

/// # Errors
///
/// Returns the error from writing to stdout.
pub fn print_colored(message: &str, color: Color, end: &str) -> io::Result<()> {
    locked().print_colored(message, color, end)
}

/// # Errors
///
/// Returns [`PrintError::UnknownColor`] if `name` is not in the table, or
/// [`PrintError::Io`] if writing to stdout fails.
pub fn print_named(message: &str, name: &str, end: &str) -> Result<(), PrintError> {
    locked().print_named(message, name, end)
}

/// # Errors
///
/// Returns the error from writing to stdout.
pub fn print_note(message: &str) -> io::Result<()> {
    locked().print_note(message)
}

/// # Errors
///
/// Returns the error from writing to stdout.
pub fn print_warning(message: &str) -> io::Result<()> {
    locked().print_warning(message)
}

/// # Errors
///
/// Returns the error from writing to stdout.
pub fn print_error(message: &str) -> io::Result<()> {
    locked().print_error(message)
}
