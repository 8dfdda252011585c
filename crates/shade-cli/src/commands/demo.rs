use std::io::Write;

use miette::IntoDiagnostic;
use shade::{Color, ColorPrinter, PrintError};

const WORDS: [(&str, Color); 3] = [
    ("Hello", Color::LightBlue),
    ("beautiful", Color::LightMagenta),
    ("world!", Color::LightGreen),
];

pub fn run<W: Write>(printer: &mut ColorPrinter<W>) -> miette::Result<()> {
    printer
        .print_note("This is a notification message.")
        .into_diagnostic()?;
    printer
        .print_warning("This is a warning message.")
        .into_diagnostic()?;
    printer
        .print_error("This is an error message.")
        .into_diagnostic()?;
    printer
        .println_colored("This is a custom-colored message.", Color::Blue)
        .into_diagnostic()?;

    match printer.print_named("This line is never printed.", "not_a_color", "\n") {
        Ok(()) => {}
        Err(PrintError::UnknownColor(e)) => printer.print_error(&e.to_string()).into_diagnostic()?,
        Err(e) => return Err(e.into()),
    }

    for (index, (word, color)) in WORDS.iter().enumerate() {
        let end = if index + 1 == WORDS.len() { "\n" } else { " " };
        printer.print_colored(word, *color, end).into_diagnostic()?;
    }
    Ok(())
}
