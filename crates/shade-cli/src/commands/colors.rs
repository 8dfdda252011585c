use std::io::Write;

use miette::IntoDiagnostic;
use shade::{Color, ColorPrinter};
use strum::IntoEnumIterator;

/// Printable form of an escape code, e.g. `\x1b[32m`.
fn escaped(code: &str) -> String {
    code.replace('\x1b', "\\x1b")
}

pub fn run<W: Write>(printer: &mut ColorPrinter<W>) -> miette::Result<()> {
    let width = Color::iter().map(|c| c.name().len()).max().unwrap_or(0);
    for color in Color::iter() {
        let name = format!("{:<width$}", color.name());
        writeln!(
            printer.get_mut(),
            "{}  {}",
            color.paint(&name),
            escaped(color.code())
        )
        .into_diagnostic()?;
    }
    Ok(())
}
