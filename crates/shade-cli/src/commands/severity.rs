use std::io::Write;

use miette::IntoDiagnostic;
use shade::{ColorPrinter, Severity};

#[tracing::instrument(skip(words, printer))]
pub fn run<W: Write>(
    severity: Severity,
    words: &[String],
    printer: &mut ColorPrinter<W>,
) -> miette::Result<()> {
    printer
        .print_severity(severity, &words.join(" "))
        .into_diagnostic()
}
