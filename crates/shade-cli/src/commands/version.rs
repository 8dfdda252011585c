use std::io::Write;

use miette::IntoDiagnostic;
use shade::ColorPrinter;

pub fn run<W: Write>(printer: &mut ColorPrinter<W>) -> miette::Result<()> {
    let out = printer.get_mut();
    writeln!(out, "shade {}", env!("CARGO_PKG_VERSION"))
        .and_then(|()| out.flush())
        .into_diagnostic()
}
