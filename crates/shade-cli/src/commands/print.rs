use std::io::Write;

use shade::ColorPrinter;

use crate::PrintArgs;

#[tracing::instrument(skip_all, fields(color = %args.color))]
pub fn run<W: Write>(args: &PrintArgs, printer: &mut ColorPrinter<W>) -> miette::Result<()> {
    let message = args.message.join(" ");
    printer.print_named(&message, &args.color, args.terminator())?;
    Ok(())
}
