use std::io::{self, Write};

use crate::{Color, PrintError, Severity};

/// Writes colored text to `W`.
///
/// Every colored print is framed as `code + text + reset`. The printer holds
/// no state besides the writer, so calls may be freely mixed; it does not
/// lock, and callers sharing one stream across threads must serialize calls
/// themselves.
#[derive(Debug)]
pub struct ColorPrinter<W: Write> {
    out: W,
}

impl ColorPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ColorPrinter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Writing through this bypasses the color framing.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Switch the foreground color. It stays in effect until
    /// [`reset_color`](Self::reset_color).
    ///
    /// # Errors
    ///
    /// Returns the writer's error if the code cannot be written.
    pub fn set_color(&mut self, color: Color) -> io::Result<()> {
        tracing::debug!(color = color.name(), "set color");
        self.out.write_all(color.code().as_bytes())?;
        self.out.flush()
    }

    /// Like [`set_color`](Self::set_color), looking the color up by name.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::UnknownColor`] without writing anything if `name`
    /// is not in the table.
    pub fn set_color_named(&mut self, name: &str) -> Result<(), PrintError> {
        let color = name.parse::<Color>()?;
        Ok(self.set_color(color)?)
    }

    /// # Errors
    ///
    /// Returns the writer's error if the code cannot be written.
    pub fn reset_color(&mut self) -> io::Result<()> {
        tracing::debug!("reset color");
        self.out.write_all(Color::Reset.code().as_bytes())?;
        self.out.flush()
    }

    /// Switch to `color` and return a guard that resets it when finished or
    /// dropped. Text written through the guard goes to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the writer's error. If the color code itself cannot be
    /// written, no reset is written either; once it is written, a failing
    /// flush still resets before returning.
    pub fn colored(&mut self, color: Color) -> io::Result<ColorScope<'_, W>> {
        tracing::debug!(color = color.name(), "set color");
        self.out.write_all(color.code().as_bytes())?;
        let mut scope = ColorScope {
            printer: self,
            armed: true,
        };
        scope.flush()?;
        Ok(scope)
    }

    /// Write `message` followed by `end` in `color`, then reset.
    ///
    /// The reset is attempted even when writing the message fails; the first
    /// error encountered is returned.
    ///
    /// # Errors
    ///
    /// Returns the writer's error.
    #[tracing::instrument(skip_all, fields(color = color.name()))]
    pub fn print_colored(&mut self, message: &str, color: Color, end: &str) -> io::Result<()> {
        let mut scope = self.colored(color)?;
        let written = scope
            .write_all(message.as_bytes())
            .and_then(|()| scope.write_all(end.as_bytes()));
        let reset = scope.finish();
        written.and(reset)
    }

    /// [`print_colored`](Self::print_colored) with a `"\n"` terminator.
    ///
    /// # Errors
    ///
    /// Returns the writer's error.
    pub fn println_colored(&mut self, message: &str, color: Color) -> io::Result<()> {
        self.print_colored(message, color, "\n")
    }

    /// [`print_colored`](Self::print_colored) with the color given by name.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::UnknownColor`] without writing anything if `name`
    /// is not in the table, or [`PrintError::Io`] if writing fails.
    pub fn print_named(&mut self, message: &str, name: &str, end: &str) -> Result<(), PrintError> {
        let color = name.parse::<Color>()?;
        Ok(self.print_colored(message, color, end)?)
    }

    /// Print `message` prefixed with the severity's label, in its color.
    ///
    /// # Errors
    ///
    /// Returns the writer's error.
    pub fn print_severity(&mut self, severity: Severity, message: &str) -> io::Result<()> {
        self.println_colored(&severity.format(message), severity.color())
    }

    /// Print `message` as `[NOTE] message` in green.
    ///
    /// # Errors
    ///
    /// Returns the writer's error.
    pub fn print_note(&mut self, message: &str) -> io::Result<()> {
        self.print_severity(Severity::Note, message)
    }

    /// Print `message` as `[WARNING] message` in yellow.
    ///
    /// # Errors
    ///
    /// Returns the writer's error.
    pub fn print_warning(&mut self, message: &str) -> io::Result<()> {
        self.print_severity(Severity::Warning, message)
    }

    /// Print `message` as `[ERROR] message` in red.
    ///
    /// # Errors
    ///
    /// Returns the writer's error.
    pub fn print_error(&mut self, message: &str) -> io::Result<()> {
        self.print_severity(Severity::Error, message)
    }
}

/// A color that is active until this guard is finished or dropped.
///
/// Dropping the guard writes the reset code and discards any write error;
/// call [`finish`](Self::finish) to observe it.
#[must_use = "the color is reset as soon as the scope is dropped"]
pub struct ColorScope<'a, W: Write> {
    printer: &'a mut ColorPrinter<W>,
    armed: bool,
}

impl<W: Write> ColorScope<'_, W> {
    /// Reset the color now.
    ///
    /// # Errors
    ///
    /// Returns the writer's error if the reset code cannot be written.
    pub fn finish(mut self) -> io::Result<()> {
        self.armed = false;
        self.printer.reset_color()
    }
}

impl<W: Write> Write for ColorScope<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.printer.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.printer.out.flush()
    }
}

impl<W: Write> Drop for ColorScope<'_, W> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = self.printer.reset_color() {
                tracing::warn!(error = %e, "failed to reset color");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn printer() -> ColorPrinter<Vec<u8>> {
        ColorPrinter::new(Vec::new())
    }

    fn output(printer: ColorPrinter<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    /// Accepts `budget` bytes, then fails every write.
    struct FailingWriter {
        written: Vec<u8>,
        budget: usize,
    }

    impl FailingWriter {
        fn new(budget: usize) -> Self {
            Self {
                written: Vec::new(),
                budget,
            }
        }
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.budget -= buf.len();
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Accepts every write, fails every flush.
    struct FlushFails(Vec<u8>);

    impl Write for FlushFails {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("flush failed"))
        }
    }

    #[test]
    fn failed_flush_after_color_code_still_resets() {
        let mut p = ColorPrinter::new(FlushFails(Vec::new()));
        let err = p.print_colored("x", Color::Green, "\n").unwrap_err();
        assert_eq!(err.to_string(), "flush failed");
        assert_eq!(p.into_inner().0, b"\x1b[32m\x1b[0m");
    }

    #[test]
    fn failed_flush_in_colored_resets_on_return() {
        let mut p = ColorPrinter::new(FlushFails(Vec::new()));
        assert!(p.colored(Color::Yellow).is_err());
        assert_eq!(p.into_inner().0, b"\x1b[33m\x1b[0m");
    }

    #[test]
    fn set_then_reset_emits_exactly_two_codes() {
        for color in Color::iter() {
            let mut p = printer();
            p.set_color(color).unwrap();
            p.reset_color().unwrap();
            assert_eq!(output(p), format!("{}\x1b[0m", color.code()));
        }
    }

    #[test]
    fn print_colored_green() {
        let mut p = printer();
        p.print_colored("x", Color::Green, "\n").unwrap();
        assert_eq!(output(p), "\x1b[32mx\n\x1b[0m");
    }

    #[test]
    fn print_colored_custom_terminator() {
        let mut p = printer();
        p.print_colored("Hello", Color::LightBlue, " ").unwrap();
        p.print_colored("world!", Color::LightGreen, "\n").unwrap();
        assert_eq!(
            output(p),
            "\x1b[94mHello \x1b[0m\x1b[92mworld!\n\x1b[0m"
        );
    }

    #[test]
    fn print_colored_default_color() {
        let mut p = printer();
        p.println_colored("plain", Color::default()).unwrap();
        assert_eq!(output(p), "\x1b[39mplain\n\x1b[0m");
    }

    #[test]
    fn print_named_known_color() {
        let mut p = printer();
        p.print_named("x", "green", "\n").unwrap();
        assert_eq!(output(p), "\x1b[32mx\n\x1b[0m");
    }

    #[test]
    fn print_named_unknown_color_writes_nothing() {
        let mut p = printer();
        let err = p.print_named("x", "not_a_color", "\n").unwrap_err();
        assert!(matches!(err, PrintError::UnknownColor(ref e) if e.name == "not_a_color"));
        assert_eq!(output(p), "");
    }

    #[test]
    fn set_color_named_unknown_writes_nothing() {
        let mut p = printer();
        assert!(p.set_color_named("chartreuse").is_err());
        assert!(p.get_ref().is_empty());
    }

    #[test]
    fn severity_helpers() {
        let mut p = printer();
        p.print_note("m").unwrap();
        assert_eq!(output(p), "\x1b[32m[NOTE] m\n\x1b[0m");

        let mut p = printer();
        p.print_warning("m").unwrap();
        assert_eq!(output(p), "\x1b[33m[WARNING] m\n\x1b[0m");

        let mut p = printer();
        p.print_error("m").unwrap();
        assert_eq!(output(p), "\x1b[31m[ERROR] m\n\x1b[0m");
    }

    #[test]
    fn reset_twice_is_idempotent() {
        let mut p = printer();
        p.reset_color().unwrap();
        p.reset_color().unwrap();
        assert_eq!(output(p), "\x1b[0m\x1b[0m");
    }

    #[test]
    fn scope_resets_on_drop() {
        let mut p = printer();
        {
            let mut scope = p.colored(Color::Cyan).unwrap();
            write!(scope, "inside").unwrap();
        }
        assert_eq!(output(p), "\x1b[36minside\x1b[0m");
    }

    #[test]
    fn scope_resets_on_early_return() {
        fn body(p: &mut ColorPrinter<Vec<u8>>) -> io::Result<()> {
            let mut scope = p.colored(Color::Magenta)?;
            scope.write_all(b"partial")?;
            Err(io::Error::other("bail"))
        }

        let mut p = printer();
        assert!(body(&mut p).is_err());
        assert_eq!(output(p), "\x1b[35mpartial\x1b[0m");
    }

    #[test]
    fn finish_resets_once() {
        let mut p = printer();
        let scope = p.colored(Color::Red).unwrap();
        scope.finish().unwrap();
        assert_eq!(output(p), "\x1b[31m\x1b[0m");
    }

    #[test]
    fn reset_still_written_when_message_fails() {
        // Room for the color code and the reset code, not the message.
        let mut p = ColorPrinter::new(FailingWriter::new(9));
        let err = p
            .print_colored("a long message", Color::Green, "\n")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(p.into_inner().written, b"\x1b[32m\x1b[0m");
    }

    #[test]
    fn failed_color_code_writes_no_reset() {
        let mut p = ColorPrinter::new(FailingWriter::new(0));
        assert!(p.print_colored("x", Color::Green, "\n").is_err());
        assert!(p.into_inner().written.is_empty());
    }

    #[test]
    fn print_named_surfaces_io_errors() {
        let mut p = ColorPrinter::new(FailingWriter::new(0));
        let err = p.print_named("x", "green", "\n").unwrap_err();
        assert!(matches!(err, PrintError::Io(_)));
    }
}
