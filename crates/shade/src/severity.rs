use crate::Color;

/// Label for a message printed through the severity helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

impl Severity {
    pub const fn color(self) -> Color {
        match self {
            Self::Note => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Bracketed prefix placed before the message, e.g. `[WARNING]`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Note => "[NOTE]",
            Self::Warning => "[WARNING]",
            Self::Error => "[ERROR]",
        }
    }

    pub fn format(self, message: &str) -> String {
        format!("{} {message}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_colors() {
        assert_eq!(Severity::Note.color(), Color::Green);
        assert_eq!(Severity::Warning.color(), Color::Yellow);
        assert_eq!(Severity::Error.color(), Color::Red);
    }

    #[test]
    fn label_prefixes_message() {
        assert_eq!(Severity::Warning.format("disk low"), "[WARNING] disk low");
    }

    #[test]
    fn empty_message_keeps_separator() {
        assert_eq!(Severity::Note.format(""), "[NOTE] ");
    }
}
