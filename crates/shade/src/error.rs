use miette::Diagnostic;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::Color;

/// A color name that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unknown color `{name}`")]
#[diagnostic(code(shade::unknown_color), help("expected one of: {expected}"))]
pub struct UnknownColorError {
    pub name: String,
    pub expected: String,
}

impl UnknownColorError {
    pub fn new(name: &str) -> Self {
        let expected = Color::iter()
            .map(Color::name)
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: name.to_string(),
            expected,
        }
    }
}

/// Failure of a name-based print operation.
#[derive(Debug, Error, Diagnostic)]
pub enum PrintError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnknownColor(#[from] UnknownColorError),

    #[error("failed to write to the terminal")]
    #[diagnostic(code(shade::io))]
    Io(#[from] std::io::Error),
}
