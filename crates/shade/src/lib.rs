#![doc = include_str!("../README.md")]

mod color;
mod error;
mod printer;
mod severity;
pub mod stdout;

pub use color::Color;
pub use error::{PrintError, UnknownColorError};
pub use printer::{ColorPrinter, ColorScope};
pub use severity::Severity;
