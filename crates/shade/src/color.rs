use core::str::FromStr;

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::UnknownColorError;

/// A named entry of the color table.
///
/// The set is closed: any other name is rejected by [`Color::from_str`] with
/// an [`UnknownColorError`]. `Reset` and `Default` are distinct entries;
/// `Reset` clears every attribute while `Default` only restores the
/// foreground color.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    #[default]
    Default,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    Reset,
}

impl Color {
    /// The escape sequence emitted for this color.
    pub const fn code(self) -> &'static str {
        use ansi_term_codes as ansi;
        match self {
            Self::Black => ansi::BLACK,
            Self::Red => ansi::RED,
            Self::Green => ansi::GREEN,
            Self::Yellow => ansi::YELLOW,
            Self::Blue => ansi::BLUE,
            Self::Magenta => ansi::MAGENTA,
            Self::Cyan => ansi::CYAN,
            Self::LightGray => ansi::LIGHT_GRAY,
            Self::Default => ansi::DEFAULT,
            Self::DarkGray => ansi::DARK_GRAY,
            Self::LightRed => ansi::LIGHT_RED,
            Self::LightGreen => ansi::LIGHT_GREEN,
            Self::LightYellow => ansi::LIGHT_YELLOW,
            Self::LightBlue => ansi::LIGHT_BLUE,
            Self::LightMagenta => ansi::LIGHT_MAGENTA,
            Self::LightCyan => ansi::LIGHT_CYAN,
            Self::White => ansi::WHITE,
            Self::Reset => ansi::RESET,
        }
    }

    /// The lowercase table name, e.g. `"lightblue"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Wrap `text` in this color's code and the reset code without writing
    /// anything.
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{}", self.code(), ansi_term_codes::RESET)
    }

    /// Every `(name, code)` pair of the table, in declaration order.
    pub fn table() -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::iter().map(|color| (color.name(), color.code()))
    }
}

impl FromStr for Color {
    type Err = UnknownColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| UnknownColorError::new(s))
    }
}
