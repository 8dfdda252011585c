#![doc = include_str!("../README.md")]
#![no_std]

/// Restores the terminal's default rendition.
pub const RESET: &str = "\x1b[0m";

// Standard foreground colors
pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const LIGHT_GRAY: &str = "\x1b[37m";

/// Default foreground color. Unlike [`RESET`], leaves other attributes alone.
pub const DEFAULT: &str = "\x1b[39m";

// High-intensity foreground colors
pub const DARK_GRAY: &str = "\x1b[90m";
pub const LIGHT_RED: &str = "\x1b[91m";
pub const LIGHT_GREEN: &str = "\x1b[92m";
pub const LIGHT_YELLOW: &str = "\x1b[93m";
pub const LIGHT_BLUE: &str = "\x1b[94m";
pub const LIGHT_MAGENTA: &str = "\x1b[95m";
pub const LIGHT_CYAN: &str = "\x1b[96m";
pub const WHITE: &str = "\x1b[97m";
