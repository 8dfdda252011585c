#![doc = include_str!("../README.md")]

use bpaf::Bpaf;
use tracing_subscriber::prelude::*;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SHADE_LOG";

/// Global options accepted by every `shade` command
#[derive(Debug, Clone, Bpaf)]
#[bpaf(generate(cli_global_options))]
pub struct GlobalOptions {
    /// Log what is written and why. Implies `--log-level debug` unless a
    /// level is given.
    #[bpaf(short('v'), long("verbose"), switch, fallback(false))]
    pub verbose: bool,

    /// The level of diagnostic logging written to stderr. In order, from the
    /// most verbose to the least verbose: trace, debug, info, warn, error.
    #[bpaf(
        long("log-level"),
        argument("none|trace|debug|info|warn|error"),
        fallback(LogLevel::None),
        display_fallback
    )]
    pub log_level: LogLevel,
}

impl GlobalOptions {
    /// The level requested on the command line, with `--verbose` promoting
    /// `none` to `debug`.
    pub fn effective_log_level(&self) -> LogLevel {
        match (self.log_level, self.verbose) {
            (LogLevel::None, true) => LogLevel::Debug,
            (level, _) => level,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    #[default]
    None,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Install a stderr `tracing` subscriber.
///
/// An explicit `level` wins over [`LOG_ENV`]. With neither set, nothing is
/// installed and all logging is discarded.
pub fn init_tracing(level: LogLevel) {
    let filter = match level {
        LogLevel::None => match tracing_subscriber::EnvFilter::try_from_env(LOG_ENV) {
            Ok(filter) => filter,
            Err(_) => return,
        },
        level => tracing_subscriber::EnvFilter::new(<&str>::from(level)),
    };
    tracing_subscriber::registry()
        .with(
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
                .with_indent_lines(true)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
