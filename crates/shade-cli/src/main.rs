use std::process::ExitCode;

use bpaf::Bpaf;
use shade::{ColorPrinter, Severity};
use shade_cli_common::GlobalOptions;

mod commands;

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version, fallback_to_usage, generate(cli))]
/// Print ANSI-colored text to the terminal
struct Cli {
    #[bpaf(external(shade_cli_common::cli_global_options))]
    global: GlobalOptions,

    #[bpaf(external(commands))]
    command: Commands,
}

#[derive(Debug, Clone, Bpaf)]
pub struct PrintArgs {
    /// Color name, see `shade colors`
    #[bpaf(
        short('c'),
        long("color"),
        argument("NAME"),
        fallback(String::from("default")),
        display_fallback
    )]
    pub color: String,

    /// Text written after the message instead of a newline
    #[bpaf(long("end"), argument("STR"))]
    pub end: Option<String>,

    /// Write no terminator after the message; overrides --end
    #[bpaf(short('n'), long("no-newline"), switch)]
    pub no_newline: bool,

    /// Words of the message, joined with single spaces
    #[bpaf(positional("MESSAGE"))]
    pub message: Vec<String>,
}

impl PrintArgs {
    pub fn terminator(&self) -> &str {
        if self.no_newline {
            ""
        } else {
            self.end.as_deref().unwrap_or("\n")
        }
    }
}

#[derive(Debug, Clone, Bpaf)]
enum Commands {
    #[bpaf(command("print"))]
    /// Print a message in the given color
    Print(#[bpaf(external(print_args))] PrintArgs),

    #[bpaf(command("note"))]
    /// Print a green [NOTE] message
    Note(#[bpaf(positional("MESSAGE"))] Vec<String>),

    #[bpaf(command("warning"))]
    /// Print a yellow [WARNING] message
    Warning(#[bpaf(positional("MESSAGE"))] Vec<String>),

    #[bpaf(command("error"))]
    /// Print a red [ERROR] message
    Error(#[bpaf(positional("MESSAGE"))] Vec<String>),

    #[bpaf(command("colors"))]
    /// List every color name with its escape code
    Colors,

    #[bpaf(command("demo"))]
    /// Print a sample of colored messages
    Demo,

    #[bpaf(command("version"))]
    /// Print version information
    Version,
}

fn main() -> ExitCode {
    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().context_lines(2).build())
    }))
    .ok();

    let cli = cli().run();
    shade_cli_common::init_tracing(cli.global.effective_log_level());

    let mut printer = ColorPrinter::stdout();
    let result = match cli.command {
        Commands::Print(args) => commands::print::run(&args, &mut printer),
        Commands::Note(words) => commands::severity::run(Severity::Note, &words, &mut printer),
        Commands::Warning(words) => {
            commands::severity::run(Severity::Warning, &words, &mut printer)
        }
        Commands::Error(words) => commands::severity::run(Severity::Error, &words, &mut printer),
        Commands::Colors => commands::colors::run(&mut printer),
        Commands::Demo => commands::demo::run(&mut printer),
        Commands::Version => commands::version::run(&mut printer),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:?}");
            ExitCode::from(2)
        }
    }
}
