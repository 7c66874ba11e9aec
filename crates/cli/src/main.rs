mod commands;
mod extensions;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::lex::cmd_lex;
use crate::commands::parse::{cmd_parse, ParseArgs};
use crate::commands::sections::cmd_sections;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// nginx configuration parser and validator.
#[derive(Parser)]
#[command(
    name = "ngxparse",
    version,
    about = "nginx configuration parser and validator"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log more (repeat for more detail)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a configuration file or a section of an `nginx -T` dump
    Parse {
        /// Path to the configuration file or dump
        file: PathBuf,
        /// Dump section to parse (the path from its header line)
        #[arg(long, conflicts_with = "all")]
        section: Option<String>,
        /// Parse every section of a dump
        #[arg(long)]
        all: bool,
        /// Only check syntax; skip directive name, context and arity checks
        #[arg(long)]
        no_validate: bool,
        /// Check every argument-count shape, on/off values and stray blocks
        #[arg(long)]
        strict_arity: bool,
        /// TOML file declaring additional directives
        #[arg(long, value_name = "FILE")]
        directives: Option<PathBuf>,
    },

    /// Print the token stream of a file or dump section
    Lex {
        /// Path to the configuration file or dump
        file: PathBuf,
        /// Dump section to tokenize
        #[arg(long)]
        section: Option<String>,
    },

    /// List the sections of an `nginx -T` dump
    Sections {
        /// Path to the dump
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse {
            file,
            section,
            all,
            no_validate,
            strict_arity,
            directives,
        } => {
            let args = ParseArgs {
                file,
                section,
                all,
                validate: !no_validate,
                strict_arity,
                directives,
            };
            cmd_parse(&args, cli.output, cli.quiet);
        }
        Commands::Lex { file, section } => {
            cmd_lex(&file, section.as_deref(), cli.output, cli.quiet);
        }
        Commands::Sections { file } => {
            cmd_sections(&file, cli.output, cli.quiet);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}

/// Report `msg` and exit with status 1.
pub(crate) fn fail(msg: &str, output: OutputFormat, quiet: bool) -> ! {
    report_error(msg, output, quiet);
    process::exit(1);
}
