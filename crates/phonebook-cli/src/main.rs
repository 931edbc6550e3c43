mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, name, phone, process, Context};
use crate::error::{exit_code_for, report_error};
use phonebook_config as config;

#[derive(Debug, Parser)]
#[command(
    name = "phonebook",
    version,
    about = "Normalize a CSV phonebook and merge duplicate people"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize, merge and write the phonebook (default)
    Process(process::ProcessArgs),
    /// Print a phone number in canonical form
    Phone(phone::PhoneArgs),
    /// Split a full name into last name, first name and patronymic
    Name(name::NameArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        command,
        ..
    } = cli;

    let command =
        match command.unwrap_or_else(|| Command::Process(process::ProcessArgs::default())) {
            Command::Completions(args) => return completions::emit(args),
            command => command,
        };

    let app_config = config::load(config_path).with_context(|| "load config")?;
    debug!(
        input = %app_config.input.display(),
        output = %app_config.output.display(),
        delimiter = %char::from(app_config.delimiter).escape_default(),
        "config loaded"
    );

    let ctx = Context {
        json,
        config: &app_config,
    };

    match command {
        Command::Process(args) => process::process(&ctx, args),
        Command::Phone(args) => phone::phone(&ctx, args),
        Command::Name(args) => name::name(&ctx, args),
        Command::Completions(_) => unreachable!("completions handled before config load"),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
