mod commands;
mod helpers;

use bartdeck_core::domain::DeckError;
use clap::Parser;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let deck_error = error.as_deck_error();
            eprintln!("{}", deck_error.diagnostic_line());
            if let Some(summary_line) = deck_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            deck_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("bartdeck".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            helpers::init_tracing(cli.verbose);
            dispatch_parsed(cli.command)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "bartdeck", version, about = "BART solver input deck generator")]
struct Cli {
    /// Log parameter registration as well as written files
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Write input decks described by a JSON case file
    Write(commands::WriteArgs),
    /// Print the decks a case file would produce without writing them
    Preview(commands::PreviewArgs),
    /// List recognized fields with their deck labels
    Fields,
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Write(args) => commands::run_write_command(args),
        CliCommand::Preview(args) => commands::run_preview_command(args),
        CliCommand::Fields => commands::run_fields_command(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Deck(DeckError),
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

impl From<DeckError> for CliError {
    fn from(error: DeckError) -> Self {
        Self::Deck(error)
    }
}

impl CliError {
    fn as_deck_error(&self) -> DeckError {
        match self {
            Self::Usage(message) => DeckError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Deck(error) => error.clone(),
            Self::Io(error) => DeckError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliError, run};
    use bartdeck_core::domain::DeckError;

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        let error = run(["bogus"]).expect_err("unknown command should fail");
        assert!(matches!(error, CliError::Usage(_)));
        assert_eq!(error.as_deck_error().exit_code(), 2);
    }

    #[test]
    fn help_exits_cleanly() {
        assert_eq!(run(["--help"]).expect("help should succeed"), 0);
    }

    #[test]
    fn io_errors_map_to_io_category() {
        let error = CliError::from(anyhow::anyhow!("disk vanished"));
        let deck_error = error.as_deck_error();
        assert_eq!(deck_error.placeholder(), "IO.CLI");
        assert_eq!(deck_error.exit_code(), 3);
    }

    #[test]
    fn deck_errors_pass_through() {
        let error = CliError::from(DeckError::input_validation("INPUT.CASE_PARSE", "bad"));
        assert_eq!(error.as_deck_error().placeholder(), "INPUT.CASE_PARSE");
    }
}
