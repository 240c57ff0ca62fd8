use super::CliError;
use anyhow::Context;
use bartdeck_core::domain::DeckError;
use bartdeck_core::modules::CaseFile;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so `preview` output on stdout stays clean.
pub(super) fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second init in the same process (unit tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub(super) fn resolve_base(case: &CaseFile, override_base: Option<String>) -> Result<String, CliError> {
    override_base
        .or_else(|| case.base.clone())
        .filter(|base| !base.trim().is_empty())
        .ok_or_else(|| {
            CliError::Deck(DeckError::input_validation(
                "INPUT.CASE_BASE",
                "no deck base name: set \"base\" in the case file or pass --base",
            ))
        })
}

pub(super) fn load_case(path: &Path) -> Result<CaseFile, CliError> {
    Ok(CaseFile::load(path)?)
}

pub(super) fn write_stdout(content: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write to stdout")?;
    Ok(())
}
