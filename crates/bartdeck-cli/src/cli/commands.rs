use super::CliError;
use super::helpers::{load_case, resolve_base, write_stdout};
use bartdeck_core::domain::Field;
use bartdeck_core::modules::{DeckPlan, WriteOutcome};
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct WriteArgs {
    /// JSON case file listing the deck parameters
    case: PathBuf,

    /// Deck base name (overrides "base" in the case file)
    #[arg(long)]
    base: Option<String>,

    /// Directory that receives the inputs/ folder
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

#[derive(clap::Args)]
pub(super) struct PreviewArgs {
    /// JSON case file listing the deck parameters
    case: PathBuf,

    /// Deck base name (overrides "base" in the case file)
    #[arg(long)]
    base: Option<String>,
}

pub(super) fn run_write_command(args: WriteArgs) -> Result<i32, CliError> {
    let case = load_case(&args.case)?;
    let base = resolve_base(&case, args.base)?;
    let store = case.to_store()?;

    let outcome = store.write_to(&args.root, &base)?;
    match &outcome {
        WriteOutcome::MultipleSweepsRejected { .. } => Ok(2),
        WriteOutcome::Single(_) | WriteOutcome::Sweep { .. } => {
            let paths = outcome.written_paths();
            println!("Wrote {} deck file(s):", paths.len());
            for path in paths {
                println!("  {}", path.display());
            }
            Ok(0)
        }
    }
}

pub(super) fn run_preview_command(args: PreviewArgs) -> Result<i32, CliError> {
    let case = load_case(&args.case)?;
    let base = resolve_base(&case, args.base)?;
    let store = case.to_store()?;

    let plan = store.render(&base);
    if let DeckPlan::MultipleSweepsRejected { labels } = &plan {
        tracing::error!(
            sweeps = ?labels,
            "only one parameter sweep is supported per deck set; found {}",
            labels.len()
        );
        return Ok(2);
    }

    let mut rendered = String::new();
    for deck in plan.decks() {
        rendered.push_str(&format!("# {}\n", deck.relative_path.display()));
        rendered.push_str(&deck.content);
    }
    write_stdout(&rendered)?;
    Ok(0)
}

pub(super) fn run_fields_command() -> Result<i32, CliError> {
    let key_width = Field::ALL
        .iter()
        .map(|field| field.key().len())
        .max()
        .unwrap_or(0);

    let mut listing = String::new();
    for field in Field::ALL {
        listing.push_str(&format!(
            "{:<width$}  {:<18}  {}\n",
            field.key(),
            field.group().as_str(),
            field.label(),
            width = key_width
        ));
    }
    write_stdout(&listing)?;
    Ok(0)
}
