//! Deck writer: turns a [`ParameterStore`] into `inputs/<base>.input` files.
//!
//! With one sweep registered, one deck is produced per sweep value and named
//! `inputs/<base>-<index>.input`. More than one sweep is rejected with an error
//! diagnostic and nothing is written.

use super::serialization::{render_deck_text, write_text_artifact};
use super::store::ParameterStore;
use crate::domain::{DeckError, DeckResult};
use std::fs;
use std::path::{Path, PathBuf};

pub const INPUTS_DIR: &str = "inputs";
pub const DECK_EXTENSION: &str = "input";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDeck {
    pub relative_path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckPlan {
    Single(RenderedDeck),
    Sweep {
        label: String,
        decks: Vec<RenderedDeck>,
    },
    MultipleSweepsRejected {
        labels: Vec<String>,
    },
}

impl DeckPlan {
    pub fn decks(&self) -> &[RenderedDeck] {
        match self {
            Self::Single(deck) => std::slice::from_ref(deck),
            Self::Sweep { decks, .. } => decks,
            Self::MultipleSweepsRejected { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Single(PathBuf),
    Sweep { label: String, paths: Vec<PathBuf> },
    MultipleSweepsRejected { labels: Vec<String> },
}

impl WriteOutcome {
    pub fn written_paths(&self) -> &[PathBuf] {
        match self {
            Self::Single(path) => std::slice::from_ref(path),
            Self::Sweep { paths, .. } => paths,
            Self::MultipleSweepsRejected { .. } => &[],
        }
    }

    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::MultipleSweepsRejected { .. })
    }
}

pub fn deck_relative_path(base: &str, sweep_index: Option<usize>) -> PathBuf {
    let file_name = match sweep_index {
        Some(index) => format!("{}-{}.{}", base, index, DECK_EXTENSION),
        None => format!("{}.{}", base, DECK_EXTENSION),
    };
    Path::new(INPUTS_DIR).join(file_name)
}

impl ParameterStore {
    /// Renders the decks `save_as` would write, without touching the filesystem.
    pub fn render(&self, base: &str) -> DeckPlan {
        match self.sweeps() {
            [] => DeckPlan::Single(RenderedDeck {
                relative_path: deck_relative_path(base, None),
                content: render_deck_text(self.scalars(), None),
            }),
            [sweep] => DeckPlan::Sweep {
                label: sweep.label.clone(),
                decks: sweep
                    .values
                    .iter()
                    .enumerate()
                    .map(|(index, value)| RenderedDeck {
                        relative_path: deck_relative_path(base, Some(index)),
                        content: render_deck_text(
                            self.scalars(),
                            Some((sweep.label.as_str(), value)),
                        ),
                    })
                    .collect(),
            },
            sweeps => DeckPlan::MultipleSweepsRejected {
                labels: sweeps.iter().map(|sweep| sweep.label.clone()).collect(),
            },
        }
    }

    /// Writes the decks under `./inputs`.
    pub fn save_as(&self, base: &str) -> DeckResult<WriteOutcome> {
        self.write_to(Path::new(""), base)
    }

    /// Writes the decks under `<root>/inputs`, creating the directory if needed.
    pub fn write_to(&self, root: &Path, base: &str) -> DeckResult<WriteOutcome> {
        ensure_inputs_dir(root)?;

        match self.render(base) {
            DeckPlan::Single(deck) => {
                let path = write_rendered_deck(root, &deck)?;
                Ok(WriteOutcome::Single(path))
            }
            DeckPlan::Sweep { label, decks } => {
                if decks.is_empty() {
                    tracing::warn!(label = %label, "sweep has no values; no decks written");
                }
                let paths = decks
                    .iter()
                    .map(|deck| write_rendered_deck(root, deck))
                    .collect::<DeckResult<Vec<_>>>()?;
                Ok(WriteOutcome::Sweep { label, paths })
            }
            DeckPlan::MultipleSweepsRejected { labels } => {
                tracing::error!(
                    sweeps = ?labels,
                    "only one parameter sweep is supported per deck set; found {}",
                    labels.len()
                );
                Ok(WriteOutcome::MultipleSweepsRejected { labels })
            }
        }
    }
}

fn ensure_inputs_dir(root: &Path) -> DeckResult<()> {
    let dir = root.join(INPUTS_DIR);
    fs::create_dir_all(&dir).map_err(|source| {
        DeckError::io_system(
            "IO.DECK_DIRECTORY",
            format!(
                "failed to create deck directory '{}': {}",
                dir.display(),
                source
            ),
        )
    })
}

fn write_rendered_deck(root: &Path, deck: &RenderedDeck) -> DeckResult<PathBuf> {
    let path = root.join(&deck.relative_path);
    tracing::info!(path = %path.display(), "writing deck");
    write_text_artifact(&path, &deck.content).map_err(|source| {
        DeckError::io_system(
            "IO.DECK_WRITE",
            format!("failed to write deck '{}': {}", path.display(), source),
        )
    })?;
    Ok(path)
}
