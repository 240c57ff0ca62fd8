//! Process-wide parameter store for script-style deck generation.
//!
//! Callers populate one shared store with free functions and write it once:
//!
//! ```no_run
//! use bartdeck_core::modules::global;
//!
//! global::update(|store| {
//!     store.set_n_energy_groups(2);
//!     store.set_output_filename_base("test");
//! })?;
//! global::save_as("test")?;
//! # Ok::<(), bartdeck_core::domain::DeckError>(())
//! ```

use super::store::ParameterStore;
use super::writer::WriteOutcome;
use crate::domain::{DeckError, DeckResult, Field, ParamValue};
use std::path::Path;
use std::sync::{LazyLock, Mutex, MutexGuard};

static GLOBAL_STORE: LazyLock<Mutex<ParameterStore>> =
    LazyLock::new(|| Mutex::new(ParameterStore::new()));

fn lock_store() -> DeckResult<MutexGuard<'static, ParameterStore>> {
    GLOBAL_STORE.lock().map_err(|_| {
        DeckError::internal(
            "SYS.GLOBAL_STORE",
            "process-wide parameter store is poisoned by an earlier panic",
        )
    })
}

pub fn register(label: impl Into<String>, value: impl Into<ParamValue>) -> DeckResult<()> {
    lock_store()?.register(label, value);
    Ok(())
}

pub fn set(field: Field, value: impl Into<ParamValue>) -> DeckResult<()> {
    lock_store()?.set(field, value);
    Ok(())
}

/// Runs `apply` against the shared store, e.g. to call several named setters.
pub fn update<R>(apply: impl FnOnce(&mut ParameterStore) -> R) -> DeckResult<R> {
    let mut store = lock_store()?;
    Ok(apply(&mut store))
}

pub fn snapshot() -> DeckResult<ParameterStore> {
    Ok(lock_store()?.clone())
}

pub fn save_as(base: &str) -> DeckResult<WriteOutcome> {
    lock_store()?.save_as(base)
}

pub fn write_to(root: &Path, base: &str) -> DeckResult<WriteOutcome> {
    lock_store()?.write_to(root, base)
}
