//! Input deck generation for the BART transport solver.
//!
//! Parameters are accumulated in a [`modules::ParameterStore`] through named
//! setters and written as `label = value` lines under `inputs/`.

pub mod domain;
pub mod modules;

pub use domain::{DeckError, DeckResult, Field, ParamValue};
pub use modules::{ParameterStore, WriteOutcome};
