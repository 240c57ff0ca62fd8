pub mod case_file;
pub mod global;
pub mod serialization;
pub mod writer;

mod registry;
mod store;

pub use case_file::{CaseFile, CaseParameter};
pub use store::ParameterStore;
pub use writer::{DeckPlan, RenderedDeck, WriteOutcome};
