//! JSON case files describing a deck for the command-line front end.

use super::store::ParameterStore;
use crate::domain::{DeckError, DeckResult, Field, ParamValue};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub parameters: Vec<CaseParameter>,
}

/// One entry: either a known `field` key or a raw `label`, plus its value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseParameter {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    pub value: ParamValue,
}

impl CaseParameter {
    fn resolve_label(&self, position: usize) -> DeckResult<String> {
        match (&self.field, &self.label) {
            (Some(key), None) => Field::from_key(key)
                .map(|field| field.label().to_string())
                .ok_or_else(|| {
                    DeckError::input_validation(
                        "INPUT.CASE_UNKNOWN_FIELD",
                        format!("parameter #{} names unknown field '{}'", position, key),
                    )
                }),
            (None, Some(label)) => Ok(label.clone()),
            (Some(_), Some(_)) => Err(DeckError::input_validation(
                "INPUT.CASE_PARAMETER",
                format!(
                    "parameter #{} sets both 'field' and 'label'; use exactly one",
                    position
                ),
            )),
            (None, None) => Err(DeckError::input_validation(
                "INPUT.CASE_PARAMETER",
                format!("parameter #{} needs a 'field' or a 'label'", position),
            )),
        }
    }
}

impl CaseFile {
    pub fn parse(source: &str) -> DeckResult<Self> {
        serde_json::from_str(source).map_err(|source| {
            DeckError::input_validation(
                "INPUT.CASE_PARSE",
                format!("failed to parse case file: {}", source),
            )
        })
    }

    pub fn load(path: &Path) -> DeckResult<Self> {
        let source = fs::read_to_string(path).map_err(|source| {
            DeckError::io_system(
                "IO.CASE_READ",
                format!("failed to read case file '{}': {}", path.display(), source),
            )
        })?;
        Self::parse(&source)
    }

    /// Registers every parameter, in file order, into `store`.
    pub fn apply_to(&self, store: &mut ParameterStore) -> DeckResult<()> {
        for (index, parameter) in self.parameters.iter().enumerate() {
            let label = parameter.resolve_label(index + 1)?;
            store.register(label, parameter.value.clone());
        }
        Ok(())
    }

    pub fn to_store(&self) -> DeckResult<ParameterStore> {
        let mut store = ParameterStore::new();
        self.apply_to(&mut store)?;
        Ok(store)
    }
}
