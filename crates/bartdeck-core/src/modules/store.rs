use crate::domain::{Field, ParamValue, ScalarEntry, SweepEntry};

/// Accumulated deck parameters: insertion-ordered scalars plus sweep entries.
///
/// A label lives either among the scalars or among the sweeps, never both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterStore {
    scalars: Vec<ScalarEntry>,
    sweeps: Vec<SweepEntry>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `value` and stores it under `label`.
    ///
    /// Lists are appended to the sweep sequence, everything else becomes a
    /// scalar. A scalar label that is registered again keeps its position and
    /// takes the new value. Repeated sweeps are kept; the writer rejects them.
    pub fn register(&mut self, label: impl Into<String>, value: impl Into<ParamValue>) {
        let label = label.into();
        match value.into() {
            ParamValue::List(values) => {
                tracing::debug!(label = %label, count = values.len(), "registering sweep");
                self.scalars.retain(|entry| entry.label != label);
                self.sweeps.push(SweepEntry::new(label, values));
            }
            value => {
                tracing::debug!(label = %label, value = %value, "registering parameter");
                self.sweeps.retain(|entry| entry.label != label);
                match self.scalars.iter_mut().find(|entry| entry.label == label) {
                    Some(existing) => existing.value = value,
                    None => self.scalars.push(ScalarEntry::new(label, value)),
                }
            }
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<ParamValue>) {
        self.register(field.label(), value);
    }

    pub fn scalars(&self) -> &[ScalarEntry] {
        &self.scalars
    }

    pub fn sweeps(&self) -> &[SweepEntry] {
        &self.sweeps
    }

    pub fn scalar(&self, label: &str) -> Option<&ParamValue> {
        self.scalars
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }

    pub fn sweep(&self, label: &str) -> Option<&[ParamValue]> {
        self.sweeps
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.values.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.sweeps.is_empty()
    }
}
