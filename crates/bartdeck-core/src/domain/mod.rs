pub mod errors;
pub mod field;

pub use errors::{DeckError, DeckErrorCategory, DeckResult};
pub use field::{Field, FieldGroup};

use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// A parameter value as it will appear on the right-hand side of a deck line.
///
/// Values are never validated. A `List` registered through the store becomes a
/// sweep; lists nested inside a sweep are rendered comma separated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Rendered as comma-separated items without brackets (`1, 3`), the form
    /// the solver's list-valued entries take.
    List(Vec<ParamValue>),
}

impl ParamValue {
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            // Debug keeps the decimal point on integral floats ("1.0").
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Text(value) => f.write_str(value),
            Self::List(values) => {
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T> From<Vec<T>> for ParamValue
where
    T: Into<ParamValue>,
{
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarEntry {
    pub label: String,
    pub value: ParamValue,
}

impl ScalarEntry {
    pub fn new(label: impl Into<String>, value: ParamValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One parameter expanded across several decks, one deck per value.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepEntry {
    pub label: String,
    pub values: Vec<ParamValue>,
}

impl SweepEntry {
    pub fn new(label: impl Into<String>, values: Vec<ParamValue>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}
