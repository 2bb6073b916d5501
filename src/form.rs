//! Form data model: parameter definitions, their values and the exchanged model.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamId(pub u32);

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ParamId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u32> for ParamId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Declared value type of a parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
}

/// A named field definition. One text input is rendered per parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParamId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ParamType,
}

impl Parameter {
    pub fn new(id: impl Into<ParamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ParamType::String,
        }
    }
}

/// Current text bound to a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamValue {
    pub param_id: ParamId,
    pub value: String,
}

impl ParamValue {
    pub fn new(param_id: impl Into<ParamId>, value: impl Into<String>) -> Self {
        Self {
            param_id: param_id.into(),
            value: value.into(),
        }
    }
}

/// Color string carried through the form untouched.
pub type Color = String;

/// Full editable payload exchanged with the outside world.
///
/// `colors` is passthrough data: the editor never reads or writes it, it is
/// only handed back on every read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    pub param_values: Vec<ParamValue>,
    pub colors: Vec<Color>,
}

impl Model {
    /// Value stored for `id`, if the model has an entry for it.
    pub fn value_of(&self, id: ParamId) -> Option<&str> {
        self.param_values
            .iter()
            .find(|pv| pv.param_id == id)
            .map(|pv| pv.value.as_str())
    }
}

/// Parameters of the built-in example form.
pub fn example_parameters() -> Vec<Parameter> {
    vec![Parameter::new(1, "Purpose"), Parameter::new(2, "Length")]
}

/// Initial model of the built-in example form.
pub fn example_model() -> Model {
    Model {
        param_values: vec![ParamValue::new(1, "casual"), ParamValue::new(2, "maxi")],
        colors: vec!["red".to_string(), "blue".to_string()],
    }
}
