//! Shared types and enums used across the crate.
//! Includes the engine `RunMode` selector and the typed processor
//! parameter values (`Value`, `ValueKind`).
use serde::{Deserialize, Serialize};

/// Execution-strategy selector passed through to the external engine.
///
/// The engine owns the meaning of each value; this layer only carries it
/// verbatim. Serializes as a bare integer.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunMode(pub i32);

impl RunMode {
    /// Histogram post-processing, the mode used by the baseline-fit job.
    pub const HISTO: RunMode = RunMode(2);
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A typed processor parameter value.
///
/// Covers the value kinds the engine accepts: integer, float, and string
/// scalars, plus an ordered list of strings whose order is preserved
/// verbatim. Serializes untagged, so the JSON form is the plain scalar
/// or array.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<String>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
            Value::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::List(v)
    }
}

/// The kind of a [`Value`], used in schema checks and error messages.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ValueKind {
    Int,
    Float,
    Str,
    List,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ValueKind::Int => "an integer",
            ValueKind::Float => "a float",
            ValueKind::Str => "a string",
            ValueKind::List => "a string list",
        };
        write!(f, "{}", s)
    }
}
