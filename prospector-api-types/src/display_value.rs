use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A field the server may send either as a JSON string or a JSON number.
/// It is only ever displayed, never interpreted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Text(String),
    Number(serde_json::Number),
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayValue::Text(text) => write!(f, "{text}"),
            DisplayValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for DisplayValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}
