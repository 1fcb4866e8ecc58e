//! Flat style maps attached to drawn paths
//!
//! A style map is a list of CSS-like declarations. Order matters only for
//! output: declarations are serialized in insertion order.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// Ordered mapping from property name to value
pub type StyleMap = IndexMap<String, StyleValue>;

/// A single style value, either a number or free text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n.into())
    }
}

/// Build a style map from `(property, value)` pairs, keeping their order
pub fn style_map<K, V, I>(pairs: I) -> StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
