use indexmap::IndexMap;
use serde_json::Number;

use super::types::LegendLabelFactory;

/// A single configuration value in an options tree.
///
/// Keys and shapes follow the external renderer's documented schema, so
/// string keys are camelCase schema names rather than Rust identifiers.
/// The `LegendLabels` variant carries a function pointer and therefore has
/// no JSON representation; the JSON bridge drops it on serialization.
/// Equality on that variant is function address identity.
#[derive(Debug, Clone)]
pub enum OptionValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Seq(Vec<OptionValue>),
    Tree(OptionsTree),
    LegendLabels(LegendLabelFactory),
}

impl OptionValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => value.as_f64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(value) => value.as_i64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_seq(&self) -> Option<&[OptionValue]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tree(&self) -> Option<&OptionsTree> {
        match self {
            Self::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_legend_labels(&self) -> Option<LegendLabelFactory> {
        match self {
            Self::LegendLabels(factory) => Some(*factory),
            _ => None,
        }
    }
}

impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Tree(a), Self::Tree(b)) => a == b,
            (Self::LegendLabels(a), Self::LegendLabels(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<f64> for OptionValue {
    /// Non-finite values have no JSON representation and become `Null`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(items: Vec<OptionValue>) -> Self {
        Self::Seq(items)
    }
}

impl From<OptionsTree> for OptionValue {
    fn from(tree: OptionsTree) -> Self {
        Self::Tree(tree)
    }
}

impl From<LegendLabelFactory> for OptionValue {
    fn from(factory: LegendLabelFactory) -> Self {
        Self::LegendLabels(factory)
    }
}

/// An ordered, string-keyed configuration tree.
///
/// Insertion order is preserved so composed output serializes
/// deterministically; equality compares entries without regard to order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionsTree {
    pub(super) entries: IndexMap<String, OptionValue>,
}

impl OptionsTree {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts a key, replacing and returning any previous value.
    /// An existing key keeps its position in the tree.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.entries.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut OptionValue> {
        self.entries.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, OptionValue)> for OptionsTree {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(entries: I) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}
