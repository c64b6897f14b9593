//! Suggestion list entries.
//!
//! A [`Candidate`] is either plain text or a structured item carrying a
//! `value` plus whatever extra fields the host's list renderer needs. Both
//! forms deserialize from the same list, so a candidate file may mix bare
//! strings and tables. Entries that are neither, or objects whose `value` is
//! not a string, load as items without a value instead of failing the list:
//!
//! ```
//! use horizon_typeahead::candidate::Candidate;
//!
//! let list: Vec<Candidate> = serde_json::from_str(
//!     r#"["apple", {"value": "apricot", "icon": "fruit"}, 42]"#,
//! ).unwrap();
//!
//! assert_eq!(list[0].commit_value(), Some("apple"));
//! assert_eq!(list[1].commit_value(), Some("apricot"));
//! assert_eq!(list[2].commit_value(), None);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use horizon_typeahead_core::logging::targets;

/// Extra presentation fields attached to a structured candidate.
pub type CandidateFields = BTreeMap<String, serde_json::Value>;

/// One entry in the suggestion list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Candidate {
    /// Raw text; displayed and committed as-is.
    Text(String),
    /// A structured item that commits its `value` field.
    Item(CandidateItem),
}

impl Candidate {
    /// Create a text candidate.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a structured candidate with the given value and no extra fields.
    pub fn item(value: impl Into<String>) -> Self {
        Self::Item(CandidateItem::new(value))
    }

    /// The text that becomes the input value when this candidate is chosen.
    ///
    /// Returns `None` for items without a usable (present and non-empty)
    /// `value`; such candidates leave the input value unchanged.
    pub fn commit_value(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Item(item) => item.value(),
        }
    }

    /// The text the auto-mode prefix filter matches against.
    pub fn match_text(&self) -> Option<&str> {
        self.commit_value()
    }

    /// Whether this is a plain text candidate.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The structured item, if this candidate is one.
    pub fn as_item(&self) -> Option<&CandidateItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Text(_) => None,
        }
    }
}

impl From<String> for Candidate {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Candidate {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<CandidateItem> for Candidate {
    fn from(item: CandidateItem) -> Self {
        Self::Item(item)
    }
}

impl From<Value> for Candidate {
    fn from(raw: Value) -> Self {
        match raw {
            Value::String(text) => Self::Text(text),
            Value::Object(map) => Self::Item(CandidateItem::from(map)),
            other => {
                tracing::debug!(target: targets::CANDIDATE, entry = %other, "candidate is not text or an object");
                Self::Item(CandidateItem::without_value())
            }
        }
    }
}

impl<'de> Deserialize<'de> for Candidate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// A structured candidate: an optional commit value plus free-form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateItem {
    /// The value committed to the input when this item is chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    /// Any other fields, passed through to the list renderer untouched.
    #[serde(flatten)]
    fields: CandidateFields,
}

impl CandidateItem {
    /// Create an item with the given value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            fields: CandidateFields::new(),
        }
    }

    /// Create an item with no value. Choosing it leaves the input unchanged.
    pub fn without_value() -> Self {
        Self::default()
    }

    /// Add an extra field using builder pattern.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The commit value, if present and non-empty.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }

    /// Look up an extra field.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }

    /// All extra fields.
    pub fn fields(&self) -> &CandidateFields {
        &self.fields
    }
}

/// A non-string `value` is kept as an extra field, so it still reaches the
/// renderer and serializes back unchanged.
impl From<Map<String, Value>> for CandidateItem {
    fn from(mut map: Map<String, Value>) -> Self {
        let value = match map.remove("value") {
            Some(Value::String(value)) => Some(value),
            Some(Value::Null) | None => None,
            Some(other) => {
                tracing::debug!(target: targets::CANDIDATE, value = %other, "candidate value is not a string");
                map.insert("value".to_string(), other);
                None
            }
        };
        Self {
            value,
            fields: map.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for CandidateItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Self::from)
    }
}
