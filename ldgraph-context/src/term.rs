//! Resolved term mapping
//!
//! [`TermMap`] is the engine's result model: an insertion-ordered mapping
//! from local names to [`TermValue`]s, serializable into the body of a
//! JSON-LD `@context` object.

use indexmap::IndexMap;
use ldgraph_vocab::keywords;
use serde_json::{Map, Value as JsonValue};

/// One resolved term binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermValue {
    /// Plain rename: the local name expands to this full or relative IRI.
    Iri(String),
    /// Reverse binding, serialized as `{"@reverse": <target>}`.
    Reverse(String),
    /// Enumeration type marker, serialized as
    /// `{"@id": <iri>?, "@type": "@vocab"}` with `@id` omitted when absent.
    EnumBlock { id: Option<String> },
}

impl TermValue {
    /// Serialize this binding to its JSON-LD context value shape.
    pub fn to_json(&self) -> JsonValue {
        match self {
            TermValue::Iri(iri) => JsonValue::String(iri.clone()),
            TermValue::Reverse(target) => {
                let mut obj = Map::new();
                obj.insert(
                    keywords::AT_REVERSE.to_string(),
                    JsonValue::String(target.clone()),
                );
                JsonValue::Object(obj)
            }
            TermValue::EnumBlock { id } => {
                let mut obj = Map::new();
                if let Some(id) = id {
                    obj.insert(keywords::AT_ID.to_string(), JsonValue::String(id.clone()));
                }
                obj.insert(
                    keywords::AT_TYPE.to_string(),
                    JsonValue::String(keywords::AT_VOCAB.to_string()),
                );
                JsonValue::Object(obj)
            }
        }
    }
}

/// Insertion-ordered mapping from local names to term bindings.
///
/// Inserting under an existing key overwrites the value in place and keeps
/// the key's original position, so scope precedence never reorders output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermMap {
    entries: IndexMap<String, TermValue>,
}

impl TermMap {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the mapping holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Binding for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&TermValue> {
        self.entries.get(name)
    }

    /// True when `name` is already defined.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert a binding, overwriting in place on collision.
    pub fn insert(&mut self, name: impl Into<String>, value: TermValue) {
        self.entries.insert(name.into(), value);
    }

    /// Merge `other` over `self`: every entry of `other` overwrites an
    /// existing entry with the same name.
    pub fn merge(&mut self, other: TermMap) {
        self.entries.extend(other.entries);
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Local names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Serialize all entries, in order, into a JSON object.
    pub fn to_json(&self) -> JsonValue {
        let mut obj = Map::new();
        for (name, value) in &self.entries {
            obj.insert(name.clone(), value.to_json());
        }
        JsonValue::Object(obj)
    }
}
