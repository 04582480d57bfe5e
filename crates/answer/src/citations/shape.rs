//! Citation shapes.
//!
//! The retrieval service has returned `citations` in two layouts across API
//! versions. Both are flattened into one reference list here; a new layout
//! only needs a new variant and a match arm in [`CitationShape::references`].

use super::reference::RetrievedReference;
use kbchat_llm::RagResponse;
use serde_json::{Map, Value};

const REFERENCES_KEY: &str = "retrievedReferences";

/// Known layouts of the `citations` field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CitationShape<'a> {
    /// `{"retrievedReferences": [...]}`
    Grouped(&'a Map<String, Value>),

    /// `[{"retrievedReferences": [...]}, ...]`
    Sequence(&'a [Value]),
}

impl<'a> CitationShape<'a> {
    /// Detect the layout of `response.citations`.
    ///
    /// Returns `None` when the field is absent or of any other type.
    pub fn of(response: &'a RagResponse) -> Option<Self> {
        match response.citations()? {
            Value::Object(group) => Some(Self::Grouped(group)),
            Value::Array(groups) => Some(Self::Sequence(groups)),
            other => {
                tracing::debug!("Ignoring citations of unexpected type: {}", type_name(other));
                None
            }
        }
    }

    /// All references in this layout, in document order.
    pub fn references(&self) -> Vec<RetrievedReference<'a>> {
        match *self {
            Self::Grouped(group) => references_in(group).collect(),
            Self::Sequence(groups) => groups
                .iter()
                .filter_map(Value::as_object)
                .flat_map(references_in)
                .collect(),
        }
    }
}

/// All references of `response`, whatever its citation layout.
pub fn references(response: &RagResponse) -> Vec<RetrievedReference<'_>> {
    CitationShape::of(response)
        .map(|shape| shape.references())
        .unwrap_or_default()
}

fn references_in(group: &Map<String, Value>) -> impl Iterator<Item = RetrievedReference<'_>> {
    group
        .get(REFERENCES_KEY)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(RetrievedReference::from_value)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
