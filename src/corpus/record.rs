use serde_json::Value;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read record file: {0}")]
    Io(#[from] std::io::Error),

    #[error("record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record root must be an object of field name to value")]
    NotAnObject,
}

/// A survey field value the classifier can inspect. Records may carry other
/// JSON types; those are dropped at decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

/// One parsed survey entry. Read-only after construction; the display name
/// comes from the record's "library-name" field, falling back to the source
/// file stem.
#[derive(Debug, Clone)]
pub struct ApplicationRecord {
    name: String,
    fields: Vec<(String, FieldValue)>,
}

impl ApplicationRecord {
    pub fn new(name: String, fields: Vec<(String, FieldValue)>) -> Self {
        Self { name, fields }
    }

    /// Decode a record from its JSON text. Fails loudly when the top level
    /// is not an object; non-string values inside an object are ignored.
    pub fn from_json(source: &str, path: &Path) -> Result<Self, CorpusError> {
        let value: Value = serde_json::from_str(source)?;
        let object = match value {
            Value::Object(map) => map,
            _ => return Err(CorpusError::NotAnObject),
        };

        let fallback = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
        let name = object
            .get("library-name")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .unwrap_or(fallback);

        let mut fields = Vec::with_capacity(object.len());
        for (key, value) in object {
            match value {
                Value::String(text) => fields.push((key, FieldValue::Text(text))),
                Value::Array(items) => {
                    let strings: Vec<String> = items
                        .into_iter()
                        .filter_map(|item| match item {
                            Value::String(s) => Some(s),
                            _ => None,
                        })
                        .collect();
                    fields.push((key, FieldValue::List(strings)));
                }
                _ => {} // numbers, bools, nested objects carry no prose
            }
        }

        Ok(Self { name, fields })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
