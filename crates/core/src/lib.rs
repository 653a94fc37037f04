use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The persisted to-do list: a top-level JSON array whose items belong to
/// the front end and are never inspected here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoDocument(Vec<Value>);

impl TodoDocument {
    pub fn new(items: Vec<Value>) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Only the top-level type is checked; a rejected value is handed back.
impl TryFrom<Value> for TodoDocument {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(Self(items)),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OkResponse {
    pub status: &'static str,
}

impl Default for OkResponse {
    fn default() -> Self {
        Self { status: "ok" }
    }
}
