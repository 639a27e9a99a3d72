use serde::Serialize;
use serde_json::{Map, Value};

/// Named arguments for a backend command, sent as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InvokeArgs(Map<String, Value>);

impl InvokeArgs {
    /// Arguments for a zero-argument command; serializes as `{}`.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
