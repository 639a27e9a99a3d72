use serde::Serialize;

/// Data handed to the startup view.
///
/// Serializes as `{"errorMessages": [...]}`. The list is always present;
/// an empty list means nothing went wrong (or nothing was attempted).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResult {
    error_messages: Vec<String>,
}

impl LoadResult {
    pub(crate) fn new(error_messages: Vec<String>) -> Self {
        Self { error_messages }
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn has_errors(&self) -> bool {
        !self.error_messages.is_empty()
    }

    pub fn into_error_messages(self) -> Vec<String> {
        self.error_messages
    }
}
