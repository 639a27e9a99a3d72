use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// Failure of a backend command invocation.
///
/// From the loader's point of view every variant is the same kind of
/// failure; the variants only differ in how the text is produced.
#[derive(Error, Debug)]
pub enum InvokeError {
    /// The command ran and returned an error value.
    #[error("{}", rejection_text(.command, .payload))]
    Rejected { command: String, payload: Value },

    /// `location` is kept out of the text; it shows up in `Debug` output only.
    #[error("Failed to invoke '{command}': {message}")]
    Transport {
        command: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("No handler registered for command '{command}'")]
    UnknownCommand {
        command: String,
        location: ErrorLocation,
    },
}

/// String payloads render verbatim, anything else as compact JSON.
/// Object keys come out sorted, so the text is stable across calls.
fn rejection_text(command: &str, payload: &Value) -> String {
    match payload {
        Value::String(message) if !message.trim().is_empty() => message.clone(),
        Value::String(_) | Value::Null => {
            format!("command '{command}' failed without an error message")
        }
        other => other.to_string(),
    }
}

impl InvokeError {
    /// Creates Rejected error from the backend's error value.
    pub fn rejected(command: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self::Rejected {
            command: command.into(),
            payload: payload.into(),
        }
    }

    /// Creates Transport error at caller location.
    #[track_caller]
    pub fn transport(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            command: command.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates UnknownCommand error at caller location.
    #[track_caller]
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Name of the command that failed.
    pub fn command(&self) -> &str {
        match self {
            Self::Rejected { command, .. }
            | Self::Transport { command, .. }
            | Self::UnknownCommand { command, .. } => command,
        }
    }
}

pub type Result<T> = std::result::Result<T, InvokeError>;
