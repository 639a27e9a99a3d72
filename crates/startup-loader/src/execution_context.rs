use serde::{Deserialize, Serialize};

/// Where the current rendering pass is executing.
///
/// Passed into the loader explicitly so callers (and tests) decide the
/// context instead of the loader probing global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionContext {
    /// Inside the end-user's application shell (webview/browser).
    Client,
    /// Server-side or build-time rendering pass.
    Server,
}

impl ExecutionContext {
    /// Context implied by the compilation target: `wasm32` builds run in the
    /// webview, everything else is a non-client pass.
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Client
        } else {
            Self::Server
        }
    }

    pub fn is_client(self) -> bool {
        matches!(self, Self::Client)
    }
}

impl From<bool> for ExecutionContext {
    fn from(is_browser: bool) -> Self {
        if is_browser { Self::Client } else { Self::Server }
    }
}
