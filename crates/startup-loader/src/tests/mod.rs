
use crate::{CommandInvoker, InvokeArgs, InvokeError, InvokeResult};

use std::future::Future;
use std::sync::Mutex;

use serde_json::Value;

type Responder = Box<dyn Fn(&str) -> InvokeResult<Value> + Send + Sync>;

/// Test double that records every invocation and answers from a fixed responder.
pub(crate) struct RecordingInvoker {
    respond: Responder,
    calls: Mutex<Vec<(String, InvokeArgs)>>,
}

impl RecordingInvoker {
    pub(crate) fn succeeding() -> Self {
        Self::responding(|_| Ok(Value::Null))
    }

    pub(crate) fn rejecting(payload: Value) -> Self {
        Self::responding(move |command| Err(InvokeError::rejected(command, payload.clone())))
    }

    pub(crate) fn responding(
        respond: impl Fn(&str) -> InvokeResult<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, InvokeArgs)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl CommandInvoker for RecordingInvoker {
    fn invoke(
        &self,
        command: &str,
        args: InvokeArgs,
    ) -> impl Future<Output = InvokeResult<Value>> + Send {
        self.calls.lock().unwrap().push((command.to_owned(), args));
        let outcome = (self.respond)(command);
        async move { outcome }
    }
}
