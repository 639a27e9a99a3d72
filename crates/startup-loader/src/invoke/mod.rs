//! Call-by-name seam between the page loader and backend commands.

pub(crate) mod error;
pub(crate) mod invoke_args;

use crate::invoke::{error::Result as InvokeResult, invoke_args::InvokeArgs};

use std::future::Future;

use serde_json::Value;

/// Invokes a backend command by name.
///
/// Implemented by whatever bridge the host provides (webview IPC,
/// in-process dispatch, a test double). The success value is the command's
/// JSON response; failures carry whatever the backend rejected with.
pub trait CommandInvoker: Send + Sync {
    fn invoke(
        &self,
        command: &str,
        args: InvokeArgs,
    ) -> impl Future<Output = InvokeResult<Value>> + Send;
}

/// Adapts an async closure into a [`CommandInvoker`].
pub struct FnInvoker<F> {
    handler: F,
}

impl<F> FnInvoker<F> {
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F, Fut> CommandInvoker for FnInvoker<F>
where
    F: Fn(String, InvokeArgs) -> Fut + Send + Sync,
    Fut: Future<Output = InvokeResult<Value>> + Send,
{
    #[allow(clippy::manual_async_fn)]
    fn invoke(
        &self,
        command: &str,
        args: InvokeArgs,
    ) -> impl Future<Output = InvokeResult<Value>> + Send {
        (self.handler)(command.to_owned(), args)
    }
}
