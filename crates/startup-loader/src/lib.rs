//! Startup page loader: runs the backend migration command once per page
//! load in a client context and hands any failure text to the view.

mod execution_context;
mod invoke;
mod loader;
pub mod logging;

#[cfg(test)]
mod tests;

pub use execution_context::ExecutionContext;
pub use invoke::error::{InvokeError, Result as InvokeResult};
pub use invoke::invoke_args::InvokeArgs;
pub use invoke::{CommandInvoker, FnInvoker};
pub use loader::load_result::LoadResult;
pub use loader::{RUN_MIGRATIONS_COMMAND, load};
