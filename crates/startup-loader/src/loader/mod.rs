pub(crate) mod load_result;

use crate::{CommandInvoker, ExecutionContext, InvokeArgs, LoadResult};

use tracing::{debug, warn};

/// Backend command that brings persistent application state up to date.
pub const RUN_MIGRATIONS_COMMAND: &str = "run_migrations";

/// Loads data for the startup page.
///
/// In a client context this runs `run_migrations` exactly once and waits
/// for it to finish. A failure never escapes: its text becomes the single
/// entry of `error_messages`. Outside a client context nothing is invoked
/// and the result is empty.
pub async fn load<I: CommandInvoker>(context: ExecutionContext, invoker: &I) -> LoadResult {
    let mut error_messages = Vec::new();

    if context.is_client() {
        debug!("Invoking {RUN_MIGRATIONS_COMMAND}");

        match invoker
            .invoke(RUN_MIGRATIONS_COMMAND, InvokeArgs::none())
            .await
        {
            Ok(_) => debug!("{RUN_MIGRATIONS_COMMAND} completed"),
            Err(e) => {
                warn!("{RUN_MIGRATIONS_COMMAND} failed: {e:?}");
                error_messages.push(e.to_string());
            }
        }
    } else {
        debug!("Skipping {RUN_MIGRATIONS_COMMAND} outside client context ({context:?})");
    }

    LoadResult::new(error_messages)
}
