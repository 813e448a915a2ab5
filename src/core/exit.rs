//! Process termination used by the fatal-class log calls
//!
//! The exit function is process-wide, replaceable state so that code paths
//! ending in `fatal`, `alert` or `emergency` can be exercised without
//! terminating the test binary.

use parking_lot::RwLock;
use std::sync::Arc;

/// Function invoked with the exit code of a fatal-class event
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

static EXIT_HANDLER: RwLock<Option<ExitHandler>> = parking_lot::const_rwlock(None);

/// Install a process-wide exit function, returning the previous one
pub fn set_exit_handler(handler: ExitHandler) -> Option<ExitHandler> {
    EXIT_HANDLER.write().replace(handler)
}

/// Restore the default, `std::process::exit`
pub fn reset_exit_handler() {
    EXIT_HANDLER.write().take();
}

/// Hand `code` to the installed exit function
///
/// Returns only when a non-terminating handler is installed.
pub fn exit_with(code: i32) {
    // clone out so the handler never runs under the lock
    let handler = EXIT_HANDLER.read().clone();
    match handler {
        Some(handler) => handler(code),
        None => std::process::exit(code),
    }
}

/// Prefer a per-logger handler, fall back to the process-wide one
pub(crate) fn terminate(local: Option<&ExitHandler>, code: i32) {
    match local {
        Some(handler) => handler(code),
        None => exit_with(code),
    }
}
