//! The process-wide logger handle
//!
//! Applications that can pass an `Arc<Logger>` around should do so. This slot
//! exists for code that cannot: call [`init`] once during startup, before any
//! thread logs, then fetch the handle with [`get_logger`] or [`logger`].
//!
//! The slot is lock-protected, so a second [`init`] is not a data race, but it
//! does replace the handle: later lookups see the new logger while clones of
//! the old one stay usable until dropped.

use crate::core::Logger;
use parking_lot::RwLock;
use std::sync::Arc;

static PROCESS_LOGGER: RwLock<Option<Arc<Logger>>> = parking_lot::const_rwlock(None);

/// Install the standard CSCTRL logger: colored stdout, name `CSCTRL`,
/// threshold `Trace`, build mode of this compilation.
pub fn init() {
    init_with(Logger::stdout());
}

/// Install an explicitly constructed logger and return its handle.
pub fn init_with(logger: Logger) -> Arc<Logger> {
    let handle = Arc::new(logger);
    *PROCESS_LOGGER.write() = Some(Arc::clone(&handle));
    handle
}

/// The current handle, `None` before [`init`].
pub fn get_logger() -> Option<Arc<Logger>> {
    PROCESS_LOGGER.read().clone()
}

/// Whether [`init`] or [`init_with`] has installed a handle.
pub fn is_initialized() -> bool {
    PROCESS_LOGGER.read().is_some()
}

/// The current handle.
///
/// # Panics
///
/// If [`init`] has not been called. Logging before initialization is a
/// sequencing bug in the application, not a recoverable condition.
pub fn logger() -> Arc<Logger> {
    match get_logger() {
        Some(logger) => logger,
        None => panic!("csctrl_logger::init() must be called before logging"),
    }
}
