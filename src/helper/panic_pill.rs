use std::panic;

use tracing::{debug, error};

use crate::helper::logging::event_targets::PROGRAM_LIFECYCLE;
use crate::helper::logging::panic_payload_message;

/// Installs a panic hook that logs the panic through [tracing] and then aborts the whole process
///
/// The GL context lives on the main thread and can't be recovered after a panic mid-frame, so there's nothing worth unwinding to
pub fn install_panic_hook() {
    debug!(target: PROGRAM_LIFECYCLE, "installing panic hook");
    panic::set_hook(Box::new(|panic_info| {
        let message = panic_payload_message(panic_info.payload());
        let location = panic_info
            .location()
            .map(|location| location.to_string())
            .unwrap_or_else(|| "<unknown location>".to_string());
        error!(
            target: PROGRAM_LIFECYCLE,
            %message,
            %location,
            "process panicked. process will now exit"
        );
        std::process::abort();
    }));
}
