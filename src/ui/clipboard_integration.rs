//! Lets imgui's text fields copy to and paste from the OS clipboard
use std::any::type_name;
use std::error::Error;
use std::fmt::{Debug, Formatter};

use clipboard::{ClipboardContext, ClipboardProvider};
use imgui::ClipboardBackend;
use tracing::{instrument, trace, warn};

use crate::helper::logging::event_targets::UI_USER_EVENT;

/// [ClipboardBackend] that forwards to the system clipboard through [ClipboardContext]
pub struct SystemClipboard {
    context: ClipboardContext,
}

impl Debug for SystemClipboard {
    /// [ClipboardContext] is a platform-specific alias with no [Debug] impl, so only the type name is printed
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SystemClipboard({})", type_name::<ClipboardContext>())
    }
}

impl SystemClipboard {
    /// (Tries to) connect to the system clipboard
    #[instrument(ret, level = "trace")]
    pub fn connect() -> Result<SystemClipboard, Box<dyn Error>> {
        ClipboardContext::new().map(|context| SystemClipboard { context })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn get(&mut self) -> Option<String> {
        match self.context.get_contents() {
            Ok(contents) => {
                trace!(target: UI_USER_EVENT, len = contents.len(), "pasting from clipboard");
                Some(contents)
            }
            Err(error) => {
                warn!(target: UI_USER_EVENT, "could not read clipboard: {error}");
                None
            }
        }
    }

    fn set(&mut self, text: &str) {
        match self.context.set_contents(text.to_owned()) {
            Ok(()) => trace!(target: UI_USER_EVENT, len = text.len(), "copied to clipboard"),
            Err(error) => warn!(target: UI_USER_EVENT, "could not set clipboard: {error}"),
        }
    }
}
