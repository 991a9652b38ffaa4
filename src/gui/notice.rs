//! Error notification dialog

use crate::launcher::{ErrorNotice, Notifier};
use crate::utils::LauncherError;
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::panic::{self, AssertUnwindSafe};

/// Shows the notice as a native modal message box with a single "Ok" button.
///
/// The dialog result is ignored: pressing "Ok" and closing the window are the
/// same acknowledgement.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogNotifier;

impl DialogNotifier {
    pub fn new() -> Self {
        Self
    }
}

pub fn dialog_text(notice: &ErrorNotice) -> String {
    notice.lines().join("\n")
}

impl Notifier for DialogNotifier {
    fn notify(&self, notice: &ErrorNotice) -> Result<(), LauncherError> {
        let description = dialog_text(notice);

        // The dialog backend panics rather than erroring when no display is available.
        panic::catch_unwind(AssertUnwindSafe(|| {
            let _ = MessageDialog::new()
                .set_level(MessageLevel::Error)
                .set_title(&notice.title)
                .set_description(&description)
                .set_buttons(MessageButtons::Ok)
                .show();
        }))
        .map_err(|_| LauncherError::NotificationError("message dialog unavailable".to_string()))
    }
}
