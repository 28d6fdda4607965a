pub mod about;
pub mod settings_dialog;

use fltk::{app, dialog, prelude::*, window::Window};

use crate::app::domain::notice::Notice;

/// Run a dialog's event loop, automatically closing the dialog if the app
/// is quitting (e.g. user clicks X on the main window while a dialog is open).
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}

/// Show a blocking message box.
pub fn show_notice(notice: &Notice) {
    match notice {
        Notice::Info(text) => dialog::message_default(text),
        Notice::Error(text) => dialog::alert_default(text),
    }
}

/// Ask a yes/no question. Returns true for "yes".
pub fn confirm(question: &str, yes: &str) -> bool {
    matches!(dialog::choice2_default(question, yes, "Cancel", ""), Some(0))
}
