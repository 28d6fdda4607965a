use fltk::{
    button::{Button, CheckButton},
    dialog,
    enums::{Align, Color},
    frame::Frame,
    input::{Input, IntInput},
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::settings::AppSettings;

/// Show settings dialog and return updated settings if user clicked Save.
pub fn show_settings_dialog(current_settings: &AppSettings) -> Option<AppSettings> {
    let mut dialog = Window::default()
        .with_size(380, 270)
        .with_label("Settings")
        .center_screen();
    dialog.make_modal(true);

    // Service section
    Frame::default()
        .with_pos(15, 15)
        .with_size(350, 25)
        .with_label("Resume service URL:")
        .with_align(Align::Left | Align::Inside);
    let mut url_input = Input::default().with_pos(30, 45).with_size(320, 30);
    url_input.set_value(&current_settings.api_url);

    Frame::default()
        .with_pos(15, 85)
        .with_size(350, 25)
        .with_label("Request timeout (seconds):")
        .with_align(Align::Left | Align::Inside);
    let mut timeout_input = IntInput::default().with_pos(30, 115).with_size(100, 30);
    if let Some(secs) = current_settings.request_timeout_secs {
        timeout_input.set_value(&secs.to_string());
    }
    let mut hint = Frame::default()
        .with_pos(140, 115)
        .with_size(210, 30)
        .with_label("Leave empty to wait indefinitely");
    hint.set_label_size(11);
    hint.set_label_color(Color::from_rgb(100, 100, 100));
    hint.set_align(Align::Left | Align::Inside);

    // Appearance
    let mut check_dark = CheckButton::default()
        .with_pos(30, 160)
        .with_size(320, 25)
        .with_label("Dark mode");
    check_dark.set_value(current_settings.dark_mode);

    let mut save_btn = Button::default()
        .with_pos(180, 225)
        .with_size(90, 30)
        .with_label("Save");
    let mut cancel_btn = Button::default()
        .with_pos(280, 225)
        .with_size(90, 30)
        .with_label("Cancel");

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));
    let result_save = result.clone();

    let dialog_save = dialog.clone();
    let current = current_settings.clone();
    save_btn.set_callback(move |_| {
        let timeout_text = timeout_input.value();
        let request_timeout_secs = match timeout_text.trim() {
            "" => None,
            text => match text.parse::<u64>() {
                Ok(secs) => Some(secs),
                Err(_) => {
                    dialog::alert_default("Timeout must be a whole number of seconds");
                    return;
                }
            },
        };

        let new_settings = AppSettings {
            api_url: url_input.value().trim().to_string(),
            request_timeout_secs,
            dark_mode: check_dark.value(),
            last_directory: current.last_directory.clone(),
        };

        if let Err(e) = new_settings.validate() {
            dialog::alert_default(&e.to_string());
            return;
        }

        *result_save.borrow_mut() = Some(new_settings);
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    super::run_dialog(&dialog);

    result.borrow().clone()
}
