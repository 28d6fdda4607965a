use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

/// Show About dialog
pub fn show_about_dialog(api_url: &str) {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(420, 260)
        .with_label("About Resume Editor")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 400, 240, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default().with_label("Resume Editor");
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default().with_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut desc_frame = Frame::default()
        .with_label("Edit your resume and polish it with AI-assisted rewriting");
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    flex.fixed(&desc_frame, 25);

    let mut info_frame = Frame::default().with_label(&format!(
        "Resume service: {}\n\nBuilt with Rust and FLTK",
        api_url
    ));
    info_frame.set_label_size(12);
    info_frame.set_align(Align::Center | Align::Inside | Align::Wrap);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    super::run_dialog(&dialog);
}
