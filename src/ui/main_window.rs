use fltk::{
    app::{self, Sender},
    button::Button,
    enums::Event,
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::document_view::DocumentView;
use super::theme::{self, Palette};
use crate::app::domain::messages::Message;

pub const SAVE_LABEL: &str = "Save Resume";
pub const SAVE_BUSY_LABEL: &str = "Saving...";

/// Upload / Save / Download buttons above the form.
pub struct Toolbar {
    pub upload_btn: Button,
    pub save_btn: Button,
    pub download_btn: Button,
}

impl Toolbar {
    pub fn set_saving(&mut self, saving: bool) {
        if saving {
            self.save_btn.set_label(SAVE_BUSY_LABEL);
            self.save_btn.deactivate();
        } else {
            self.save_btn.set_label(SAVE_LABEL);
            self.save_btn.activate();
        }
    }

    pub fn apply_theme(&mut self, p: &Palette) {
        theme::style_accent_button(&mut self.upload_btn, p);
        theme::style_accent_button(&mut self.save_btn, p);
        theme::style_accent_button(&mut self.download_btn, p);
    }
}

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub toolbar: Toolbar,
    pub view: DocumentView,
}

pub fn build_main_window(sender: &Sender<Message>, palette: Palette) -> MainWidgets {
    let mut wind = Window::new(100, 100, 720, 820, "Resume Editor");
    wind.set_xclass("ResumeEditor");

    let mut flex = Flex::new(0, 0, 720, 820, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut bar = Flex::default();
    bar.set_type(FlexType::Row);
    bar.set_margin(6);
    bar.set_spacing(8);
    let mut upload_btn = Button::default().with_label("Upload Resume...");
    Frame::default();
    let mut save_btn = Button::default().with_label(SAVE_LABEL);
    let mut download_btn = Button::default().with_label("Download JSON");
    bar.fixed(&upload_btn, 150);
    bar.fixed(&save_btn, 120);
    bar.fixed(&download_btn, 130);
    bar.end();
    flex.fixed(&bar, 44);

    let view = DocumentView::new(sender, palette);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    let s = *sender;
    upload_btn.set_callback(move |_| s.send(Message::Upload));
    let s = *sender;
    save_btn.set_callback(move |_| s.send(Message::Save));
    let s = *sender;
    download_btn.set_callback(move |_| s.send(Message::Download));

    // Route the window's close button through the dispatch loop
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::FileQuit);
        }
    });

    let mut toolbar = Toolbar {
        upload_btn,
        save_btn,
        download_btn,
    };
    toolbar.apply_theme(&palette);

    MainWidgets {
        wind,
        menu,
        toolbar,
        view,
    }
}
