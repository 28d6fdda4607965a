use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger, Font},
    frame::Frame,
    group::{Flex, FlexType},
    input::MultilineInput,
    prelude::*,
};

use super::theme::{self, Palette};
use crate::app::controllers::enhance::EnhanceTarget;
use crate::app::domain::messages::Message;

pub const SECTION_HEIGHT: i32 = 120;
pub const ENHANCE_LABEL: &str = "Enhance with AI";
pub const ENHANCE_BUSY_LABEL: &str = "Enhancing...";

/// An editable text block with a title and an "Enhance with AI" button.
///
/// Edits are sent as the message produced by `on_change`; the button sends
/// `Message::Enhance(target)`.
pub struct SectionView {
    pub target: EnhanceTarget,
    group: Flex,
    title: Frame,
    text: MultilineInput,
    enhance_btn: Button,
}

impl SectionView {
    pub fn new<F>(
        title: &str,
        target: EnhanceTarget,
        sender: &Sender<Message>,
        on_change: F,
    ) -> Self
    where
        F: Fn(String) -> Message + 'static,
    {
        let mut group = Flex::default().with_size(0, SECTION_HEIGHT);
        group.set_type(FlexType::Column);
        group.set_spacing(6);

        let mut header = Flex::default();
        header.set_type(FlexType::Row);
        let mut title_frame = Frame::default().with_label(title);
        title_frame.set_label_font(Font::HelveticaBold);
        title_frame.set_label_size(18);
        title_frame.set_align(Align::Left | Align::Inside);
        let mut enhance_btn = Button::default().with_label(ENHANCE_LABEL);
        header.fixed(&enhance_btn, 150);
        header.end();
        group.fixed(&header, 30);

        let mut text = MultilineInput::default();
        text.set_wrap(true);
        text.set_trigger(CallbackTrigger::Changed);

        group.end();

        let s = *sender;
        text.set_callback(move |t| s.send(on_change(t.value())));
        let s = *sender;
        enhance_btn.set_callback(move |_| s.send(Message::Enhance(target)));

        Self {
            target,
            group,
            title: title_frame,
            text,
            enhance_btn,
        }
    }

    /// Show `value` unless the field already holds it (keeps the cursor put
    /// while typing).
    pub fn set_text(&mut self, value: &str) {
        if self.text.value() != value {
            self.text.set_value(value);
        }
    }

    pub fn set_busy(&mut self, busy: bool) {
        if busy {
            self.enhance_btn.set_label(ENHANCE_BUSY_LABEL);
            self.enhance_btn.deactivate();
        } else {
            self.enhance_btn.set_label(ENHANCE_LABEL);
            self.enhance_btn.activate();
        }
    }

    pub fn apply_theme(&mut self, p: &Palette) {
        theme::style_heading(&mut self.title, p);
        theme::style_multiline(&mut self.text, p);
        theme::style_accent_button(&mut self.enhance_btn, p);
        self.group.redraw();
    }
}
