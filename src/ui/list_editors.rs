//! Row editors for the experience, education and skills lists.
//!
//! Rows are positional: row `i` always edits entry `i`. When a list changes
//! length the panel throws its rows away and builds new ones, so every
//! callback carries the right index.

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger, Font},
    frame::Frame,
    group::{Flex, FlexType, Group, Pack, PackType},
    input::{Input, MultilineInput},
    prelude::*,
};

use super::section::{ENHANCE_BUSY_LABEL, ENHANCE_LABEL};
use super::theme::{self, Palette};
use crate::app::controllers::enhance::EnhanceTarget;
use crate::app::domain::list_edit::EditableEntry;
use crate::app::domain::messages::Message;
use crate::app::domain::resume::{EducationEntry, EducationField, ExperienceEntry, ExperienceField};

const FIELD_HEIGHT: i32 = 32;
const REMOVE_WIDTH: i32 = 80;
const YEARS_WIDTH: i32 = 110;

/// One row of a list panel.
pub trait RowEditor {
    type Entry: EditableEntry;

    fn build(index: usize, sender: &Sender<Message>) -> Self;
    fn sync(&mut self, entry: &Self::Entry);
    fn apply_theme(&mut self, p: &Palette);
    fn set_busy(&mut self, _busy: bool) {}
}

fn text_input(placeholder: &str) -> Input {
    let mut input = Input::default();
    input.set_tooltip(placeholder);
    input.set_trigger(CallbackTrigger::Changed);
    input
}

fn sync_input(input: &mut Input, value: &str) {
    if input.value() != value {
        input.set_value(value);
    }
}

pub struct ExperienceRow {
    group: Flex,
    company: Input,
    role: Input,
    years: Input,
    remove_btn: Button,
    description: MultilineInput,
    enhance_btn: Button,
}

impl RowEditor for ExperienceRow {
    type Entry = ExperienceEntry;

    fn build(index: usize, sender: &Sender<Message>) -> Self {
        let mut group = Flex::default().with_size(0, FIELD_HEIGHT * 2 + 60 + 16);
        group.set_type(FlexType::Column);
        group.set_spacing(4);

        let mut top = Flex::default();
        top.set_type(FlexType::Row);
        top.set_spacing(4);
        let mut company = text_input("Company");
        let mut role = text_input("Role");
        let mut years = text_input("Years");
        let mut remove_btn = Button::default().with_label("Remove");
        top.fixed(&years, YEARS_WIDTH);
        top.fixed(&remove_btn, REMOVE_WIDTH);
        top.end();
        group.fixed(&top, FIELD_HEIGHT);

        let mut description = MultilineInput::default();
        description.set_tooltip("Description");
        description.set_wrap(true);
        description.set_trigger(CallbackTrigger::Changed);
        group.fixed(&description, 60);

        let mut bottom = Flex::default();
        bottom.set_type(FlexType::Row);
        let mut enhance_btn = Button::default().with_label(ENHANCE_LABEL);
        Frame::default();
        bottom.fixed(&enhance_btn, 150);
        bottom.end();
        group.fixed(&bottom, FIELD_HEIGHT);

        group.end();

        for (input, field) in [
            (&mut company, ExperienceField::Company),
            (&mut role, ExperienceField::Role),
            (&mut years, ExperienceField::Years),
        ] {
            let s = *sender;
            input.set_callback(move |i| s.send(Message::SetExperience(index, field, i.value())));
        }
        let s = *sender;
        description.set_callback(move |d| {
            s.send(Message::SetExperience(index, ExperienceField::Description, d.value()))
        });
        let s = *sender;
        remove_btn.set_callback(move |_| s.send(Message::RemoveExperience(index)));
        let s = *sender;
        enhance_btn.set_callback(move |_| {
            s.send(Message::Enhance(EnhanceTarget::ExperienceDescription(index)))
        });

        Self {
            group,
            company,
            role,
            years,
            remove_btn,
            description,
            enhance_btn,
        }
    }

    fn sync(&mut self, entry: &ExperienceEntry) {
        for (input, field) in [
            (&mut self.company, ExperienceField::Company),
            (&mut self.role, ExperienceField::Role),
            (&mut self.years, ExperienceField::Years),
        ] {
            sync_input(input, entry.get(field));
        }
        let description = entry.get(ExperienceField::Description);
        if self.description.value() != description {
            self.description.set_value(description);
        }
    }

    fn apply_theme(&mut self, p: &Palette) {
        self.group.set_color(p.panel);
        theme::style_input(&mut self.company, p);
        theme::style_input(&mut self.role, p);
        theme::style_input(&mut self.years, p);
        theme::style_multiline(&mut self.description, p);
        theme::style_danger_button(&mut self.remove_btn, p);
        theme::style_accent_button(&mut self.enhance_btn, p);
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            self.enhance_btn.set_label(ENHANCE_BUSY_LABEL);
            self.enhance_btn.deactivate();
        } else {
            self.enhance_btn.set_label(ENHANCE_LABEL);
            self.enhance_btn.activate();
        }
    }
}

pub struct EducationRow {
    school: Input,
    degree: Input,
    years: Input,
    remove_btn: Button,
}

impl RowEditor for EducationRow {
    type Entry = EducationEntry;

    fn build(index: usize, sender: &Sender<Message>) -> Self {
        let mut row = Flex::default().with_size(0, FIELD_HEIGHT);
        row.set_type(FlexType::Row);
        row.set_spacing(4);
        let mut school = text_input("School");
        let mut degree = text_input("Degree");
        let mut years = text_input("Years");
        let mut remove_btn = Button::default().with_label("Remove");
        row.fixed(&years, YEARS_WIDTH);
        row.fixed(&remove_btn, REMOVE_WIDTH);
        row.end();

        for (input, field) in [
            (&mut school, EducationField::School),
            (&mut degree, EducationField::Degree),
            (&mut years, EducationField::Years),
        ] {
            let s = *sender;
            input.set_callback(move |i| s.send(Message::SetEducation(index, field, i.value())));
        }
        let s = *sender;
        remove_btn.set_callback(move |_| s.send(Message::RemoveEducation(index)));

        Self {
            school,
            degree,
            years,
            remove_btn,
        }
    }

    fn sync(&mut self, entry: &EducationEntry) {
        for (input, field) in [
            (&mut self.school, EducationField::School),
            (&mut self.degree, EducationField::Degree),
            (&mut self.years, EducationField::Years),
        ] {
            sync_input(input, entry.get(field));
        }
    }

    fn apply_theme(&mut self, p: &Palette) {
        theme::style_input(&mut self.school, p);
        theme::style_input(&mut self.degree, p);
        theme::style_input(&mut self.years, p);
        theme::style_danger_button(&mut self.remove_btn, p);
    }
}

pub struct SkillRow {
    skill: Input,
    remove_btn: Button,
}

impl RowEditor for SkillRow {
    type Entry = String;

    fn build(index: usize, sender: &Sender<Message>) -> Self {
        let mut row = Flex::default().with_size(0, FIELD_HEIGHT);
        row.set_type(FlexType::Row);
        row.set_spacing(4);
        let mut skill = text_input("Skill");
        let mut remove_btn = Button::default().with_label("Remove");
        row.fixed(&remove_btn, REMOVE_WIDTH);
        row.end();

        let s = *sender;
        skill.set_callback(move |i| s.send(Message::SetSkill(index, i.value())));
        let s = *sender;
        remove_btn.set_callback(move |_| s.send(Message::RemoveSkill(index)));

        Self { skill, remove_btn }
    }

    fn sync(&mut self, entry: &String) {
        sync_input(&mut self.skill, entry.get(()));
    }

    fn apply_theme(&mut self, p: &Palette) {
        theme::style_input(&mut self.skill, p);
        theme::style_danger_button(&mut self.remove_btn, p);
    }
}

/// Resize a vertical pack to the total height of its children.
pub fn fit_to_children(pack: &mut Pack) {
    let count = pack.children();
    let mut height = 0;
    for i in 0..count {
        if let Some(child) = pack.child(i) {
            height += child.h();
        }
    }
    height += pack.spacing() * (count - 1).max(0);
    pack.resize(pack.x(), pack.y(), pack.w(), height);
}

/// A titled list with an "Add" button and one row per entry.
pub struct ListPanel<R: RowEditor> {
    title: Frame,
    add_btn: Button,
    rows_pack: Pack,
    rows: Vec<R>,
    sender: Sender<Message>,
}

impl<R: RowEditor> ListPanel<R> {
    /// Build the header and an empty row container inside the current group.
    pub fn new(title: &str, add_message: Message, sender: &Sender<Message>) -> Self {
        let mut header = Flex::default().with_size(0, FIELD_HEIGHT);
        header.set_type(FlexType::Row);
        let mut title_frame = Frame::default().with_label(title);
        title_frame.set_label_font(Font::HelveticaBold);
        title_frame.set_label_size(18);
        title_frame.set_align(Align::Left | Align::Inside);
        let mut add_btn = Button::default().with_label("Add");
        header.fixed(&add_btn, REMOVE_WIDTH);
        header.end();

        let s = *sender;
        add_btn.set_callback(move |_| s.send(add_message.clone()));

        let mut rows_pack = Pack::default().with_size(0, 0);
        rows_pack.set_type(PackType::Vertical);
        rows_pack.set_spacing(8);
        rows_pack.end();

        Self {
            title: title_frame,
            add_btn,
            rows_pack,
            rows: Vec::new(),
            sender: *sender,
        }
    }

    /// Bring the rows in line with `entries`, rebuilding only when the
    /// number of entries changed. Returns true if rows were rebuilt.
    pub fn sync(&mut self, entries: &[R::Entry], p: &Palette) -> bool {
        let rebuilt = entries.len() != self.rows.len();
        if rebuilt {
            self.rows.clear();
            self.rows_pack.clear();
            let previous = Group::try_current();
            self.rows_pack.begin();
            for index in 0..entries.len() {
                let mut row = R::build(index, &self.sender);
                row.apply_theme(p);
                self.rows.push(row);
            }
            self.rows_pack.end();
            // end() leaves the parent form current, so dialogs built later would nest in it
            Group::set_current(previous.as_ref());
            fit_to_children(&mut self.rows_pack);
        }
        for (row, entry) in self.rows.iter_mut().zip(entries) {
            row.sync(entry);
        }
        rebuilt
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut R> {
        self.rows.get_mut(index)
    }

    pub fn apply_theme(&mut self, p: &Palette) {
        theme::style_heading(&mut self.title, p);
        theme::style_accent_button(&mut self.add_btn, p);
        for row in self.rows.iter_mut() {
            row.apply_theme(p);
        }
        self.rows_pack.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::palette;
    use fltk::{app, window::Window};

    #[test]
    #[ignore = "Requires the FLTK runtime"]
    fn test_rebuild_leaves_no_group_open() {
        let _app = app::App::default();
        let (sender, _receiver) = app::channel::<Message>();
        let mut wind = Window::new(0, 0, 400, 400, None);
        let mut panel: ListPanel<SkillRow> = ListPanel::new("Skills", Message::AddSkill, &sender);
        wind.end();
        assert!(Group::try_current().is_none());

        let skills = vec!["Rust".to_string(), "SQL".to_string()];
        assert!(panel.sync(&skills, &palette(true)));
        assert!(Group::try_current().is_none());

        // A window created now is top-level, not a child of the form
        let dialog = Window::default().with_size(100, 100);
        assert!(dialog.parent().is_none());
        assert_eq!(wind.children(), 2);
    }
}
