use fltk::{
    app::Sender,
    enums::CallbackTrigger,
    group::{Pack, PackType, Scroll, ScrollType},
    input::Input,
    prelude::*,
};

use super::list_editors::{
    EducationRow, ExperienceRow, ListPanel, RowEditor, SkillRow, fit_to_children,
};
use super::section::SectionView;
use super::theme::{self, Palette};
use crate::app::controllers::enhance::{EnhanceController, EnhanceTarget};
use crate::app::domain::messages::Message;
use crate::app::domain::resume::{ResumeDocument, ResumeField};

const SCROLLBAR_ALLOWANCE: i32 = 20;

/// The scrolling form that shows the whole resume.
pub struct DocumentView {
    scroll: Scroll,
    content: Pack,
    name: Input,
    summary: SectionView,
    experience: ListPanel<ExperienceRow>,
    education: ListPanel<EducationRow>,
    skills: ListPanel<SkillRow>,
    palette: Palette,
}

impl DocumentView {
    /// Build the form inside the current group.
    pub fn new(sender: &Sender<Message>, palette: Palette) -> Self {
        let mut scroll = Scroll::default();
        scroll.set_type(ScrollType::Vertical);

        let mut content = Pack::default().with_size(600, 0);
        content.set_type(PackType::Vertical);
        content.set_spacing(12);

        let mut name = Input::default().with_size(0, 36);
        name.set_tooltip("Full Name");
        name.set_text_size(16);
        name.set_trigger(CallbackTrigger::Changed);
        let s = *sender;
        name.set_callback(move |i| s.send(Message::SetField(ResumeField::Name, i.value())));

        let summary = SectionView::new("Summary", EnhanceTarget::Summary, sender, |text| {
            Message::SetField(ResumeField::Summary, text)
        });
        let experience = ListPanel::new("Experience", Message::AddExperience, sender);
        let education = ListPanel::new("Education", Message::AddEducation, sender);
        let skills = ListPanel::new("Skills", Message::AddSkill, sender);

        content.end();
        fit_to_children(&mut content);
        scroll.end();

        let mut content_resize = content.clone();
        scroll.resize_callback(move |_, x, y, w, _| {
            content_resize.resize(x + 10, y + 10, w - SCROLLBAR_ALLOWANCE, content_resize.h());
        });

        let mut view = Self {
            scroll,
            content,
            name,
            summary,
            experience,
            education,
            skills,
            palette,
        };
        view.apply_theme(palette);
        view
    }

    /// Show `doc`. Rows are rebuilt only where a list changed length.
    pub fn render(&mut self, doc: &ResumeDocument) {
        if self.name.value() != doc.name {
            self.name.set_value(&doc.name);
        }
        self.summary.set_text(&doc.summary);

        let p = self.palette;
        let mut rebuilt = self.experience.sync(&doc.experience, &p);
        rebuilt |= self.education.sync(&doc.education, &p);
        rebuilt |= self.skills.sync(&doc.skills, &p);

        if rebuilt {
            fit_to_children(&mut self.content);
            self.scroll.redraw();
        }
    }

    /// Reflect in-flight enhance requests on their buttons.
    pub fn show_enhance_busy(&mut self, controller: &EnhanceController) {
        let summary_busy = controller.is_busy(self.summary.target);
        self.summary.set_busy(summary_busy);
        let mut index = 0;
        while let Some(row) = self.experience.row_mut(index) {
            row.set_busy(controller.is_busy(EnhanceTarget::ExperienceDescription(index)));
            index += 1;
        }
    }

    pub fn apply_theme(&mut self, palette: Palette) {
        self.palette = palette;
        self.scroll.set_color(palette.background);
        theme::style_input(&mut self.name, &palette);
        self.summary.apply_theme(&palette);
        self.experience.apply_theme(&palette);
        self.education.apply_theme(&palette);
        self.skills.apply_theme(&palette);
        self.scroll.redraw();
    }
}
