use crate::app::controllers::enhance::{EnhanceOutcome, EnhanceTarget};
use crate::app::controllers::remote::{RemoteAction, RemoteOutcome};
use crate::app::domain::resume::{EducationField, ExperienceField, ResumeField};
use crate::app::services::api::ServiceError;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and worker threads send one of these; the dispatch loop
/// in main hands them to `AppState`.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    Upload,
    OpenJson,
    Download,
    Save,
    Remote(RemoteAction),
    OpenSettings,
    FileQuit,

    // Editing
    SetField(ResumeField, String),
    SetExperience(usize, ExperienceField, String),
    AddExperience,
    RemoveExperience(usize),
    SetEducation(usize, EducationField, String),
    AddEducation,
    RemoveEducation(usize),
    SetSkill(usize, String),
    AddSkill,
    RemoveSkill(usize),

    // AI
    Enhance(EnhanceTarget),

    // Help
    ShowAbout,

    // Worker completions
    EnhanceFinished(EnhanceOutcome),
    SaveFinished(Result<(), ServiceError>),
    RemoteFinished(RemoteOutcome),
}
