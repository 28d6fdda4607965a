//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The resume document and its list editing rules
//! - Application settings
//! - Message types for the event system
//! - User notices

pub mod list_edit;
pub mod messages;
pub mod notice;
pub mod resume;
pub mod settings;

pub use messages::Message;
pub use notice::Notice;
pub use resume::{EducationEntry, ExperienceEntry, ResumeDocument};
pub use settings::AppSettings;
