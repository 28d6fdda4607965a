//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (ResumeDocument, Settings, Messages)
//! - `controllers/` - Orchestration (DocumentStore, enhance/save/remote flows)
//! - `services/` - Business operations (backend client, export, upload)
//! - `infrastructure/` - Error types and logging
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod file_filters;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::store::DocumentStore;
pub use domain::{AppSettings, Message, Notice, ResumeDocument};
pub use infrastructure::error::{AppError, Result};
