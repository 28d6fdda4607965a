//! Server-side document management: load the stored resume, delete it, and
//! check that the backend is reachable.

use std::collections::HashSet;

use super::store::DocumentStore;
use crate::app::domain::notice::Notice;
use crate::app::domain::resume::ResumeDocument;
use crate::app::services::api::{ResumeService, ServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteAction {
    Load,
    Reset,
    Ping,
}

#[derive(Debug, Clone)]
pub enum RemoteOutcome {
    Loaded(Result<Option<ResumeDocument>, ServiceError>),
    Reset(Result<(), ServiceError>),
    Pinged(Result<String, ServiceError>),
}

impl RemoteOutcome {
    pub fn action(&self) -> RemoteAction {
        match self {
            RemoteOutcome::Loaded(_) => RemoteAction::Load,
            RemoteOutcome::Reset(_) => RemoteAction::Reset,
            RemoteOutcome::Pinged(_) => RemoteAction::Ping,
        }
    }
}

impl RemoteAction {
    pub fn execute(self, service: &dyn ResumeService) -> RemoteOutcome {
        match self {
            RemoteAction::Load => RemoteOutcome::Loaded(service.load()),
            RemoteAction::Reset => RemoteOutcome::Reset(service.reset()),
            RemoteAction::Ping => RemoteOutcome::Pinged(service.ping()),
        }
    }
}

#[derive(Debug, Default)]
pub struct RemoteController {
    in_flight: HashSet<RemoteAction>,
}

impl RemoteController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self, action: RemoteAction) -> bool {
        self.in_flight.contains(&action)
    }

    /// Returns false if `action` is already running.
    pub fn begin(&mut self, action: RemoteAction) -> bool {
        let started = self.in_flight.insert(action);
        if started {
            log::info!("Starting {:?}", action);
        } else {
            log::debug!("Ignoring {:?}: already in flight", action);
        }
        started
    }

    pub fn complete(&mut self, outcome: RemoteOutcome, store: &mut DocumentStore) -> Notice {
        self.in_flight.remove(&outcome.action());

        match outcome {
            RemoteOutcome::Loaded(Ok(Some(document))) => {
                store.replace(document);
                Notice::Info("Saved resume loaded.".to_string())
            }
            RemoteOutcome::Loaded(Ok(None)) => {
                Notice::Info("No saved resume on the server.".to_string())
            }
            RemoteOutcome::Loaded(Err(e)) => {
                log::warn!("Load failed: {}", e);
                Notice::Error(format!("Failed to load resume: {}", e))
            }
            RemoteOutcome::Reset(Ok(())) => {
                Notice::Info("Saved resume deleted from the server.".to_string())
            }
            RemoteOutcome::Reset(Err(e)) => {
                log::warn!("Reset failed: {}", e);
                Notice::Error(format!("Failed to reset resume: {}", e))
            }
            RemoteOutcome::Pinged(Ok(message)) if message.is_empty() => {
                Notice::Info("Connected to the resume service.".to_string())
            }
            RemoteOutcome::Pinged(Ok(message)) => {
                Notice::Info(format!("Connected to the resume service: {}", message))
            }
            RemoteOutcome::Pinged(Err(e)) => {
                log::warn!("Connection check failed: {}", e);
                Notice::Error(format!("Cannot reach the resume service: {}", e))
            }
        }
    }
}
