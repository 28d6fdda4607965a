//! "Enhance with AI" requests.
//!
//! Each enhance button is a [`EnhanceTarget`]. While a target has a request
//! in flight its button is busy and further activations are ignored;
//! different targets may race, and whichever completes last wins.
//!
//! Requests are tracked by ticket. Experience targets are positional, so
//! when an entry is removed the in-flight targets behind it move down with
//! their entries, and a completed request is applied wherever its ticket
//! sits now.

use std::collections::HashMap;

use super::store::DocumentStore;
use crate::app::domain::notice::Notice;
use crate::app::domain::resume::{ExperienceField, ResumeDocument, ResumeField};
use crate::app::infrastructure::error::AppError;
use crate::app::services::api::{ResumeService, ServiceError};

/// A text field that can be sent for enhancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnhanceTarget {
    Summary,
    /// Description of the experience entry at this position
    ExperienceDescription(usize),
}

impl EnhanceTarget {
    /// Lowercased section title sent to the service.
    pub fn section_name(&self) -> &'static str {
        match self {
            EnhanceTarget::Summary => "summary",
            EnhanceTarget::ExperienceDescription(_) => "experience",
        }
    }

    pub fn current_text<'a>(&self, doc: &'a ResumeDocument) -> Option<&'a str> {
        match *self {
            EnhanceTarget::Summary => Some(doc.field(ResumeField::Summary)),
            EnhanceTarget::ExperienceDescription(index) => doc
                .experience
                .get(index)
                .map(|entry| entry.description.as_str()),
        }
    }

    fn apply(&self, store: &mut DocumentStore, text: String) -> Result<(), AppError> {
        match *self {
            EnhanceTarget::Summary => {
                store.set_field(ResumeField::Summary, text);
                Ok(())
            }
            EnhanceTarget::ExperienceDescription(index) => {
                store.set_experience(index, ExperienceField::Description, text)
            }
        }
    }
}

/// Everything a worker thread needs to perform one enhancement.
#[derive(Debug, Clone)]
pub struct EnhanceRequest {
    pub ticket: u64,
    pub target: EnhanceTarget,
    pub content: String,
}

impl EnhanceRequest {
    pub fn execute(&self, service: &dyn ResumeService) -> EnhanceOutcome {
        let result = service.enhance(self.target.section_name(), &self.content);
        EnhanceOutcome {
            ticket: self.ticket,
            target: self.target,
            result,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnhanceOutcome {
    pub ticket: u64,
    /// Target at the time the request started
    pub target: EnhanceTarget,
    pub result: Result<String, ServiceError>,
}

#[derive(Debug, Default)]
pub struct EnhanceController {
    in_flight: HashMap<EnhanceTarget, u64>,
    next_ticket: u64,
}

impl EnhanceController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self, target: EnhanceTarget) -> bool {
        self.in_flight.contains_key(&target)
    }

    /// Mark `target` busy and build its request.
    ///
    /// Returns `None` if the target already has a request in flight or no
    /// longer exists in `doc`.
    pub fn begin(&mut self, target: EnhanceTarget, doc: &ResumeDocument) -> Option<EnhanceRequest> {
        if self.is_busy(target) {
            log::debug!("Ignoring enhance for {:?}: already in flight", target);
            return None;
        }
        let content = target.current_text(doc)?.to_string();
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight.insert(target, ticket);
        log::info!("Enhancing {} ({:?})", target.section_name(), target);
        Some(EnhanceRequest {
            ticket,
            target,
            content,
        })
    }

    /// Follow the removal of experience entry `index`.
    ///
    /// A request for the removed entry is forgotten and its result will be
    /// dropped. Requests for later entries move down by one.
    pub fn experience_removed(&mut self, index: usize) {
        self.in_flight = self
            .in_flight
            .drain()
            .filter_map(|(target, ticket)| match target {
                EnhanceTarget::ExperienceDescription(i) if i == index => {
                    log::debug!("Dropping enhance for removed experience entry {}", i);
                    None
                }
                EnhanceTarget::ExperienceDescription(i) if i > index => {
                    Some((EnhanceTarget::ExperienceDescription(i - 1), ticket))
                }
                other => Some((other, ticket)),
            })
            .collect();
    }

    /// Forget every request after the whole document was swapped out.
    pub fn document_replaced(&mut self) {
        if !self.in_flight.is_empty() {
            log::debug!(
                "Dropping {} enhance request(s) for the replaced document",
                self.in_flight.len()
            );
            self.in_flight.clear();
        }
    }

    /// Clear the busy flag and fold the result into the document.
    ///
    /// Returns the notice to show on failure. The document is only touched
    /// when the service answered successfully and the request was not
    /// dropped in the meantime.
    pub fn complete(
        &mut self,
        outcome: EnhanceOutcome,
        store: &mut DocumentStore,
    ) -> Option<Notice> {
        let current = self
            .in_flight
            .iter()
            .find(|(_, ticket)| **ticket == outcome.ticket)
            .map(|(target, _)| *target);
        let Some(target) = current else {
            log::info!("Discarding enhance result for {:?}: target is gone", outcome.target);
            return None;
        };
        self.in_flight.remove(&target);

        let applied = match outcome.result {
            Ok(text) => target.apply(store, text),
            Err(e) => Err(AppError::Service(e)),
        };

        match applied {
            Ok(()) => {
                log::info!("Enhanced {:?}", target);
                None
            }
            Err(e) => {
                log::warn!("Enhance of {:?} failed: {}", target, e);
                Some(Notice::Error(format!("Failed to enhance with AI: {}", e)))
            }
        }
    }
}
