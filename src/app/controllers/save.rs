use super::store::DocumentStore;
use crate::app::domain::notice::Notice;
use crate::app::domain::resume::ResumeDocument;
use crate::app::services::api::{ResumeService, ServiceError};

/// A save waiting to run on a worker thread.
///
/// Holds its own copy of the document, so edits made while the request is
/// in flight are not sent.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub snapshot: ResumeDocument,
}

impl SaveRequest {
    pub fn execute(&self, service: &dyn ResumeService) -> Result<(), ServiceError> {
        service.save(&self.snapshot)
    }
}

#[derive(Debug, Default)]
pub struct SaveController {
    saving: bool,
}

impl SaveController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Start a save unless one is already running.
    pub fn begin(&mut self, store: &DocumentStore) -> Option<SaveRequest> {
        if self.saving {
            log::debug!("Ignoring save: already in flight");
            return None;
        }
        self.saving = true;
        log::info!("Saving resume (revision {})", store.revision());
        Some(SaveRequest {
            snapshot: store.document().clone(),
        })
    }

    pub fn complete(&mut self, result: Result<(), ServiceError>) -> Notice {
        self.saving = false;
        match result {
            Ok(()) => {
                log::info!("Resume saved");
                Notice::Info("Resume saved!".to_string())
            }
            Err(e) => {
                log::warn!("Save failed: {}", e);
                Notice::Error(format!("Failed to save resume: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::resume::ResumeField;
    use crate::app::services::mock::MockService;

    #[test]
    fn test_save_payload_is_top_level_document() {
        let mut store = DocumentStore::new(ResumeDocument::demo());
        store.set_field(ResumeField::Name, "A");
        let mut controller = SaveController::new();
        let service = MockService::default();

        let request = controller.begin(&store).unwrap();
        let notice = controller.complete(request.execute(&service));

        assert_eq!(notice, Notice::Info("Resume saved!".to_string()));
        let payloads = service.saved_payloads.lock().unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0]["name"], "A");
        assert!(payloads[0].get("resume").is_none());
        assert_eq!(payloads[0]["skills"][2], "Python");
    }

    #[test]
    fn test_snapshot_ignores_later_edits() {
        let mut store = DocumentStore::new(ResumeDocument::demo());
        let mut controller = SaveController::new();
        let service = MockService::default();

        let request = controller.begin(&store).unwrap();
        store.set_field(ResumeField::Name, "Edited mid-flight");
        request.execute(&service).unwrap();

        let payloads = service.saved_payloads.lock().unwrap();
        assert_eq!(payloads[0]["name"], "John Doe");
    }

    #[test]
    fn test_duplicate_save_suppressed() {
        let store = DocumentStore::new(ResumeDocument::demo());
        let mut controller = SaveController::new();

        assert!(controller.begin(&store).is_some());
        assert!(controller.is_saving());
        assert!(controller.begin(&store).is_none());

        controller.complete(Ok(()));
        assert!(!controller.is_saving());
        assert!(controller.begin(&store).is_some());
    }

    #[test]
    fn test_save_failure_with_detail() {
        let mut controller = SaveController::new();
        let store = DocumentStore::new(ResumeDocument::demo());
        controller.begin(&store);

        let notice = controller.complete(Err(ServiceError::Status {
            status: 500,
            detail: Some("disk full".to_string()),
        }));
        assert_eq!(notice, Notice::Error("Failed to save resume: disk full".to_string()));
        assert!(!controller.is_saving());
    }

    #[test]
    fn test_save_failure_without_detail() {
        let mut controller = SaveController::new();
        let service = MockService::failing_with(503);
        let store = DocumentStore::new(ResumeDocument::demo());

        let request = controller.begin(&store).unwrap();
        let notice = controller.complete(request.execute(&service));
        assert_eq!(notice.text(), "Failed to save resume: Server error: 503");
    }
}
