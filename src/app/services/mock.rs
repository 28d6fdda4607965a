//! Scripted [`ResumeService`] for controller tests.

use std::sync::Mutex;

use super::api::{ResumeService, ServiceError};
use crate::app::domain::resume::ResumeDocument;

#[derive(Default)]
pub struct MockService {
    pub enhance_result: Option<Result<String, ServiceError>>,
    pub save_result: Option<Result<(), ServiceError>>,
    pub load_result: Option<Result<Option<ResumeDocument>, ServiceError>>,
    pub reset_result: Option<Result<(), ServiceError>>,
    pub ping_result: Option<Result<String, ServiceError>>,
    /// `(section, content)` pairs passed to `enhance`
    pub enhance_calls: Mutex<Vec<(String, String)>>,
    /// JSON bodies passed to `save`
    pub saved_payloads: Mutex<Vec<serde_json::Value>>,
}

impl MockService {
    pub fn enhancing_to(text: &str) -> Self {
        Self {
            enhance_result: Some(Ok(text.to_string())),
            ..Default::default()
        }
    }

    pub fn failing_with(status: i32) -> Self {
        let err = ServiceError::Status {
            status,
            detail: None,
        };
        Self {
            enhance_result: Some(Err(err.clone())),
            save_result: Some(Err(err.clone())),
            load_result: Some(Err(err.clone())),
            reset_result: Some(Err(err.clone())),
            ping_result: Some(Err(err)),
            ..Default::default()
        }
    }
}

fn unscripted<T>() -> Result<T, ServiceError> {
    Err(ServiceError::Transport("no scripted response".to_string()))
}

impl ResumeService for MockService {
    fn enhance(&self, section: &str, content: &str) -> Result<String, ServiceError> {
        self.enhance_calls
            .lock()
            .unwrap()
            .push((section.to_string(), content.to_string()));
        self.enhance_result.clone().unwrap_or_else(unscripted)
    }

    fn save(&self, resume: &ResumeDocument) -> Result<(), ServiceError> {
        self.saved_payloads
            .lock()
            .unwrap()
            .push(serde_json::to_value(resume).unwrap());
        self.save_result.clone().unwrap_or(Ok(()))
    }

    fn load(&self) -> Result<Option<ResumeDocument>, ServiceError> {
        self.load_result.clone().unwrap_or_else(unscripted)
    }

    fn reset(&self) -> Result<(), ServiceError> {
        self.reset_result.clone().unwrap_or(Ok(()))
    }

    fn ping(&self) -> Result<String, ServiceError> {
        self.ping_result.clone().unwrap_or_else(unscripted)
    }
}
