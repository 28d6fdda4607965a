//! Client for the resume backend.
//!
//! The backend is an external collaborator; this module only knows its wire
//! contract. [`ResumeService`] is the seam the controllers depend on, with
//! [`HttpResumeService`] as the real implementation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::app::domain::resume::ResumeDocument;

/// Why a backend call failed.
///
/// Cloneable so results can travel through the UI message channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request never completed.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{}", status_message(.status, .detail))]
    Status { status: i32, detail: Option<String> },

    /// The server answered 2xx but the body was not what we expected.
    #[error("{0}")]
    Malformed(String),
}

fn status_message(status: &i32, detail: &Option<String>) -> String {
    match detail {
        Some(detail) if !detail.trim().is_empty() => detail.clone(),
        _ => format!("Server error: {}", status),
    }
}

/// Operations the editor needs from the backend.
pub trait ResumeService: Send + Sync {
    /// Ask the service to rewrite `content`. `section` is the lowercased
    /// section name, e.g. `"summary"`.
    fn enhance(&self, section: &str, content: &str) -> Result<String, ServiceError>;

    /// Persist the full document.
    fn save(&self, resume: &ResumeDocument) -> Result<(), ServiceError>;

    /// Fetch the stored document. `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<ResumeDocument>, ServiceError>;

    /// Delete the stored document.
    fn reset(&self) -> Result<(), ServiceError>;

    /// Health check. Returns the service's greeting message.
    fn ping(&self) -> Result<String, ServiceError>;
}

#[derive(Debug, Serialize)]
pub struct EnhanceRequestBody<'a> {
    pub section: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct EnhanceResponseBody {
    #[serde(default)]
    improved_content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PingResponseBody {
    #[serde(default)]
    message: Option<String>,
}

/// Blocking HTTP implementation backed by `minreq`.
///
/// Calls block the calling thread; the UI always runs them on a worker.
#[derive(Debug, Clone)]
pub struct HttpResumeService {
    base_url: String,
    timeout_secs: Option<u64>,
}

impl HttpResumeService {
    pub fn new(base_url: &str, timeout_secs: Option<u64>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: minreq::Request) -> Result<minreq::Response, ServiceError> {
        let request = match self.timeout_secs {
            Some(secs) => request.with_timeout(secs),
            None => request,
        };
        request
            .send()
            .map_err(|e| ServiceError::Transport(format!("Failed to reach server: {}", e)))
    }
}

impl ResumeService for HttpResumeService {
    fn enhance(&self, section: &str, content: &str) -> Result<String, ServiceError> {
        let body = EnhanceRequestBody { section, content };
        let request = minreq::post(self.url("/ai-enhance"))
            .with_json(&body)
            .map_err(|e| ServiceError::Transport(format!("Failed to encode request: {}", e)))?;
        let response = self.send(request)?;
        parse_enhance_response(response.status_code, body_text(&response))
    }

    fn save(&self, resume: &ResumeDocument) -> Result<(), ServiceError> {
        let request = minreq::post(self.url("/save-resume"))
            .with_json(resume)
            .map_err(|e| ServiceError::Transport(format!("Failed to encode request: {}", e)))?;
        let response = self.send(request)?;
        check_status(response.status_code, body_text(&response))
    }

    fn load(&self) -> Result<Option<ResumeDocument>, ServiceError> {
        let response = self.send(minreq::get(self.url("/resume")))?;
        parse_load_response(response.status_code, body_text(&response))
    }

    fn reset(&self) -> Result<(), ServiceError> {
        let response = self.send(minreq::delete(self.url("/reset-resume")))?;
        check_status(response.status_code, body_text(&response))
    }

    fn ping(&self) -> Result<String, ServiceError> {
        let response = self.send(minreq::get(self.url("/")))?;
        let text = body_text(&response);
        check_status(response.status_code, text)?;
        let body: PingResponseBody = serde_json::from_str(text)
            .map_err(|e| ServiceError::Malformed(format!("Invalid response from server: {}", e)))?;
        Ok(body.message.unwrap_or_default())
    }
}

fn body_text(response: &minreq::Response) -> &str {
    response.as_str().unwrap_or("")
}

fn is_success(status: i32) -> bool {
    (200..300).contains(&status)
}

/// Map a non-2xx status to [`ServiceError::Status`], pulling the `detail`
/// field out of the body when there is one.
pub fn check_status(status: i32, body: &str) -> Result<(), ServiceError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ServiceError::Status {
            status,
            detail: extract_detail(body),
        })
    }
}

/// Human-readable `detail` from an error body.
///
/// String details are returned as-is; structured ones (validation error
/// lists) are returned as compact JSON.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn parse_enhance_response(status: i32, body: &str) -> Result<String, ServiceError> {
    check_status(status, body)?;
    let parsed: EnhanceResponseBody = serde_json::from_str(body)
        .map_err(|_| ServiceError::Malformed("Invalid response from server".to_string()))?;
    match parsed.improved_content {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ServiceError::Malformed(
            "Invalid response from server".to_string(),
        )),
    }
}

pub fn parse_load_response(
    status: i32,
    body: &str,
) -> Result<Option<ResumeDocument>, ServiceError> {
    check_status(status, body)?;
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ServiceError::Malformed(format!("Invalid response from server: {}", e)))?;

    // An empty store answers with `{"resume": null}`
    if value.get("resume").is_some_and(Value::is_null) {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| ServiceError::Malformed(format!("Stored resume is invalid: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhance_success() {
        let body = r#"{"section": "summary", "improved_content": "[Enhanced] hi"}"#;
        assert_eq!(parse_enhance_response(200, body).unwrap(), "[Enhanced] hi");
    }

    #[test]
    fn test_enhance_server_error() {
        let err = parse_enhance_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(
            err,
            ServiceError::Status {
                status: 500,
                detail: None
            }
        );
        assert_eq!(err.to_string(), "Server error: 500");
    }

    #[test]
    fn test_enhance_missing_field_is_malformed() {
        let err = parse_enhance_response(200, r#"{"section": "summary"}"#).unwrap_err();
        assert!(matches!(err, ServiceError::Malformed(_)));
        assert_eq!(err.to_string(), "Invalid response from server");

        let err = parse_enhance_response(200, r#"{"improved_content": ""}"#).unwrap_err();
        assert!(matches!(err, ServiceError::Malformed(_)));

        let err = parse_enhance_response(200, "not json").unwrap_err();
        assert!(matches!(err, ServiceError::Malformed(_)));
    }

    #[test]
    fn test_detail_string() {
        let err = check_status(500, r#"{"detail": "disk full"}"#).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_detail_empty_falls_back_to_status() {
        assert_eq!(extract_detail(r#"{"detail": ""}"#), None);
        let err = check_status(500, r#"{"detail": "  "}"#).unwrap_err();
        assert_eq!(err.to_string(), "Server error: 500");

        let err = ServiceError::Status {
            status: 503,
            detail: Some(String::new()),
        };
        assert_eq!(err.to_string(), "Server error: 503");
    }

    #[test]
    fn test_detail_structured() {
        let body = r#"{"detail": [{"loc": ["body", "name"], "msg": "field required"}]}"#;
        let detail = extract_detail(body).unwrap();
        assert!(detail.starts_with('['));
        assert!(detail.contains("field required"));
    }

    #[test]
    fn test_detail_absent() {
        assert_eq!(extract_detail(r#"{"error": "x"}"#), None);
        assert_eq!(extract_detail(r#"{"detail": null}"#), None);
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);

        let err = check_status(422, "").unwrap_err();
        assert_eq!(err.to_string(), "Server error: 422");
    }

    #[test]
    fn test_check_status_accepts_any_2xx() {
        assert!(check_status(200, "").is_ok());
        assert!(check_status(201, "").is_ok());
        assert!(check_status(204, "").is_ok());
        assert!(check_status(302, "").is_err());
    }

    #[test]
    fn test_load_empty_store() {
        let loaded = parse_load_response(200, r#"{"resume": null}"#).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_stored_resume() {
        let body = serde_json::to_string(&ResumeDocument::demo()).unwrap();
        let loaded = parse_load_response(200, &body).unwrap();
        assert_eq!(loaded, Some(ResumeDocument::demo()));
    }

    #[test]
    fn test_load_invalid_resume() {
        let err = parse_load_response(200, r#"{"skills": 3}"#).unwrap_err();
        assert!(matches!(err, ServiceError::Malformed(_)));
    }

    #[test]
    fn test_enhance_request_body_shape() {
        let body = EnhanceRequestBody {
            section: "summary",
            content: "text",
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"section": "summary", "content": "text"}));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let service = HttpResumeService::new("http://localhost:8000/", None);
        assert_eq!(service.base_url(), "http://localhost:8000");
        assert_eq!(service.url("/ai-enhance"), "http://localhost:8000/ai-enhance");
    }
}
