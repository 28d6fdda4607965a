//! Local JSON export ("Download JSON") and import.

use std::fs;
use std::path::Path;

use crate::app::domain::resume::ResumeDocument;
use crate::app::infrastructure::error::Result;

pub const DEFAULT_EXPORT_NAME: &str = "resume.json";

/// Pretty-printed JSON text of the document.
pub fn render_json(resume: &ResumeDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(resume)?)
}

/// Write the document to `path`. The file is closed before returning.
pub fn write_json(resume: &ResumeDocument, path: &Path) -> Result<()> {
    let text = render_json(resume)?;
    fs::write(path, text)?;
    log::info!("Exported resume to {}", path.display());
    Ok(())
}

pub fn read_json(path: &Path) -> Result<ResumeDocument> {
    let contents = fs::read_to_string(path)?;
    let resume = serde_json::from_str(&contents)?;
    log::info!("Imported resume from {}", path.display());
    Ok(resume)
}

/// Ensure a chosen export path ends in `.json`.
pub fn with_json_extension(path: &str) -> String {
    if Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        path.to_string()
    } else {
        format!("{}.json", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::resume::ExperienceEntry;
    use crate::app::infrastructure::error::AppError;

    #[test]
    fn test_render_parses_back_to_same_document() {
        let mut resume = ResumeDocument::demo();
        resume.experience.push(ExperienceEntry {
            company: "Ünïcode GmbH".to_string(),
            description: "Line one\nLine \"two\"".to_string(),
            ..Default::default()
        });

        let text = render_json(&resume).unwrap();
        let parsed: ResumeDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, resume);
    }

    #[test]
    fn test_render_is_indented() {
        let text = render_json(&ResumeDocument::demo()).unwrap();
        assert!(text.starts_with("{\n  \"name\": \"John Doe\""));
    }

    #[test]
    fn test_write_then_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_NAME);
        let resume = ResumeDocument::demo();

        write_json(&resume, &path).unwrap();
        assert_eq!(read_json(&path).unwrap(), resume);
    }

    #[test]
    fn test_read_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"summary": "no name"}"#).unwrap();
        assert!(matches!(read_json(&path), Err(AppError::Json(_))));

        let missing = dir.path().join("missing.json");
        assert!(matches!(read_json(&missing), Err(AppError::Io(_))));
    }

    #[test]
    fn test_with_json_extension() {
        assert_eq!(with_json_extension("/tmp/cv"), "/tmp/cv.json");
        assert_eq!(with_json_extension("/tmp/cv.json"), "/tmp/cv.json");
        assert_eq!(with_json_extension("/tmp/cv.JSON"), "/tmp/cv.JSON");
    }
}
