use serde::{Deserialize, Serialize};

/// The full resume being edited.
///
/// Field names match the JSON keys the backend expects, so the struct
/// serializes directly as the `/save-resume` request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub name: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,

    #[serde(default)]
    pub education: Vec<EducationEntry>,

    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub years: String,
}

/// Top-level scalar fields of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeField {
    Name,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Role,
    Years,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    Years,
}

impl ResumeDocument {
    /// Placeholder content shown when the editor starts and after an upload.
    pub fn demo() -> Self {
        Self {
            name: "John Doe".to_string(),
            summary: "Experienced developer with a passion for building impactful software."
                .to_string(),
            experience: vec![ExperienceEntry {
                company: "Tech Corp".to_string(),
                role: "Software Engineer".to_string(),
                years: "2020-2023".to_string(),
                description: "Developed scalable web applications.".to_string(),
            }],
            education: vec![EducationEntry {
                school: "State University".to_string(),
                degree: "B.Sc. Computer Science".to_string(),
                years: "2016-2020".to_string(),
            }],
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Python".to_string(),
            ],
        }
    }

    pub fn field(&self, field: ResumeField) -> &str {
        match field {
            ResumeField::Name => &self.name,
            ResumeField::Summary => &self.summary,
        }
    }

    pub fn field_mut(&mut self, field: ResumeField) -> &mut String {
        match field {
            ResumeField::Name => &mut self.name,
            ResumeField::Summary => &mut self.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_document_contents() {
        let doc = ResumeDocument::demo();
        assert_eq!(doc.name, "John Doe");
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.experience[0].company, "Tech Corp");
        assert_eq!(doc.education[0].degree, "B.Sc. Computer Science");
        assert_eq!(doc.skills, vec!["JavaScript", "React", "Python"]);
    }

    #[test]
    fn test_serialized_keys_are_top_level() {
        let doc = ResumeDocument::demo();
        let value = serde_json::to_value(&doc).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["name", "summary", "experience", "education", "skills"] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
        assert_eq!(value["experience"][0]["description"], "Developed scalable web applications.");
        assert_eq!(value["education"][0]["school"], "State University");
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        // Stored resumes may omit optional sections
        let json = r#"{"name": "Ada"}"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.name, "Ada");
        assert!(doc.summary.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_field_accessors() {
        let mut doc = ResumeDocument::demo();
        *doc.field_mut(ResumeField::Summary) = "Short".to_string();
        assert_eq!(doc.field(ResumeField::Summary), "Short");
        assert_eq!(doc.field(ResumeField::Name), "John Doe");
    }
}
