//! Positional editing of the resume's ordered lists.
//!
//! Experience, education and skills all follow the same pattern: copy the
//! sequence, change one slot, hand back the new sequence. The helpers here
//! implement that once, parameterized by entry type.

use super::resume::{
    EducationEntry, EducationField, ExperienceEntry, ExperienceField, ResumeDocument,
};

/// An entry that can live in one of the resume's lists.
///
/// `Default` is the blank template appended by "Add".
pub trait EditableEntry: Clone + Default {
    type Field: Copy;

    fn get(&self, field: Self::Field) -> &str;
    fn set(&mut self, field: Self::Field, value: String);
}

impl EditableEntry for ExperienceEntry {
    type Field = ExperienceField;

    fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Company => &self.company,
            ExperienceField::Role => &self.role,
            ExperienceField::Years => &self.years,
            ExperienceField::Description => &self.description,
        }
    }

    fn set(&mut self, field: ExperienceField, value: String) {
        match field {
            ExperienceField::Company => self.company = value,
            ExperienceField::Role => self.role = value,
            ExperienceField::Years => self.years = value,
            ExperienceField::Description => self.description = value,
        }
    }
}

impl EditableEntry for EducationEntry {
    type Field = EducationField;

    fn get(&self, field: EducationField) -> &str {
        match field {
            EducationField::School => &self.school,
            EducationField::Degree => &self.degree,
            EducationField::Years => &self.years,
        }
    }

    fn set(&mut self, field: EducationField, value: String) {
        match field {
            EducationField::School => self.school = value,
            EducationField::Degree => self.degree = value,
            EducationField::Years => self.years = value,
        }
    }
}

/// A skill is a bare string, so it has a single unnamed field.
impl EditableEntry for String {
    type Field = ();

    fn get(&self, _field: ()) -> &str {
        self
    }

    fn set(&mut self, _field: (), value: String) {
        *self = value;
    }
}

/// Selects one list inside a [`ResumeDocument`].
pub trait ResumeList {
    type Entry: EditableEntry;

    /// Name used in log lines and bounds errors.
    const NAME: &'static str;

    fn items(doc: &ResumeDocument) -> &Vec<Self::Entry>;
    fn items_mut(doc: &mut ResumeDocument) -> &mut Vec<Self::Entry>;
}

pub struct Experience;
pub struct Education;
pub struct Skills;

impl ResumeList for Experience {
    type Entry = ExperienceEntry;
    const NAME: &'static str = "experience";

    fn items(doc: &ResumeDocument) -> &Vec<ExperienceEntry> {
        &doc.experience
    }

    fn items_mut(doc: &mut ResumeDocument) -> &mut Vec<ExperienceEntry> {
        &mut doc.experience
    }
}

impl ResumeList for Education {
    type Entry = EducationEntry;
    const NAME: &'static str = "education";

    fn items(doc: &ResumeDocument) -> &Vec<EducationEntry> {
        &doc.education
    }

    fn items_mut(doc: &mut ResumeDocument) -> &mut Vec<EducationEntry> {
        &mut doc.education
    }
}

impl ResumeList for Skills {
    type Entry = String;
    const NAME: &'static str = "skills";

    fn items(doc: &ResumeDocument) -> &Vec<String> {
        &doc.skills
    }

    fn items_mut(doc: &mut ResumeDocument) -> &mut Vec<String> {
        &mut doc.skills
    }
}

/// Copy of `items` with one field of the entry at `index` replaced.
/// Returns `None` when `index` is out of range.
pub fn with_field<T: EditableEntry>(
    items: &[T],
    index: usize,
    field: T::Field,
    value: String,
) -> Option<Vec<T>> {
    if index >= items.len() {
        return None;
    }
    let mut next = items.to_vec();
    next[index].set(field, value);
    Some(next)
}

/// Copy of `items` with a blank entry appended.
pub fn with_appended<T: EditableEntry>(items: &[T]) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(T::default());
    next
}

/// Copy of `items` without the entry at `index`; later entries shift down.
/// Returns `None` when `index` is out of range.
pub fn without<T: EditableEntry>(items: &[T], index: usize) -> Option<Vec<T>> {
    if index >= items.len() {
        return None;
    }
    let mut next = items.to_vec();
    next.remove(index);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<ExperienceEntry> {
        (0..4)
            .map(|i| ExperienceEntry {
                company: format!("Company {}", i),
                role: format!("Role {}", i),
                years: format!("20{}0", i),
                description: format!("Did thing {}", i),
            })
            .collect()
    }

    #[test]
    fn test_with_field_touches_only_target() {
        let before = entries();
        let after = with_field(&before, 2, ExperienceField::Role, "Lead".to_string()).unwrap();

        assert_eq!(after.len(), before.len());
        assert_eq!(after[2].role, "Lead");
        assert_eq!(after[2].company, before[2].company);
        assert_eq!(after[2].years, before[2].years);
        assert_eq!(after[2].description, before[2].description);
        for i in [0, 1, 3] {
            assert_eq!(after[i], before[i]);
        }
        // Source slice is untouched
        assert_eq!(before[2].role, "Role 2");
    }

    #[test]
    fn test_with_field_out_of_range() {
        let before = entries();
        assert!(with_field(&before, 4, ExperienceField::Company, "x".to_string()).is_none());
        let empty: Vec<EducationEntry> = Vec::new();
        assert!(with_field(&empty, 0, EducationField::School, "x".to_string()).is_none());
    }

    #[test]
    fn test_append_then_remove_last_restores_list() {
        let before = entries();
        let grown = with_appended(&before);
        assert_eq!(grown.len(), before.len() + 1);
        assert_eq!(grown.last().unwrap(), &ExperienceEntry::default());

        let restored = without(&grown, grown.len() - 1).unwrap();
        assert_eq!(restored, before);
    }

    #[test]
    fn test_remove_shifts_later_entries_down() {
        let before = entries();
        let after = without(&before, 1).unwrap();

        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
        assert_eq!(after[2], before[3]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let before = entries();
        assert!(without(&before, 10).is_none());
    }

    #[test]
    fn test_skills_use_unit_field() {
        let skills = vec!["Rust".to_string(), "Rust".to_string()];
        let after = with_field(&skills, 1, (), "Go".to_string()).unwrap();
        assert_eq!(after, vec!["Rust".to_string(), "Go".to_string()]);

        let grown = with_appended(&skills);
        assert_eq!(grown[2], "");
    }

    #[test]
    fn test_entry_get_matches_set() {
        let mut edu = EducationEntry::default();
        edu.set(EducationField::Degree, "M.Sc.".to_string());
        assert_eq!(edu.get(EducationField::Degree), "M.Sc.");
        assert_eq!(edu.get(EducationField::School), "");
    }
}
