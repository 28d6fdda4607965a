use crate::app::controllers::store::DocumentStore;
use crate::app::domain::notice::Notice;
use crate::app::domain::resume::ResumeDocument;

/// Handle a resume file picked for upload.
///
/// Parsing is not implemented: the file's contents are ignored and the
/// document is reset to the demo resume. Cancelling the picker (`None`)
/// leaves everything alone.
pub fn import_uploaded(path: Option<&str>, store: &mut DocumentStore) -> Option<Notice> {
    let path = path?;
    log::info!("Upload selected: {} (contents not parsed)", path);
    store.replace(ResumeDocument::demo());
    Some(Notice::Info("Resume parsed (mock)!".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::resume::ResumeField;

    #[test]
    fn test_upload_resets_to_demo() {
        let mut store = DocumentStore::new(ResumeDocument::demo());
        store.set_field(ResumeField::Name, "Someone Else");
        store.add_skill();

        let notice = import_uploaded(Some("/home/me/cv.pdf"), &mut store);
        assert_eq!(notice, Some(Notice::Info("Resume parsed (mock)!".to_string())));
        assert_eq!(store.document(), &ResumeDocument::demo());
    }

    #[test]
    fn test_cancelled_upload_is_noop() {
        let mut store = DocumentStore::new(ResumeDocument::default());
        assert!(import_uploaded(None, &mut store).is_none());
        assert_eq!(store.revision(), 0);
    }
}
