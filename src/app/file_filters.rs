/// Filter for the resume upload picker.
///
/// FLTK format: "Description\tPattern". FLTK adds "All Files (*)" itself.
pub fn upload_filter() -> String {
    "Resume Documents\t*.{pdf,docx}".to_string()
}

/// Filter for JSON import/export dialogs
pub fn json_filter() -> String {
    "JSON Files\t*.json".to_string()
}
