use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

fn run_chooser(
    kind: FileDialogType,
    filter: &str,
    directory: Option<&str>,
    preset: Option<&str>,
) -> Option<String> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_filter(filter);
    if let Some(dir) = directory {
        if let Err(e) = nfc.set_directory(&dir) {
            log::debug!("Ignoring dialog directory {}: {:?}", dir, e);
        }
    }
    if let Some(name) = preset {
        nfc.set_preset_file(name);
        nfc.set_option(FileDialogOptions::SaveAsConfirm);
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn native_open_dialog(filter: &str, directory: Option<&str>) -> Option<String> {
    run_chooser(FileDialogType::BrowseFile, filter, directory, None)
}

pub fn native_save_dialog(
    filter: &str,
    directory: Option<&str>,
    default_name: &str,
) -> Option<String> {
    run_chooser(FileDialogType::BrowseSaveFile, filter, directory, Some(default_name))
}
