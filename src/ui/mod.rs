pub mod dialogs;
pub mod document_view;
pub mod file_dialogs;
pub mod list_editors;
pub mod main_window;
pub mod menu;
pub mod section;
pub mod theme;
