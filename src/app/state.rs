use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use fltk::{app::Sender, menu::MenuBar, prelude::*, window::Window};

use super::controllers::enhance::{EnhanceController, EnhanceTarget};
use super::controllers::remote::{RemoteAction, RemoteController, RemoteOutcome};
use super::controllers::save::SaveController;
use super::controllers::store::DocumentStore;
use super::domain::list_edit::{Education, Experience};
use super::domain::messages::Message;
use super::domain::notice::Notice;
use super::domain::resume::ResumeDocument;
use super::domain::settings::AppSettings;
use super::file_filters::{json_filter, upload_filter};
use super::infrastructure::error::Result;
use super::services::api::{HttpResumeService, ResumeService};
use super::services::export::{self, DEFAULT_EXPORT_NAME};
use super::services::upload::import_uploaded;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::settings_dialog::show_settings_dialog;
use crate::ui::dialogs::{confirm, show_notice};
use crate::ui::document_view::DocumentView;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::Toolbar;
use crate::ui::menu::set_remote_busy;
use crate::ui::theme::{self, palette};

pub struct AppState {
    pub store: DocumentStore,
    pub view: Rc<RefCell<DocumentView>>,
    pub toolbar: Toolbar,
    pub window: Window,
    pub menu: MenuBar,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub service: Arc<dyn ResumeService>,
    pub enhance: EnhanceController,
    pub save: SaveController,
    pub remote: RemoteController,
}

impl AppState {
    pub fn new(
        view: DocumentView,
        toolbar: Toolbar,
        window: Window,
        menu: MenuBar,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
    ) -> Self {
        let service = {
            let s = settings.borrow();
            Arc::new(HttpResumeService::new(&s.api_url, s.request_timeout_secs))
        };

        let mut store = DocumentStore::new(ResumeDocument::demo());
        let view = Rc::new(RefCell::new(view));
        view.borrow_mut().render(&store.snapshot());

        let view_observer = view.clone();
        store.subscribe(move |doc| view_observer.borrow_mut().render(doc));

        Self {
            store,
            view,
            toolbar,
            window,
            menu,
            sender,
            settings,
            service,
            enhance: EnhanceController::new(),
            save: SaveController::new(),
            remote: RemoteController::new(),
        }
    }

    /// Dispatch one message. Returns true when the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::Upload => self.upload(),
            Message::OpenJson => self.open_json(),
            Message::Download => self.download(),
            Message::Save => self.start_save(),
            Message::Remote(action) => self.start_remote(action),
            Message::OpenSettings => self.open_settings(),
            Message::FileQuit => return true,

            Message::SetField(field, value) => self.store.set_field(field, value),
            Message::SetExperience(index, field, value) => {
                let result = self.store.set_experience(index, field, value);
                self.report(result);
            }
            Message::AddExperience => {
                self.store.add_list_item::<Experience>();
            }
            Message::RemoveExperience(index) => {
                match self.store.remove_list_item::<Experience>(index) {
                    Ok(()) => self.enhance.experience_removed(index),
                    Err(e) => self.report(Err(e)),
                }
            }
            Message::SetEducation(index, field, value) => {
                let result = self.store.set_education(index, field, value);
                self.report(result);
            }
            Message::AddEducation => {
                self.store.add_list_item::<Education>();
            }
            Message::RemoveEducation(index) => {
                let result = self.store.remove_list_item::<Education>(index);
                self.report(result);
            }
            Message::SetSkill(index, value) => {
                let result = self.store.set_skill(index, value);
                self.report(result);
            }
            Message::AddSkill => {
                self.store.add_skill();
            }
            Message::RemoveSkill(index) => {
                let result = self.store.remove_skill(index);
                self.report(result);
            }

            Message::Enhance(target) => self.start_enhance(target),
            Message::ShowAbout => {
                let api_url = self.settings.borrow().api_url.clone();
                show_about_dialog(&api_url);
            }

            Message::EnhanceFinished(outcome) => {
                if let Some(notice) = self.enhance.complete(outcome, &mut self.store) {
                    show_notice(&notice);
                }
            }
            Message::SaveFinished(result) => {
                let notice = self.save.complete(result);
                show_notice(&notice);
            }
            Message::RemoteFinished(outcome) => {
                if matches!(outcome, RemoteOutcome::Loaded(Ok(Some(_)))) {
                    self.enhance.document_replaced();
                }
                let notice = self.remote.complete(outcome, &mut self.store);
                show_notice(&notice);
            }
        }

        self.refresh_controls();
        false
    }

    /// Run `job` against the service on a worker thread and post its
    /// completion message back to the dispatch loop.
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(&dyn ResumeService) -> Message + Send + 'static,
    {
        let service = Arc::clone(&self.service);
        let sender = self.sender;
        std::thread::spawn(move || {
            let msg = job(service.as_ref());
            sender.send(msg);
        });
    }

    fn report(&self, result: Result<()>) {
        if let Err(e) = result {
            show_notice(&Notice::Error(e.to_string()));
        }
    }

    fn refresh_controls(&mut self) {
        self.toolbar.set_saving(self.save.is_saving());
        self.view.borrow_mut().show_enhance_busy(&self.enhance);
        for action in [RemoteAction::Load, RemoteAction::Reset, RemoteAction::Ping] {
            set_remote_busy(&mut self.menu, action, self.remote.is_busy(action));
        }
    }

    // --- Service flows ---

    fn start_enhance(&mut self, target: EnhanceTarget) {
        let Some(request) = self.enhance.begin(target, self.store.document()) else {
            return;
        };
        self.spawn(move |service| Message::EnhanceFinished(request.execute(service)));
    }

    fn start_save(&mut self) {
        let Some(request) = self.save.begin(&self.store) else {
            return;
        };
        self.spawn(move |service| Message::SaveFinished(request.execute(service)));
    }

    fn start_remote(&mut self, action: RemoteAction) {
        if action == RemoteAction::Reset
            && !confirm("Delete the resume stored on the server?", "Delete")
        {
            return;
        }
        if !self.remote.begin(action) {
            return;
        }
        self.spawn(move |service| Message::RemoteFinished(action.execute(service)));
    }

    // --- Local files ---

    fn upload(&mut self) {
        let directory = self.settings.borrow().last_directory.clone();
        let path = native_open_dialog(&upload_filter(), directory.as_deref());
        if let Some(ref p) = path {
            self.remember_directory(p);
        }
        if let Some(notice) = import_uploaded(path.as_deref(), &mut self.store) {
            self.enhance.document_replaced();
            show_notice(&notice);
        }
    }

    fn open_json(&mut self) {
        let directory = self.settings.borrow().last_directory.clone();
        if let Some(path) = native_open_dialog(&json_filter(), directory.as_deref()) {
            self.remember_directory(&path);
            self.open_json_path(&path);
        }
    }

    /// Replace the document with the contents of a JSON file.
    pub fn open_json_path(&mut self, path: &str) {
        match export::read_json(Path::new(path)) {
            Ok(document) => {
                self.store.replace(document);
                self.enhance.document_replaced();
            }
            Err(e) => {
                log::warn!("Failed to open {}: {}", path, e);
                show_notice(&Notice::Error(format!("Failed to open {}: {}", path, e)));
            }
        }
    }

    fn download(&mut self) {
        let directory = self.settings.borrow().last_directory.clone();
        let Some(path) =
            native_save_dialog(&json_filter(), directory.as_deref(), DEFAULT_EXPORT_NAME)
        else {
            return;
        };
        let path = export::with_json_extension(&path);
        self.remember_directory(&path);
        if let Err(e) = export::write_json(self.store.document(), Path::new(&path)) {
            log::warn!("Failed to write {}: {}", path, e);
            show_notice(&Notice::Error(format!("Failed to download resume: {}", e)));
        }
    }

    fn remember_directory(&mut self, path: &str) {
        let Some(parent) = Path::new(path).parent() else {
            return;
        };
        let dir = parent.to_string_lossy().to_string();
        let mut settings = self.settings.borrow_mut();
        if settings.last_directory.as_deref() == Some(dir.as_str()) {
            return;
        }
        settings.last_directory = Some(dir);
        if let Err(e) = settings.save() {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    // --- Settings ---

    fn open_settings(&mut self) {
        let current = self.settings.borrow().clone();
        if let Some(new_settings) = show_settings_dialog(&current) {
            if let Err(e) = new_settings.save() {
                show_notice(&Notice::Error(format!("Failed to save settings: {}", e)));
                return;
            }
            self.apply_settings(new_settings);
        }
    }

    pub fn apply_settings(&mut self, new_settings: AppSettings) {
        let service =
            HttpResumeService::new(&new_settings.api_url, new_settings.request_timeout_secs);
        log::info!("Resume service set to {}", service.base_url());
        self.service = Arc::new(service);

        let p = palette(new_settings.dark_mode);
        theme::apply_window_theme(&mut self.window, &mut self.menu, &p);
        self.toolbar.apply_theme(&p);
        self.view.borrow_mut().apply_theme(p);
        self.window.redraw();

        *self.settings.borrow_mut() = new_settings;
    }
}
