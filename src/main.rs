use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, prelude::*};

use resume_editor::app::domain::messages::Message;
use resume_editor::app::domain::settings::AppSettings;
use resume_editor::app::infrastructure::logging::init_logging;
use resume_editor::app::state::AppState;
use resume_editor::ui::main_window::build_main_window;
use resume_editor::ui::menu::build_menu;
use resume_editor::ui::theme::{apply_window_theme, palette};

fn main() {
    init_logging();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let p = palette(settings.dark_mode);
    log::info!("Using resume service at {}", settings.api_url);

    let mut widgets = build_main_window(&sender, p);
    build_menu(&mut widgets.menu, &sender);
    apply_window_theme(&mut widgets.wind, &mut widgets.menu, &p);

    let mut state = AppState::new(
        widgets.view,
        widgets.toolbar,
        widgets.wind,
        widgets.menu,
        sender,
        Rc::new(RefCell::new(settings)),
    );

    // A JSON file given on the command line replaces the demo resume
    if let Some(path) = std::env::args().nth(1) {
        state.open_json_path(&path);
    }

    state.window.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle(msg) {
                app.quit();
            }
        }
    }
}
