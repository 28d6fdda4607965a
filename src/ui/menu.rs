use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::controllers::enhance::EnhanceTarget;
use crate::app::controllers::remote::RemoteAction;
use crate::app::domain::messages::Message;

const LOAD_PATH: &str = "Server/Load Saved Resume";
const RESET_PATH: &str = "Server/Reset Saved Resume...";
const PING_PATH: &str = "Server/Check Connection";

fn remote_path(action: RemoteAction) -> &'static str {
    match action {
        RemoteAction::Load => LOAD_PATH,
        RemoteAction::Reset => RESET_PATH,
        RemoteAction::Ping => PING_PATH,
    }
}

/// Grey out a server action's menu item while its request is running.
pub fn set_remote_busy(menu: &mut MenuBar, action: RemoteAction, busy: bool) {
    let idx = menu.find_index(remote_path(action));
    if idx < 0 {
        return;
    }
    if let Some(mut item) = menu.at(idx) {
        if busy == item.active() {
            if busy {
                item.deactivate();
            } else {
                item.activate();
            }
            menu.redraw();
        }
    }
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Upload Resume...", Shortcut::Ctrl | 'u', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Upload) });
    menu.add("File/Open JSON...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenJson) });
    menu.add("File/Download JSON...", Shortcut::Ctrl | 'd', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::Download) });
    menu.add("File/Settings...", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::OpenSettings) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Add Experience", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::AddExperience) });
    menu.add("Edit/Add Education", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::AddEducation) });
    menu.add("Edit/Add Skill", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::AddSkill) });
    menu.add("Edit/Enhance Summary with AI", Shortcut::Ctrl | 'e', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Enhance(EnhanceTarget::Summary)) });

    // Server
    menu.add("Server/Save Resume", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Save) });
    menu.add(LOAD_PATH, Shortcut::Ctrl | 'l', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Remote(RemoteAction::Load)) });
    menu.add(RESET_PATH, Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::Remote(RemoteAction::Reset)) });
    menu.add(PING_PATH, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Remote(RemoteAction::Ping)) });

    // Help
    menu.add("Help/About Resume Editor", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

#[cfg(test)]
mod tests {
    use super::*;
    use fltk::app;

    #[test]
    #[ignore = "Requires the FLTK runtime"]
    fn test_remote_items_grey_out_while_busy() {
        let _app = app::App::default();
        let (sender, _receiver) = app::channel::<Message>();
        let mut menu = MenuBar::new(0, 0, 400, 30, None);
        build_menu(&mut menu, &sender);

        set_remote_busy(&mut menu, RemoteAction::Load, true);
        let load = menu.at(menu.find_index(LOAD_PATH)).unwrap();
        assert!(!load.active());
        let ping = menu.at(menu.find_index(PING_PATH)).unwrap();
        assert!(ping.active());

        set_remote_busy(&mut menu, RemoteAction::Load, false);
        let load = menu.at(menu.find_index(LOAD_PATH)).unwrap();
        assert!(load.active());
    }
}
