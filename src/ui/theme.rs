use fltk::{
    button::Button,
    enums::{Color, FrameType},
    frame::Frame,
    input::{Input, MultilineInput},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub field: Color,
    pub text: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub danger: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            background: Color::from_rgb(30, 41, 59), // slate
            panel: Color::from_rgb(31, 41, 55),
            field: Color::from_rgb(17, 24, 39),
            text: Color::from_rgb(240, 240, 240),
            accent: Color::from_rgb(56, 189, 248), // sky
            on_accent: Color::from_rgb(30, 41, 59),
            danger: Color::from_rgb(239, 68, 68),
        }
    } else {
        Palette {
            background: Color::from_rgb(240, 240, 240),
            panel: Color::White,
            field: Color::White,
            text: Color::Black,
            accent: Color::from_rgb(2, 132, 199),
            on_accent: Color::White,
            danger: Color::from_rgb(220, 38, 38),
        }
    }
}

pub fn style_input(input: &mut Input, p: &Palette) {
    input.set_color(p.field);
    input.set_text_color(p.text);
    input.set_cursor_color(p.text);
    input.set_selection_color(p.accent);
}

pub fn style_multiline(input: &mut MultilineInput, p: &Palette) {
    input.set_color(p.field);
    input.set_text_color(p.text);
    input.set_cursor_color(p.text);
    input.set_selection_color(p.accent);
}

pub fn style_accent_button(button: &mut Button, p: &Palette) {
    button.set_frame(FrameType::FlatBox);
    button.set_color(p.accent);
    button.set_label_color(p.on_accent);
}

pub fn style_danger_button(button: &mut Button, p: &Palette) {
    button.set_frame(FrameType::FlatBox);
    button.set_color(p.danger);
    button.set_label_color(Color::White);
}

pub fn style_heading(frame: &mut Frame, p: &Palette) {
    frame.set_label_color(p.accent);
}

pub fn apply_window_theme(window: &mut Window, menu: &mut MenuBar, p: &Palette) {
    window.set_color(p.background);
    window.set_label_color(p.text);
    menu.set_color(p.panel);
    menu.set_text_color(p.text);
    menu.set_selection_color(p.accent);
    window.redraw();
    menu.redraw();
}
