use fltk::{
    button::{Button, CheckButton, RadioRoundButton},
    enums::Align,
    frame::Frame,
    group::Group,
    menu::Choice,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::settings::{AppSettings, EditorTheme};

/// Show the settings dialog and return updated settings if the user saved.
pub fn show_settings_dialog(current: &AppSettings) -> Option<AppSettings> {
    let mut dialog = Window::default()
        .with_size(350, 520)
        .with_label("Settings")
        .center_screen();
    dialog.make_modal(true);

    // Theme section
    Frame::default().with_pos(15, 15).with_size(320, 25).with_label("Theme:").with_align(Align::Left | Align::Inside);
    let mut theme_choice = Choice::default().with_pos(30, 45).with_size(280, 25);
    for theme in EditorTheme::all() {
        theme_choice.add_choice(theme.display_name());
    }
    theme_choice.set_value(theme_index(current.theme));

    // Font size section
    Frame::default().with_pos(15, 85).with_size(320, 25).with_label("Font Size:").with_align(Align::Left | Align::Inside);
    let size_group = Group::default().with_pos(30, 115).with_size(280, 75);
    let mut size_12 = RadioRoundButton::default().with_pos(30, 115).with_size(280, 25).with_label("Small (12)");
    let mut size_14 = RadioRoundButton::default().with_pos(30, 140).with_size(280, 25).with_label("Medium (14)");
    let mut size_18 = RadioRoundButton::default().with_pos(30, 165).with_size(280, 25).with_label("Large (18)");
    size_group.end();

    match current.font_size {
        12 => size_12.set_value(true),
        18 => size_18.set_value(true),
        _ => size_14.set_value(true),
    }

    // Tab size section
    Frame::default().with_pos(15, 200).with_size(320, 25).with_label("Tab Size:").with_align(Align::Left | Align::Inside);
    let tab_group = Group::default().with_pos(30, 230).with_size(280, 75);
    let mut tab_2 = RadioRoundButton::default().with_pos(30, 230).with_size(280, 25).with_label("2 spaces");
    let mut tab_4 = RadioRoundButton::default().with_pos(30, 255).with_size(280, 25).with_label("4 spaces");
    let mut tab_8 = RadioRoundButton::default().with_pos(30, 280).with_size(280, 25).with_label("8 spaces");
    tab_group.end();

    match current.tab_size {
        4 => tab_4.set_value(true),
        8 => tab_8.set_value(true),
        _ => tab_2.set_value(true),
    }

    // Editor options section
    Frame::default().with_pos(15, 315).with_size(320, 25).with_label("Editor Options:").with_align(Align::Left | Align::Inside);
    let mut check_word_wrap = CheckButton::default().with_pos(30, 345).with_size(280, 25).with_label("Word Wrap");
    let mut check_line_numbers = CheckButton::default().with_pos(30, 370).with_size(280, 25).with_label("Show Line Numbers");
    let mut check_minimap = CheckButton::default().with_pos(30, 395).with_size(280, 25).with_label("Show Minimap");
    let mut check_auto_save = CheckButton::default().with_pos(30, 420).with_size(280, 25).with_label("Auto Save");

    check_word_wrap.set_value(current.word_wrap);
    check_line_numbers.set_value(current.line_numbers);
    check_minimap.set_value(current.minimap);
    check_auto_save.set_value(current.auto_save);

    // Buttons at bottom
    let mut save_btn = Button::default().with_pos(150, 470).with_size(90, 30).with_label("Save");
    let mut cancel_btn = Button::default().with_pos(250, 470).with_size(90, 30).with_label("Cancel");

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));
    let result_save = result.clone();
    let result_cancel = result.clone();

    let dialog_save = dialog.clone();
    let current_theme = current.theme;
    save_btn.set_callback(move |_| {
        let new_settings = AppSettings {
            theme: index_to_theme(theme_choice.value()).unwrap_or(current_theme),
            font_size: if size_12.value() {
                12
            } else if size_18.value() {
                18
            } else {
                14
            },
            tab_size: if tab_4.value() {
                4
            } else if tab_8.value() {
                8
            } else {
                2
            },
            word_wrap: check_word_wrap.value(),
            line_numbers: check_line_numbers.value(),
            minimap: check_minimap.value(),
            auto_save: check_auto_save.value(),
        };

        *result_save.borrow_mut() = Some(new_settings);
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        *result_cancel.borrow_mut() = None;
        dialog_cancel.clone().hide();
    });

    let result_close = result.clone();
    dialog.set_callback(move |w| {
        *result_close.borrow_mut() = None;
        w.hide();
    });

    super::run_dialog(&dialog);

    let out = result.borrow().clone();
    out
}

/// Convert EditorTheme to dropdown index
fn theme_index(theme: EditorTheme) -> i32 {
    EditorTheme::all()
        .iter()
        .position(|t| *t == theme)
        .map(|i| i as i32)
        .unwrap_or(0)
}

/// Convert dropdown index to EditorTheme
fn index_to_theme(index: i32) -> Option<EditorTheme> {
    if index < 0 {
        return None;
    }
    EditorTheme::all().get(index as usize).copied()
}
