use fltk::enums::Color;
use fltk::prelude::*;

use crate::app::settings::EditorTheme;
use super::main_window::MainWidgets;

/// Widget colors for one editor theme.
pub struct Palette {
    pub window_bg: Color,
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub cursor: Color,
    pub selection: Color,
    pub gutter_bg: Color,
    pub gutter_fg: Color,
    pub chrome_bg: Color,
    pub chrome_fg: Color,
    pub chrome_hover: Color,
    pub accent: Color,
}

pub fn palette(theme: EditorTheme) -> Palette {
    match theme {
        EditorTheme::SilverGold => Palette {
            window_bg: Color::from_rgb(229, 231, 235),
            editor_bg: Color::from_rgb(250, 250, 248),
            editor_fg: Color::from_rgb(40, 40, 40),
            cursor: Color::from_rgb(40, 40, 40),
            selection: Color::from_rgb(255, 236, 170),
            gutter_bg: Color::from_rgb(238, 239, 242),
            gutter_fg: Color::from_rgb(120, 120, 120),
            chrome_bg: Color::from_rgb(214, 216, 222),
            chrome_fg: Color::from_rgb(40, 40, 40),
            chrome_hover: Color::from_rgb(198, 200, 206),
            accent: Color::from_rgb(212, 175, 55),
        },
        EditorTheme::Light => Palette {
            window_bg: Color::from_rgb(240, 240, 240),
            editor_bg: Color::White,
            editor_fg: Color::Black,
            cursor: Color::Black,
            selection: Color::from_rgb(173, 216, 230),
            gutter_bg: Color::from_rgb(240, 240, 240),
            gutter_fg: Color::from_rgb(100, 100, 100),
            chrome_bg: Color::from_rgb(240, 240, 240),
            chrome_fg: Color::Black,
            chrome_hover: Color::from_rgb(200, 200, 200),
            accent: Color::from_rgb(30, 100, 220),
        },
        EditorTheme::Dark => Palette {
            window_bg: Color::from_rgb(25, 25, 25),
            editor_bg: Color::from_rgb(30, 30, 30),
            editor_fg: Color::from_rgb(220, 220, 220),
            cursor: Color::from_rgb(255, 255, 255),
            selection: Color::from_rgb(70, 70, 100),
            gutter_bg: Color::from_rgb(40, 40, 40),
            gutter_fg: Color::from_rgb(150, 150, 150),
            chrome_bg: Color::from_rgb(35, 35, 35),
            chrome_fg: Color::from_rgb(220, 220, 220),
            chrome_hover: Color::from_rgb(60, 60, 60),
            accent: Color::from_rgb(100, 160, 255),
        },
        EditorTheme::HighContrast => Palette {
            window_bg: Color::Black,
            editor_bg: Color::Black,
            editor_fg: Color::White,
            cursor: Color::from_rgb(255, 255, 0),
            selection: Color::from_rgb(0, 0, 180),
            gutter_bg: Color::Black,
            gutter_fg: Color::from_rgb(200, 200, 200),
            chrome_bg: Color::Black,
            chrome_fg: Color::White,
            chrome_hover: Color::from_rgb(80, 80, 80),
            accent: Color::from_rgb(255, 255, 0),
        },
    }
}

pub fn apply_theme(widgets: &mut MainWidgets, theme: EditorTheme) {
    let p = palette(theme);

    widgets.window.set_color(p.window_bg);
    widgets.window.set_label_color(p.chrome_fg);

    widgets.menu.set_color(p.chrome_bg);
    widgets.menu.set_text_color(p.chrome_fg);
    widgets.menu.set_selection_color(p.chrome_hover); // Hover color

    widgets.editor.set_color(p.editor_bg);
    widgets.editor.set_text_color(p.editor_fg);
    widgets.editor.set_cursor_color(p.cursor);
    widgets.editor.set_selection_color(p.selection);
    widgets.editor.set_linenumber_bgcolor(p.gutter_bg);
    widgets.editor.set_linenumber_fgcolor(p.gutter_fg);

    widgets.tree.set_color(p.editor_bg);
    widgets.tree.set_selection_color(p.accent);

    widgets.preview.set_color(p.editor_bg);

    widgets.status.set_color(p.chrome_bg);
    widgets.status.set_label_color(p.chrome_fg);

    widgets.tab_bar.apply_theme(theme.is_dark());

    widgets.window.redraw();
}
