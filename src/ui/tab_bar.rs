use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    draw,
    enums::{Align, Color, Event, Font},
    prelude::*,
    widget::Widget,
};

use crate::app::document::Document;
use crate::app::messages::Message;

pub const TAB_BAR_HEIGHT: i32 = 30;

const MIN_TAB_WIDTH: i32 = 60;
const MAX_TAB_WIDTH: i32 = 200;
const CLOSE_BTN_SIZE: i32 = 14;
const CLOSE_BTN_MARGIN: i32 = 6;
const TAB_H_PADDING: i32 = 10;
const CORNER_RADIUS: i32 = 6;
const TAB_GAP: i32 = 1;
const PLUS_BTN_WIDTH: i32 = 28;
const PLUS_BTN_MARGIN: i32 = 4;

struct TabInfo {
    display_name: String,
    is_dirty: bool,
    is_active: bool,
}

enum HitResult {
    Tab { index: usize, is_close: bool },
    PlusButton,
    None,
}

struct TabBarState {
    tabs: Vec<TabInfo>,
    tab_width: i32,
    is_dark: bool,
    hover_tab_index: Option<usize>,
    hover_close: bool,
    hover_plus: bool,
    sender: Sender<Message>,
    widget_w: i32,
}

/// Custom-drawn tab strip. Left click activates, the corner glyph or a
/// middle click requests a close, the trailing plus opens a new tab.
pub struct TabBar {
    pub widget: Widget,
    state: Rc<RefCell<TabBarState>>,
}

impl TabBar {
    pub fn new(x: i32, y: i32, w: i32, sender: Sender<Message>) -> Self {
        let state = Rc::new(RefCell::new(TabBarState {
            tabs: Vec::new(),
            tab_width: MAX_TAB_WIDTH,
            is_dark: false,
            hover_tab_index: None,
            hover_close: false,
            hover_plus: false,
            sender,
            widget_w: w,
        }));

        let mut widget = Widget::new(x, y, w, TAB_BAR_HEIGHT, None);

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let st = draw_state.borrow();
            draw_tab_bar(wid, &st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_tab_bar(wid, event, &handle_state));

        Self { widget, state }
    }

    pub fn rebuild(&mut self, documents: &[Document], active: Option<usize>, is_dark: bool) {
        let mut st = self.state.borrow_mut();
        st.is_dark = is_dark;
        st.widget_w = self.widget.w();
        st.tabs.clear();
        for (i, doc) in documents.iter().enumerate() {
            st.tabs.push(TabInfo {
                display_name: doc.display_name.clone(),
                is_dirty: doc.modified,
                is_active: active == Some(i),
            });
        }
        st.hover_tab_index = None;
        st.hover_close = false;
        compute_tab_width(&mut st);
        drop(st);
        self.widget.redraw();
    }

    pub fn apply_theme(&mut self, is_dark: bool) {
        self.state.borrow_mut().is_dark = is_dark;
        self.widget.redraw();
    }
}

fn compute_tab_width(st: &mut TabBarState) {
    let count = st.tabs.len() as i32;
    if count == 0 {
        st.tab_width = MAX_TAB_WIDTH;
        return;
    }
    let fixed = PLUS_BTN_WIDTH + PLUS_BTN_MARGIN + TAB_GAP * (count - 1);
    let available = st.widget_w - fixed;
    st.tab_width = (available / count).clamp(MIN_TAB_WIDTH, MAX_TAB_WIDTH);
}

fn plus_button_x(st: &TabBarState) -> i32 {
    let count = st.tabs.len() as i32;
    count * st.tab_width + count.max(1) * TAB_GAP + PLUS_BTN_MARGIN
}

fn hit_test(st: &TabBarState, wy: i32, mx: i32, my: i32) -> HitResult {
    if my < wy || my >= wy + TAB_BAR_HEIGHT {
        return HitResult::None;
    }

    for index in 0..st.tabs.len() {
        let x = index as i32 * (st.tab_width + TAB_GAP);
        if mx >= x && mx < x + st.tab_width {
            let close_x = x + st.tab_width - CLOSE_BTN_MARGIN - CLOSE_BTN_SIZE;
            let close_y = wy + (TAB_BAR_HEIGHT - CLOSE_BTN_SIZE) / 2;
            let is_close = mx >= close_x
                && mx <= close_x + CLOSE_BTN_SIZE
                && my >= close_y
                && my <= close_y + CLOSE_BTN_SIZE;
            return HitResult::Tab { index, is_close };
        }
    }

    let px = plus_button_x(st);
    if mx >= px && mx < px + PLUS_BTN_WIDTH {
        return HitResult::PlusButton;
    }
    HitResult::None
}

struct BarColors {
    bar_bg: Color,
    active_bg: Color,
    inactive_bg: Color,
    active_text: Color,
    inactive_text: Color,
    close_hover_bg: Color,
}

fn bar_colors(is_dark: bool) -> BarColors {
    if is_dark {
        BarColors {
            bar_bg: Color::from_rgb(25, 25, 25),
            active_bg: Color::from_rgb(50, 50, 50),
            inactive_bg: Color::from_rgb(35, 35, 35),
            active_text: Color::from_rgb(230, 230, 230),
            inactive_text: Color::from_rgb(140, 140, 140),
            close_hover_bg: Color::from_rgb(70, 70, 70),
        }
    } else {
        BarColors {
            bar_bg: Color::from_rgb(200, 200, 200),
            active_bg: Color::from_rgb(255, 255, 255),
            inactive_bg: Color::from_rgb(220, 220, 220),
            active_text: Color::from_rgb(0, 0, 0),
            inactive_text: Color::from_rgb(80, 80, 80),
            close_hover_bg: Color::from_rgb(190, 190, 190),
        }
    }
}

fn truncate_to_fit(text: &str, max_width: i32) -> String {
    if max_width <= 0 {
        return String::new();
    }
    draw::set_font(Font::Helvetica, 12);
    let (tw, _) = draw::measure(text, true);
    if tw <= max_width {
        return text.to_string();
    }

    let ellipsis = "...";
    let (ew, _) = draw::measure(ellipsis, true);
    if ew >= max_width {
        return ellipsis.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    for len in (1..chars.len()).rev() {
        let candidate: String = chars[..len].iter().collect();
        let full = format!("{candidate}{ellipsis}");
        let (fw, _) = draw::measure(&full, true);
        if fw <= max_width {
            return full;
        }
    }
    ellipsis.to_string()
}

fn draw_rounded_top_rect(x: i32, y: i32, w: i32, h: i32, r: i32, color: Color) {
    draw::set_draw_color(color);
    draw::draw_rectf(x, y + r, w, h - r);
    draw::draw_rectf(x + r, y, w - 2 * r, r);
    draw::draw_pie(x, y, 2 * r, 2 * r, 90.0, 180.0);
    draw::draw_pie(x + w - 2 * r, y, 2 * r, 2 * r, 0.0, 90.0);
}

fn draw_tab_bar(wid: &Widget, st: &TabBarState) {
    let wx = wid.x();
    let wy = wid.y();
    let ww = wid.w();
    let wh = wid.h();
    let colors = bar_colors(st.is_dark);

    draw::set_draw_color(colors.bar_bg);
    draw::draw_rectf(wx, wy, ww, wh);

    for (index, tab) in st.tabs.iter().enumerate() {
        let tx = wx + index as i32 * (st.tab_width + TAB_GAP);
        let tab_width = st.tab_width;

        if tab.is_active {
            draw_rounded_top_rect(tx, wy, tab_width, wh, CORNER_RADIUS, colors.active_bg);
        } else {
            draw_rounded_top_rect(tx, wy + 2, tab_width, wh - 2, CORNER_RADIUS, colors.inactive_bg);
        }

        let text_color = if tab.is_active {
            colors.active_text
        } else {
            colors.inactive_text
        };

        let label = if tab.is_dirty {
            format!("\u{25cf} {}", tab.display_name)
        } else {
            tab.display_name.clone()
        };

        let text_area_width =
            tab_width - TAB_H_PADDING - CLOSE_BTN_MARGIN - CLOSE_BTN_SIZE - TAB_H_PADDING;
        let display_text = truncate_to_fit(&label, text_area_width);

        draw::set_draw_color(text_color);
        draw::set_font(Font::Helvetica, 12);
        draw::draw_text(&display_text, tx + TAB_H_PADDING, wy + (wh + 12) / 2);

        let close_x = tx + tab_width - CLOSE_BTN_MARGIN - CLOSE_BTN_SIZE;
        let close_y = wy + (wh - CLOSE_BTN_SIZE) / 2;

        let is_hovered_tab = st.hover_tab_index == Some(index);
        if is_hovered_tab && st.hover_close {
            draw::set_draw_color(colors.close_hover_bg);
            draw::draw_rectf(close_x - 2, close_y - 2, CLOSE_BTN_SIZE + 4, CLOSE_BTN_SIZE + 4);
        }

        let close_color = if tab.is_active || is_hovered_tab {
            text_color
        } else {
            colors.inactive_text
        };
        draw::set_draw_color(close_color);
        draw::set_font(Font::HelveticaBold, 20);
        draw::draw_text2(
            "\u{00d7}",
            close_x,
            close_y,
            CLOSE_BTN_SIZE,
            CLOSE_BTN_SIZE,
            Align::Center,
        );
    }

    // Plus button
    let px = wx + plus_button_x(st);
    let btn_y = wy + 2;
    let btn_h = wh - 4;
    let bg = if st.hover_plus {
        colors.close_hover_bg
    } else {
        colors.inactive_bg
    };
    draw_rounded_top_rect(px, btn_y, PLUS_BTN_WIDTH, btn_h, CORNER_RADIUS, bg);
    draw::set_draw_color(if st.hover_plus {
        colors.active_text
    } else {
        colors.inactive_text
    });
    draw::set_font(Font::HelveticaBold, 16);
    draw::draw_text2("+", px, btn_y, PLUS_BTN_WIDTH, btn_h, Align::Center);
}

fn handle_tab_bar(wid: &mut Widget, event: Event, state: &Rc<RefCell<TabBarState>>) -> bool {
    match event {
        Event::Push => {
            let st = state.borrow();
            let mx = fltk::app::event_x() - wid.x();
            let my = fltk::app::event_y();
            let button = fltk::app::event_button();
            let sender = st.sender;
            let hit = hit_test(&st, wid.y(), mx, my);
            drop(st);

            match hit {
                HitResult::PlusButton if button == 1 => {
                    sender.send(Message::FileNew);
                    true
                }
                HitResult::Tab { index, is_close } => {
                    if button == 2 || (button == 1 && is_close) {
                        sender.send(Message::TabCloseRequest(index));
                    } else if button == 1 {
                        sender.send(Message::TabActivate(index));
                    }
                    true
                }
                _ => false,
            }
        }
        Event::Move => {
            let mut st = state.borrow_mut();
            let mx = fltk::app::event_x() - wid.x();
            let my = fltk::app::event_y();
            let hit = hit_test(&st, wid.y(), mx, my);

            let (hover_tab, hover_close, hover_plus) = match hit {
                HitResult::Tab { index, is_close } => (Some(index), is_close, false),
                HitResult::PlusButton => (None, false, true),
                HitResult::None => (None, false, false),
            };
            let changed = st.hover_tab_index != hover_tab
                || st.hover_close != hover_close
                || st.hover_plus != hover_plus;
            st.hover_tab_index = hover_tab;
            st.hover_close = hover_close;
            st.hover_plus = hover_plus;
            drop(st);
            if changed {
                wid.redraw();
            }
            true
        }
        Event::Leave => {
            let mut st = state.borrow_mut();
            st.hover_tab_index = None;
            st.hover_close = false;
            st.hover_plus = false;
            drop(st);
            wid.redraw();
            true
        }
        Event::Enter => true,
        _ => false,
    }
}
