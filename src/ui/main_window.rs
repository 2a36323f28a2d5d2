use fltk::{
    app::Sender,
    browser::HoldBrowser,
    enums::{Align, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::messages::Message;
use super::tab_bar::{TabBar, TAB_BAR_HEIGHT};

pub const MENU_HEIGHT: i32 = 30;
pub const BANNER_HEIGHT: i32 = 24;
pub const STATUS_HEIGHT: i32 = 24;
pub const TREE_WIDTH: i32 = 220;
pub const PREVIEW_WIDTH: i32 = 420;

pub struct MainWidgets {
    pub window: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub tab_bar: TabBar,
    pub banner: Frame,
    pub middle: Flex,
    pub tree: HoldBrowser,
    pub editor: TextEditor,
    pub preview: HelpView,
    pub status: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut window = Window::new(100, 100, 1280, 860, "CodeVault");
    window.set_xclass("CodeVault");

    let mut flex = Flex::new(0, 0, 1280, 860, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let tab_bar = TabBar::new(0, MENU_HEIGHT, 1280, *sender);
    flex.fixed(&tab_bar.widget, TAB_BAR_HEIGHT);

    // Notification banner (initially hidden, zero height)
    let mut banner = Frame::default().with_size(0, 0);
    banner.set_frame(FrameType::FlatBox);
    banner.set_label_size(13);
    banner.hide();
    flex.fixed(&banner, 0);

    // Middle row: folder tree | editor | preview
    let mut middle = Flex::default();
    middle.set_type(FlexType::Row);

    let tree = HoldBrowser::default();
    middle.fixed(&tree, TREE_WIDTH);

    let mut editor = TextEditor::default();
    editor.set_buffer(TextBuffer::default());
    editor.set_linenumber_width(40);

    let mut preview = HelpView::default();
    preview.set_text_size(14);
    middle.fixed(&preview, PREVIEW_WIDTH);

    middle.end();

    let mut status = Frame::default();
    status.set_frame(FrameType::FlatBox);
    status.set_align(Align::Left | Align::Inside);
    status.set_label_size(12);
    flex.fixed(&status, STATUS_HEIGHT);

    flex.end();
    window.resizable(&flex);
    window.end();

    MainWidgets {
        window,
        flex,
        menu,
        tab_bar,
        banner,
        middle,
        tree,
        editor,
        preview,
        status,
    }
}
