//! FLTK widget layer. Callbacks only post [`crate::app::Message`]s; all
//! decisions live in the app layer.

pub mod dialogs;
pub mod file_dialogs;
pub mod file_tree;
pub mod launcher;
pub mod main_window;
pub mod menu;
pub mod notification;
pub mod preview_pane;
pub mod tab_bar;
pub mod theme;
