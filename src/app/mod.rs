//! Application layer: everything that runs without touching a widget.
//!
//! - `tab_manager` / `document` - the tab lifecycle and per-tab records
//! - `controller` - message handlers returning side-effect lists
//! - `gateway` - file dialogs and disk I/O behind a trait
//! - `preview` - debounced HTML snapshot rendering
//! - `highlight` - syntect-backed style strings for the editor widget
//! - `auth`, `settings`, `language`, `error` - supporting pieces

pub mod auth;
pub mod buffer;
pub mod controller;
pub mod document;
pub mod editor_buffer;
pub mod error;
pub mod gateway;
pub mod highlight;
pub mod language;
pub mod messages;
pub mod preview;
pub mod settings;
pub mod tab_manager;

pub use buffer::{BufferFactory, BufferHandle, MemoryBuffer, MemoryBufferFactory};
pub use controller::{Effect, EditorController, Notice, NoticeLevel, WELCOME_HTML};
pub use document::{Document, DocumentId};
pub use editor_buffer::{buffer_text_no_leak, WidgetBuffer, WidgetBufferFactory};
pub use error::AppError;
pub use gateway::{DirEntry, FileGateway, NativeGateway, OpenedFile};
pub use highlight::HighlightEngine;
pub use language::Language;
pub use messages::{CloseChoice, Message};
pub use preview::PreviewRenderer;
pub use settings::{AppSettings, EditorTheme};
pub use tab_manager::TabManager;
