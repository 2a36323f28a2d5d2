use std::path::PathBuf;

use super::document::DocumentId;
use super::settings::AppSettings;

/// Answer to the save-before-close confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    Save,
    Discard,
    Cancel,
}

/// All messages posted through the FLTK channel. Each UI callback sends one
/// of these; the dispatch loop in main feeds them to the controller.
#[derive(Debug, Clone)]
pub enum Message {
    // Launcher
    LaunchEditor,

    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    OpenFolder,
    FileQuit,

    // Tabs
    TabActivate(usize),
    TabCloseRequest(usize),
    TabCloseActive,
    TabNext,
    TabPrevious,
    CloseResolved(usize, CloseChoice),

    // Folder tree
    TreeOpen(PathBuf),

    // Editor
    ContentChanged(DocumentId),
    EditUndo,
    EditCut,
    EditCopy,
    EditPaste,
    SelectAll,

    // Preview
    PreviewTick,
    RefreshPreview,

    // Settings
    OpenSettings,
    SettingsApplied(AppSettings),
}
