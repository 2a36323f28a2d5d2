use std::path::PathBuf;
use std::time::Instant;

use super::buffer::BufferFactory;
use super::error::AppError;
use super::gateway::{DirEntry, FileGateway};
use super::language::Language;
use super::messages::{CloseChoice, Message};
use super::preview::PreviewRenderer;
use super::settings::AppSettings;
use super::tab_manager::TabManager;

/// Severity of a transient notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, text: text.into() }
    }
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }
    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, text: text.into() }
    }
    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }
}

/// Side effects the widget layer must apply after a message is handled.
/// The controller itself never touches a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Bind the active tab's buffer and language to the editor widget.
    BindActiveTab,
    RefreshTabStrip,
    RefreshFileTree,
    UpdateTitle,
    /// Load this snapshot file into the preview pane.
    LoadPreview(PathBuf),
    Notify(Notice),
    /// Ask the user whether to save before closing; the answer comes back
    /// as `Message::CloseResolved`.
    ConfirmClose { index: usize, name: String },
    OpenSettingsDialog,
    /// Re-apply editor options (theme, font, wrap, line numbers).
    ApplySettings,
    Quit,
}

/// Content of the seeded tab shown after unlocking the editor.
pub const WELCOME_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>Welcome to CodeVault</title>
</head>
<body>
  <h1>Welcome to CodeVault</h1>
  <p>You have unlocked the editor.</p>
  <ul>
    <li><b>Ctrl+N</b> &mdash; new file</li>
    <li><b>Ctrl+O</b> &mdash; open files</li>
    <li><b>Ctrl+Shift+O</b> &mdash; open a folder</li>
    <li><b>Ctrl+S</b> &mdash; save</li>
  </ul>
  <p>Edit this HTML and watch the preview pane follow along.</p>
</body>
</html>
"#;

/// Binds user input to tab, gateway and preview operations.
///
/// Every handler runs to completion on the UI thread and returns the side
/// effects for the widget layer, so the whole flow is testable without a
/// live UI. Gateway failures leave tab state untouched.
pub struct EditorController {
    pub tabs: TabManager,
    gateway: Box<dyn FileGateway>,
    pub settings: AppSettings,
    pub folder: Option<PathBuf>,
    pub entries: Vec<DirEntry>,
    preview: PreviewRenderer,
}

impl EditorController {
    pub fn new(
        gateway: Box<dyn FileGateway>,
        factory: Box<dyn BufferFactory>,
        settings: AppSettings,
        preview: PreviewRenderer,
    ) -> Self {
        Self {
            tabs: TabManager::new(factory),
            gateway,
            settings,
            folder: None,
            entries: Vec::new(),
            preview,
        }
    }

    pub fn handle(&mut self, msg: Message) -> Vec<Effect> {
        self.handle_at(msg, Instant::now())
    }

    pub fn handle_at(&mut self, msg: Message, now: Instant) -> Vec<Effect> {
        match msg {
            Message::LaunchEditor => self.launch(now),
            Message::FileNew => {
                self.tabs.open_untitled();
                let mut fx = self.after_activation(now);
                fx.push(Effect::Notify(Notice::success("New file created")));
                fx
            }
            Message::FileOpen => self.open_files(now),
            Message::FileSave => match self.tabs.active_index() {
                Some(index) => self.save_tab(index, now).0,
                None => Vec::new(),
            },
            Message::FileSaveAs => match self.tabs.active_index() {
                Some(index) => self.save_tab_as(index, now).0,
                None => Vec::new(),
            },
            Message::OpenFolder => self.open_folder(),
            Message::TreeOpen(path) => self.open_from_tree(path, now),
            Message::TabActivate(index) => {
                self.tabs.set_active(index);
                self.after_activation(now)
            }
            Message::TabNext => match self.tabs.next_index() {
                Some(index) => {
                    self.tabs.set_active(index);
                    self.after_activation(now)
                }
                None => Vec::new(),
            },
            Message::TabPrevious => match self.tabs.prev_index() {
                Some(index) => {
                    self.tabs.set_active(index);
                    self.after_activation(now)
                }
                None => Vec::new(),
            },
            Message::TabCloseRequest(index) => self.request_close(index, now),
            Message::TabCloseActive => match self.tabs.active_index() {
                Some(index) => self.request_close(index, now),
                None => Vec::new(),
            },
            Message::CloseResolved(index, choice) => self.resolve_close(index, choice, now),
            Message::ContentChanged(id) => self.content_changed(id, now),
            Message::PreviewTick => self.tick(now),
            Message::RefreshPreview => self.render_active(now),
            Message::OpenSettings => vec![Effect::OpenSettingsDialog],
            Message::SettingsApplied(settings) => self.apply_settings(settings),
            Message::FileQuit => vec![Effect::Quit],
            // Clipboard/undo act directly on the editor widget in main
            Message::EditUndo
            | Message::EditCut
            | Message::EditCopy
            | Message::EditPaste
            | Message::SelectAll => Vec::new(),
        }
    }

    pub fn preview_mut(&mut self) -> &mut PreviewRenderer {
        &mut self.preview
    }

    fn launch(&mut self, now: Instant) -> Vec<Effect> {
        let index = self.tabs.open_or_activate(None, WELCOME_HTML, Some(Language::Html));
        self.tabs.set_display_name(index, "welcome.html");
        let mut fx = self.after_activation(now);
        fx.push(Effect::Notify(Notice::success("Welcome to CodeVault!")));
        fx
    }

    /// Effects common to every activation: rebind the widget, redraw the tab
    /// strip and title, and render the preview immediately.
    fn after_activation(&mut self, now: Instant) -> Vec<Effect> {
        let mut fx = vec![
            Effect::BindActiveTab,
            Effect::RefreshTabStrip,
            Effect::UpdateTitle,
        ];
        fx.extend(self.render_active(now));
        fx
    }

    fn open_files(&mut self, now: Instant) -> Vec<Effect> {
        match self.gateway.pick_open() {
            Ok(Some(files)) => {
                let count = files.len();
                for file in files {
                    self.tabs.open_or_activate(Some(file.path), &file.content, None);
                }
                let mut fx = self.after_activation(now);
                fx.push(Effect::Notify(Notice::success(format!(
                    "Opened {} file(s)",
                    count
                ))));
                fx
            }
            Ok(None) => Vec::new(),
            Err(e) => self.notify_err(e),
        }
    }

    fn open_folder(&mut self) -> Vec<Effect> {
        let Some(path) = self.gateway.pick_folder() else {
            return Vec::new();
        };
        match self.gateway.list_dir(&path) {
            Ok(entries) => {
                self.folder = Some(path);
                self.entries = entries;
                vec![
                    Effect::RefreshFileTree,
                    Effect::Notify(Notice::success("Folder opened")),
                ]
            }
            Err(e) => self.notify_err(e),
        }
    }

    fn open_from_tree(&mut self, path: PathBuf, now: Instant) -> Vec<Effect> {
        // Pure activation when the file is already open, no reload
        if let Some(index) = self.tabs.find_by_path(&path) {
            self.tabs.set_active(index);
            return self.after_activation(now);
        }
        match self.gateway.read(&path) {
            Ok(content) => {
                let name = super::document::extract_filename(&path);
                self.tabs.open_or_activate(Some(path), &content, None);
                let mut fx = self.after_activation(now);
                fx.push(Effect::Notify(Notice::success(format!("Opened {}", name))));
                fx
            }
            Err(e) => self.notify_err(e),
        }
    }

    /// Save a tab in place, falling back to save-as for untitled tabs.
    /// The bool reports whether the record is clean afterwards.
    fn save_tab(&mut self, index: usize, now: Instant) -> (Vec<Effect>, bool) {
        let (path, content) = match self.tabs.get(index) {
            Some(doc) => match &doc.path {
                Some(path) => (path.clone(), doc.buffer.contents()),
                None => return self.save_tab_as(index, now),
            },
            None => return (Vec::new(), false),
        };

        match self.gateway.write(&path, &content) {
            Ok(()) => {
                self.tabs.clear_modified(index);
                let name = self.tabs.get(index).map(|d| d.display_name.clone()).unwrap_or_default();
                (
                    vec![
                        Effect::RefreshTabStrip,
                        Effect::UpdateTitle,
                        Effect::Notify(Notice::success(format!("Saved {}", name))),
                    ],
                    true,
                )
            }
            Err(e) => (self.notify_err(e), false),
        }
    }

    fn save_tab_as(&mut self, index: usize, now: Instant) -> (Vec<Effect>, bool) {
        let content = match self.tabs.get(index) {
            Some(doc) => doc.buffer.contents(),
            None => return (Vec::new(), false),
        };
        let Some(path) = self.gateway.pick_save() else {
            // Cancellation is silent
            return (Vec::new(), false);
        };

        match self.gateway.write(&path, &content) {
            Ok(()) => {
                self.tabs.rename_after_save_as(index, path);
                let name = self.tabs.get(index).map(|d| d.display_name.clone()).unwrap_or_default();
                // Language may have changed, so rebind and re-render
                let mut fx = self.after_activation(now);
                fx.push(Effect::Notify(Notice::success(format!("Saved as {}", name))));
                (fx, true)
            }
            Err(e) => (self.notify_err(e), false),
        }
    }

    fn request_close(&mut self, index: usize, now: Instant) -> Vec<Effect> {
        match self.tabs.get(index) {
            Some(doc) if doc.modified => vec![Effect::ConfirmClose {
                index,
                name: doc.display_name.clone(),
            }],
            Some(_) => self.close_now(index, now),
            None => Vec::new(),
        }
    }

    fn resolve_close(&mut self, index: usize, choice: CloseChoice, now: Instant) -> Vec<Effect> {
        match choice {
            CloseChoice::Cancel => Vec::new(),
            CloseChoice::Discard => self.close_now(index, now),
            CloseChoice::Save => {
                let (mut fx, saved) = self.save_tab(index, now);
                if saved {
                    fx.extend(self.close_now(index, now));
                }
                fx
            }
        }
    }

    fn close_now(&mut self, index: usize, now: Instant) -> Vec<Effect> {
        self.tabs.close(index);
        self.after_activation(now)
    }

    fn content_changed(&mut self, id: super::document::DocumentId, now: Instant) -> Vec<Effect> {
        let Some(index) = self.tabs.index_of(id) else {
            return Vec::new();
        };
        self.tabs.mark_modified(index);
        if self.tabs.active_index() == Some(index) {
            if let Some(doc) = self.tabs.get(index) {
                if doc.language.is_previewable() {
                    self.preview.note_change(now);
                }
            }
        }
        vec![Effect::RefreshTabStrip, Effect::UpdateTitle]
    }

    fn tick(&mut self, now: Instant) -> Vec<Effect> {
        self.preview.sweep(now);
        if self.preview.take_due(now) {
            self.render_active(now)
        } else {
            Vec::new()
        }
    }

    /// Render the active tab into the preview pane if it is previewable.
    /// Other languages keep the last good preview untouched.
    fn render_active(&mut self, now: Instant) -> Vec<Effect> {
        let html = match self.tabs.active() {
            Some(doc) if doc.language.is_previewable() => doc.buffer.contents(),
            _ => return Vec::new(),
        };
        match self.preview.render(&html, now) {
            Ok(path) => vec![Effect::LoadPreview(path)],
            Err(e) => {
                log::warn!("preview snapshot failed: {}", e);
                Vec::new()
            }
        }
    }

    fn apply_settings(&mut self, settings: AppSettings) -> Vec<Effect> {
        self.settings = settings;
        let mut fx = Vec::new();
        if let Err(e) = self.settings.save() {
            fx.push(Effect::Notify(Notice::error(format!(
                "Failed to save settings: {}",
                e
            ))));
        }
        fx.push(Effect::ApplySettings);
        fx
    }

    fn notify_err(&self, err: AppError) -> Vec<Effect> {
        if err.is_silent() {
            Vec::new()
        } else {
            vec![Effect::Notify(Notice::error(err.to_string()))]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::buffer::MemoryBufferFactory;
    use crate::app::gateway::OpenedFile;
    use std::collections::{HashMap, VecDeque};
    use std::path::Path;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Gateway with scripted dialog answers and an in-memory file store.
    #[derive(Default)]
    struct ScriptedGateway {
        open_results: VecDeque<Option<Vec<OpenedFile>>>,
        save_paths: VecDeque<Option<PathBuf>>,
        folder_paths: VecDeque<Option<PathBuf>>,
        files: HashMap<PathBuf, String>,
        listings: HashMap<PathBuf, Vec<DirEntry>>,
        fail_writes: bool,
        reads: usize,
    }

    impl FileGateway for ScriptedGateway {
        fn pick_open(&mut self) -> Result<Option<Vec<OpenedFile>>, AppError> {
            Ok(self.open_results.pop_front().unwrap_or(None))
        }

        fn pick_save(&mut self) -> Option<PathBuf> {
            self.save_paths.pop_front().unwrap_or(None)
        }

        fn pick_folder(&mut self) -> Option<PathBuf> {
            self.folder_paths.pop_front().unwrap_or(None)
        }

        fn read(&mut self, path: &Path) -> Result<String, AppError> {
            self.reads += 1;
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| AppError::NotFound(path.display().to_string()))
        }

        fn write(&mut self, path: &Path, text: &str) -> Result<(), AppError> {
            if self.fail_writes {
                return Err(AppError::AccessDenied(path.display().to_string()));
            }
            self.files.insert(path.to_path_buf(), text.to_string());
            Ok(())
        }

        fn list_dir(&mut self, path: &Path) -> Result<Vec<DirEntry>, AppError> {
            self.listings
                .get(path)
                .cloned()
                .ok_or_else(|| AppError::NotFound(path.display().to_string()))
        }
    }

    struct Fixture {
        controller: EditorController,
        _dir: TempDir,
        t0: Instant,
    }

    fn fixture(gateway: ScriptedGateway) -> Fixture {
        let dir = TempDir::new().unwrap();
        let preview = PreviewRenderer::with_dir(
            dir.path().to_path_buf(),
            Duration::from_millis(500),
            Duration::from_secs(10),
        );
        Fixture {
            controller: EditorController::new(
                Box::new(gateway),
                Box::new(MemoryBufferFactory),
                AppSettings::default(),
                preview,
            ),
            _dir: dir,
            t0: Instant::now(),
        }
    }

    fn has_preview(fx: &[Effect]) -> bool {
        fx.iter().any(|e| matches!(e, Effect::LoadPreview(_)))
    }

    #[test]
    fn test_launch_seeds_welcome_tab_with_preview() {
        let mut f = fixture(ScriptedGateway::default());
        let fx = f.controller.handle_at(Message::LaunchEditor, f.t0);

        assert_eq!(f.controller.tabs.count(), 1);
        let doc = f.controller.tabs.active().unwrap();
        assert_eq!(doc.display_name, "welcome.html");
        assert_eq!(doc.language, Language::Html);
        assert!(doc.path.is_none());
        assert!(fx.contains(&Effect::BindActiveTab));
        assert!(has_preview(&fx));
    }

    #[test]
    fn test_open_same_path_twice_keeps_one_tab() {
        let mut gw = ScriptedGateway::default();
        let file = || OpenedFile {
            path: PathBuf::from("a.html"),
            content: "<p>x</p>".to_string(),
        };
        gw.open_results.push_back(Some(vec![file()]));
        gw.open_results.push_back(Some(vec![file()]));
        let mut f = fixture(gw);

        f.controller.handle_at(Message::FileOpen, f.t0);
        f.controller.handle_at(Message::FileOpen, f.t0);

        assert_eq!(f.controller.tabs.count(), 1);
        let doc = f.controller.tabs.active().unwrap();
        assert_eq!(doc.path.as_deref(), Some(Path::new("a.html")));
    }

    #[test]
    fn test_open_cancel_is_silent() {
        let mut gw = ScriptedGateway::default();
        gw.open_results.push_back(None);
        let mut f = fixture(gw);
        let fx = f.controller.handle_at(Message::FileOpen, f.t0);
        assert!(fx.is_empty());
        assert_eq!(f.controller.tabs.count(), 0);
    }

    #[test]
    fn test_save_as_renames_record() {
        let mut gw = ScriptedGateway::default();
        gw.save_paths.push_back(Some(PathBuf::from("out.css")));
        let mut f = fixture(gw);

        f.controller.handle_at(Message::FileNew, f.t0);
        let id = {
            let doc = f.controller.tabs.active_mut().unwrap();
            doc.buffer.set_contents("body { color: gold; }");
            doc.id
        };
        f.controller.handle_at(Message::ContentChanged(id), f.t0);
        assert!(f.controller.tabs.active().unwrap().modified);

        f.controller.handle_at(Message::FileSaveAs, f.t0);

        let doc = f.controller.tabs.active().unwrap();
        assert_eq!(doc.path.as_deref(), Some(Path::new("out.css")));
        assert_eq!(doc.language, Language::Css);
        assert_eq!(doc.display_name, "out.css");
        assert!(!doc.modified);
    }

    #[test]
    fn test_save_as_cancel_keeps_state() {
        let gw = ScriptedGateway::default();
        let mut f = fixture(gw);
        f.controller.handle_at(Message::FileNew, f.t0);
        let id = f.controller.tabs.active().unwrap().id;
        f.controller.handle_at(Message::ContentChanged(id), f.t0);

        let fx = f.controller.handle_at(Message::FileSaveAs, f.t0);
        assert!(fx.is_empty());
        assert!(f.controller.tabs.active().unwrap().modified);
        assert!(f.controller.tabs.active().unwrap().path.is_none());
    }

    #[test]
    fn test_save_failure_leaves_state_unchanged() {
        let mut gw = ScriptedGateway::default();
        gw.open_results.push_back(Some(vec![OpenedFile {
            path: PathBuf::from("a.txt"),
            content: "v1".to_string(),
        }]));
        gw.fail_writes = true;
        let mut f = fixture(gw);

        f.controller.handle_at(Message::FileOpen, f.t0);
        let id = f.controller.tabs.active().unwrap().id;
        f.controller.handle_at(Message::ContentChanged(id), f.t0);

        let fx = f.controller.handle_at(Message::FileSave, f.t0);
        assert!(fx
            .iter()
            .any(|e| matches!(e, Effect::Notify(n) if n.level == NoticeLevel::Error)));
        assert!(f.controller.tabs.active().unwrap().modified);
    }

    #[test]
    fn test_close_clean_tab_needs_no_confirmation() {
        let mut gw = ScriptedGateway::default();
        gw.open_results.push_back(Some(vec![OpenedFile {
            path: PathBuf::from("a.txt"),
            content: "".to_string(),
        }]));
        let mut f = fixture(gw);
        f.controller.handle_at(Message::FileOpen, f.t0);

        let fx = f.controller.handle_at(Message::TabCloseRequest(0), f.t0);
        assert!(!fx.iter().any(|e| matches!(e, Effect::ConfirmClose { .. })));
        // Sole tab closed: a fresh untitled one takes its place
        assert_eq!(f.controller.tabs.count(), 1);
        assert!(f.controller.tabs.active().unwrap().path.is_none());
    }

    #[test]
    fn test_close_modified_tab_asks_first() {
        let mut gw = ScriptedGateway::default();
        gw.open_results.push_back(Some(vec![OpenedFile {
            path: PathBuf::from("a.txt"),
            content: "v1".to_string(),
        }]));
        let mut f = fixture(gw);
        f.controller.handle_at(Message::FileOpen, f.t0);
        let id = f.controller.tabs.active().unwrap().id;
        f.controller.handle_at(Message::ContentChanged(id), f.t0);

        let fx = f.controller.handle_at(Message::TabCloseRequest(0), f.t0);
        assert_eq!(
            fx,
            vec![Effect::ConfirmClose { index: 0, name: "a.txt".to_string() }]
        );
        // Nothing closed yet
        assert_eq!(f.controller.tabs.active().unwrap().path.as_deref(), Some(Path::new("a.txt")));
    }

    #[test]
    fn test_close_cancel_keeps_tab_open_and_modified() {
        let mut gw = ScriptedGateway::default();
        gw.open_results.push_back(Some(vec![OpenedFile {
            path: PathBuf::from("a.txt"),
            content: "v1".to_string(),
        }]));
        let mut f = fixture(gw);
        f.controller.handle_at(Message::FileOpen, f.t0);
        let id = f.controller.tabs.active().unwrap().id;
        f.controller.handle_at(Message::ContentChanged(id), f.t0);

        let fx = f
            .controller
            .handle_at(Message::CloseResolved(0, CloseChoice::Cancel), f.t0);
        assert!(fx.is_empty());
        assert_eq!(f.controller.tabs.count(), 1);
        assert!(f.controller.tabs.active().unwrap().modified);
    }

    #[test]
    fn test_close_discard_skips_saving() {
        let mut gw = ScriptedGateway::default();
        gw.open_results.push_back(Some(vec![OpenedFile {
            path: PathBuf::from("a.txt"),
            content: "v1".to_string(),
        }]));
        let mut f = fixture(gw);
        f.controller.handle_at(Message::FileOpen, f.t0);
        f.controller.handle_at(Message::FileNew, f.t0);
        let id = f.controller.tabs.get(0).unwrap().id;
        f.controller
            .handle_at(Message::CloseResolved(0, CloseChoice::Discard), f.t0);

        assert_eq!(f.controller.tabs.count(), 1);
        assert!(f.controller.tabs.index_of(id).is_none());
    }

    #[test]
    fn test_close_save_persists_then_closes() {
        let mut gw = ScriptedGateway::default();
        gw.open_results.push_back(Some(vec![OpenedFile {
            path: PathBuf::from("a.txt"),
            content: "v1".to_string(),
        }]));
        let mut f = fixture(gw);
        f.controller.handle_at(Message::FileOpen, f.t0);
        f.controller.handle_at(Message::FileNew, f.t0);
        let id = f.controller.tabs.get(0).unwrap().id;
        f.controller.tabs.mark_modified(0);

        f.controller
            .handle_at(Message::CloseResolved(0, CloseChoice::Save), f.t0);

        assert_eq!(f.controller.tabs.count(), 1);
        assert!(f.controller.tabs.index_of(id).is_none());
    }

    #[test]
    fn test_close_save_failure_keeps_tab() {
        let mut gw = ScriptedGateway::default();
        gw.open_results.push_back(Some(vec![OpenedFile {
            path: PathBuf::from("a.txt"),
            content: "v1".to_string(),
        }]));
        gw.fail_writes = true;
        let mut f = fixture(gw);
        f.controller.handle_at(Message::FileOpen, f.t0);
        f.controller.tabs.mark_modified(0);

        let fx = f
            .controller
            .handle_at(Message::CloseResolved(0, CloseChoice::Save), f.t0);

        assert!(fx
            .iter()
            .any(|e| matches!(e, Effect::Notify(n) if n.level == NoticeLevel::Error)));
        assert_eq!(f.controller.tabs.count(), 1);
        assert!(f.controller.tabs.active().unwrap().modified);
    }

    #[test]
    fn test_rapid_changes_render_once() {
        let mut f = fixture(ScriptedGateway::default());
        f.controller.handle_at(Message::LaunchEditor, f.t0);
        let id = f.controller.tabs.active().unwrap().id;

        for i in 0..10 {
            let at = f.t0 + Duration::from_millis(10 + i * 20);
            f.controller.handle_at(Message::ContentChanged(id), at);
        }

        // Tick inside the window: nothing renders
        let fx = f
            .controller
            .handle_at(Message::PreviewTick, f.t0 + Duration::from_millis(300));
        assert!(!has_preview(&fx));

        // Tick after the last deadline: exactly one render
        let fx = f
            .controller
            .handle_at(Message::PreviewTick, f.t0 + Duration::from_millis(900));
        assert!(has_preview(&fx));

        let fx = f
            .controller
            .handle_at(Message::PreviewTick, f.t0 + Duration::from_millis(1500));
        assert!(!has_preview(&fx));
    }

    #[test]
    fn test_non_html_tab_does_not_render() {
        let mut gw = ScriptedGateway::default();
        gw.open_results.push_back(Some(vec![OpenedFile {
            path: PathBuf::from("notes.md"),
            content: "# hi".to_string(),
        }]));
        let mut f = fixture(gw);
        let fx = f.controller.handle_at(Message::FileOpen, f.t0);
        assert!(!has_preview(&fx));

        let id = f.controller.tabs.active().unwrap().id;
        f.controller.handle_at(Message::ContentChanged(id), f.t0);
        let fx = f
            .controller
            .handle_at(Message::PreviewTick, f.t0 + Duration::from_secs(2));
        assert!(!has_preview(&fx));
    }

    #[test]
    fn test_open_folder_populates_entries() {
        let mut gw = ScriptedGateway::default();
        let folder = PathBuf::from("/proj");
        gw.folder_paths.push_back(Some(folder.clone()));
        gw.listings.insert(
            folder.clone(),
            vec![DirEntry {
                name: "index.html".to_string(),
                is_dir: false,
                path: folder.join("index.html"),
            }],
        );
        let mut f = fixture(gw);

        let fx = f.controller.handle_at(Message::OpenFolder, f.t0);
        assert!(fx.contains(&Effect::RefreshFileTree));
        assert_eq!(f.controller.folder.as_deref(), Some(Path::new("/proj")));
        assert_eq!(f.controller.entries.len(), 1);
    }

    #[test]
    fn test_tree_open_of_open_file_activates_without_reread() {
        let mut gw = ScriptedGateway::default();
        gw.files.insert(PathBuf::from("/proj/a.html"), "<p></p>".to_string());
        let mut f = fixture(gw);

        f.controller
            .handle_at(Message::TreeOpen(PathBuf::from("/proj/a.html")), f.t0);
        f.controller.handle_at(Message::FileNew, f.t0);
        f.controller
            .handle_at(Message::TreeOpen(PathBuf::from("/proj/a.html")), f.t0);

        assert_eq!(f.controller.tabs.count(), 2);
        assert_eq!(
            f.controller.tabs.active().unwrap().path.as_deref(),
            Some(Path::new("/proj/a.html"))
        );
    }

    #[test]
    fn test_tree_open_missing_file_notifies() {
        let mut f = fixture(ScriptedGateway::default());
        let fx = f
            .controller
            .handle_at(Message::TreeOpen(PathBuf::from("/gone.txt")), f.t0);
        assert!(fx
            .iter()
            .any(|e| matches!(e, Effect::Notify(n) if n.level == NoticeLevel::Error)));
        assert_eq!(f.controller.tabs.count(), 0);
    }
}
