use std::path::{Path, PathBuf};

use super::buffer::BufferFactory;
use super::document::{Document, DocumentId};
use super::language::Language;

/// Ordered collection of open tabs plus the active index.
///
/// The manager never holds a zero-tab state across an operation: closing the
/// last tab immediately reseeds a fresh untitled record. The only moment with
/// no tabs is between construction and the first open.
pub struct TabManager {
    tabs: Vec<Document>,
    active: usize,
    next_id: u64,
    factory: Box<dyn BufferFactory>,
}

impl TabManager {
    pub fn new(factory: Box<dyn BufferFactory>) -> Self {
        Self {
            tabs: Vec::new(),
            active: 0,
            next_id: 1,
            factory,
        }
    }

    fn next_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Open a document, or activate the tab already holding this path.
    ///
    /// Activation is pure: the existing tab's content is left untouched, no
    /// reload happens. Identity-less opens always append. The `language`
    /// override only applies to identity-less tabs; a concrete path always
    /// detects from its extension. Returns the new or activated index.
    pub fn open_or_activate(
        &mut self,
        identity: Option<PathBuf>,
        content: &str,
        language: Option<Language>,
    ) -> usize {
        if let Some(ref path) = identity {
            if let Some(existing) = self.find_by_path(path) {
                self.active = existing;
                return existing;
            }
        }

        let id = self.next_document_id();
        let buffer = self.factory.create(id, content);
        let doc = match identity {
            Some(path) => Document::from_file(id, path, buffer),
            None => Document::untitled(id, buffer, language.unwrap_or_default()),
        };
        self.tabs.push(doc);
        self.active = self.tabs.len() - 1;
        self.active
    }

    /// Append a fresh empty untitled tab and activate it.
    pub fn open_untitled(&mut self) -> usize {
        self.open_or_activate(None, "", None)
    }

    /// No-op when the index is out of bounds.
    pub fn set_active(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = index;
        }
    }

    pub fn active(&self) -> Option<&Document> {
        self.tabs.get(self.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut Document> {
        self.tabs.get_mut(self.active)
    }

    pub fn active_index(&self) -> Option<usize> {
        if self.tabs.is_empty() { None } else { Some(self.active) }
    }

    pub fn mark_modified(&mut self, index: usize) {
        if let Some(doc) = self.tabs.get_mut(index) {
            doc.modified = true;
        }
    }

    pub fn clear_modified(&mut self, index: usize) {
        if let Some(doc) = self.tabs.get_mut(index) {
            doc.modified = false;
        }
    }

    /// Rebind a tab to its save-as target path. Display name and language
    /// are recomputed from the path; the modified flag clears.
    pub fn rename_after_save_as(&mut self, index: usize, path: PathBuf) {
        if let Some(doc) = self.tabs.get_mut(index) {
            doc.rename(path);
        }
    }

    /// Remove a tab. Any save confirmation has already been resolved by the
    /// caller; no I/O happens here. Releases the buffer, then re-derives the
    /// active index: closing at or before the active tab activates the left
    /// neighbor (clamped to 0), closing after it leaves it alone. Closing the
    /// last remaining tab reseeds a fresh untitled one.
    pub fn close(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        let mut doc = self.tabs.remove(index);
        doc.cleanup();

        if self.tabs.is_empty() {
            self.open_untitled();
            return;
        }
        if index <= self.active {
            self.active = self.active.saturating_sub(1);
        }
    }

    pub fn tabs(&self) -> &[Document] {
        &self.tabs
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.tabs.get(index)
    }

    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    pub fn index_of(&self, id: DocumentId) -> Option<usize> {
        self.tabs.iter().position(|d| d.id == id)
    }

    pub fn find_by_path(&self, path: &Path) -> Option<usize> {
        self.tabs.iter().position(|d| d.path.as_deref() == Some(path))
    }

    /// Index of the next tab (for tab cycling).
    pub fn next_index(&self) -> Option<usize> {
        if self.tabs.is_empty() {
            return None;
        }
        Some((self.active + 1) % self.tabs.len())
    }

    /// Index of the previous tab (for tab cycling).
    pub fn prev_index(&self) -> Option<usize> {
        if self.tabs.is_empty() {
            return None;
        }
        Some(if self.active == 0 { self.tabs.len() - 1 } else { self.active - 1 })
    }

    /// Override the generated display name of an identity-less tab. Used for
    /// the seeded welcome tab.
    pub fn set_display_name(&mut self, index: usize, name: &str) {
        if let Some(doc) = self.tabs.get_mut(index) {
            if doc.path.is_none() {
                doc.display_name = name.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::buffer::MemoryBufferFactory;

    fn manager() -> TabManager {
        TabManager::new(Box::new(MemoryBufferFactory))
    }

    #[test]
    fn test_empty_manager_has_no_active() {
        let m = manager();
        assert!(m.active().is_none());
        assert_eq!(m.active_index(), None);
    }

    #[test]
    fn test_open_same_path_twice_activates_not_duplicates() {
        let mut m = manager();
        let first = m.open_or_activate(Some(PathBuf::from("a.html")), "<p>x</p>", None);
        m.open_or_activate(Some(PathBuf::from("b.css")), "", None);
        let again = m.open_or_activate(Some(PathBuf::from("a.html")), "ignored", None);
        assert_eq!(first, again);
        assert_eq!(m.count(), 2);
        assert_eq!(m.active_index(), Some(first));
        assert_eq!(m.active().unwrap().path.as_deref(), Some(Path::new("a.html")));
        // Pure activation: the original content is untouched
        assert_eq!(m.active().unwrap().buffer.contents(), "<p>x</p>");
    }

    #[test]
    fn test_untitled_tabs_never_deduplicate() {
        let mut m = manager();
        m.open_or_activate(None, "", None);
        m.open_or_activate(None, "", None);
        assert_eq!(m.count(), 2);
    }

    #[test]
    fn test_set_active_out_of_bounds_is_noop() {
        let mut m = manager();
        m.open_or_activate(None, "", None);
        m.set_active(5);
        assert_eq!(m.active_index(), Some(0));
    }

    #[test]
    fn test_mark_modified_sticks_until_cleared() {
        let mut m = manager();
        let idx = m.open_or_activate(None, "", None);
        m.mark_modified(idx);
        m.mark_modified(idx);
        assert!(m.get(idx).unwrap().modified);
        m.clear_modified(idx);
        assert!(!m.get(idx).unwrap().modified);
    }

    #[test]
    fn test_rename_after_save_as() {
        let mut m = manager();
        let idx = m.open_or_activate(None, "body {}", None);
        m.mark_modified(idx);
        m.rename_after_save_as(idx, PathBuf::from("out.css"));
        let doc = m.get(idx).unwrap();
        assert_eq!(doc.path.as_deref(), Some(Path::new("out.css")));
        assert_eq!(doc.language, Language::Css);
        assert_eq!(doc.display_name, "out.css");
        assert!(!doc.modified);
    }

    #[test]
    fn test_close_before_active_shifts_left() {
        let mut m = manager();
        m.open_or_activate(Some(PathBuf::from("a.txt")), "", None);
        m.open_or_activate(Some(PathBuf::from("b.txt")), "", None);
        assert_eq!(m.active_index(), Some(1));
        m.close(0);
        assert_eq!(m.active_index(), Some(0));
        assert_eq!(m.active().unwrap().path.as_deref(), Some(Path::new("b.txt")));
    }

    #[test]
    fn test_close_after_active_leaves_it() {
        let mut m = manager();
        m.open_or_activate(Some(PathBuf::from("a.txt")), "", None);
        m.open_or_activate(Some(PathBuf::from("b.txt")), "", None);
        m.open_or_activate(Some(PathBuf::from("c.txt")), "", None);
        m.set_active(0);
        m.close(2);
        assert_eq!(m.active_index(), Some(0));
        assert_eq!(m.active().unwrap().path.as_deref(), Some(Path::new("a.txt")));
    }

    #[test]
    fn test_close_active_activates_left_neighbor() {
        let mut m = manager();
        m.open_or_activate(Some(PathBuf::from("a.txt")), "", None);
        m.open_or_activate(Some(PathBuf::from("b.txt")), "", None);
        m.open_or_activate(Some(PathBuf::from("c.txt")), "", None);
        m.set_active(1);
        m.close(1);
        assert_eq!(m.active_index(), Some(0));
        assert_eq!(m.active().unwrap().path.as_deref(), Some(Path::new("a.txt")));
    }

    #[test]
    fn test_close_sole_tab_reseeds_untitled() {
        let mut m = manager();
        let idx = m.open_or_activate(Some(PathBuf::from("a.txt")), "text", None);
        m.close(idx);
        assert_eq!(m.count(), 1);
        let doc = m.active().unwrap();
        assert!(doc.path.is_none());
        assert_eq!(doc.language, Language::Plaintext);
        assert_eq!(doc.buffer.contents(), "");
    }

    #[test]
    fn test_close_releases_buffer() {
        let mut m = manager();
        m.open_or_activate(Some(PathBuf::from("a.txt")), "data", None);
        m.open_or_activate(Some(PathBuf::from("b.txt")), "", None);
        m.close(0);
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn test_close_out_of_bounds_is_noop() {
        let mut m = manager();
        m.open_or_activate(None, "", None);
        m.close(9);
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut m = manager();
        m.open_or_activate(Some(PathBuf::from("a.txt")), "", None);
        m.open_or_activate(Some(PathBuf::from("b.txt")), "", None);
        assert_eq!(m.next_index(), Some(0));
        assert_eq!(m.prev_index(), Some(0));
        m.set_active(0);
        assert_eq!(m.next_index(), Some(1));
        assert_eq!(m.prev_index(), Some(1));
    }

    #[test]
    fn test_welcome_name_override_only_for_untitled() {
        let mut m = manager();
        let idx = m.open_or_activate(None, "<h1>hi</h1>", Some(Language::Html));
        m.set_display_name(idx, "welcome.html");
        assert_eq!(m.get(idx).unwrap().display_name, "welcome.html");

        let file = m.open_or_activate(Some(PathBuf::from("a.txt")), "", None);
        m.set_display_name(file, "nope");
        assert_eq!(m.get(file).unwrap().display_name, "a.txt");
    }
}
