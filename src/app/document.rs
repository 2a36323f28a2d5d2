use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::buffer::BufferHandle;
use super::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// One open tab: file identity (or none for untitled), display name,
/// detected language, modified flag, and the exclusively-owned buffer.
pub struct Document {
    pub id: DocumentId,
    pub buffer: Box<dyn BufferHandle>,
    pub path: Option<PathBuf>,
    pub display_name: String,
    pub language: Language,
    pub modified: bool,
}

impl Document {
    pub fn untitled(id: DocumentId, buffer: Box<dyn BufferHandle>, language: Language) -> Self {
        Self {
            id,
            buffer,
            path: None,
            display_name: untitled_name(),
            language,
            modified: false,
        }
    }

    pub fn from_file(id: DocumentId, path: PathBuf, buffer: Box<dyn BufferHandle>) -> Self {
        let display_name = extract_filename(&path);
        let language = Language::from_path(&path);
        Self {
            id,
            buffer,
            path: Some(path),
            display_name,
            language,
            modified: false,
        }
    }

    /// Rebind the record to a new path after save-as: identity, display name
    /// and language all follow the new path, and the record becomes clean.
    pub fn rename(&mut self, path: PathBuf) {
        self.display_name = extract_filename(&path);
        self.language = Language::from_path(&path);
        self.path = Some(path);
        self.modified = false;
    }

    /// Release the buffer to free memory immediately on close.
    pub fn cleanup(&mut self) {
        self.buffer.release();
    }
}

/// Extract the filename component of a path, or "Unknown" if it can't be
/// extracted.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn untitled_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("untitled-{}", millis)
}
