use std::fs;
use std::path::{Path, PathBuf};

use super::error::AppError;

/// One entry in a folder listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    pub path: PathBuf,
}

/// A file picked through the open dialog, with its content already read.
#[derive(Debug, Clone)]
pub struct OpenedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Narrow interface to the host dialog system and the storage layer.
///
/// Pickers return `None` on user cancellation, which is not an error. All
/// read/write/list failures carry a classified [`AppError`] and must leave
/// editor state untouched at the call site.
pub trait FileGateway {
    fn pick_open(&mut self) -> Result<Option<Vec<OpenedFile>>, AppError>;
    fn pick_save(&mut self) -> Option<PathBuf>;
    fn pick_folder(&mut self) -> Option<PathBuf>;
    fn read(&mut self, path: &Path) -> Result<String, AppError>;
    fn write(&mut self, path: &Path, text: &str) -> Result<(), AppError>;
    fn list_dir(&mut self, path: &Path) -> Result<Vec<DirEntry>, AppError>;
}

/// Gateway backed by native FLTK choosers and `std::fs`.
#[derive(Default)]
pub struct NativeGateway {
    /// Last directory used in a file open/save dialog.
    last_directory: Option<PathBuf>,
}

impl NativeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_directory = Some(parent.to_path_buf());
        }
    }
}

impl FileGateway for NativeGateway {
    fn pick_open(&mut self) -> Result<Option<Vec<OpenedFile>>, AppError> {
        let paths = crate::ui::file_dialogs::native_open_multi_dialog(self.last_directory.as_deref());
        if paths.is_empty() {
            return Ok(None);
        }
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let content = self.read(&path)?;
            self.remember_directory(&path);
            files.push(OpenedFile { path, content });
        }
        Ok(Some(files))
    }

    fn pick_save(&mut self) -> Option<PathBuf> {
        let path = crate::ui::file_dialogs::native_save_dialog(self.last_directory.as_deref())?;
        self.remember_directory(&path);
        Some(path)
    }

    fn pick_folder(&mut self) -> Option<PathBuf> {
        crate::ui::file_dialogs::native_folder_dialog(self.last_directory.as_deref())
    }

    fn read(&mut self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|e| AppError::from_io(e, path))
    }

    fn write(&mut self, path: &Path, text: &str) -> Result<(), AppError> {
        fs::write(path, text).map_err(|e| AppError::from_io(e, path))
    }

    fn list_dir(&mut self, path: &Path) -> Result<Vec<DirEntry>, AppError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| AppError::from_io(e, path))? {
            let entry = entry.map_err(|e| AppError::from_io(e, path))?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir,
                path: entry.path(),
            });
        }
        // Directories first, then case-insensitive by name
        entries.sort_by(|a, b| {
            b.is_dir
                .cmp(&a.is_dir)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_write_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut gw = NativeGateway::new();
        gw.write(&path, "hello").unwrap();
        assert_eq!(gw.read(&path).unwrap(), "hello");
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let mut gw = NativeGateway::new();
        let err = gw.read(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_write_into_missing_parent_is_not_found() {
        let dir = tempdir().unwrap();
        let mut gw = NativeGateway::new();
        let err = gw
            .write(&dir.path().join("no-such-dir").join("a.txt"), "x")
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_list_dir_orders_directories_first() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("zsub")).unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("B.txt"), "").unwrap();

        let mut gw = NativeGateway::new();
        let entries = gw.list_dir(dir.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zsub", "a.txt", "B.txt"]);
        assert!(entries[0].is_dir);
        assert!(!entries[1].is_dir);
        assert_eq!(entries[1].path, dir.path().join("a.txt"));
    }

    #[test]
    fn test_list_missing_dir_is_not_found() {
        let mut gw = NativeGateway::new();
        let err = gw.list_dir(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
