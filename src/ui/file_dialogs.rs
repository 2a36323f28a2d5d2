use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogType, NativeFileChooser};

/// Filter offered by the open/save choosers. "All Files" stays last so
/// arbitrary files still open as plain text.
const FILE_FILTER: &str = "Web Files\t*.{html,htm,css,scss,sass,less,js,jsx,mjs,ts,tsx}\n\
Code Files\t*.{py,pyw,json,jsonc,md,mdx}\n\
All Files\t*";

fn chooser(kind: FileDialogType, dir: Option<&Path>) -> NativeFileChooser {
    let mut nfc = NativeFileChooser::new(kind);
    if let Some(dir) = dir {
        let _ = nfc.set_directory(&dir);
    }
    nfc
}

pub fn native_open_multi_dialog(dir: Option<&Path>) -> Vec<PathBuf> {
    let mut nfc = chooser(FileDialogType::BrowseMultiFile, dir);
    nfc.set_filter(FILE_FILTER);
    nfc.show(); // returns (), blocks until close
    nfc.filenames()
        .into_iter()
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

pub fn native_save_dialog(dir: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = chooser(FileDialogType::BrowseSaveFile, dir);
    nfc.set_filter(FILE_FILTER);
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_folder_dialog(dir: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = chooser(FileDialogType::BrowseDir, dir);
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}
