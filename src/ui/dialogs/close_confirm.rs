use fltk::dialog;

use crate::app::messages::CloseChoice;

/// Ask whether to save a modified tab before closing it. Dismissing the
/// dialog counts as Cancel.
pub fn ask_save_before_close(name: &str) -> CloseChoice {
    let text = format!("\"{}\" has unsaved changes.\nSave before closing?", name);
    match dialog::choice2_default(&text, "Save", "Discard", "Cancel") {
        Some(0) => CloseChoice::Save,
        Some(1) => CloseChoice::Discard,
        _ => CloseChoice::Cancel,
    }
}
