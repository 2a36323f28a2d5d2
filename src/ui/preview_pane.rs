use std::fs;
use std::path::Path;

use fltk::misc::HelpView;
use fltk::prelude::*;

const PLACEHOLDER: &str = "<html><body>\
<p><i>Open an HTML file to see a live preview here.</i></p>\
</body></html>";

/// Load a rendered snapshot into the preview pane. Loading by path lets
/// relative links in the document resolve; if that fails the raw markup is
/// set directly.
pub fn load_snapshot(view: &mut HelpView, path: &Path) {
    let url = path.to_string_lossy();
    if view.load(&url).is_err() {
        match fs::read_to_string(path) {
            Ok(html) => view.set_value(&html),
            Err(e) => log::warn!("preview snapshot unreadable: {}", e),
        }
    }
}

pub fn show_placeholder(view: &mut HelpView) {
    view.set_value(PLACEHOLDER);
}
