use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use fltk::{app::Sender, browser::HoldBrowser, prelude::*};

use crate::app::document::extract_filename;
use crate::app::gateway::DirEntry;
use crate::app::messages::Message;

/// Folder tree backed by a plain browser list. The first line names the
/// opened folder; clicking a file line opens it, directory lines are inert.
pub struct FileTree {
    pub browser: HoldBrowser,
    entries: Rc<RefCell<Vec<DirEntry>>>,
}

impl FileTree {
    pub fn new(mut browser: HoldBrowser, sender: Sender<Message>) -> Self {
        let entries = Rc::new(RefCell::new(Vec::new()));

        let cb_entries: Rc<RefCell<Vec<DirEntry>>> = entries.clone();
        browser.set_callback(move |b| {
            let line = b.value();
            if line <= 1 {
                return; // header line or no selection
            }
            let list = cb_entries.borrow();
            if let Some(entry) = list.get((line - 2) as usize) {
                if !entry.is_dir {
                    sender.send(Message::TreeOpen(entry.path.clone()));
                }
            }
        });

        Self { browser, entries }
    }

    pub fn rebuild(&mut self, folder: Option<&Path>, entries: &[DirEntry]) {
        self.browser.clear();
        let Some(folder) = folder else {
            self.browser.add("@i@.No folder open");
            self.entries.borrow_mut().clear();
            return;
        };

        self.browser.add(&format!("@b@.{}", extract_filename(folder)));
        for entry in entries {
            let label = if entry.is_dir {
                format!("@.\u{1f4c1} {}/", entry.name)
            } else {
                format!("@.{}", entry.name)
            };
            self.browser.add(&label);
        }
        *self.entries.borrow_mut() = entries.to_vec();
    }
}
