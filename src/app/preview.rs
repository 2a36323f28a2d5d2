use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Render no more often than this while content changes stream in.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(500);

/// How long a superseded snapshot stays on disk. A render that is still
/// in flight must not lose its file the moment a newer snapshot lands.
pub const SNAPSHOT_GRACE: Duration = Duration::from_secs(10);

/// Debounced HTML snapshot renderer.
///
/// Each render writes the active buffer's content to a fresh
/// sequence-numbered temp file; the previous snapshot is retired and deleted
/// once the grace period has passed. The debounce is a single-slot deadline:
/// every content change restarts it, so a burst of keystrokes collapses into
/// one render.
pub struct PreviewRenderer {
    dir: PathBuf,
    debounce: Duration,
    grace: Duration,
    deadline: Option<Instant>,
    current: Option<PathBuf>,
    retired: Vec<(PathBuf, Instant)>,
    seq: u64,
}

impl PreviewRenderer {
    pub fn new() -> io::Result<Self> {
        let dir = std::env::temp_dir().join("codevault-preview");
        fs::create_dir_all(&dir)?;
        Ok(Self::with_dir(dir, DEBOUNCE_INTERVAL, SNAPSHOT_GRACE))
    }

    pub fn with_dir(dir: PathBuf, debounce: Duration, grace: Duration) -> Self {
        Self {
            dir,
            debounce,
            grace,
            deadline: None,
            current: None,
            retired: Vec::new(),
            seq: 0,
        }
    }

    /// Restart the debounce window. Any pending render is superseded.
    pub fn note_change(&mut self, now: Instant) {
        self.deadline = Some(now + self.debounce);
    }

    /// True exactly once when the debounce deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Write a new snapshot and retire the previous one.
    pub fn render(&mut self, html: &str, now: Instant) -> io::Result<PathBuf> {
        self.seq += 1;
        let path = self.dir.join(format!("snapshot-{}.html", self.seq));
        fs::write(&path, html)?;
        if let Some(prev) = self.current.replace(path.clone()) {
            self.retired.push((prev, now));
        }
        self.deadline = None;
        Ok(path)
    }

    /// Delete retired snapshots whose grace period has elapsed.
    pub fn sweep(&mut self, now: Instant) {
        let grace = self.grace;
        self.retired.retain(|(path, retired_at)| {
            if now.duration_since(*retired_at) >= grace {
                let _ = fs::remove_file(path);
                false
            } else {
                true
            }
        });
    }

    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Remove the snapshot directory. Called on shutdown.
    pub fn cleanup(&mut self) {
        self.current = None;
        self.retired.clear();
        let _ = fs::remove_dir_all(&self.dir);
    }
}
