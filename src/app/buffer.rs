use std::any::Any;

use super::document::DocumentId;

/// Opaque handle to one in-memory editable document. Each handle is owned
/// exclusively by a single tab record: created when the tab opens, released
/// when it closes.
pub trait BufferHandle {
    fn contents(&self) -> String;
    fn set_contents(&mut self, text: &str);
    /// Drop the backing storage ahead of the record being destroyed.
    fn release(&mut self);
    /// Escape hatch for the widget layer to reach the concrete buffer type.
    fn as_any(&self) -> &dyn Any;
}

/// Creates buffer handles for newly opened tabs. The widget backend supplies
/// the real factory; tests and the degraded plain-text mode use the in-memory
/// one.
pub trait BufferFactory {
    fn create(&self, id: DocumentId, content: &str) -> Box<dyn BufferHandle>;
}

/// Plain string-backed buffer with no widget behind it.
#[derive(Default)]
pub struct MemoryBuffer {
    text: String,
}

impl MemoryBuffer {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

impl BufferHandle for MemoryBuffer {
    fn contents(&self) -> String {
        self.text.clone()
    }

    fn set_contents(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn release(&mut self) {
        self.text.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct MemoryBufferFactory;

impl BufferFactory for MemoryBufferFactory {
    fn create(&self, _id: DocumentId, content: &str) -> Box<dyn BufferHandle> {
        Box::new(MemoryBuffer::new(content))
    }
}
