use std::any::Any;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use super::buffer::{BufferFactory, BufferHandle};
use super::document::DocumentId;
use super::messages::Message;

/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// fltk-rs's `TextBuffer::text()` copies the `malloc()`'d C string returned
/// by `Fl_Text_Buffer_text()` but never frees the original pointer, leaking
/// the full buffer size on every call. This helper calls the FFI directly
/// and frees the C allocation.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: buf.as_ptr() is valid while buf exists; Fl_Text_Buffer_text
    // returns a malloc'd, null-terminated C string (or null when empty); we
    // copy it into a Rust String and free the original allocation.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}

/// Buffer handle backed by the FLTK text widget: the document buffer plus a
/// parallel style buffer kept byte-aligned by the modify callback.
pub struct WidgetBuffer {
    buffer: TextBuffer,
    style_buffer: TextBuffer,
}

impl WidgetBuffer {
    pub fn new(id: DocumentId, content: &str, sender: Sender<Message>) -> Self {
        let mut buffer = TextBuffer::default();
        let mut style_buffer = TextBuffer::default();

        // Seed content before wiring the callback so the initial fill does
        // not count as a user edit.
        buffer.set_text(content);
        style_buffer.set_text(&"A".repeat(content.len()));

        let mut style_buf = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                // Keep the style buffer the same byte length as the text
                if inserted > 0 {
                    let filler: String = "A".repeat(inserted as usize);
                    style_buf.insert(pos, &filler);
                }
                if deleted > 0 {
                    style_buf.remove(pos, pos + deleted);
                }
                sender.send(Message::ContentChanged(id));
            }
        });

        Self { buffer, style_buffer }
    }

    /// The text buffer to bind to the editor widget.
    pub fn text_buffer(&self) -> TextBuffer {
        self.buffer.clone()
    }

    /// The parallel style buffer for `set_highlight_data`.
    pub fn style_buffer(&self) -> TextBuffer {
        self.style_buffer.clone()
    }

    /// Replace the style buffer content with a freshly computed style string.
    pub fn apply_styles(&mut self, styles: &str) {
        self.style_buffer.set_text(styles);
    }
}

impl BufferHandle for WidgetBuffer {
    fn contents(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    fn set_contents(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.style_buffer.set_text(&"A".repeat(text.len()));
    }

    fn release(&mut self) {
        self.buffer.set_text("");
        self.style_buffer.set_text("");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Creates widget-backed buffers whose modify callbacks post
/// [`Message::ContentChanged`] on the app channel.
pub struct WidgetBufferFactory {
    sender: Sender<Message>,
}

impl WidgetBufferFactory {
    pub fn new(sender: Sender<Message>) -> Self {
        Self { sender }
    }
}

impl BufferFactory for WidgetBufferFactory {
    fn create(&self, id: DocumentId, content: &str) -> Box<dyn BufferHandle> {
        Box::new(WidgetBuffer::new(id, content, self.sender.clone()))
    }
}
