mod backend;
mod copier;

pub use backend::{ClipboardBackend, CopyError, SystemClipboard, detect_clipboard_backend};
pub use copier::{ClipboardWrite, CopyHandle, copy_text_with, copy_to_clipboard};
