use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use log::error;

use super::backend::{CopyError, SystemClipboard};

// ============================================================================
// CLIPBOARD COPY
// ============================================================================

/// Seam between the copy operation and the host clipboard, so the copy path
/// can be exercised without a real clipboard.
pub trait ClipboardWrite {
    fn write_text(&mut self, text: &str) -> Result<(), CopyError>;
}

/// Pending result of a clipboard write running on a worker thread.
///
/// Resolves to `true` on success and `false` on failure; a failed write is
/// logged but never surfaces as an error to the caller.
pub struct CopyHandle {
    rx: Receiver<bool>,
}

impl CopyHandle {
    /// Block until the write finishes.
    pub fn resolve(self) -> bool {
        self.rx.recv().unwrap_or(false)
    }

    /// Poll without blocking. `None` while the write is still in flight.
    pub fn try_resolve(&self) -> Option<bool> {
        match self.rx.try_recv() {
            Ok(done) => Some(done),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(false),
        }
    }
}

/// Copy `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> CopyHandle {
    copy_text_with(SystemClipboard::detect(), text)
}

pub fn copy_text_with<W>(mut writer: W, text: &str) -> CopyHandle
where
    W: ClipboardWrite + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let text = text.to_owned();

    thread::spawn(move || {
        let done = match writer.write_text(&text) {
            Ok(()) => true,
            Err(e) => {
                error!("failed to copy to clipboard: {e}");
                false
            }
        };
        let _ = tx.send(done);
    });

    CopyHandle { rx }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeClipboard {
        fail: bool,
        written: std::sync::mpsc::Sender<String>,
    }

    impl ClipboardWrite for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), CopyError> {
            if self.fail {
                return Err(CopyError::WlCopy(String::from("permission denied")));
            }
            self.written.send(text.to_owned()).unwrap();
            Ok(())
        }
    }

    fn fake(fail: bool) -> (FakeClipboard, Receiver<String>) {
        let (tx, rx) = mpsc::channel();
        (FakeClipboard { fail, written: tx }, rx)
    }

    #[test]
    fn copy_resolves_true_when_the_clipboard_accepts() {
        let (clipboard, written) = fake(false);
        assert!(copy_text_with(clipboard, "hello").resolve());
        assert_eq!(written.recv().unwrap(), "hello");
    }

    #[test]
    fn copying_an_empty_string_succeeds() {
        let (clipboard, written) = fake(false);
        assert!(copy_text_with(clipboard, "").resolve());
        assert_eq!(written.recv().unwrap(), "");
    }

    #[test]
    fn copy_resolves_false_when_the_clipboard_rejects() {
        let (clipboard, _written) = fake(true);
        assert!(!copy_text_with(clipboard, "hello").resolve());
    }

    #[test]
    fn try_resolve_eventually_reports_the_outcome() {
        let (clipboard, _written) = fake(false);
        let handle = copy_text_with(clipboard, "hi");

        loop {
            match handle.try_resolve() {
                Some(done) => {
                    assert!(done);
                    break;
                }
                None => thread::yield_now(),
            }
        }
    }
}
