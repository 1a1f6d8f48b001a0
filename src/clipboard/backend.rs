use std::env;
use std::process::Command;

use arboard::Clipboard;
use thiserror::Error;

use super::copier::ClipboardWrite;

// ============================================================================
// CLIPBOARD BACKEND
// ============================================================================

/// Why a clipboard write failed. Callers of the public copy surface never
/// see this directly; it is logged and collapsed into a `false` resolution.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("failed to run wl-copy: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("wl-copy failed: {0}")]
    WlCopy(String),
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

#[derive(Debug, Clone, Copy)]
pub enum ClipboardBackend {
    WlClipboard,
    Arboard,
}

pub fn detect_clipboard_backend() -> ClipboardBackend {
    if (env::var("WAYLAND_DISPLAY").is_ok()
        || env::var("XDG_SESSION_TYPE").map_or(false, |v| v == "wayland"))
        && Command::new("wl-paste").arg("--version").output().is_ok()
    {
        ClipboardBackend::WlClipboard
    } else {
        ClipboardBackend::Arboard
    }
}

/// The host system's clipboard, behind whichever backend was detected.
pub struct SystemClipboard {
    backend: ClipboardBackend,
}

impl SystemClipboard {
    pub fn detect() -> Self {
        Self {
            backend: detect_clipboard_backend(),
        }
    }

    pub fn with_backend(backend: ClipboardBackend) -> Self {
        Self { backend }
    }
}

impl ClipboardWrite for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CopyError> {
        match self.backend {
            ClipboardBackend::WlClipboard => write_via_wl_copy(text),
            ClipboardBackend::Arboard => write_via_arboard(text),
        }
    }
}

fn write_via_wl_copy(text: &str) -> Result<(), CopyError> {
    let output = Command::new("wl-copy").arg("--").arg(text).output()?;
    if output.status.success() {
        Ok(())
    } else {
        Err(CopyError::WlCopy(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}

fn write_via_arboard(text: &str) -> Result<(), CopyError> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
