//! Terminal front end utilities for the audio-to-text converter.
//!
//! The public surface is the converter's utility namespace: post a message
//! to the screen, copy text to the system clipboard, format a file size.

pub mod clipboard;
pub mod models;
pub mod store;
pub mod surface;
pub mod ui;
pub mod utils;

pub use clipboard::{CopyHandle, copy_to_clipboard};
pub use models::Severity;
pub use surface::{Screen, show_message};
pub use utils::format_file_size;
