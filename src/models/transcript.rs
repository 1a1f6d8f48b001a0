use serde::{Deserialize, Serialize};

use crate::utils::constants::MAX_DISPLAY_LENGTH;
use crate::utils::format_file_size;

/// One finished transcription: the uploaded audio file plus the text the
/// converter produced for it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transcript {
    pub filename: String,
    pub size_bytes: u64,
    pub text: String,
    pub timestamp: i64,
}

impl Transcript {
    pub fn new(filename: String, size_bytes: u64, text: String) -> Self {
        Self {
            filename,
            size_bytes,
            text,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn formatted_time(&self) -> String {
        chrono::DateTime::from_timestamp(self.timestamp, 0)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| String::from("--:--:--"))
    }

    /// Single-line preview of the transcript text for the list view.
    pub fn display_line(&self) -> String {
        let flattened: String = self
            .text
            .chars()
            .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
            .collect();

        let trimmed = flattened.trim();
        if trimmed.chars().count() > MAX_DISPLAY_LENGTH {
            let cut: String = trimmed.chars().take(MAX_DISPLAY_LENGTH).collect();
            format!("{}...", cut)
        } else {
            trimmed.to_string()
        }
    }

    /// `"interview.mp3 (2.3 MB)"` — the source file with its audio size.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.filename, format_file_size(self.size_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line_flattens_and_truncates() {
        let long = "word ".repeat(40);
        let t = Transcript::new("talk.wav".into(), 2048, format!("line one\n\t{long}"));

        let line = t.display_line();
        assert!(!line.contains('\n'));
        assert!(!line.contains('\t'));
        assert!(line.ends_with("..."));
        assert_eq!(line.chars().count(), MAX_DISPLAY_LENGTH + 3);
    }

    #[test]
    fn summary_includes_formatted_size() {
        let t = Transcript::new("talk.wav".into(), 1536, "hi".into());
        assert_eq!(t.summary(), "talk.wav (1.5 KB)");
    }
}
