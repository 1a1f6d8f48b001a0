use std::time::{Duration, Instant};

use crate::utils::constants::MESSAGE_TTL_MS;

// ============================================================================
// NOTICES
// ============================================================================

/// Visual weight of a notice, mirroring the converter's message styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
            Severity::Error => "✖",
            Severity::Success => "✔",
        }
    }
}

/// A transient on-screen message. Expires [`MESSAGE_TTL_MS`] after posting.
#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
    timestamp: i64,
    posted_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self::posted(text, severity, Instant::now())
    }

    pub(crate) fn posted(text: impl Into<String>, severity: Severity, at: Instant) -> Self {
        Self {
            text: text.into(),
            severity,
            timestamp: chrono::Utc::now().timestamp(),
            posted_at: at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.posted_at) >= Duration::from_millis(MESSAGE_TTL_MS)
    }

    pub fn formatted_time(&self) -> String {
        chrono::DateTime::from_timestamp(self.timestamp, 0)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| String::from("--:--:--"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_lives_for_five_seconds() {
        let t0 = Instant::now();
        let notice = Notice::posted("transcription complete", Severity::Success, t0);

        assert!(!notice.is_expired(t0));
        assert!(!notice.is_expired(t0 + Duration::from_millis(4999)));
        assert!(notice.is_expired(t0 + Duration::from_millis(5000)));
    }

    #[test]
    fn expiry_tolerates_a_clock_before_posting() {
        let t0 = Instant::now() + Duration::from_secs(60);
        let notice = Notice::posted("queued", Severity::Info, t0);
        assert!(!notice.is_expired(Instant::now()));
    }
}
