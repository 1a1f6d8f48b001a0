// ============================================================================
// CONSTANTS
// ============================================================================

pub const MESSAGE_TTL_MS: u64 = 5000;
pub const MAX_TRANSCRIPTS: usize = 50;
pub const TRANSCRIPTS_FILE: &str = "transcripts.json";
pub const DATA_DIR_NAME: &str = "audiotext-tui";
pub const MAX_DISPLAY_LENGTH: usize = 75;
pub const POLL_INTERVAL_MS: u64 = 50;
