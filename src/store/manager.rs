use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::{info, warn};
use thiserror::Error;

use crate::models::Transcript;
use crate::utils::constants::{DATA_DIR_NAME, MAX_TRANSCRIPTS, TRANSCRIPTS_FILE};

// ============================================================================
// TRANSCRIPT STORE
// ============================================================================

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read transcript store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse transcript store: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Recent transcriptions, newest first, persisted as JSON in the data dir.
///
/// The converter backend writes the same file when a transcription finishes,
/// so the store re-reads it whenever the mtime moves forward.
pub struct TranscriptStore {
    entries: Vec<Transcript>,
    store_path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl TranscriptStore {
    pub fn open() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME);
        Self::with_dir(&data_dir)
    }

    pub fn with_dir(dir: &Path) -> Self {
        fs::create_dir_all(dir).ok();

        let mut store = Self {
            entries: Vec::new(),
            store_path: dir.join(TRANSCRIPTS_FILE),
            last_modified: None,
        };

        if let Err(e) = store.load() {
            warn!("could not load transcript store: {e}");
        }
        store
    }

    fn load(&mut self) -> Result<(), StoreError> {
        let Ok(metadata) = fs::metadata(&self.store_path) else {
            return Ok(());
        };
        self.last_modified = metadata.modified().ok();

        let json = fs::read_to_string(&self.store_path)?;
        self.entries = serde_json::from_str(&json)?;
        Ok(())
    }

    pub fn save(&mut self) {
        let Ok(json) = serde_json::to_string(&self.entries) else {
            return;
        };
        if let Err(e) = fs::write(&self.store_path, json) {
            warn!("could not save transcript store: {e}");
            return;
        }
        self.last_modified = fs::metadata(&self.store_path)
            .and_then(|m| m.modified())
            .ok();
    }

    /// Re-read the store file if something else has written it since the
    /// last load or save.
    pub fn reload_if_changed(&mut self) {
        let Ok(modified) = fs::metadata(&self.store_path).and_then(|m| m.modified()) else {
            return;
        };
        if self.last_modified.map_or(true, |last| modified > last) {
            match self.load() {
                Ok(()) => info!("reloaded {} transcripts from disk", self.entries.len()),
                Err(e) => warn!("could not reload transcript store: {e}"),
            }
        }
    }

    pub fn add(&mut self, transcript: Transcript) {
        self.entries.insert(0, transcript);
        self.entries.truncate(MAX_TRANSCRIPTS);
        self.save();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.save();
        info!("cleared transcript history");
    }

    pub fn entries(&self) -> &[Transcript] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
