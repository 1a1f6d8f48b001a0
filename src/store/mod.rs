mod manager;

pub use manager::{StoreError, TranscriptStore};
