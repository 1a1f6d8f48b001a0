mod notice;
mod transcript;

pub use notice::{Notice, Severity};
pub use transcript::Transcript;
