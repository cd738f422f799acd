/// Platform capability adapters
mod share;

pub use share::{RecordingShare, UnsupportedShare};
