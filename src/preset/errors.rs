use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Presets file not found at {}.", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read presets file {}: {source}.", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse presets file {}: {message}.", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported presets file format: {}.", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("No presets found for repository '{repo}' (known: {}).", known.join(", "))]
    UnknownRepository { repo: String, known: Vec<String> },

    #[error("Preset '{preset}' not found for repository '{repo}' (available: {}).", available.join(", "))]
    UnknownPreset {
        repo: String,
        preset: String,
        available: Vec<String>,
    },
}
