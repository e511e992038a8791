use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Overrides the presets file location.
pub const PRESETS_VAR: &str = "VADER_PRESETS";
/// Overrides the `.env` file location.
pub const ENV_FILE_VAR: &str = "VADER_ENV_FILE";
/// Log filter, `tracing_subscriber::EnvFilter` syntax.
pub const LOG_VAR: &str = "VADER_LOG";

pub const DEFAULT_PRESETS_FILE: &str = "presets.yaml";
pub const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not locate the vader executable: {0}.")]
    NoExecutablePath(#[source] io::Error),

    #[error("Could not determine the current directory: {0}.")]
    NoWorkingDirectory(#[source] io::Error),
}

/// Where the inputs of one run live. Computed once, then passed explicitly.
#[derive(Debug, Clone)]
pub struct Settings {
    pub presets_file: PathBuf,
    pub env_file: PathBuf,
    pub work_dir: PathBuf,
}

impl Settings {
    /// Presets next to the executable unless `VADER_PRESETS` says otherwise;
    /// `.env` next to the presets unless `VADER_ENV_FILE` says otherwise.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Same as [`Settings::from_env`] with variables read through `lookup`.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let var_path = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };

        let presets_file = match var_path(PRESETS_VAR) {
            Some(path) => path,
            None => executable_dir()?.join(DEFAULT_PRESETS_FILE),
        };
        let env_file =
            var_path(ENV_FILE_VAR).unwrap_or_else(|| sibling(&presets_file, DEFAULT_ENV_FILE));
        let work_dir = env::current_dir().map_err(SettingsError::NoWorkingDirectory)?;

        let settings = Settings {
            presets_file,
            env_file,
            work_dir,
        };
        debug!(?settings, "settings");
        Ok(settings)
    }

    /// Load `.env` into the process environment so the launched program
    /// inherits it. Variables already set are left alone.
    pub fn load_env_file(&self) {
        match dotenvy::from_path(&self.env_file) {
            Ok(()) => debug!(path = %self.env_file.display(), "loaded env file"),
            Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.env_file.display(), "no env file");
            }
            Err(e) => warn!(path = %self.env_file.display(), error = %e, "ignoring env file"),
        }
    }
}

/// Directory holding the running binary, with symlinks resolved.
pub fn executable_dir() -> Result<PathBuf, SettingsError> {
    let exe = env::current_exe().map_err(SettingsError::NoExecutablePath)?;
    // Follow symlinks so an installed link still finds the presets beside the real binary
    let exe = exe.canonicalize().unwrap_or(exe);
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

fn sibling(path: &Path, name: &str) -> PathBuf {
    match path.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
