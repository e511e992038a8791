use thiserror::Error;

use crate::launch::errors::LaunchError;
use crate::preset::errors::PresetError;
use crate::repo::errors::RepoError;
use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum VaderError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}
