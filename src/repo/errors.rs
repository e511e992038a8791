use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not in a git repository: {}.", path.display())]
    NotARepository { path: PathBuf },

    #[error("Bare repositories have no project name: {}.", path.display())]
    BareRepository { path: PathBuf },

    #[error("Could not derive a repository name from {}.", path.display())]
    Unnamed { path: PathBuf },
}
