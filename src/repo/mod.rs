pub mod errors;

use std::path::Path;

use errors::RepoError;
use tracing::debug;

/// Name of the git repository enclosing `start`, used as the project key.
///
/// This is the directory name of the working tree, except that linked
/// worktrees resolve to the checkout they were created from.
pub fn repo_name(start: &Path) -> Result<String, RepoError> {
    let repo = git2::Repository::discover(start).map_err(|_| RepoError::NotARepository {
        path: start.to_path_buf(),
    })?;

    if repo.is_bare() {
        return Err(RepoError::BareRepository {
            path: repo.path().to_path_buf(),
        });
    }

    // A linked worktree's commondir is the main checkout's `.git`. Anything
    // else, submodules included, is named after its own working tree.
    let root = if repo.is_worktree() {
        repo.commondir().parent()
    } else {
        repo.workdir()
    };
    let name = root
        .and_then(|root| root.file_name())
        .and_then(|name| name.to_str())
        .ok_or_else(|| RepoError::Unnamed {
            path: repo.path().to_path_buf(),
        })?
        .to_string();

    debug!(repo = %name, git_dir = %repo.path().display(), "resolved repository");
    Ok(name)
}
