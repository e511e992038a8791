pub mod build;

use tracing::debug;

use crate::args::Args;
use crate::error::VaderError;
use crate::launch::Launcher;
use crate::merge::PROGRAM;
use crate::repo;
use crate::settings::Settings;

/// One full invocation: env file, repository name, merge, launch.
///
/// Nothing is launched unless every step before the handoff succeeded.
pub fn run(args: &Args, settings: &Settings, launcher: &dyn Launcher) -> Result<(), VaderError> {
    settings.load_env_file();

    let repo_name = repo::repo_name(&settings.work_dir)?;
    let command =
        build::build_command(&settings.presets_file, &repo_name, &args.presets, PROGRAM)?;

    debug!(repo = %repo_name, presets = ?args.presets, "launching");
    launcher.launch(&command)?;
    Ok(())
}
