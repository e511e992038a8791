pub mod errors;

use std::process::Command;

use errors::LaunchError;
use tracing::info;

use crate::merge::MergedCommand;

/// Hands a finished command over to the operating system.
pub trait Launcher {
    /// Run `command`. A replacing launcher only ever returns on failure.
    fn launch(&self, command: &MergedCommand) -> Result<(), LaunchError>;
}

/// Replaces the current process with the merged command, looking the program up on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecLauncher;

impl Launcher for ExecLauncher {
    #[cfg(unix)]
    fn launch(&self, command: &MergedCommand) -> Result<(), LaunchError> {
        use std::os::unix::process::CommandExt;

        info!(program = command.program(), args = command.args().len(), "exec");
        let err = Command::new(command.program())
            .args(command.args())
            .exec();
        // exec() only returns on error
        Err(LaunchError::from_io(command.program(), err))
    }

    #[cfg(not(unix))]
    fn launch(&self, command: &MergedCommand) -> Result<(), LaunchError> {
        info!(program = command.program(), args = command.args().len(), "spawn");
        let status = Command::new(command.program())
            .args(command.args())
            .status()
            .map_err(|e| LaunchError::from_io(command.program(), e))?;
        std::process::exit(status.code().unwrap_or(1));
    }
}
