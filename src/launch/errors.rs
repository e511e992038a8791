use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{program} command not found. Is it installed?")]
    TargetMissing { program: String },

    #[error("Failed to launch {program}: {source}.")]
    Failed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    pub fn from_io(program: &str, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => LaunchError::TargetMissing {
                program: program.to_string(),
            },
            _ => LaunchError::Failed {
                program: program.to_string(),
                source,
            },
        }
    }
}
