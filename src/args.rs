use clap::Parser;

// Positional preset names only; everything else comes from the presets file.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Launch aider with the presets configured for the current repository"
)]
pub struct Args {
    #[arg(
        value_name = "PRESET",
        help = "Presets to apply, in order, on top of the global and project defaults"
    )]
    pub presets: Vec<String>,
}
