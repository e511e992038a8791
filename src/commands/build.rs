use std::path::Path;

use crate::error::VaderError;
use crate::merge::{self, MergedCommand};
use crate::preset;

/// Load the presets file once, resolve the layers for `repo` and merge them.
///
/// Fails before merging if the repository or any preset name is unknown.
pub fn build_command<S: AsRef<str>>(
    presets_file: &Path,
    repo: &str,
    preset_names: &[S],
    program: &str,
) -> Result<MergedCommand, VaderError> {
    let presets = preset::load_presets(presets_file)?;
    let layers = presets.resolve(repo, preset_names)?;
    Ok(merge::merge(&layers, program))
}
