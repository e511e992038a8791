pub mod config;
pub mod errors;
pub mod layers;

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

pub use config::{Layer, PresetFile, Project};
use errors::PresetError;
pub use layers::{LayerSet, LayerSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Toml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, PresetError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("toml") => Ok(Format::Toml),
            Some("json") => Ok(Format::Json),
            _ => Err(PresetError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Nothing but whitespace and, where the format has them, comments.
    fn is_blank(self, content: &str) -> bool {
        content
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || (self != Format::Json && line.starts_with('#')))
    }
}

/// Read and parse the presets file. The format follows the file extension,
/// checked only once the file is known to exist.
///
/// A blank file is a valid file with nothing configured.
pub fn load_presets(path: &Path) -> Result<PresetFile, PresetError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PresetError::NotFound {
            path: path.to_path_buf(),
        },
        _ => PresetError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let format = Format::from_path(path)?;

    if format.is_blank(&content) {
        return Ok(PresetFile::default());
    }

    let parsed: Result<Option<PresetFile>, String> = match format {
        Format::Yaml => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(&content).map(Some).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
    };

    let presets = parsed
        .map_err(|message| PresetError::Parse {
            path: path.to_path_buf(),
            message: message.trim_end().to_string(),
        })?
        .unwrap_or_default();

    debug!(
        path = %path.display(),
        projects = presets.projects.len(),
        "loaded presets file"
    );
    Ok(presets)
}

impl PresetFile {
    pub fn project(&self, repo: &str) -> Result<&Project, PresetError> {
        self.projects
            .get(repo)
            .ok_or_else(|| PresetError::UnknownRepository {
                repo: repo.to_string(),
                known: self.project_names(),
            })
    }

    /// Build the layer set for `repo` with the named presets applied in order.
    ///
    /// The repository is checked before any preset, and every preset is
    /// checked before the set is returned, so an invalid name never yields a
    /// partial set.
    pub fn resolve<S: AsRef<str>>(
        &self,
        repo: &str,
        preset_names: &[S],
    ) -> Result<LayerSet<'_>, PresetError> {
        let project = self.project(repo)?;
        let mut layers = LayerSet::new(self.global_defaults(), project.defaults());

        for name in preset_names {
            let name = name.as_ref();
            let layer = project
                .preset(name)
                .ok_or_else(|| PresetError::UnknownPreset {
                    repo: repo.to_string(),
                    preset: name.to_string(),
                    available: project.preset_names(),
                })?;
            layers.push_preset(name, layer);
        }

        for (source, layer) in layers.sources() {
            debug!(
                %source,
                options = layer.options.len(),
                read_only = layer.read_only.len(),
                files = layer.files.len(),
                "resolved layer"
            );
        }
        Ok(layers)
    }
}
