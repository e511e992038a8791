use std::fmt;

use super::config::Layer;

/// Where a layer came from, for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerSource {
    GlobalDefaults,
    ProjectDefaults,
    Preset(String),
}

impl fmt::Display for LayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerSource::GlobalDefaults => write!(f, "global defaults"),
            LayerSource::ProjectDefaults => write!(f, "project defaults"),
            LayerSource::Preset(name) => write!(f, "preset '{}'", name),
        }
    }
}

/// Layers in composition order: global defaults, project defaults, then the
/// requested presets in the order they were asked for.
///
/// Layers are borrowed from the loaded presets file, which outlives the set.
#[derive(Debug, Clone)]
pub struct LayerSet<'a> {
    layers: Vec<(LayerSource, &'a Layer)>,
}

impl<'a> LayerSet<'a> {
    pub fn new(global: &'a Layer, project: &'a Layer) -> Self {
        Self {
            layers: vec![
                (LayerSource::GlobalDefaults, global),
                (LayerSource::ProjectDefaults, project),
            ],
        }
    }

    pub fn push_preset(&mut self, name: &str, layer: &'a Layer) {
        self.layers.push((LayerSource::Preset(name.to_string()), layer));
    }

    pub fn with_preset(mut self, name: &str, layer: &'a Layer) -> Self {
        self.push_preset(name, layer);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Layer> + '_ {
        self.layers.iter().map(|(_, layer)| *layer)
    }

    pub fn sources(&self) -> impl Iterator<Item = (&LayerSource, &'a Layer)> + '_ {
        self.layers.iter().map(|(source, layer)| (source, *layer))
    }
}
