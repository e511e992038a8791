use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// Key reserved for the defaults layer, both at the top level and per project.
pub const DEFAULTS_KEY: &str = "defaults";

static EMPTY_LAYER: Layer = Layer {
    options: Vec::new(),
    files: Vec::new(),
    read_only: Vec::new(),
};

/// Root of the presets file.
#[derive(Debug, Default, Deserialize)]
pub struct PresetFile {
    #[serde(default)]
    pub defaults: Option<Layer>,
    #[serde(default, deserialize_with = "projects_or_empty")]
    pub projects: IndexMap<String, Project>,
}

/// Everything configured for one repository: its defaults plus named presets.
#[derive(Debug, Default, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub defaults: Option<Layer>,
    #[serde(flatten)]
    pub presets: IndexMap<String, Option<Layer>>,
}

/// One source of launch arguments. Absent and `null` fields are empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layer {
    #[serde(default, deserialize_with = "argument_list")]
    pub options: Vec<String>,
    #[serde(default, deserialize_with = "argument_list")]
    pub files: Vec<String>,
    #[serde(default, deserialize_with = "argument_list")]
    pub read_only: Vec<String>,
}

impl Layer {
    pub fn empty() -> &'static Layer {
        &EMPTY_LAYER
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.files.is_empty() && self.read_only.is_empty()
    }

    /// Number of argv entries this layer contributes once merged.
    pub fn arg_count(&self) -> usize {
        self.options.len() + 2 * self.read_only.len() + self.files.len()
    }
}

impl PresetFile {
    pub fn global_defaults(&self) -> &Layer {
        self.defaults.as_ref().unwrap_or(&EMPTY_LAYER)
    }

    pub fn project_names(&self) -> Vec<String> {
        self.projects.keys().cloned().collect()
    }
}

impl Project {
    pub fn defaults(&self) -> &Layer {
        self.defaults.as_ref().unwrap_or(&EMPTY_LAYER)
    }

    /// Look up a named entry. `defaults` is an entry like any other when it is written out.
    pub fn preset(&self, name: &str) -> Option<&Layer> {
        if name == DEFAULTS_KEY {
            return self.defaults.as_ref();
        }
        self.presets
            .get(name)
            .map(|layer| layer.as_ref().unwrap_or(&EMPTY_LAYER))
    }

    /// Entry names in file order, `defaults` first when present.
    pub fn preset_names(&self) -> Vec<String> {
        self.defaults
            .as_ref()
            .map(|_| DEFAULTS_KEY.to_string())
            .into_iter()
            .chain(self.presets.keys().cloned())
            .collect()
    }
}

// Only real strings are accepted: a bare `2024.10` or `1.0` would lose its
// spelling if read as a number, so it has to be quoted in the presets file.
struct Argument(String);

impl<'de> Deserialize<'de> for Argument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArgumentVisitor;

        impl Visitor<'_> for ArgumentVisitor {
            type Value = Argument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string (quote numbers and booleans)")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Argument, E> {
                Ok(Argument(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Argument, E> {
                Ok(Argument(value))
            }
        }

        deserializer.deserialize_any(ArgumentVisitor)
    }
}

fn argument_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Argument>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.into_iter().map(|Argument(value)| value).collect())
}

fn projects_or_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, Project>, D::Error>
where
    D: Deserializer<'de>,
{
    let projects =
        Option::<IndexMap<String, Option<Project>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(projects
        .into_iter()
        .map(|(name, project)| (name, project.unwrap_or_default()))
        .collect())
}
