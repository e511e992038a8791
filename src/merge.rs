use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::preset::LayerSet;

/// Program every merged command launches.
pub const PROGRAM: &str = "aider";

/// Token placed before each read-only file; the flag applies to one file only.
pub const READ_ONLY_FLAG: &str = "--read";

/// Final argument vector, program name first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedCommand {
    argv: Vec<String>,
}

impl MergedCommand {
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

/// Space-separated argv for log lines. Arguments that are empty or contain
/// whitespace are shown with Rust `{:?}` escaping, which is not shell quoting.
impl fmt::Display for MergedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, arg) in self.argv.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, "{:?}", arg)?;
            } else {
                write!(f, "{}", arg)?;
            }
        }
        Ok(())
    }
}

/// Flatten `layers` into one command line for `program`.
///
/// Category order is fixed: every layer's options, then every layer's
/// read-only files as `--read <file>` pairs, then every layer's files.
/// Within a category entries keep layer order and source order. Nothing is
/// deduplicated or sorted.
pub fn merge(layers: &LayerSet<'_>, program: &str) -> MergedCommand {
    let capacity = 1 + layers.iter().map(|l| l.arg_count()).sum::<usize>();
    let mut argv: Vec<String> = Vec::with_capacity(capacity);
    argv.push(program.to_string());

    argv.extend(layers.iter().flat_map(|l| l.options.iter().cloned()));

    for file in layers.iter().flat_map(|l| l.read_only.iter()) {
        argv.push(READ_ONLY_FLAG.to_string());
        argv.push(file.clone());
    }

    argv.extend(layers.iter().flat_map(|l| l.files.iter().cloned()));

    warn_read_only_overlap(layers);

    let command = MergedCommand { argv };
    debug!(%command, "merged command");
    command
}

/// Warn about paths that are both read-only and editable. Both are still passed through.
fn warn_read_only_overlap(layers: &LayerSet<'_>) {
    let mut read_only: HashMap<&str, Vec<String>> = HashMap::new();
    for (source, layer) in layers.sources() {
        for file in &layer.read_only {
            read_only
                .entry(file.as_str())
                .or_default()
                .push(source.to_string());
        }
    }
    if read_only.is_empty() {
        return;
    }

    let mut reported: Vec<&str> = Vec::new();
    for (source, layer) in layers.sources() {
        for file in &layer.files {
            let Some(ro_sources) = read_only.get(file.as_str()) else {
                continue;
            };
            if reported.contains(&file.as_str()) {
                continue;
            }
            reported.push(file.as_str());
            warn!(
                file = %file,
                editable_in = %source,
                read_only_in = %ro_sources.join(", "),
                "file is both read-only and editable; passing both"
            );
        }
    }
}
