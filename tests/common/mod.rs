#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vader::launch::Launcher;
use vader::launch::errors::LaunchError;
use vader::merge::MergedCommand;
use vader::settings::Settings;

/// Presets used by the ordering examples: global `--a`, project file `x.py`,
/// `p1` adds an option and a read-only file, `p2` adds an editable file.
pub const EXAMPLE_PRESETS: &str = r#"
defaults:
  options: ["--a"]
projects:
  proj:
    defaults:
      files: ["x.py"]
    p1:
      options: ["--b"]
      read_only: ["y.py"]
    p2:
      files: ["z.py"]
  other:
    defaults:
      options: ["--c"]
      files: ["m.py"]
"#;

pub fn write_presets(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("write presets file");
    path
}

/// Create an empty git repository named `name` under `parent`.
pub fn init_repo(parent: &Path, name: &str) -> PathBuf {
    let path = parent.join(name);
    fs::create_dir_all(&path).expect("create repo dir");
    git2::Repository::init(&path).expect("init repo");
    path
}

/// Scratch dir holding a `proj` repository and the example presets file.
pub struct Workspace {
    pub dir: TempDir,
    pub repo: PathBuf,
    pub presets: PathBuf,
}

impl Workspace {
    pub fn new(presets: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = init_repo(dir.path(), "proj");
        let presets = write_presets(dir.path(), "presets.yaml", presets);
        Workspace { dir, repo, presets }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            presets_file: self.presets.clone(),
            env_file: self.dir.path().join(".env"),
            work_dir: self.repo.clone(),
        }
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Records every command instead of replacing the process.
#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: RefCell<Vec<Vec<String>>>,
}

impl RecordingLauncher {
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.launched.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, command: &MergedCommand) -> Result<(), LaunchError> {
        self.launched.borrow_mut().push(command.argv().to_vec());
        Ok(())
    }
}

/// Give `repo` a first commit so branches and worktrees can be made from it.
pub fn commit_initial(repo: &git2::Repository) {
    let sig = git2::Signature::now("vader", "vader@example.com").expect("signature");
    let tree_id = repo.index().expect("index").write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .expect("commit");
}
