use vader::commands::build::build_command;
use vader::preset::errors::PresetError;
use vader::preset::load_presets;

#[path = "common/mod.rs"]
mod common;

use common::strings;

const EXPECTED: [&str; 7] = ["program", "--a", "--b", "--read", "y.py", "x.py", "z.py"];

#[test]
fn toml_presets_match_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_presets(
        dir.path(),
        "presets.toml",
        r#"
[defaults]
options = ["--a"]

[projects.proj.defaults]
files = ["x.py"]

[projects.proj.p1]
options = ["--b"]
read_only = ["y.py"]

[projects.proj.p2]
files = ["z.py"]
"#,
    );

    let cmd = build_command(&path, "proj", &["p1", "p2"], "program").expect("builds");

    assert_eq!(cmd.argv(), strings(&EXPECTED));
}

#[test]
fn json_presets_match_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_presets(
        dir.path(),
        "presets.json",
        r#"{
  "defaults": { "options": ["--a"] },
  "projects": {
    "proj": {
      "defaults": { "files": ["x.py"] },
      "p1": { "options": ["--b"], "read_only": ["y.py"] },
      "p2": { "files": ["z.py"], "options": null }
    }
  }
}"#,
    );

    let cmd = build_command(&path, "proj", &["p1", "p2"], "program").expect("builds");

    assert_eq!(cmd.argv(), strings(&EXPECTED));
}

#[test]
fn yml_extension_is_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_presets(dir.path(), "presets.yml", common::EXAMPLE_PRESETS);

    let cmd = build_command(&path, "proj", &["p1", "p2"], "program").expect("builds");

    assert_eq!(cmd.argv(), strings(&EXPECTED));
}

#[test]
fn null_entries_are_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_presets(
        dir.path(),
        "presets.yaml",
        r#"
defaults:
projects:
  proj:
    defaults:
      options:
      files: [main.py]
    blank:
    partial:
      read_only:
  bare:
"#,
    );

    let presets = load_presets(&path).expect("loads");
    let cmd = build_command(&path, "proj", &["blank", "partial"], "program").expect("builds");

    assert_eq!(cmd.argv(), strings(&["program", "main.py"]));
    assert!(presets.global_defaults().is_empty());
    assert!(presets.project("bare").expect("known").presets.is_empty());
}

#[test]
fn empty_file_has_no_projects() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_presets(dir.path(), "presets.yaml", "\n# nothing yet\n");

    let presets = load_presets(&path).expect("loads");

    assert!(presets.projects.is_empty());
    assert!(presets.project("proj").is_err());
}

#[test]
fn quoted_arguments_keep_their_spelling() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_presets(
        dir.path(),
        "presets.yaml",
        r#"
projects:
  proj:
    notes:
      options: [--temperature, "1.0", --map-tokens, "2048"]
      files: ["2024.10", "0x1F", "true"]
"#,
    );

    let cmd = build_command(&path, "proj", &["notes"], "program").expect("builds");

    assert_eq!(
        cmd.args(),
        strings(&[
            "--temperature",
            "1.0",
            "--map-tokens",
            "2048",
            "2024.10",
            "0x1F",
            "true"
        ])
    );
}

#[test]
fn unquoted_numbers_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    for (name, layer) in [
        ("files.yaml", "files: [2024.10]"),
        ("hex.yaml", "files: [0x1F]"),
        ("options.yaml", "options: [--temperature, 1.0]"),
        ("bool.yaml", "read_only: [true]"),
    ] {
        let path = common::write_presets(
            dir.path(),
            name,
            &format!("projects:\n  proj:\n    notes:\n      {layer}\n"),
        );

        match load_presets(&path).unwrap_err() {
            PresetError::Parse { message, .. } => {
                assert!(message.contains("expected a string"), "{name}: {message}")
            }
            other => panic!("{name}: expected parse error, got {other:?}"),
        }
    }
}

#[test]
fn json_numbers_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_presets(
        dir.path(),
        "presets.json",
        r#"{ "defaults": { "options": ["--map-tokens", 2048] } }"#,
    );

    let err = load_presets(&path).unwrap_err();

    assert!(matches!(err, PresetError::Parse { .. }), "got {err:?}");
}

#[test]
fn defaults_can_be_requested_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_presets(dir.path(), "presets.yaml", common::EXAMPLE_PRESETS);

    let cmd = build_command(&path, "proj", &["defaults"], "program").expect("builds");

    assert_eq!(cmd.argv(), strings(&["program", "--a", "x.py", "x.py"]));
}

#[test]
fn project_keys_keep_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_presets(
        dir.path(),
        "presets.yaml",
        "projects:\n  zeta:\n    z:\n  alpha:\n    b:\n    a:\n",
    );

    let presets = load_presets(&path).expect("loads");

    assert_eq!(presets.project_names(), strings(&["zeta", "alpha"]));
    assert_eq!(
        presets.project("alpha").unwrap().preset_names(),
        strings(&["b", "a"])
    );
}
