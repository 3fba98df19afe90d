//! End-to-end checks for the `exname` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Project layout with `proj/src/part.scad` and a `.git` marker at `proj/`.
struct Project {
    temp: TempDir,
}

impl Project {
    fn new() -> Self {
        let temp = TempDir::new().expect("temp dir");
        let src = temp.path().join("proj/src");
        std::fs::create_dir_all(&src).expect("create src");
        std::fs::create_dir(temp.path().join("proj/.git")).expect("create marker");
        std::fs::write(src.join("part.scad"), b"cube(1);").expect("write source");
        Self { temp }
    }

    fn root(&self) -> PathBuf {
        self.temp.path().join("proj")
    }

    fn src(&self) -> PathBuf {
        self.root().join("src")
    }

    fn file(&self) -> PathBuf {
        self.src().join("part.scad")
    }

    fn exname(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_exname"));
        cmd.env("XDG_CONFIG_HOME", self.temp.path().join("config"))
            .env_remove("EXNAME_LOG");
        cmd
    }

    fn resolve(&self, args: &[&str]) -> Output {
        self.exname()
            .arg("resolve")
            .arg("--file")
            .arg(self.file())
            .args(args)
            .output()
            .expect("run exname")
    }
}

fn stdout_line(output: &Output) -> String {
    assert!(
        output.status.success(),
        "exname failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"").expect("touch file");
    }
}

#[test]
fn resolves_workspace_basename_from_marker() {
    let project = Project::new();
    let output = project.resolve(&["--pattern", "${workspaceFolderBasename}/${fileBasename}"]);
    assert_eq!(stdout_line(&output), "proj/part.scad");
}

#[test]
fn explicit_root_overrides_marker_walk() {
    let project = Project::new();
    let src = project.src();
    let output = project.resolve(&[
        "--root",
        src.to_str().expect("utf-8 path"),
        "--pattern",
        "${relativeFile}",
    ]);
    assert_eq!(stdout_line(&output), "part.scad");
}

#[test]
fn resolves_next_version_from_existing_exports() {
    let project = Project::new();
    touch(&project.src(), &["part_v1.stl", "part_v3.stl", "part_v03.stl"]);
    let output = project.resolve(&["--pattern", "${fileBasenameNoExtension}_v${#}.stl"]);
    assert_eq!(stdout_line(&output), "part_v4.stl");
}

#[test]
fn default_pattern_uses_export_extension() {
    let project = Project::new();
    let output = project.resolve(&["--export-extension", "stl"]);
    assert_eq!(stdout_line(&output), "part.stl");
}

#[test]
fn json_report_carries_version_code() {
    let project = Project::new();
    let output = project.resolve(&[
        "--pattern",
        "exports/${fileBasenameNoExtension}-${#}.${exportExtension}",
        "--export-extension",
        "3mf",
        "--json",
    ]);
    let report: serde_json::Value =
        serde_json::from_str(&stdout_line(&output)).expect("parse JSON report");
    assert_eq!(report["resolved"], "exports/part-1.3mf");
    assert_eq!(report["version_code"], 1);
    assert_eq!(report["export_extension"], "3mf");
    assert!(project.src().join("exports").is_dir());
}

#[test]
fn unscannable_destination_keeps_marker_and_warns() {
    let project = Project::new();
    let output = project.resolve(&["--pattern", "missing/deeper/part_v${#}.stl"]);
    assert_eq!(stdout_line(&output), "missing/deeper/part_v${#}.stl");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Could not determine the next version number"),
        "stderr: {stderr}"
    );
}

#[test]
fn config_file_supplies_defaults() {
    let project = Project::new();
    let config = project.temp.path().join("custom.json");
    std::fs::write(
        &config,
        r#"{"schema_version": 1, "naming_pattern": "${fileBasenameNoExtension}.${exportExtension}", "default_export_extension": "amf"}"#,
    )
    .expect("write config");
    let output = project.resolve(&["--config", config.to_str().expect("utf-8 path")]);
    assert_eq!(stdout_line(&output), "part.amf");
}

#[test]
fn evaluate_prints_single_placeholder() {
    let project = Project::new();
    let output = project
        .exname()
        .args(["evaluate", "--name", "fileExtname", "--file"])
        .arg(project.file())
        .output()
        .expect("run exname");
    assert_eq!(stdout_line(&output), ".scad");

    let output = project
        .exname()
        .args(["evaluate", "--name", "bogus", "--file"])
        .arg(project.file())
        .output()
        .expect("run exname");
    assert_eq!(stdout_line(&output), "${bogus}");
}

#[test]
fn placeholders_and_config_commands_print_reference() {
    let project = Project::new();
    let output = project
        .exname()
        .arg("placeholders")
        .output()
        .expect("run exname");
    let listing = stdout_line(&output);
    assert!(listing.contains("${fileBasenameNoExtension}"));
    assert!(listing.contains("${#}"));

    let output = project.exname().arg("config").output().expect("run exname");
    let stub: serde_json::Value =
        serde_json::from_str(&stdout_line(&output)).expect("parse config stub");
    assert_eq!(stub["schema_version"], 1);
}
