//! End-to-end tests for the `geocell` binary.
//!
//! Each test runs the built binary inside a temporary directory with its own
//! config file, so nothing touches the user's ~/.geocell.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.ini")
    }

    /// Run the CLI with `--config` pointing into the workspace.
    fn run(&self, args: &[&str]) -> Output {
        let config = self.config_path();
        Command::new(env!("CARGO_BIN_EXE_geocell"))
            .args(args)
            .arg("--config")
            .arg(&config)
            .current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute CLI command")
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_success(output: &Output, context: &str) {
    if !output.status.success() {
        panic!(
            "{} failed:\nstdout: {}\nstderr: {}",
            context,
            stdout(output),
            stderr(output)
        );
    }
}

const SEED: &str = "sx8d9x3s";
const WIDE_BBOX: &str = "42.69,23.31,42.71,23.33";

#[test]
fn test_encode_seed_coordinate() {
    let ws = Workspace::new();
    let output = ws.run(&["encode", "--lat", "42.66755", "--lon", "23.27127"]);
    assert_success(&output, "encode");
    assert_eq!(stdout(&output).trim(), SEED);
}

#[test]
fn test_encode_with_precision() {
    let ws = Workspace::new();
    let output = ws.run(&[
        "encode",
        "--lat",
        "57.64911",
        "--lon",
        "10.40744",
        "--precision",
        "11",
    ]);
    assert_success(&output, "encode --precision");
    assert_eq!(stdout(&output).trim(), "u4pruydqqvj");
}

#[test]
fn test_encode_rejects_bad_latitude() {
    let ws = Workspace::new();
    let output = ws.run(&["encode", "--lat", "-91", "--lon", "0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn test_decode_prints_bounds() {
    let ws = Workspace::new();
    let output = ws.run(&["decode", SEED]);
    assert_success(&output, "decode");
    let out = stdout(&output);
    assert!(out.contains("42.667465"), "{}", out);
    assert!(out.contains("23.271103"), "{}", out);
    assert!(out.contains("Precision: 8"), "{}", out);
}

#[test]
fn test_decode_invalid_code_fails() {
    let ws = Workspace::new();
    let output = ws.run(&["decode", "sx8a"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error:"));
}

#[test]
fn test_cells_inside_one_cell() {
    let ws = Workspace::new();
    let output = ws.run(&["cells", "--bbox", "42.6675,23.2712,42.6676,23.2713"]);
    assert_success(&output, "cells");
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("1 cells at precision 8"), "{}", out);
    assert_eq!(lines[1], SEED);
}

#[test]
fn test_cells_refuses_wide_viewport() {
    let ws = Workspace::new();
    let output = ws.run(&["cells", "--bbox", WIDE_BBOX]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Too many cells"), "{}", stderr(&output));
}

#[test]
fn test_cells_refusal_labels_lower_bound() {
    let ws = Workspace::new();

    let lattice = ws.run(&["cells", "--bbox", WIDE_BBOX]);
    assert!(stderr(&lattice).contains("(at least "), "{}", stderr(&lattice));

    let exact = ws.run(&["cells", "--bbox", WIDE_BBOX, "--coverage", "exact"]);
    assert_eq!(exact.status.code(), Some(1));
    assert!(
        stderr(&exact).contains("(6903, cap 3000)"),
        "{}",
        stderr(&exact)
    );
}

#[test]
fn test_cells_count_with_raised_cap() {
    let ws = Workspace::new();
    let output = ws.run(&["cells", "--bbox", WIDE_BBOX, "--max-cells", "20000", "--count"]);
    assert_success(&output, "cells --count");
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert!(!out.contains(SEED));
}

#[test]
fn test_render_seed_at_zoom_18() {
    let ws = Workspace::new();
    let output = ws.run(&["render", "--lat", "42.66755", "--lon", "23.27127", "--zoom", "18"]);
    assert_success(&output, "render");
    let out = stdout(&output);
    assert!(out.contains("Overlay shown: 1 of"), "{}", out);
    assert!(out.contains(SEED), "{}", out);
    assert!(ws.path().join("logs").join("geocell.log").exists());
}

#[test]
fn test_render_hidden_below_zoom_18() {
    let ws = Workspace::new();
    let output = ws.run(&["render", "--lat", "42.66755", "--lon", "23.27127", "--zoom", "17"]);
    assert_success(&output, "render zoom 17");
    assert!(stdout(&output).contains("Overlay hidden: zoom 17 is below 18"));
}

#[test]
fn test_render_wide_viewport_not_drawn() {
    let ws = Workspace::new();
    let output = ws.run(&["render", "--bbox", WIDE_BBOX, "--zoom", "18"]);
    assert_success(&output, "render wide");
    assert!(stdout(&output).contains("Overlay not drawn"));
}

#[test]
fn test_render_geojson() {
    let ws = Workspace::new();
    let output = ws.run(&[
        "render",
        "--lat",
        "42.66755",
        "--lon",
        "23.27127",
        "--zoom",
        "18",
        "--theme",
        "dark",
        "--format",
        "geojson",
    ]);
    assert_success(&output, "render geojson");

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["properties"]["code"], SEED);
    assert_eq!(features[0]["properties"]["stroke"], "#a0a0a0");
}

#[test]
fn test_render_with_explicit_active_cells() {
    let ws = Workspace::new();
    let output = ws.run(&[
        "render",
        "--lat",
        "42.66755",
        "--lon",
        "23.27127",
        "--active",
        "sx8d9x3t",
        "sx8d9x3u",
    ]);
    assert_success(&output, "render --active");
    let out = stdout(&output);
    assert!(!out.contains(&format!("  {}", SEED)), "{}", out);
}

#[test]
fn test_providers_lists_default() {
    let ws = Workspace::new();
    let output = ws.run(&["providers"]);
    assert_success(&output, "providers");
    let out = stdout(&output);
    assert!(out.contains("cartodb-voyager (default)"));
    assert!(out.contains("opentopomap"));
}

#[test]
fn test_config_set_then_get() {
    let ws = Workspace::new();

    let output = ws.run(&["config", "set", "overlay.max_cells", "1200"]);
    assert_success(&output, "config set");
    assert!(ws.config_path().exists());

    let output = ws.run(&["config", "get", "overlay.max_cells"]);
    assert_success(&output, "config get");
    assert_eq!(stdout(&output).trim(), "1200");
}

#[test]
fn test_config_set_invalid_value_fails() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "set", "map.theme", "sepia"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!ws.config_path().exists());
}

#[test]
fn test_config_unknown_key() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "get", "overlay.nope"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown configuration key"));
}

#[test]
fn test_config_init_and_path() {
    let ws = Workspace::new();

    let output = ws.run(&["config", "init"]);
    assert_success(&output, "config init");
    let written = std::fs::read_to_string(ws.config_path()).unwrap();
    assert!(written.contains("[overlay]"));

    let output = ws.run(&["config", "path"]);
    assert_success(&output, "config path");
    assert_eq!(
        PathBuf::from(stdout(&output).trim()),
        ws.config_path()
    );
}

#[test]
fn test_config_drives_render() {
    let ws = Workspace::new();
    assert_success(
        &ws.run(&["config", "set", "overlay.min_zoom", "16"]),
        "config set min_zoom",
    );

    let output = ws.run(&["render", "--lat", "42.66755", "--lon", "23.27127", "--zoom", "17"]);
    assert_success(&output, "render with config");
    assert!(stdout(&output).contains("Overlay shown"));
}

#[test]
fn test_config_list_shows_sections() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "list"]);
    assert_success(&output, "config list");
    let out = stdout(&output);
    for section in ["[map]", "[overlay]", "[active]", "[logging]"] {
        assert!(out.contains(section), "missing {}", section);
    }
    assert!(out.contains("debug_probe = (not set)"));
}
