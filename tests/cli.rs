use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd() -> Command {
    Command::cargo_bin("sketchpad").expect("binary exists")
}

#[test]
fn sketchpad_help_prints_usage() {
    sketchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fullscreen drawing surface for Wayland compositors",
        ))
        .stdout(predicate::str::contains("--mode"));
}

#[test]
fn running_requires_wayland_env() {
    sketchpad_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env_remove("RUST_LOG")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn unknown_mode_is_rejected() {
    sketchpad_cmd()
        .args(["--mode", "triangle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown drawing mode"));
}

#[test]
fn width_outside_range_is_rejected() {
    sketchpad_cmd()
        .args(["--width", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn malformed_color_is_rejected() {
    sketchpad_cmd()
        .args(["--color", "#12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--color"));
}

#[test]
fn init_config_writes_into_config_home() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("sketchpad").join("config.toml");

    sketchpad_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[drawing]"));
    assert!(written.contains("[keybindings]"));

    sketchpad_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn schema_binary_prints_json() {
    Command::cargo_bin("sketchpad-config-schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"keybindings\""))
        .stdout(predicate::str::contains("default_width"));
}
