use sketchpad::config::{Config, PanelPosition};
use sketchpad::draw::color::{BLACK, ORANGE};
use sketchpad::input::DrawingMode;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    (temp, path)
}

#[test]
fn load_from_applies_values_and_clamps() {
    let (_temp, path) = write_config(
        r#"
        [drawing]
        default_color = "orange"
        default_width = 0
        default_mode = "rectangle"

        [canvas]
        width = 800
        height = 20000

        [ui]
        panel_position = "right"

        [keybindings]
        clear_canvas = ["Ctrl+X"]
        "#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.drawing.default_color.to_color(), ORANGE);
    assert_eq!(config.drawing.default_width, 1);
    assert_eq!(config.drawing.default_mode, DrawingMode::Rectangle);
    assert_eq!(config.canvas.width, 800);
    assert_eq!(config.canvas.height, 4096);
    assert_eq!(config.ui.panel_position, PanelPosition::Right);
    assert!(config.keybindings.build_action_map().is_ok());
}

#[test]
fn load_from_reports_invalid_toml() {
    let (_temp, path) = write_config("[drawing\ndefault_width = 3");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn unknown_color_name_falls_back_to_black() {
    let (_temp, path) = write_config("[drawing]\ndefault_color = \"mauve\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.drawing.default_color.to_color(), BLACK);
}

#[test]
fn duplicate_keybindings_are_rejected() {
    let (_temp, path) = write_config(
        r#"
        [keybindings]
        erase = ["E"]
        clear_canvas = ["E"]
        "#,
    );
    let config = Config::load_from(&path).unwrap();
    let err = config.keybindings.build_action_map().unwrap_err();
    assert!(err.contains("Duplicate keybinding"));
}
