//! Keybinding configuration types and parsing.
//!
//! Every control of the drawing surface (mode selector, width, colors, clear
//! and erase) is reachable through a configurable keyboard shortcut.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit
    Exit,

    // Drawing mode selection
    SelectLine,
    SelectRectangle,
    SelectCircle,
    CycleMode,

    // Canvas actions
    ClearCanvas,
    Erase,

    // Stroke width
    IncreaseWidth,
    DecreaseWidth,

    // UI toggles
    ToggleHelp,
    TogglePanel,

    // Color selections
    EnterColorHex,
    SetColorRed,
    SetColorGreen,
    SetColorBlue,
    SetColorYellow,
    SetColorOrange,
    SetColorPink,
    SetColorWhite,
    SetColorBlack,
}

/// A single keybinding: a key with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+W" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let s_normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");
        let parts: Vec<&str> = s_normalized.split('+').collect();

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in parts {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]: the key itself is '+'
        let key = key_parts.join("+");
        let key = if key.chars().all(|c| c == '+') {
            "+".to_string()
        } else {
            key
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// select_circle = ["3", "C"]
/// clear_canvas = ["X"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_select_line")]
    pub select_line: Vec<String>,

    #[serde(default = "default_select_rectangle")]
    pub select_rectangle: Vec<String>,

    #[serde(default = "default_select_circle")]
    pub select_circle: Vec<String>,

    #[serde(default = "default_cycle_mode")]
    pub cycle_mode: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_erase")]
    pub erase: Vec<String>,

    #[serde(default = "default_increase_width")]
    pub increase_width: Vec<String>,

    #[serde(default = "default_decrease_width")]
    pub decrease_width: Vec<String>,

    #[serde(default = "default_toggle_help")]
    pub toggle_help: Vec<String>,

    #[serde(default = "default_toggle_panel")]
    pub toggle_panel: Vec<String>,

    #[serde(default = "default_enter_color_hex")]
    pub enter_color_hex: Vec<String>,

    #[serde(default = "default_set_color_red")]
    pub set_color_red: Vec<String>,

    #[serde(default = "default_set_color_green")]
    pub set_color_green: Vec<String>,

    #[serde(default = "default_set_color_blue")]
    pub set_color_blue: Vec<String>,

    #[serde(default = "default_set_color_yellow")]
    pub set_color_yellow: Vec<String>,

    #[serde(default = "default_set_color_orange")]
    pub set_color_orange: Vec<String>,

    #[serde(default = "default_set_color_pink")]
    pub set_color_pink: Vec<String>,

    #[serde(default = "default_set_color_white")]
    pub set_color_white: Vec<String>,

    #[serde(default = "default_set_color_black")]
    pub set_color_black: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            select_line: default_select_line(),
            select_rectangle: default_select_rectangle(),
            select_circle: default_select_circle(),
            cycle_mode: default_cycle_mode(),
            clear_canvas: default_clear_canvas(),
            erase: default_erase(),
            increase_width: default_increase_width(),
            decrease_width: default_decrease_width(),
            toggle_help: default_toggle_help(),
            toggle_panel: default_toggle_panel(),
            enter_color_hex: default_enter_color_hex(),
            set_color_red: default_set_color_red(),
            set_color_green: default_set_color_green(),
            set_color_blue: default_set_color_blue(),
            set_color_yellow: default_set_color_yellow(),
            set_color_orange: default_set_color_orange(),
            set_color_pink: default_set_color_pink(),
            set_color_white: default_set_color_white(),
            set_color_black: default_set_color_black(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let mut insert_binding = |binding_str: &str, action: Action| -> Result<(), String> {
            let binding = KeyBinding::parse(binding_str)?;
            if let Some(existing_action) = map.insert(binding.clone(), action) {
                return Err(format!(
                    "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                    binding_str, existing_action, action
                ));
            }
            Ok(())
        };

        for binding_str in &self.exit {
            insert_binding(binding_str, Action::Exit)?;
        }

        for binding_str in &self.select_line {
            insert_binding(binding_str, Action::SelectLine)?;
        }

        for binding_str in &self.select_rectangle {
            insert_binding(binding_str, Action::SelectRectangle)?;
        }

        for binding_str in &self.select_circle {
            insert_binding(binding_str, Action::SelectCircle)?;
        }

        for binding_str in &self.cycle_mode {
            insert_binding(binding_str, Action::CycleMode)?;
        }

        for binding_str in &self.clear_canvas {
            insert_binding(binding_str, Action::ClearCanvas)?;
        }

        for binding_str in &self.erase {
            insert_binding(binding_str, Action::Erase)?;
        }

        for binding_str in &self.increase_width {
            insert_binding(binding_str, Action::IncreaseWidth)?;
        }

        for binding_str in &self.decrease_width {
            insert_binding(binding_str, Action::DecreaseWidth)?;
        }

        for binding_str in &self.toggle_help {
            insert_binding(binding_str, Action::ToggleHelp)?;
        }

        for binding_str in &self.toggle_panel {
            insert_binding(binding_str, Action::TogglePanel)?;
        }

        for binding_str in &self.enter_color_hex {
            insert_binding(binding_str, Action::EnterColorHex)?;
        }

        for binding_str in &self.set_color_red {
            insert_binding(binding_str, Action::SetColorRed)?;
        }

        for binding_str in &self.set_color_green {
            insert_binding(binding_str, Action::SetColorGreen)?;
        }

        for binding_str in &self.set_color_blue {
            insert_binding(binding_str, Action::SetColorBlue)?;
        }

        for binding_str in &self.set_color_yellow {
            insert_binding(binding_str, Action::SetColorYellow)?;
        }

        for binding_str in &self.set_color_orange {
            insert_binding(binding_str, Action::SetColorOrange)?;
        }

        for binding_str in &self.set_color_pink {
            insert_binding(binding_str, Action::SetColorPink)?;
        }

        for binding_str in &self.set_color_white {
            insert_binding(binding_str, Action::SetColorWhite)?;
        }

        for binding_str in &self.set_color_black {
            insert_binding(binding_str, Action::SetColorBlack)?;
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybindings
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string(), "Ctrl+Q".to_string()]
}

fn default_select_line() -> Vec<String> {
    vec!["1".to_string(), "L".to_string()]
}

fn default_select_rectangle() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_select_circle() -> Vec<String> {
    vec!["3".to_string()]
}

fn default_cycle_mode() -> Vec<String> {
    vec!["Tab".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["X".to_string()]
}

fn default_erase() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_increase_width() -> Vec<String> {
    vec!["+".to_string(), "=".to_string()]
}

fn default_decrease_width() -> Vec<String> {
    vec!["-".to_string(), "_".to_string()]
}

fn default_toggle_help() -> Vec<String> {
    vec!["F10".to_string()]
}

fn default_toggle_panel() -> Vec<String> {
    vec!["F12".to_string()]
}

fn default_enter_color_hex() -> Vec<String> {
    vec!["#".to_string(), "H".to_string()]
}

fn default_set_color_red() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_set_color_green() -> Vec<String> {
    vec!["G".to_string()]
}

fn default_set_color_blue() -> Vec<String> {
    vec!["B".to_string()]
}

fn default_set_color_yellow() -> Vec<String> {
    vec!["Y".to_string()]
}

fn default_set_color_orange() -> Vec<String> {
    vec!["O".to_string()]
}

fn default_set_color_pink() -> Vec<String> {
    vec!["P".to_string()]
}

fn default_set_color_white() -> Vec<String> {
    vec!["W".to_string()]
}

fn default_set_color_black() -> Vec<String> {
    vec!["K".to_string()]
}
