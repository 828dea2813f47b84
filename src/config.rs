use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "circle_chase.json";

/// Tunables read from a JSON file next to the working directory. Anything
/// missing (or a missing/garbled file) falls back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: [f32; 2],
    /// movement speed of the circle, in pixels per second
    pub step_speed: f32,
    pub save_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window: [800.0, 600.0],
            step_speed: 240.0,
            save_file_name: "output.txt".into(),
        }
    }
}

impl Settings {
    pub fn load_or_default(path: &Path) -> Settings {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("ignoring bad config {}: {}", path.display(), e);
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        }
    }
}
