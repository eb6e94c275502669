use serde::{Deserialize, Serialize};
use snake_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub cell_size_px: u32,
    /// Directory holding `apple.jpg`, `block.jpg` and `background.jpg`.
    pub resources_dir: String,
    pub show_event_log: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !(8..=128).contains(&self.cell_size_px) {
            return Err("cell_size_px must be between 8 and 128".to_string());
        }
        if self.resources_dir.trim().is_empty() {
            return Err("resources_dir must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size_px: 40,
            resources_dir: "resources".to_string(),
            show_event_log: true,
        }
    }
}
