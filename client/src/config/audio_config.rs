use serde::{Deserialize, Serialize};
use snake_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    pub music_enabled: bool,
    pub effects_enabled: bool,
}

impl Validate for AudioConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_enabled: true,
            effects_enabled: true,
        }
    }
}
