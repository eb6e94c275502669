mod audio_config;
mod config;
mod display_config;

pub use audio_config::AudioConfig;
pub use config::{Config, get_config_manager};
pub use display_config::DisplayConfig;
