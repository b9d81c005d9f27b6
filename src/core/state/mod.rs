pub mod settings;

pub use settings::{default_game_dir, LaunchSettings, SETTINGS_FILE};
