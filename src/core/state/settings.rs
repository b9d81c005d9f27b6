use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::launch::conflicts::{ConflictPolicy, GameType, GameTweak};

pub const SETTINGS_FILE: &str = "launch_settings.json";

/// Caller-tunable launch options, persisted as JSON next to the game.
///
/// Sessions hold these behind a lock and clone a snapshot per launch, so edits
/// made while a launch is running only apply to the next one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LaunchSettings {
    pub additional_jvm_args: Vec<String>,
    pub additional_game_args: Vec<String>,
    /// Replaces `<version>.json` when set.
    pub custom_vanilla_json: Option<String>,
    /// Replaces `<version>-forge-<forge>.json` when set.
    pub custom_forge_json: Option<String>,
    /// Window title; `Minecraft <version>` when empty.
    pub server_name: String,
    pub java_path: Option<PathBuf>,
    pub show_console: bool,
    pub game_type: GameType,
    pub tweaks: Vec<GameTweak>,
    pub conflict_rules: ConflictPolicy,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            additional_jvm_args: Vec::new(),
            additional_game_args: Vec::new(),
            custom_vanilla_json: None,
            custom_forge_json: None,
            server_name: String::new(),
            java_path: None,
            show_console: true,
            game_type: GameType::V1_13HigherForge,
            tweaks: Vec::new(),
            conflict_rules: ConflictPolicy::none(),
        }
    }
}

impl LaunchSettings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> LauncherResult<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(LauncherError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> LauncherResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| LauncherError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Conventional game directory (`<data dir>/.minecraft`).
pub fn default_game_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".minecraft")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::launch::conflicts::ConflictRule;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("settings-test-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = scratch("missing");
        let settings = LaunchSettings::load(&dir.join(SETTINGS_FILE)).unwrap();

        assert_eq!(settings, LaunchSettings::default());
        assert!(settings.show_console);
        assert!(settings.conflict_rules.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = scratch("roundtrip");
        let path = dir.join(SETTINGS_FILE);
        let settings = LaunchSettings {
            additional_jvm_args: vec!["-Xmx4G".into()],
            server_name: "Frogcraft".into(),
            custom_forge_json: Some("forge.json".into()),
            tweaks: vec![GameTweak::Forge],
            conflict_rules: ConflictPolicy::builtin(),
            ..LaunchSettings::default()
        };

        settings.save(&path).unwrap();
        assert_eq!(LaunchSettings::load(&path).unwrap(), settings);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_file_fills_remaining_fields() {
        let dir = scratch("partial");
        let path = dir.join(SETTINGS_FILE);
        std::fs::write(
            &path,
            r#"{
                "game_type": "v1_7_10",
                "conflict_rules": [
                    { "game_type": "v1_7_10", "requires_tweak": "forge", "file_contains": "guava", "version_markers": ["15"] }
                ]
            }"#,
        )
        .unwrap();

        let settings = LaunchSettings::load(&path).unwrap();
        assert_eq!(settings.game_type, GameType::V1_7_10);
        assert_eq!(
            settings.conflict_rules.rules(),
            &[ConflictRule::new(GameType::V1_7_10, "guava")
                .with_markers(["15"])
                .requiring_tweak(GameTweak::Forge)]
        );
        assert!(settings.additional_game_args.is_empty());
        assert!(settings.show_console);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = scratch("broken");
        let path = dir.join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = LaunchSettings::load(&path).unwrap_err();
        assert!(matches!(err, LauncherError::Json(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn default_game_dir_is_dot_minecraft() {
        let dir = default_game_dir();
        assert!(dir.ends_with(".minecraft"));
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        assert_eq!(dir.parent(), Some(data_dir.as_path()));
    }
}
