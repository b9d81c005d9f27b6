use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{LauncherError, LauncherResult};

/// Names of the game-directory entries the launcher relies on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderLayout {
    pub assets: String,
    pub libraries: String,
    pub natives: String,
    /// Main game artifact, relative to the game directory.
    pub main_jar: String,
}

impl Default for FolderLayout {
    fn default() -> Self {
        Self {
            assets: "assets".into(),
            libraries: "libraries".into(),
            natives: "natives".into(),
            main_jar: "client.jar".into(),
        }
    }
}

impl FolderLayout {
    pub fn new(
        assets: impl Into<String>,
        libraries: impl Into<String>,
        natives: impl Into<String>,
        main_jar: impl Into<String>,
    ) -> Self {
        Self {
            assets: assets.into(),
            libraries: libraries.into(),
            natives: natives.into(),
            main_jar: main_jar.into(),
        }
    }

    /// Verify that `game_dir` is populated: assets, libraries and natives must be
    /// non-empty directories and the main jar must exist. Reports the first failure.
    pub fn check(&self, game_dir: &Path) -> LauncherResult<()> {
        let folders = [
            ("assets folder", &self.assets),
            ("libraries folder", &self.libraries),
            ("natives folder", &self.natives),
        ];

        for (what, name) in folders {
            let path = game_dir.join(name);
            if !has_entries(&path)? {
                return Err(LauncherError::MissingRequiredAsset { what, path });
            }
        }

        let main_jar = game_dir.join(&self.main_jar);
        if !main_jar.exists() {
            return Err(LauncherError::MissingRequiredAsset {
                what: "main jar",
                path: main_jar,
            });
        }

        Ok(())
    }
}

fn has_entries(dir: &Path) -> LauncherResult<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    let mut entries = std::fs::read_dir(dir).map_err(|source| LauncherError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(entries.next().is_some())
}
