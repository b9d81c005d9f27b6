use std::path::{Path, PathBuf};

use crate::core::auth::AuthContext;

use super::layout::FolderLayout;

/// Everything about the on-disk game and the player that placeholder
/// resolution needs besides the manifests themselves.
#[derive(Debug, Clone)]
pub struct LaunchEnvironment {
    game_dir: PathBuf,
    layout: FolderLayout,
    auth: AuthContext,
}

impl LaunchEnvironment {
    /// `game_dir` is made absolute so every derived path is too.
    pub fn new(game_dir: &Path, layout: FolderLayout, auth: AuthContext) -> Self {
        let game_dir = std::path::absolute(game_dir).unwrap_or_else(|_| game_dir.to_path_buf());
        Self {
            game_dir,
            layout,
            auth,
        }
    }

    pub fn game_dir(&self) -> &Path {
        &self.game_dir
    }

    pub fn layout(&self) -> &FolderLayout {
        &self.layout
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn libraries_dir(&self) -> PathBuf {
        self.game_dir.join(&self.layout.libraries)
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.game_dir.join(&self.layout.assets)
    }

    pub fn natives_dir(&self) -> PathBuf {
        self.game_dir.join(&self.layout.natives)
    }

    pub fn main_jar_path(&self) -> PathBuf {
        self.game_dir.join(&self.layout.main_jar)
    }
}
