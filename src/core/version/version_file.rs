// ─── Version File ───
// Parses a vanilla or Forge version JSON into the subset the launch engine reads.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::error::{LauncherError, LauncherResult};

/// A parsed version JSON (vanilla base or Forge overlay).
///
/// `arguments` and `libraries` are required when loading. `id`, `mainClass` and
/// `assetIndex` are only checked when something asks for them, because the base
/// manifest has no use for a main class and the overlay rarely carries an asset index.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionManifest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub main_class: Option<String>,
    #[serde(default)]
    pub asset_index: Option<AssetIndexInfo>,
    pub arguments: Arguments,
    pub libraries: Vec<LibraryEntry>,
    #[serde(skip)]
    origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetIndexInfo {
    pub id: String,
}

/// Argument templates. Entries are either plain strings or rule objects;
/// only the strings are used.
#[derive(Debug, Clone, Deserialize)]
pub struct Arguments {
    pub game: Vec<serde_json::Value>,
    pub jvm: Vec<serde_json::Value>,
}

// ─── Library Entry ───

#[derive(Debug, Clone, Deserialize)]
pub struct LibraryEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub downloads: LibraryDownloads,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibraryDownloads {
    pub artifact: LibraryArtifact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibraryArtifact {
    pub path: String,
}

impl LibraryEntry {
    /// Path relative to the libraries root.
    pub fn relative_path(&self) -> &str {
        &self.downloads.artifact.path
    }
}

impl VersionManifest {
    /// Parse a manifest from raw JSON. `origin` names it in error messages.
    pub fn parse(raw: &str, origin: impl Into<String>) -> LauncherResult<Self> {
        let origin = origin.into();
        let mut manifest: VersionManifest = serde_json::from_str(raw)
            .map_err(|e| LauncherError::malformed(origin.clone(), e.to_string()))?;
        manifest.origin = origin;
        Ok(manifest)
    }

    pub fn from_value(value: serde_json::Value, origin: impl Into<String>) -> LauncherResult<Self> {
        let origin = origin.into();
        let mut manifest: VersionManifest = serde_json::from_value(value)
            .map_err(|e| LauncherError::malformed(origin.clone(), e.to_string()))?;
        manifest.origin = origin;
        Ok(manifest)
    }

    /// Read and parse a manifest file.
    pub async fn load(path: &Path) -> LauncherResult<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LauncherError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let manifest = Self::parse(&raw, path.display().to_string())?;
        debug!(
            "Loaded manifest {} ({} libraries, {} game args, {} jvm args)",
            manifest.origin,
            manifest.libraries.len(),
            manifest.arguments.game.len(),
            manifest.arguments.jvm.len()
        );
        Ok(manifest)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn id(&self) -> LauncherResult<&str> {
        self.id
            .as_deref()
            .ok_or_else(|| self.missing_field("id"))
    }

    pub fn main_class(&self) -> LauncherResult<&str> {
        self.main_class
            .as_deref()
            .ok_or_else(|| self.missing_field("mainClass"))
    }

    pub fn asset_index_id(&self) -> LauncherResult<&str> {
        self.asset_index
            .as_ref()
            .map(|index| index.id.as_str())
            .ok_or_else(|| self.missing_field("assetIndex.id"))
    }

    /// String tokens of `arguments.game`, in declaration order.
    pub fn game_tokens(&self) -> impl Iterator<Item = &str> {
        self.arguments.game.iter().filter_map(|v| v.as_str())
    }

    /// String tokens of `arguments.jvm`, in declaration order.
    pub fn jvm_tokens(&self) -> impl Iterator<Item = &str> {
        self.arguments.jvm.iter().filter_map(|v| v.as_str())
    }

    fn missing_field(&self, field: &str) -> LauncherError {
        LauncherError::malformed(self.origin.clone(), format!("missing field `{}`", field))
    }
}
