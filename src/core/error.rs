use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the launch engine.
/// Every module returns `Result<T, LauncherError>`.
#[derive(Debug, Error)]
pub enum LauncherError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Manifest ────────────────────────────────────────
    #[error("Malformed manifest {manifest}: {reason}")]
    MalformedManifest { manifest: String, reason: String },

    /// Never returned; rendered into the log when a declared library is skipped.
    #[error("Library not found on disk: {path:?}")]
    MissingLibrary { path: PathBuf },

    // ── Game folder ─────────────────────────────────────
    #[error("Missing/empty {what} ({path:?})")]
    MissingRequiredAsset { what: &'static str, path: PathBuf },

    // ── Process ─────────────────────────────────────────
    #[error("Failed to start {program}: {source}")]
    LaunchFailure {
        program: String,
        source: std::io::Error,
    },

    #[error("Launch callback failed: {0}")]
    CallbackFailure(String),
}

/// Convenience alias used throughout the crate.
pub type LauncherResult<T> = Result<T, LauncherError>;

impl LauncherError {
    pub fn malformed(manifest: impl Into<String>, reason: impl Into<String>) -> Self {
        LauncherError::MalformedManifest {
            manifest: manifest.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for LauncherError {
    fn from(source: std::io::Error) -> Self {
        LauncherError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
