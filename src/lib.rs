pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::auth::AuthContext;
pub use crate::core::error::{LauncherError, LauncherResult};
pub use crate::core::game::{FolderLayout, LaunchEnvironment};
pub use crate::core::launch::{
    ConflictPolicy, ConflictRule, ExternalLauncher, GameProfile, GameTweak, GameType, LaunchAssembler,
    LaunchHook, LaunchSession, LaunchSpecification, Placeholder, PlaceholderRegistry,
};
pub use crate::core::loaders::ForgeVersionDiscriminator;
pub use crate::core::state::LaunchSettings;
pub use crate::core::version::VersionManifest;

/// Install a `tracing` subscriber honouring `RUST_LOG`.
/// Does nothing if one is already installed.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,forge_launch=debug")),
        )
        .try_init();
}
