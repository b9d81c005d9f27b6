// ─── Argument Extraction ───
// Turns a manifest's argument templates into concrete command-line tokens.

use crate::core::error::LauncherResult;
use crate::core::version::VersionManifest;

use super::placeholder::{PlaceholderRegistry, ResolutionContext};

/// Resolved `arguments.game` of `manifest`. Rule objects are skipped.
pub fn extract_game_args(
    manifest: &VersionManifest,
    registry: &PlaceholderRegistry,
    ctx: &ResolutionContext<'_>,
) -> LauncherResult<Vec<String>> {
    manifest
        .game_tokens()
        .map(|token| registry.resolve_all(token, ctx))
        .collect()
}

/// Resolved `arguments.jvm` of `manifest`, without the classpath switch and
/// launcher-identity properties. The external launcher supplies those itself.
pub fn extract_jvm_args(
    manifest: &VersionManifest,
    registry: &PlaceholderRegistry,
    ctx: &ResolutionContext<'_>,
) -> LauncherResult<Vec<String>> {
    manifest
        .jvm_tokens()
        .filter(|token| !is_suppressed_jvm_token(token))
        .map(|token| registry.resolve_all(token, ctx))
        .collect()
}

fn is_suppressed_jvm_token(token: &str) -> bool {
    token.contains("minecraft.launcher") || token.contains("${classpath}") || token == "-cp"
}
