// ─── Placeholders ───
// `${name}` template variables found in version JSON argument lists.

use crate::core::error::LauncherResult;
use crate::core::game::LaunchEnvironment;
use crate::core::version::VersionManifest;

use super::classpath::{get_classpath_separator, safe_path_str};

/// Token that names the main game jar rather than a version string.
const VERSION_JAR_TOKEN: &str = "${version_name}.jar";

/// Manifests and environment a token is resolved against.
///
/// `base` is always the vanilla manifest. `processing` is the manifest whose
/// arguments are being expanded, except for game arguments where it is the overlay
/// for both manifests.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    pub env: &'a LaunchEnvironment,
    pub base: &'a VersionManifest,
    pub processing: &'a VersionManifest,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(
        env: &'a LaunchEnvironment,
        base: &'a VersionManifest,
        processing: &'a VersionManifest,
    ) -> Self {
        Self {
            env,
            base,
            processing,
        }
    }
}

/// Every placeholder the launcher knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    LibraryDirectory,
    ClasspathSeparator,
    AuthPlayerName,
    VersionName,
    GameDirectory,
    AssetsRoot,
    AssetsIndexName,
    AuthUuid,
    AuthAccessToken,
    UserType,
    VersionType,
    NativesDirectory,
}

impl Placeholder {
    pub const ALL: [Placeholder; 12] = [
        Placeholder::LibraryDirectory,
        Placeholder::ClasspathSeparator,
        Placeholder::AuthPlayerName,
        Placeholder::VersionName,
        Placeholder::GameDirectory,
        Placeholder::AssetsRoot,
        Placeholder::AssetsIndexName,
        Placeholder::AuthUuid,
        Placeholder::AuthAccessToken,
        Placeholder::UserType,
        Placeholder::VersionType,
        Placeholder::NativesDirectory,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Placeholder::LibraryDirectory => "${library_directory}",
            Placeholder::ClasspathSeparator => "${classpath_separator}",
            Placeholder::AuthPlayerName => "${auth_player_name}",
            Placeholder::VersionName => "${version_name}",
            Placeholder::GameDirectory => "${game_directory}",
            Placeholder::AssetsRoot => "${assets_root}",
            Placeholder::AssetsIndexName => "${assets_index_name}",
            Placeholder::AuthUuid => "${auth_uuid}",
            Placeholder::AuthAccessToken => "${auth_access_token}",
            Placeholder::UserType => "${user_type}",
            Placeholder::VersionType => "${version_type}",
            Placeholder::NativesDirectory => "${natives_directory}",
        }
    }

    /// Value for this placeholder. Fails only when a manifest lacks the field.
    pub fn resolve(self, ctx: &ResolutionContext<'_>) -> LauncherResult<String> {
        let env = ctx.env;
        let value = match self {
            Placeholder::LibraryDirectory => safe_path_str(&env.libraries_dir()),
            Placeholder::ClasspathSeparator => get_classpath_separator().to_string(),
            Placeholder::AuthPlayerName => env.auth().username.clone(),
            Placeholder::VersionName => ctx.processing.id()?.to_string(),
            Placeholder::GameDirectory => safe_path_str(env.game_dir()),
            Placeholder::AssetsRoot => safe_path_str(&env.assets_dir()),
            Placeholder::AssetsIndexName => ctx.base.asset_index_id()?.to_string(),
            Placeholder::AuthUuid => env.auth().uuid.clone(),
            Placeholder::AuthAccessToken => env.auth().access_token.clone(),
            Placeholder::UserType => "mojang".to_string(),
            Placeholder::VersionType => "release".to_string(),
            Placeholder::NativesDirectory => safe_path_str(&env.natives_dir()),
        };
        Ok(value)
    }
}

/// The set of placeholders substituted into argument tokens.
#[derive(Debug, Clone)]
pub struct PlaceholderRegistry {
    entries: Vec<Placeholder>,
    main_jar: String,
}

impl PlaceholderRegistry {
    /// Empty registry; only the `${version_name}.jar` rewrite applies.
    pub fn new(main_jar: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            main_jar: main_jar.into(),
        }
    }

    /// Registry with every known placeholder.
    pub fn standard(main_jar: impl Into<String>) -> Self {
        let mut registry = Self::new(main_jar);
        for placeholder in Placeholder::ALL {
            registry.register(placeholder);
        }
        registry
    }

    pub fn register(&mut self, placeholder: Placeholder) {
        if !self.entries.contains(&placeholder) {
            self.entries.push(placeholder);
        }
    }

    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.entries.contains(&placeholder)
    }

    /// Substitute every registered placeholder in `token`.
    ///
    /// Single left-to-right pass over `token`: resolved values are copied as-is
    /// and never scanned for further keys.
    pub fn resolve_all(&self, token: &str, ctx: &ResolutionContext<'_>) -> LauncherResult<String> {
        if token.contains(VERSION_JAR_TOKEN) {
            return Ok(token.replace(VERSION_JAR_TOKEN, &self.main_jar));
        }

        let mut resolved = String::with_capacity(token.len());
        let mut rest = token;
        while let Some(start) = rest.find("${") {
            resolved.push_str(&rest[..start]);
            let candidate = &rest[start..];
            match self.entries.iter().find(|p| candidate.starts_with(p.key())) {
                Some(placeholder) => {
                    resolved.push_str(&placeholder.resolve(ctx)?);
                    rest = &candidate[placeholder.key().len()..];
                }
                None => {
                    resolved.push_str("${");
                    rest = &candidate[2..];
                }
            }
        }
        resolved.push_str(rest);
        Ok(resolved)
    }
}
