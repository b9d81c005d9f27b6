// ─── Launch Session ───
// Entry point: locates the vanilla and Forge manifests, assembles and launches.

use std::path::{Path, PathBuf};
use std::process::Child;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::core::auth::AuthContext;
use crate::core::error::LauncherResult;
use crate::core::game::{FolderLayout, LaunchEnvironment};
use crate::core::state::{default_game_dir, LaunchSettings};
use crate::core::version::VersionManifest;

use super::conflicts::{GameProfile, LibraryFilter};
use super::profile::{LaunchAssembler, LaunchSpecification};
use super::task::{ExternalLauncher, LaunchHook};

/// Launches Forge on top of vanilla from an already populated game directory.
pub struct LaunchSession {
    env: LaunchEnvironment,
    settings: Arc<RwLock<LaunchSettings>>,
    hook: Option<LaunchHook>,
}

impl LaunchSession {
    pub fn new(
        game_dir: &Path,
        auth: AuthContext,
        layout: FolderLayout,
        settings: Arc<RwLock<LaunchSettings>>,
    ) -> Self {
        Self {
            env: LaunchEnvironment::new(game_dir, layout, auth.sanitized()),
            settings,
            hook: None,
        }
    }

    /// Session on the conventional `<data dir>/.minecraft` game directory.
    pub fn in_default_game_dir(
        auth: AuthContext,
        layout: FolderLayout,
        settings: Arc<RwLock<LaunchSettings>>,
    ) -> Self {
        Self::new(&default_game_dir(), auth, layout, settings)
    }

    pub fn environment(&self) -> &LaunchEnvironment {
        &self.env
    }

    /// Shared handle; edits apply from the next launch on.
    pub fn settings(&self) -> Arc<RwLock<LaunchSettings>> {
        Arc::clone(&self.settings)
    }

    pub fn set_hook(&mut self, hook: LaunchHook) {
        self.hook = Some(hook);
    }

    pub fn clear_hook(&mut self) -> Option<LaunchHook> {
        self.hook.take()
    }

    /// Check that the game directory holds everything the layout names.
    pub fn check_folders(&self) -> LauncherResult<()> {
        self.env.layout().check(self.env.game_dir())
    }

    /// Vanilla and Forge manifest paths for `version` / `forge_version`
    /// (e.g. `1.17.1` / `37.0.33`, not `1.17.1-37.0.33`).
    pub async fn manifest_paths(&self, version: &str, forge_version: &str) -> (PathBuf, PathBuf) {
        let settings = self.snapshot().await;
        self.resolve_manifest_paths(&settings, version, forge_version)
    }

    /// Read both manifests and build the launch specification.
    pub async fn prepare(
        &self,
        version: &str,
        forge_version: &str,
    ) -> LauncherResult<LaunchSpecification> {
        let settings = self.snapshot().await;
        self.prepare_with(&settings, version, forge_version).await
    }

    /// Prepare, run the hook if any, and spawn the game without waiting.
    pub async fn launch(&mut self, version: &str, forge_version: &str) -> LauncherResult<Child> {
        let settings = self.snapshot().await;
        let spec = self.prepare_with(&settings, version, forge_version).await?;

        let mut launcher = ExternalLauncher::new(spec);
        if let Some(java) = &settings.java_path {
            launcher = launcher.with_java(java);
        }
        launcher.launch(self.hook.as_mut())
    }

    async fn snapshot(&self) -> LaunchSettings {
        self.settings.read().await.clone()
    }

    fn resolve_manifest_paths(
        &self,
        settings: &LaunchSettings,
        version: &str,
        forge_version: &str,
    ) -> (PathBuf, PathBuf) {
        let game_dir = self.env.game_dir();
        let vanilla = match non_empty(&settings.custom_vanilla_json) {
            Some(name) => game_dir.join(name),
            None => game_dir.join(format!("{}.json", version)),
        };
        let forge = match non_empty(&settings.custom_forge_json) {
            Some(name) => game_dir.join(name),
            None => game_dir.join(format!("{}-forge-{}.json", version, forge_version)),
        };
        (vanilla, forge)
    }

    async fn prepare_with(
        &self,
        settings: &LaunchSettings,
        version: &str,
        forge_version: &str,
    ) -> LauncherResult<LaunchSpecification> {
        let (vanilla_path, forge_path) =
            self.resolve_manifest_paths(settings, version, forge_version);

        info!(
            "Preparing Forge {} for Minecraft {} from {:?}",
            forge_version,
            version,
            self.env.game_dir()
        );

        let (vanilla, forge) = tokio::try_join!(
            VersionManifest::load(&vanilla_path),
            VersionManifest::load(&forge_path),
        )?;

        let filter = LibraryFilter::new(
            settings.conflict_rules.clone(),
            GameProfile::new(version, settings.game_type, settings.tweaks.clone()),
        );

        LaunchAssembler::new(&self.env)
            .with_filter(filter)
            .with_server_name(settings.server_name.clone())
            .with_game_version(version)
            .with_show_console(settings.show_console)
            .assemble(
                &forge,
                &vanilla,
                &settings.additional_jvm_args,
                &settings.additional_game_args,
            )
    }
}

fn non_empty(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|n| !n.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LauncherError;
    use crate::core::launch::classpath::{get_classpath_separator, safe_path_str};
    use crate::core::launch::conflicts::{ConflictPolicy, GameType};

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("session-test-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("libraries")).unwrap();
        dir
    }

    fn write_manifests(dir: &Path, vanilla_name: &str, forge_name: &str) {
        let vanilla = serde_json::json!({
            "id": "1.17.1",
            "assetIndex": { "id": "1.17" },
            "arguments": {
                "game": ["--username", "${auth_player_name}", "--assetIndex", "${assets_index_name}"],
                "jvm": ["-Djava.library.path=${natives_directory}", "-cp", "${classpath}"]
            },
            "libraries": [
                { "downloads": { "artifact": { "path": "com/google/guava/guava/20.0/guava-20.0.jar" } } }
            ]
        });
        let forge = serde_json::json!({
            "id": "1.17.1-forge-37.0.33",
            "mainClass": "cpw.mods.modlauncher.Launcher",
            "arguments": {
                "game": ["--launchTarget", "forgeclient"],
                "jvm": ["-DforgeLoadingContext=true"]
            },
            "libraries": [
                { "downloads": { "artifact": { "path": "org/ow2/asm/asm/9.1/asm-9.1.jar" } } }
            ]
        });
        std::fs::write(dir.join(vanilla_name), vanilla.to_string()).unwrap();
        std::fs::write(dir.join(forge_name), forge.to_string()).unwrap();
    }

    fn session(dir: &Path, settings: LaunchSettings) -> LaunchSession {
        LaunchSession::new(
            dir,
            AuthContext::offline("Alex"),
            FolderLayout::default(),
            Arc::new(RwLock::new(settings)),
        )
    }

    #[tokio::test]
    async fn blank_credentials_are_filled_before_launch() {
        let dir = scratch("auth");
        let session = LaunchSession::new(
            &dir,
            AuthContext::new(" ", "", ""),
            FolderLayout::default(),
            Arc::new(RwLock::new(LaunchSettings::default())),
        );

        let auth = session.environment().auth();
        assert_eq!(auth.username, "Player");
        assert_eq!(auth.uuid, "00000000-0000-0000-0000-000000000000");
        assert_eq!(auth.access_token, "offline_access_token");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn default_session_uses_conventional_game_dir() {
        let session = LaunchSession::in_default_game_dir(
            AuthContext::offline("Alex"),
            FolderLayout::default(),
            Arc::new(RwLock::new(LaunchSettings::default())),
        );

        assert!(session.environment().game_dir().ends_with(".minecraft"));
        let (vanilla, _) = session.manifest_paths("1.17.1", "37.0.33").await;
        assert!(vanilla.starts_with(session.environment().game_dir()));
    }

    #[tokio::test]
    async fn manifest_paths_follow_naming_convention_unless_overridden() {
        let dir = scratch("paths");
        let session = session(&dir, LaunchSettings::default());

        let (vanilla, forge) = session.manifest_paths("1.17.1", "37.0.33").await;
        assert_eq!(vanilla, session.environment().game_dir().join("1.17.1.json"));
        assert_eq!(
            forge,
            session.environment().game_dir().join("1.17.1-forge-37.0.33.json")
        );

        {
            let handle = session.settings();
            let mut settings = handle.write().await;
            settings.custom_vanilla_json = Some("vanilla.json".into());
            settings.custom_forge_json = Some("  ".into());
        }
        let (vanilla, forge) = session.manifest_paths("1.17.1", "37.0.33").await;
        assert_eq!(vanilla, session.environment().game_dir().join("vanilla.json"));
        assert!(forge.ends_with("1.17.1-forge-37.0.33.json"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn prepare_reads_both_manifests_and_applies_settings() {
        let dir = scratch("prepare");
        write_manifests(&dir, "1.17.1.json", "1.17.1-forge-37.0.33.json");
        let libs = dir.join("libraries");
        for lib in [
            "com/google/guava/guava/20.0/guava-20.0.jar",
            "org/ow2/asm/asm/9.1/asm-9.1.jar",
        ] {
            let path = libs.join(lib);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, b"jar").unwrap();
        }

        let settings = LaunchSettings {
            additional_jvm_args: vec!["-Xmx3G".into()],
            additional_game_args: vec!["--fullscreen".into()],
            server_name: "Frogcraft".into(),
            game_type: GameType::V1_13HigherForge,
            conflict_rules: ConflictPolicy::builtin(),
            ..LaunchSettings::default()
        };
        let session = session(&dir, settings);

        let spec = session.prepare("1.17.1", "37.0.33").await.unwrap();

        assert_eq!(spec.main_class(), "cpw.mods.modlauncher.Launcher");
        assert_eq!(spec.window_title(), "Frogcraft");
        assert_eq!(
            spec.program_args(),
            &["--username", "Alex", "--assetIndex", "1.17", "--launchTarget", "forgeclient", "--fullscreen"]
        );
        assert_eq!(spec.jvm_args().last().map(String::as_str), Some("-Xmx3G"));
        assert!(!spec.jvm_args().iter().any(|a| a == "-cp"));

        // Built-in policy drops guava 20 for 1.13+ Forge.
        let asm = safe_path_str(&libs.join("org/ow2/asm/asm/9.1/asm-9.1.jar"));
        let main_jar = safe_path_str(&session.environment().main_jar_path());
        assert_eq!(
            spec.classpath(),
            format!("{asm}{}{main_jar}", get_classpath_separator())
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn prepare_uses_custom_manifest_names() {
        let dir = scratch("custom");
        write_manifests(&dir, "base.json", "overlay.json");

        let settings = LaunchSettings {
            custom_vanilla_json: Some("base.json".into()),
            custom_forge_json: Some("overlay.json".into()),
            ..LaunchSettings::default()
        };
        let spec = session(&dir, settings)
            .prepare("1.17.1", "ignored")
            .await
            .unwrap();

        assert_eq!(spec.window_title(), "Minecraft 1.17.1");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn missing_manifest_file_is_an_io_error() {
        let dir = scratch("missing");
        let err = session(&dir, LaunchSettings::default())
            .prepare("1.17.1", "37.0.33")
            .await
            .unwrap_err();

        assert!(matches!(err, LauncherError::Io { .. }));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn launch_surfaces_spawn_failure() {
        let dir = scratch("launch");
        write_manifests(&dir, "1.17.1.json", "1.17.1-forge-37.0.33.json");

        let settings = LaunchSettings {
            java_path: Some(dir.join("missing-java")),
            ..LaunchSettings::default()
        };
        let mut session = session(&dir, settings);
        session.set_hook(LaunchHook::before_spawn(|_| Ok(())));

        let err = session.launch("1.17.1", "37.0.33").await.unwrap_err();
        assert!(matches!(err, LauncherError::LaunchFailure { .. }));
        assert!(session.clear_hook().is_some());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
