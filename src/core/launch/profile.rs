// ─── Launch Profile ───
// Merges the vanilla and Forge manifests into one ready-to-run description.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::error::LauncherResult;
use crate::core::game::LaunchEnvironment;
use crate::core::version::VersionManifest;

use super::arguments::{extract_game_args, extract_jvm_args};
use super::classpath::build_classpath;
use super::conflicts::LibraryFilter;
use super::placeholder::{PlaceholderRegistry, ResolutionContext};

/// Fully resolved process description. Built once by [`LaunchAssembler`],
/// consumed by value by the external launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpecification {
    main_class: String,
    classpath: String,
    jvm_args: Vec<String>,
    program_args: Vec<String>,
    window_title: String,
    working_directory: PathBuf,
    show_console: bool,
}

impl LaunchSpecification {
    pub fn main_class(&self) -> &str {
        &self.main_class
    }

    pub fn classpath(&self) -> &str {
        &self.classpath
    }

    pub fn jvm_args(&self) -> &[String] {
        &self.jvm_args
    }

    pub fn program_args(&self) -> &[String] {
        &self.program_args
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn show_console(&self) -> bool {
        self.show_console
    }
}

/// Builds a [`LaunchSpecification`] from a base (vanilla) and overlay (Forge) manifest.
pub struct LaunchAssembler<'a> {
    env: &'a LaunchEnvironment,
    registry: PlaceholderRegistry,
    filter: LibraryFilter,
    server_name: String,
    game_version: Option<String>,
    show_console: bool,
}

impl<'a> LaunchAssembler<'a> {
    /// Assembler with the standard placeholders and no library filtering.
    pub fn new(env: &'a LaunchEnvironment) -> Self {
        Self {
            env,
            registry: PlaceholderRegistry::standard(env.layout().main_jar.clone()),
            filter: LibraryFilter::allow_all(),
            server_name: String::new(),
            game_version: None,
            show_console: true,
        }
    }

    pub fn with_registry(mut self, registry: PlaceholderRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_filter(mut self, filter: LibraryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Window title override; an empty name falls back to `Minecraft <version>`.
    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = server_name.into();
        self
    }

    /// Version shown in the default window title. Without it the base id is used.
    pub fn with_game_version(mut self, version: impl Into<String>) -> Self {
        self.game_version = Some(version.into());
        self
    }

    pub fn with_show_console(mut self, show_console: bool) -> Self {
        self.show_console = show_console;
        self
    }

    /// Merge both manifests. Order is fixed: base before overlay before extras,
    /// since the game treats repeated flags as last-wins.
    pub fn assemble(
        &self,
        overlay: &VersionManifest,
        base: &VersionManifest,
        extra_jvm_args: &[String],
        extra_game_args: &[String],
    ) -> LauncherResult<LaunchSpecification> {
        let main_class = overlay.main_class()?.to_string();
        let window_title = if !self.server_name.is_empty() {
            self.server_name.clone()
        } else if let Some(version) = &self.game_version {
            format!("Minecraft {}", version)
        } else {
            format!("Minecraft {}", base.id()?)
        };

        let mut jvm_args = extract_jvm_args(
            base,
            &self.registry,
            &ResolutionContext::new(self.env, base, base),
        )?;
        jvm_args.extend(extract_jvm_args(
            overlay,
            &self.registry,
            &ResolutionContext::new(self.env, base, overlay),
        )?);
        jvm_args.extend_from_slice(extra_jvm_args);

        // Game arguments of both manifests see the overlay as the processing manifest.
        let game_ctx = ResolutionContext::new(self.env, base, overlay);
        let mut program_args = extract_game_args(base, &self.registry, &game_ctx)?;
        program_args.extend(extract_game_args(overlay, &self.registry, &game_ctx)?);
        program_args.extend_from_slice(extra_game_args);

        let classpath = build_classpath(
            overlay,
            base,
            &self.env.libraries_dir(),
            &self.env.main_jar_path(),
            &self.filter,
        );

        info!(
            "Assembled launch profile '{}' ({} jvm args, {} game args)",
            window_title,
            jvm_args.len(),
            program_args.len()
        );

        Ok(LaunchSpecification {
            main_class,
            classpath,
            jvm_args,
            program_args,
            window_title,
            working_directory: self.env.game_dir().to_path_buf(),
            show_console: self.show_console,
        })
    }
}
