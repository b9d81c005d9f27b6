// ─── Launch Task ───
// Spawns the game process described by a `LaunchSpecification`.

use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};

use tracing::{debug, info, warn};

use crate::core::error::{LauncherError, LauncherResult};

use super::profile::LaunchSpecification;

/// Error type hooks may return; it is surfaced as `CallbackFailure`.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

type BeforeSpawnFn = dyn FnMut(&mut Command) -> Result<(), HookError> + Send;
type AfterSpawnFn = dyn FnMut(&mut Child) -> Result<(), HookError> + Send;

/// Caller code run around process creation.
pub enum LaunchHook {
    /// Runs with the fully built command, before spawning.
    BeforeSpawn(Box<BeforeSpawnFn>),
    /// Runs with the child right after it started.
    AfterSpawn(Box<AfterSpawnFn>),
}

impl LaunchHook {
    pub fn before_spawn<F>(hook: F) -> Self
    where
        F: FnMut(&mut Command) -> Result<(), HookError> + Send + 'static,
    {
        LaunchHook::BeforeSpawn(Box::new(hook))
    }

    pub fn after_spawn<F>(hook: F) -> Self
    where
        F: FnMut(&mut Child) -> Result<(), HookError> + Send + 'static,
    {
        LaunchHook::AfterSpawn(Box::new(hook))
    }
}

impl std::fmt::Debug for LaunchHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchHook::BeforeSpawn(_) => f.write_str("LaunchHook::BeforeSpawn"),
            LaunchHook::AfterSpawn(_) => f.write_str("LaunchHook::AfterSpawn"),
        }
    }
}

/// Runs a [`LaunchSpecification`] as `java <jvm args> -cp <classpath> <main> <args>`.
#[derive(Debug)]
pub struct ExternalLauncher {
    spec: LaunchSpecification,
    java_bin: PathBuf,
}

impl ExternalLauncher {
    pub fn new(spec: LaunchSpecification) -> Self {
        Self {
            spec,
            java_bin: PathBuf::from(default_java_binary()),
        }
    }

    pub fn with_java(mut self, java_bin: impl Into<PathBuf>) -> Self {
        self.java_bin = java_bin.into();
        self
    }

    pub fn spec(&self) -> &LaunchSpecification {
        &self.spec
    }

    /// The command that `launch` would spawn.
    pub fn command(&self) -> Command {
        let spec = &self.spec;
        let mut cmd = Command::new(&self.java_bin);

        cmd.args(spec.jvm_args());
        cmd.arg("-cp").arg(spec.classpath());
        cmd.arg(spec.main_class());
        cmd.args(spec.program_args());
        cmd.current_dir(spec.working_directory());

        if spec.show_console() {
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());
        }

        cmd
    }

    /// Spawn the game and return immediately.
    pub fn launch(self, mut hook: Option<&mut LaunchHook>) -> LauncherResult<Child> {
        let mut cmd = self.command();

        if let Some(LaunchHook::BeforeSpawn(before)) = hook.as_deref_mut() {
            debug!("Running before-spawn hook");
            before(&mut cmd).map_err(|e| LauncherError::CallbackFailure(e.to_string()))?;
        }

        info!(
            "Launching '{}' with Java: {:?}",
            self.spec.window_title(),
            self.java_bin
        );
        debug!("Command (copy/paste): {}", format_command_for_logs(&cmd));

        let mut child = cmd.spawn().map_err(|source| LauncherError::LaunchFailure {
            program: self.java_bin.display().to_string(),
            source,
        })?;

        if let Some(LaunchHook::AfterSpawn(after)) = hook {
            debug!("Running after-spawn hook for pid {}", child.id());
            if let Err(e) = after(&mut child) {
                warn!("After-spawn hook failed, stopping pid {}", child.id());
                let _ = child.kill();
                let _ = child.wait();
                return Err(LauncherError::CallbackFailure(e.to_string()));
            }
        }

        Ok(child)
    }

    /// Spawn the game and block until it exits.
    pub fn launch_and_wait(self, hook: Option<&mut LaunchHook>) -> LauncherResult<ExitStatus> {
        let program = self.java_bin.display().to_string();
        let mut child = self.launch(hook)?;
        let status = child
            .wait()
            .map_err(|source| LauncherError::LaunchFailure { program, source })?;
        info!("Game exited with {}", status);
        Ok(status)
    }
}

fn default_java_binary() -> &'static str {
    if cfg!(target_os = "windows") {
        "java.exe"
    } else {
        "java"
    }
}

fn format_command_for_logs(cmd: &Command) -> String {
    let program = shell_escape(&cmd.get_program().to_string_lossy());
    let args = cmd
        .get_args()
        .map(|arg| shell_escape(&arg.to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ");

    if args.is_empty() {
        program
    } else {
        format!("{} {}", program, args)
    }
}

fn shell_escape(raw: &str) -> String {
    if raw.is_empty() {
        return "\"\"".to_string();
    }

    if raw.chars().all(|ch| {
        ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '/' | ':' | '\\' | '=')
    }) {
        return raw.to_string();
    }

    format!("\"{}\"", raw.replace('"', "\\\""))
}
