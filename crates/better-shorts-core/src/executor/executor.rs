use crate::{
    CoreResult, ShortcutError, ShortcutKind, ShortcutRecord,
    executor::{ExecutionPolicy, Launcher, SystemLauncher},
};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tracing::{error, info, instrument, warn};

/// Performs the action of a fired shortcut.
#[derive(Clone)]
pub struct Executor {
    launcher: Arc<dyn Launcher>,
    policy: ExecutionPolicy,
}

impl Executor {
    /// Executor using the desktop environment.
    pub fn new(policy: ExecutionPolicy) -> Self {
        Self::with_launcher(Arc::new(SystemLauncher), policy)
    }

    /// Executor using a custom launcher.
    pub fn with_launcher(launcher: Arc<dyn Launcher>, policy: ExecutionPolicy) -> Self {
        if policy.allow_code {
            warn!(
                allowed_programs = ?policy.allowed_programs,
                "Code shortcuts enabled: stored commands run with this process's privileges"
            );
        }

        Self { launcher, policy }
    }

    /// The policy gating `code` shortcuts.
    pub fn policy(&self) -> &ExecutionPolicy {
        &self.policy
    }

    /// Run `record`. Failures are logged and never propagate.
    #[instrument(skip(self, record), fields(keys = %record.keys, kind = %record.kind))]
    pub fn execute(&self, record: &ShortcutRecord) {
        match self.try_execute(record) {
            Ok(()) => info!("Shortcut executed"),
            Err(e) => error!(error = %e, "Shortcut failed"),
        }
    }

    /// Run `record`, returning any failure.
    #[track_caller]
    pub fn try_execute(&self, record: &ShortcutRecord) -> CoreResult<()> {
        let target = record.target.trim();

        if target.is_empty() && !matches!(record.kind, ShortcutKind::Other(_)) {
            return Err(ShortcutError::EmptyTarget {
                keys: record.keys.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let launched = match &record.kind {
            ShortcutKind::App => self.launcher.open_path(target),
            ShortcutKind::Url => self.launcher.open_url(target),
            ShortcutKind::Code => return self.run_code(target),
            ShortcutKind::Other(kind) => {
                warn!(kind = %kind, "Unknown shortcut type, nothing to do");
                return Ok(());
            }
        };

        launched.map_err(|source| ShortcutError::LaunchFailed {
            target: target.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn run_code(&self, command: &str) -> CoreResult<()> {
        if !self.policy.allow_code {
            return Err(ShortcutError::CodeExecutionDisabled {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let launched = if self.policy.allowed_programs.is_empty() {
            self.launcher.spawn_shell(command)
        } else {
            let mut parts = command.split_whitespace();
            let program = parts.next().unwrap_or_default();

            if !self.policy.permits(program) {
                return Err(ShortcutError::ProgramNotAllowed {
                    program: program.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            let args: Vec<&str> = parts.collect();
            self.launcher.spawn(program, &args)
        };

        launched.map_err(|source| ShortcutError::LaunchFailed {
            target: command.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
