use std::{
    io,
    process::{Command, Stdio},
};

use tracing::{debug, warn};

/// OS side effects the executor needs.
pub trait Launcher: Send + Sync {
    /// Open a filesystem path with its default handler.
    fn open_path(&self, path: &str) -> io::Result<()>;

    /// Open a URL with the default browser or handler.
    fn open_url(&self, url: &str) -> io::Result<()>;

    /// Start `program` with `args` without waiting for it.
    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<()>;

    /// Run `command` through the platform shell without waiting for it.
    fn spawn_shell(&self, command: &str) -> io::Result<()>;
}

/// [`Launcher`] backed by the desktop environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn detach(command: &mut Command) -> io::Result<()> {
        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let pid = child.id();
        debug!(pid, "Process spawned");

        // Reap in the background so finished children do not linger.
        std::thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => warn!(pid, %status, "Shortcut command exited"),
            Ok(_) => {}
            Err(e) => warn!(pid, error = %e, "Failed to wait for shortcut command"),
        });

        Ok(())
    }
}

impl Launcher for SystemLauncher {
    fn open_path(&self, path: &str) -> io::Result<()> {
        open::that_detached(path)
    }

    fn open_url(&self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }

    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<()> {
        Self::detach(Command::new(program).args(args))
    }

    fn spawn_shell(&self, command: &str) -> io::Result<()> {
        #[cfg(target_os = "windows")]
        {
            Self::detach(Command::new("cmd").args(["/C", command]))
        }
        #[cfg(not(target_os = "windows"))]
        {
            Self::detach(Command::new("sh").args(["-c", command]))
        }
    }
}
