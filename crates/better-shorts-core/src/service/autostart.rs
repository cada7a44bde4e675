use crate::CoreResult;

use tracing::info;

/// Registers the application to start with the user session.
pub trait AutostartRegistrar: Send + Sync {
    /// Turn autostart on or off.
    fn set_enabled(&self, enabled: bool) -> CoreResult<()>;
}

/// Keeps the preference in settings without touching the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsOnlyAutostart;

impl AutostartRegistrar for SettingsOnlyAutostart {
    fn set_enabled(&self, enabled: bool) -> CoreResult<()> {
        info!(enabled, "Autostart preference recorded");
        Ok(())
    }
}
