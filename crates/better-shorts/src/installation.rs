//! First-run setup of the user data directory.

use better_shorts_core::AppPaths;

use notify_rust::Notification;
use tracing::{error, info, instrument, warn};

const APP_NAME: &str = "BetterShorts";

/// Create the data directory if needed and tell the user about it.
///
/// Never fails: problems are logged and shown as a notification.
#[instrument(skip(paths), fields(data_dir = ?paths.data_dir()))]
pub(crate) fn ensure_installed(paths: &AppPaths) {
    match paths.ensure_data_dir() {
        Ok(true) => {
            info!("First run, data directory created");
            notify(
                &format!("{} - First launch", APP_NAME),
                &format!(
                    "The BetterShorts folder was created in: {}",
                    paths.data_dir().display()
                ),
            );
        }
        Ok(false) => info!("BetterShorts installed"),
        Err(e) => {
            error!(error = ?e, "Failed to create data directory");
            notify(
                &format!("{} - Installation error", APP_NAME),
                "Could not create the BetterShorts folder. Check the permissions.",
            );
        }
    }
}

fn notify(summary: &str, body: &str) {
    if let Err(e) = Notification::new()
        .appname(APP_NAME)
        .summary(summary)
        .body(body)
        .show()
    {
        warn!(error = %e, "Desktop notification failed");
    }
}
