//! System URI opener -- hands a URI to the host platform's default handler.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::traits::UriOpener;

/// Opens URIs with the platform opener (`xdg-open`, `open`, or
/// `cmd /C start`), detached. Spawn failures are logged and swallowed;
/// callers never observe the outcome.
pub struct SystemUriOpener;

impl SystemUriOpener {
    pub fn new() -> Self {
        Self
    }

    fn command(uri: &str) -> std::process::Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = std::process::Command::new("open");
            cmd.arg(uri);
            cmd
        }
        #[cfg(target_os = "windows")]
        {
            let mut cmd = std::process::Command::new("cmd");
            cmd.args(["/C", "start", "", uri]);
            cmd
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = std::process::Command::new("xdg-open");
            cmd.arg(uri);
            cmd
        }
    }
}

impl Default for SystemUriOpener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UriOpener for SystemUriOpener {
    async fn open(&self, uri: &str) {
        match Self::command(uri).spawn() {
            Ok(_) => debug!(uri, "handed uri to system opener"),
            Err(e) => warn!(uri, error = %e, "failed to spawn system opener"),
        }
    }
}
