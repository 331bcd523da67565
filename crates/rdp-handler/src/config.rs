//! Configuration constants and launcher settings.
//!
//! This module contains:
//! - URI scheme constants
//! - Launch defaults (client executable, cleanup delay, file naming)
//! - Guidance strings shown when no URI is given
//! - `LauncherConfig` and its builder for runtime overrides

use std::path::{Path, PathBuf};
use std::time::Duration;

/// URI scheme handled by this program.
pub mod scheme {
    /// Scheme name as registered with the OS.
    pub const NAME: &str = "rdp";

    /// Literal prefix every handled URI must start with (case-sensitive).
    pub const PREFIX: &str = "rdp://";

    /// Friendly name written to the scheme's registry key.
    pub const DISPLAY_NAME: &str = "URL:Remote Desktop Protocol";
}

/// Launch defaults.
pub mod launch {
    use std::time::Duration;

    /// Remote desktop client started with the generated file.
    #[cfg(target_os = "windows")]
    pub const CLIENT_EXECUTABLE: &str = "mstsc.exe";

    /// Remote desktop client started with the generated file.
    #[cfg(not(target_os = "windows"))]
    pub const CLIENT_EXECUTABLE: &str = "xfreerdp";

    /// Grace period between starting the client and deleting the generated file.
    pub const CLEANUP_DELAY: Duration = Duration::from_secs(5);

    /// Extension appended to the temporary file name.
    pub const CONFIG_EXTENSION: &str = "rdp";

    /// Prefix for temporary file names.
    pub const TEMP_PREFIX: &str = "rdp-handler-";
}

/// Text used by the getting-started guidance.
pub mod guide {
    /// Shape of a handled URI.
    pub const FORMAT_TEMPLATE: &str =
        "rdp://full%20address=s:<PC_NAME_OR_IP>:<PORT>&<PARAM1>=s:<VALUE1>&<PARAM2>=i:<VALUE2>";

    /// Link that can be pasted into Run to test the handler.
    pub const SAMPLE_URI: &str =
        "rdp://full%20address=s:localhost:3389&username=s:test&disable%20wallpaper=i:1";
}

/// Runtime settings for [`crate::launcher::Launcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    client_executable: String,
    cleanup_delay: Duration,
    temp_dir: Option<PathBuf>,
}

impl LauncherConfig {
    pub fn builder() -> LauncherConfigBuilder {
        LauncherConfigBuilder::default()
    }

    pub fn client_executable(&self) -> &str {
        &self.client_executable
    }

    pub fn cleanup_delay(&self) -> Duration {
        self.cleanup_delay
    }

    /// Directory for generated files; falls back to the OS temp directory.
    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            client_executable: launch::CLIENT_EXECUTABLE.to_string(),
            cleanup_delay: launch::CLEANUP_DELAY,
            temp_dir: None,
        }
    }
}

/// Builder for [`LauncherConfig`].
#[derive(Debug, Clone, Default)]
pub struct LauncherConfigBuilder {
    client_executable: Option<String>,
    cleanup_delay: Option<Duration>,
    temp_dir: Option<PathBuf>,
}

impl LauncherConfigBuilder {
    pub fn client_executable(mut self, executable: impl Into<String>) -> Self {
        self.client_executable = Some(executable.into());
        self
    }

    pub fn cleanup_delay(mut self, delay: Duration) -> Self {
        self.cleanup_delay = Some(delay);
        self
    }

    pub fn temp_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.temp_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn build(self) -> LauncherConfig {
        let defaults = LauncherConfig::default();
        LauncherConfig {
            client_executable: self
                .client_executable
                .unwrap_or(defaults.client_executable),
            cleanup_delay: self.cleanup_delay.unwrap_or(defaults.cleanup_delay),
            temp_dir: self.temp_dir,
        }
    }
}
