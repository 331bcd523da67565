//! Common CLI utility functions shared across commands.

use std::time::Duration;

use rdp_handler::LauncherConfig;

use crate::cli::LaunchArgs;

/// Build launcher settings from command-line overrides.
pub fn launcher_config(args: &LaunchArgs) -> LauncherConfig {
    let mut builder = LauncherConfig::builder();
    if let Some(client) = &args.client {
        builder = builder.client_executable(client);
    }
    if let Some(secs) = args.cleanup_delay {
        builder = builder.cleanup_delay(Duration::from_secs(secs));
    }
    if let Some(dir) = &args.temp_dir {
        builder = builder.temp_dir(dir);
    }
    builder.build()
}
