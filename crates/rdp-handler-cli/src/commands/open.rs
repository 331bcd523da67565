//! Open command - the protocol-handler path taken on link activation.

use anyhow::Result;
use rdp_handler::{Error, Invocation, Launcher};
use tracing::info;

use crate::cli::LaunchArgs;
use crate::cli_utils;
use crate::commands::guide;
use crate::notify::Notifier;

const INVALID_SCHEME_MESSAGE: &str = "Invalid RDP URL format. Please use 'rdp://<parameters>'.";

pub fn run(uri: Option<&str>, launch: &LaunchArgs, notifier: Notifier) -> Result<()> {
    let launcher = Launcher::new(cli_utils::launcher_config(launch));
    let mut invocation = Invocation::new(&launcher);

    match invocation.run(uri) {
        Ok(report) => {
            info!(pid = report.pid, stage = %invocation.stage(), "Launch complete");
            if report.cleanup.is_warning() {
                notifier.warning(&report.cleanup.to_string());
            }
            Ok(())
        }
        Err(Error::NoArguments) => {
            guide::show(notifier);
            Ok(())
        }
        Err(e @ Error::InvalidScheme { .. }) => {
            notifier.error(INVALID_SCHEME_MESSAGE);
            Err(e.into())
        }
        Err(e) => {
            notifier.error(&e.to_string());
            Err(e.into())
        }
    }
}
