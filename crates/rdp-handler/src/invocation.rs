//! One protocol-handler activation, from argument check to cleanup.
//!
//! ```text
//! Idle → ArgsChecked → UriValidated → Translated → FileWritten
//!      → ClientSpawned → CleanupAttempted → Done
//! ```
//!
//! A failure stops the flow in one of the terminal `Rejected*` / `*Failed`
//! stages. Nothing is retried.

use strum::{Display, IntoStaticStr};
use tracing::debug;

use crate::error::{Error, Result};
use crate::launcher::{ClientSpawner, LaunchReport, Launcher};
use crate::translator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum Stage {
    Idle,
    ArgsChecked,
    UriValidated,
    Translated,
    FileWritten,
    ClientSpawned,
    CleanupAttempted,
    Done,
    RejectedNoArgs,
    RejectedBadScheme,
    WriteFailed,
    SpawnFailed,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done) || self.is_failure()
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::RejectedNoArgs | Self::RejectedBadScheme | Self::WriteFailed | Self::SpawnFailed
        )
    }
}

/// Drives a single activation through a [`Launcher`].
pub struct Invocation<'a, S: ClientSpawner> {
    launcher: &'a Launcher<S>,
    stage: Stage,
}

impl<'a, S: ClientSpawner> Invocation<'a, S> {
    pub fn new(launcher: &'a Launcher<S>) -> Self {
        Self {
            launcher,
            stage: Stage::Idle,
        }
    }

    /// Stage reached so far (the failing stage after an error).
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Handle the activation argument, normally the `rdp://` URI.
    pub fn run(&mut self, argument: Option<&str>) -> Result<LaunchReport> {
        let Some(uri) = argument else {
            self.advance(Stage::RejectedNoArgs);
            return Err(Error::NoArguments);
        };
        self.advance(Stage::ArgsChecked);

        let config = match translator::translate(uri) {
            Ok(config) => config,
            Err(e) => {
                self.advance(Stage::RejectedBadScheme);
                return Err(e);
            }
        };
        self.advance(Stage::UriValidated);
        self.advance(Stage::Translated);

        let launcher = self.launcher;
        let stage = &mut self.stage;
        let result = launcher.launch_with(&config, |next| {
            debug!(stage = %next, "Invocation stage");
            *stage = next;
        });

        match result {
            Ok(report) => {
                self.advance(Stage::Done);
                Ok(report)
            }
            Err(e) => {
                let failed = match &e {
                    Error::Spawn { .. } => Stage::SpawnFailed,
                    _ => Stage::WriteFailed,
                };
                self.advance(failed);
                Err(e)
            }
        }
    }

    fn advance(&mut self, next: Stage) {
        debug!(stage = %next, "Invocation stage");
        self.stage = next;
    }
}
