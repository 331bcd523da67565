//! Client launcher - write the configuration file, start the client, clean up.
//!
//! The client is started detached: it is never waited on, so the launcher
//! cannot know when the file has been read. It sleeps for the configured
//! grace period and then deletes the file, treating a file that is already
//! gone as a warning rather than a failure.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, info, warn};

use crate::config::{LauncherConfig, launch};
use crate::error::{Error, Result};
use crate::invocation::Stage;
use crate::translator::RdpConfig;

/// Starts the remote desktop client.
///
/// Abstracted so the launch sequence can be exercised without a real client.
pub trait ClientSpawner {
    /// Start `executable` with `config_path` as its only argument and return
    /// the child's process ID without waiting for it.
    fn spawn(&self, executable: &str, config_path: &Path) -> Result<u32>;
}

/// Spawns the client as a real OS process with no console window.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl ClientSpawner for SystemSpawner {
    fn spawn(&self, executable: &str, config_path: &Path) -> Result<u32> {
        let mut command = Command::new(executable);
        command
            .arg(config_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            use windows::Win32::System::Threading::CREATE_NO_WINDOW;

            command.creation_flags(CREATE_NO_WINDOW.0);
        }

        let child = command.spawn().map_err(|source| Error::Spawn {
            executable: executable.to_string(),
            source,
        })?;

        // Dropping `child` does not wait on or kill the process.
        Ok(child.id())
    }
}

/// Result of the delayed deletion of the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    Removed,
    /// The file had already disappeared before deletion.
    AlreadyGone,
    /// Deletion failed for another reason (e.g. the client holds it open).
    Failed(String),
}

impl CleanupOutcome {
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::Removed)
    }
}

impl fmt::Display for CleanupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed => write!(f, "Temporary RDP file removed."),
            Self::AlreadyGone => write!(f, "Temporary RDP file not found for deletion."),
            Self::Failed(reason) => {
                write!(f, "Temporary RDP file could not be deleted: {reason}")
            }
        }
    }
}

/// A configuration file created for a single launch.
#[derive(Debug)]
pub struct GeneratedFile {
    path: PathBuf,
}

impl GeneratedFile {
    /// Create a uniquely named `.rdp` file in `dir` holding `contents`.
    ///
    /// A unique placeholder is reserved first and deleted, and the extension
    /// is appended to its name, so the final file never collides with another
    /// invocation.
    pub fn create(dir: &Path, contents: &str) -> Result<Self> {
        let placeholder = tempfile::Builder::new()
            .prefix(launch::TEMP_PREFIX)
            .tempfile_in(dir)
            .map_err(|source| Error::ConfigWrite {
                path: dir.to_path_buf(),
                source,
            })?;
        let base = placeholder.path().to_path_buf();
        placeholder.close().map_err(|source| Error::ConfigWrite {
            path: base.clone(),
            source,
        })?;

        let mut name = base.into_os_string();
        name.push(".");
        name.push(launch::CONFIG_EXTENSION);
        let path = PathBuf::from(name);

        if let Err(source) = write_new(&path, contents) {
            if let Err(e) = fs::remove_file(&path) {
                debug!(
                    path = %path.display(),
                    error = %e,
                    "Could not remove partial configuration file"
                );
            }
            return Err(Error::ConfigWrite { path, source });
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file, reporting rather than failing on errors.
    pub fn remove(self) -> CleanupOutcome {
        match fs::remove_file(&self.path) {
            Ok(()) => CleanupOutcome::Removed,
            Err(e) if e.kind() == io::ErrorKind::NotFound => CleanupOutcome::AlreadyGone,
            Err(e) => CleanupOutcome::Failed(e.to_string()),
        }
    }
}

fn write_new(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}

/// What a successful launch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub config_path: PathBuf,
    pub pid: u32,
    pub cleanup: CleanupOutcome,
}

/// Writes the configuration, starts the client and cleans up afterward.
#[derive(Debug, Clone)]
pub struct Launcher<S = SystemSpawner> {
    config: LauncherConfig,
    spawner: S,
}

impl Launcher<SystemSpawner> {
    pub fn new(config: LauncherConfig) -> Self {
        Self::with_spawner(config, SystemSpawner)
    }
}

impl<S: ClientSpawner> Launcher<S> {
    pub fn with_spawner(config: LauncherConfig, spawner: S) -> Self {
        Self { config, spawner }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Materialize `rdp` to a temporary file and run the client against it.
    pub fn launch(&self, rdp: &RdpConfig) -> Result<LaunchReport> {
        self.launch_with(rdp, |_| {})
    }

    /// Same as [`launch`](Self::launch), reporting each completed stage.
    pub fn launch_with(
        &self,
        rdp: &RdpConfig,
        mut on_stage: impl FnMut(Stage),
    ) -> Result<LaunchReport> {
        let file = GeneratedFile::create(&self.config.temp_dir(), &rdp.to_file_contents())?;
        info!(
            path = %file.path().display(),
            entries = rdp.len(),
            "Wrote configuration file"
        );
        on_stage(Stage::FileWritten);

        let executable = self.config.client_executable();
        let pid = match self.spawner.spawn(executable, file.path()) {
            Ok(pid) => pid,
            Err(e) => {
                // Nothing will read the file, so drop it right away.
                let outcome = file.remove();
                debug!(%outcome, "Removed configuration file after failed spawn");
                return Err(e);
            }
        };
        info!(pid, executable, "Started remote desktop client");
        on_stage(Stage::ClientSpawned);

        let delay = self.config.cleanup_delay();
        if !delay.is_zero() {
            debug!(?delay, "Waiting before removing configuration file");
            thread::sleep(delay);
        }

        let config_path = file.path().to_path_buf();
        let cleanup = file.remove();
        if cleanup.is_warning() {
            warn!(path = %config_path.display(), "{cleanup}");
        } else {
            debug!(path = %config_path.display(), "Removed configuration file");
        }
        on_stage(Stage::CleanupAttempted);

        Ok(LaunchReport {
            config_path,
            pid,
            cleanup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;

    /// Records each spawn along with the file contents seen at spawn time.
    struct RecordingSpawner {
        calls: RefCell<Vec<(String, PathBuf, String)>>,
    }

    impl RecordingSpawner {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ClientSpawner for RecordingSpawner {
        fn spawn(&self, executable: &str, config_path: &Path) -> Result<u32> {
            let contents = fs::read_to_string(config_path)?;
            self.calls.borrow_mut().push((
                executable.to_string(),
                config_path.to_path_buf(),
                contents,
            ));
            Ok(4242)
        }
    }

    fn test_config(dir: &Path) -> LauncherConfig {
        LauncherConfig::builder()
            .client_executable("test-client")
            .cleanup_delay(Duration::ZERO)
            .temp_dir(dir)
            .build()
    }

    #[test]
    fn test_generated_file_has_rdp_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = GeneratedFile::create(dir.path(), "username:s:alice\n").unwrap();

        assert_eq!(file.path().extension().unwrap(), "rdp");
        assert_eq!(file.path().parent().unwrap(), dir.path());
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "username:s:alice\n"
        );
        // Only the .rdp file remains; the placeholder is gone.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_generated_files_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let a = GeneratedFile::create(dir.path(), "").unwrap();
        let b = GeneratedFile::create(dir.path(), "").unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn test_remove_twice_reports_already_gone() {
        let dir = tempfile::tempdir().unwrap();
        let file = GeneratedFile::create(dir.path(), "").unwrap();
        fs::remove_file(file.path()).unwrap();
        assert_eq!(file.remove(), CleanupOutcome::AlreadyGone);
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = GeneratedFile::create(&missing, "").unwrap_err();
        assert!(matches!(err, Error::ConfigWrite { .. }));
    }

    #[test]
    fn test_launch_writes_spawns_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let launcher = Launcher::with_spawner(test_config(dir.path()), RecordingSpawner::new());
        let rdp = RdpConfig::from_query(&[("username".to_string(), "s:alice".to_string())]);

        let report = launcher.launch(&rdp).unwrap();

        let calls = launcher.spawner().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "test-client");
        assert_eq!(calls[0].1, report.config_path);
        assert_eq!(calls[0].2, "username:s:alice\n");
        assert_eq!(report.pid, 4242);
        assert_eq!(report.cleanup, CleanupOutcome::Removed);
        assert!(!report.config_path.exists());
    }

    #[test]
    fn test_launch_reports_stages_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let launcher = Launcher::with_spawner(test_config(dir.path()), RecordingSpawner::new());
        let mut stages = Vec::new();

        launcher
            .launch_with(&RdpConfig::new(), |stage| stages.push(stage))
            .unwrap();

        assert_eq!(
            stages,
            vec![
                Stage::FileWritten,
                Stage::ClientSpawned,
                Stage::CleanupAttempted
            ]
        );
    }

    #[test]
    fn test_cleanup_outcome_messages() {
        assert!(!CleanupOutcome::Removed.is_warning());
        assert!(CleanupOutcome::AlreadyGone.is_warning());
        assert!(
            CleanupOutcome::AlreadyGone
                .to_string()
                .contains("not found for deletion")
        );
        assert!(
            CleanupOutcome::Failed("locked".into())
                .to_string()
                .contains("locked")
        );
    }
}
