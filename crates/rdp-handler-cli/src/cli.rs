//! CLI argument definitions for rdp-handler.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rdp-handler")]
#[command(about = "Open rdp:// links with the Remote Desktop client", version)]
pub struct Args {
    /// rdp:// URI to open (passed by the OS when a link is activated)
    #[arg(value_name = "URI")]
    pub uri: Option<String>,

    #[command(flatten)]
    pub launch: LaunchArgs,

    /// Report on the console only, without dialog windows
    #[arg(long, env = "RDP_HANDLER_NO_DIALOG")]
    pub no_dialog: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Overrides for how the client is launched.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LaunchArgs {
    /// Remote desktop client executable
    #[arg(long, value_name = "EXE", env = "RDP_HANDLER_CLIENT")]
    pub client: Option<String>,

    /// Seconds to wait before deleting the generated .rdp file
    #[arg(long, value_name = "SECS", env = "RDP_HANDLER_CLEANUP_DELAY")]
    pub cleanup_delay: Option<u64>,

    /// Directory for the generated .rdp file (defaults to the OS temp directory)
    #[arg(long, value_name = "DIR", env = "RDP_HANDLER_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the .rdp file a URI would produce, without launching anything
    Preview {
        /// rdp:// URI to translate
        uri: String,
    },
    /// List the recognized .rdp parameters
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Register this program as the rdp:// handler for the current user
    Register {
        /// Handler executable (defaults to this program)
        #[arg(long, value_name = "FILE")]
        exe: Option<PathBuf>,
    },
    /// Remove the rdp:// handler registration
    Unregister,
    /// Show the current rdp:// handler registration
    Status,
    /// Open an rdp:// link through the OS to test the registration
    Try {
        /// Link to open (defaults to a localhost sample)
        uri: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_no_args() {
        let args = Args::try_parse_from(["rdp-handler"]).unwrap();
        assert!(args.uri.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_uri() {
        let uri = "rdp://full%20address=s:myhost:3389&username=s:alice";
        let args = Args::try_parse_from(["rdp-handler", uri]).unwrap();
        assert_eq!(args.uri.as_deref(), Some(uri));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_uri_with_launch_overrides() {
        let args = Args::try_parse_from([
            "rdp-handler",
            "--client",
            "xfreerdp",
            "--cleanup-delay",
            "10",
            "--temp-dir",
            "/var/tmp",
            "--no-dialog",
            "rdp://username=s:bob",
        ])
        .unwrap();
        assert_eq!(args.launch.client.as_deref(), Some("xfreerdp"));
        assert_eq!(args.launch.cleanup_delay, Some(10));
        assert_eq!(args.launch.temp_dir, Some(PathBuf::from("/var/tmp")));
        assert!(args.no_dialog);
        assert_eq!(args.uri.as_deref(), Some("rdp://username=s:bob"));
    }

    #[test]
    fn test_parse_invalid_cleanup_delay() {
        let result = Args::try_parse_from(["rdp-handler", "--cleanup-delay", "soon", "rdp://"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_preview() {
        let args = Args::try_parse_from(["rdp-handler", "preview", "rdp://domain=s:corp"]).unwrap();
        match args.command {
            Some(Command::Preview { uri }) => assert_eq!(uri, "rdp://domain=s:corp"),
            _ => panic!("Expected Preview command"),
        }
    }

    #[test]
    fn test_parse_catalog_json() {
        let args = Args::try_parse_from(["rdp-handler", "catalog", "--json"]).unwrap();
        assert!(matches!(args.command, Some(Command::Catalog { json: true })));
    }

    #[test]
    fn test_parse_register_with_exe() {
        let args =
            Args::try_parse_from(["rdp-handler", "register", "--exe", r"C:\rdp-handler.exe"])
                .unwrap();
        match args.command {
            Some(Command::Register { exe }) => {
                assert_eq!(exe, Some(PathBuf::from(r"C:\rdp-handler.exe")));
            }
            _ => panic!("Expected Register command"),
        }
    }

    #[test]
    fn test_parse_unregister_and_status() {
        let args = Args::try_parse_from(["rdp-handler", "unregister"]).unwrap();
        assert!(matches!(args.command, Some(Command::Unregister)));
        let args = Args::try_parse_from(["rdp-handler", "status"]).unwrap();
        assert!(matches!(args.command, Some(Command::Status)));
    }

    #[test]
    fn test_parse_try_default() {
        let args = Args::try_parse_from(["rdp-handler", "try"]).unwrap();
        assert!(matches!(args.command, Some(Command::Try { uri: None })));
    }

    #[test]
    fn test_parse_unknown_flag() {
        let result = Args::try_parse_from(["rdp-handler", "--bogus"]);
        assert!(result.is_err());
    }
}
