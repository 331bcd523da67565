//! Register the `rdp://` URI scheme handler.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rdp_handler::registry;

pub fn run(exe: Option<&Path>) -> Result<()> {
    let exe_path = match exe {
        Some(path) => PathBuf::from(path),
        None => std::env::current_exe().context("Failed to get current executable path")?,
    };

    registry::register_uri_scheme(&exe_path)?;
    println!("URI scheme 'rdp://' registered successfully.");
    println!("Handler: {}", registry::handler_command_line(&exe_path));
    Ok(())
}
