//! # rdp-handler
//!
//! Core library for the `rdp://` protocol handler.
//!
//! This crate provides:
//! - The parameter catalog (allow-list of remote desktop file settings)
//! - URI to configuration translation
//! - Launching the remote desktop client against a temporary `.rdp` file
//! - Per-user `rdp://` scheme registration (Windows)

pub mod catalog;
pub mod config;
pub mod error;
pub mod invocation;
pub mod launcher;
pub mod registry;
pub mod translator;

// Re-export from catalog module
pub use catalog::{CATALOG_VERSION, ParameterSpec, ValueKind, is_recognized, lookup};

// Re-export from config module
pub use config::{LauncherConfig, LauncherConfigBuilder};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from invocation module
pub use invocation::{Invocation, Stage};

// Re-export from launcher module
pub use launcher::{
    CleanupOutcome, ClientSpawner, GeneratedFile, LaunchReport, Launcher, SystemSpawner,
};

// Re-export from registry module
pub use registry::{register_uri_scheme, registered_command, unregister_uri_scheme};

// Re-export from translator module
pub use translator::{ParsedQuery, RdpConfig, parse_query, translate};
