//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod catalog;
pub mod guide;
pub mod open;
pub mod preview;
pub mod register;
pub mod status;
pub mod try_link;
pub mod unregister;
