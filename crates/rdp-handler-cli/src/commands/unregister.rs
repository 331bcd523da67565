//! Remove the `rdp://` URI scheme handler.

use anyhow::Result;
use rdp_handler::registry;

pub fn run() -> Result<()> {
    if registry::unregister_uri_scheme()? {
        println!("URI scheme 'rdp://' unregistered.");
    } else {
        println!("URI scheme 'rdp://' was not registered.");
    }
    Ok(())
}
