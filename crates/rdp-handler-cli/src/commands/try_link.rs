//! Try command - open an `rdp://` link through the OS handler.

use anyhow::{Result, bail};
use rdp_handler::config::{guide, scheme};

pub fn run(uri: Option<&str>) -> Result<()> {
    let uri = uri.unwrap_or(guide::SAMPLE_URI);
    if !uri.starts_with(scheme::PREFIX) {
        bail!("Not an rdp:// link: {uri}");
    }

    eprintln!("Opening {uri}");
    open::that(uri)?;
    Ok(())
}
