//! Preview command - show the generated file without launching.

use anyhow::Result;

pub fn run(uri: &str) -> Result<()> {
    let config = rdp_handler::translate(uri)?;
    if config.is_empty() {
        eprintln!("No recognized parameters; the client would receive an empty file.");
    }
    print!("{config}");
    Ok(())
}
