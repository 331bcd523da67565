//! Status command - show which program handles `rdp://` links.

use anyhow::Result;
use rdp_handler::registry;

pub fn run() -> Result<()> {
    let Some(command) = registry::registered_command()? else {
        println!("URI scheme 'rdp://' is not registered for the current user.");
        println!("Run `rdp-handler register` to register it.");
        return Ok(());
    };

    println!("Registered command: {command}");
    if let Ok(exe) = std::env::current_exe() {
        if command == registry::handler_command_line(&exe) {
            println!("The registration points to this executable.");
        } else {
            println!("The registration points to a different executable.");
        }
    }
    Ok(())
}
