mod cli;
mod cli_utils;
mod commands;
mod notify;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use notify::Notifier;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn by default unless RUST_LOG is set)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rdp_handler_cli=warn,rdp_handler=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Some(Command::Preview { uri }) => commands::preview::run(&uri),
        Some(Command::Catalog { json }) => commands::catalog::run(json),
        Some(Command::Register { exe }) => commands::register::run(exe.as_deref()),
        Some(Command::Unregister) => commands::unregister::run(),
        Some(Command::Status) => commands::status::run(),
        Some(Command::Try { uri }) => commands::try_link::run(uri.as_deref()),
        None => commands::open::run(
            args.uri.as_deref(),
            &args.launch,
            Notifier::new(!args.no_dialog),
        ),
    }
}
