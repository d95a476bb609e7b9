//! nix-spotlight — expose Nix-installed app bundles to Spotlight and the Dock.
//!
//! # Usage
//!
//! ```text
//! nix-spotlight sync <from> <to> [--no-dock] [--dockutil <path>] [--store-prefix <prefix>]
//! nix-spotlight list <from>
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{list::ListArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "nix-spotlight",
    version,
    about = "macOS Spotlight integration for Nix apps",
    long_about = None,
)]
struct Cli {
    /// Log every step (same as RUST_LOG=debug).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rebuild the trampoline directory and repoint dock items at it.
    Sync(SyncArgs),

    /// Show the bundles a sync would create trampolines for.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}

/// Library crates log through the `log` facade; the fmt subscriber picks
/// those records up as well.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
