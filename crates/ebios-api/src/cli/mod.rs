//! CLI command definitions for the `ebios` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod serve;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Ebios AI chat server and terminal client.
#[derive(Parser)]
#[command(name = "ebios", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat API server.
    Serve {
        /// Port to listen on (overrides config and PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config and EBIOS_HOST).
        #[arg(long)]
        host: Option<String>,
    },

    /// Chat with Ebios AI in the terminal.
    Chat {
        /// Use this session id instead of the stored one.
        #[arg(long)]
        session: Option<String>,
    },

    /// Check whether the chat server is online.
    Health,

    /// Clear the server-side and saved history of the current session.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Log filter implied by `-v` / `--quiet`, used when RUST_LOG is unset.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,ebios_core=debug,ebios_infra=debug,ebios_api=debug",
        _ => "trace",
    }
}
