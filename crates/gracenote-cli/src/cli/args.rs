//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Register and inspect Gracenote client identities
///
/// Registration obtains a user ID for your client ID and stores it in the
/// config file. Later runs reuse it with `whoami` without contacting the service.
#[derive(Parser, Debug)]
#[command(name = "gracenote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Client identifier assigned by Gracenote
    #[arg(short = 'c', long, env = "GRACENOTE_CLIENT_ID", global = true)]
    pub client_id: Option<String>,

    /// Client tag appended to the client identifier
    #[arg(short = 't', long = "tag", env = "GRACENOTE_CLIENT_TAG", global = true)]
    pub client_tag: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, env = "GRACENOTE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Send requests to this URL instead of the derived service endpoint
    #[arg(long, env = "GRACENOTE_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new user ID for the client
    Register(RegisterArgs),

    /// Show the identity built from stored values (no network)
    Whoami(WhoamiArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Register command
// ============================================================================

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Do not write the new identity to the config file
    #[arg(long)]
    pub no_save: bool,
}

// ============================================================================
// Whoami command
// ============================================================================

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// User identifier from an earlier registration
    #[arg(short, long, env = "GRACENOTE_USER_ID")]
    pub user_id: Option<String>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (client_id, client_tag, user_id, timeout_secs, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
