//! CLI module for Sockpuppet Sentinel
//!
//! Command-line interface parsing and handlers for the `sentinel` binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod commands;
pub mod output;

use crate::utils::config::STATE_FILE_ENV;
use clap::{Parser, Subcommand};
use sentinel_session::API_BASE_URL_ENV;
use std::path::PathBuf;

/// Sockpuppet Sentinel - secure chat client
///
/// Signs in against the Sentinel backend, keeps the issued token on disk and
/// sends authenticated chat messages.
#[derive(Parser, Debug)]
#[command(
    name = "sentinel",
    version,
    about = "Sockpuppet Sentinel - secure chat client",
    long_about = "Command-line client for the Sockpuppet Sentinel chat backend.\n\n\
                  Sign in once with 'login'; the issued token is stored locally and\n\
                  attached to every chat request until it expires or you log out.",
    after_help = "EXAMPLES:\n    \
                  sentinel login -u admin@example.com   # Sign in (prompts for password)\n    \
                  sentinel chat \"How do I report spam?\" # Ask the Sentinel\n    \
                  sentinel status                       # Check backend health\n    \
                  sentinel logout                       # Clear the stored token"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "sentinel.toml", global = true)]
    pub config: PathBuf,

    /// Backend base URL
    #[arg(long, env = API_BASE_URL_ENV, global = true)]
    pub api_url: Option<String>,

    /// File holding the stored credential
    #[arg(long, env = STATE_FILE_ENV, global = true)]
    pub state_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the issued token
    Login {
        /// Username (usually an email address)
        #[arg(short, long)]
        username: String,

        /// Password; prompted for when omitted
        #[arg(short, long, env = "SENTINEL_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Clear the stored token
    Logout,

    /// Send one message to the Sentinel (requires a valid session)
    Chat {
        /// Message text
        message: String,
    },

    /// Check backend health
    Status,

    /// Show who the stored token belongs to
    Whoami,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chat_with_globals() {
        let cli = Cli::try_parse_from([
            "sentinel",
            "chat",
            "hello there",
            "--api-url",
            "http://backend.test",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://backend.test"));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Commands::Chat { ref message } if message == "hello there"));
    }

    #[test]
    fn test_login_requires_username() {
        assert!(Cli::try_parse_from(["sentinel", "login"]).is_err());
    }
}
