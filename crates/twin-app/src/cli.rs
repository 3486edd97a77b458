use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Twin: a terminal chat client for the Digital Twin assistant.
#[derive(Parser, Debug)]
#[command(name = "twin", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Assistant base URL; wins over the config file and TWIN_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log filter directive (e.g. debug, twin_chat=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Interactive chat (default).
    #[default]
    Chat,
    /// Send one message and print the reply.
    Ask {
        /// Message text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Check that the assistant endpoint is up.
    Health,
    /// Print the server-side history of a session.
    History {
        session_id: String,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
