//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notescan")]
#[command(about = "Tokenize Nostr text notes and resolve tag references", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split note text into plain text, URLs, hashtags, tag references and NIP-19 entities
    Parse {
        /// File containing the note body (default: stdin)
        file: Option<PathBuf>,

        /// Output format (text, json); overrides the configured format
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Resolve every #[N] reference in an event against its tag list
    Resolve {
        /// File containing the event JSON (default: stdin)
        event: Option<PathBuf>,

        /// Output format (text, json); overrides the configured format
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Config key to show
        key: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
