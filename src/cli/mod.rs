//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_nodes, format_references, nodes_to_json, resolved_note_to_json};
