//! notescan - Text note parser for Nostr clients
//!
//! Splits a note body into plain text, URLs, hashtags, `#[N]` tag references
//! and NIP-19 identifiers, and resolves tag references against the note's
//! tag list.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{resolve_tag_reference, tokenize, ParsedTextNoteNode, ResolvedTagReference};
pub use error::NotescanError;
