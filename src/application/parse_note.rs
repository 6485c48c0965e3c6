//! Parse note use case

use crate::domain::{tokenize, ParsedTextNoteNode};
use crate::error::Result;
use crate::infrastructure::read_text;
use std::path::Path;
use tracing::debug;

/// Service for tokenizing a note body read from a file or stdin
pub struct ParseNoteService;

impl ParseNoteService {
    /// Read the note text and split it into nodes
    pub fn execute(path: Option<&Path>) -> Result<Vec<ParsedTextNoteNode>> {
        let text = read_text(path)?;
        let nodes = tokenize(&text);
        debug!(nodes = nodes.len(), "parsed note");
        Ok(nodes)
    }
}
