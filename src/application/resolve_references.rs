//! Resolve tag references use case
//!
//! Tokenizes an event's content and resolves every `#[N]` against the
//! event's own tag list.

use crate::domain::{resolve_all, tokenize, Event, ParsedTextNoteNode, ResolvedTagReference};
use crate::error::Result;
use crate::infrastructure::read_event;
use std::path::Path;
use tracing::debug;

/// A tokenized event together with its resolved tag references
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNote {
    pub event: Event,
    pub nodes: Vec<ParsedTextNoteNode>,
    pub references: Vec<ResolvedTagReference>,
}

impl ResolvedNote {
    pub fn from_event(event: Event) -> Self {
        let nodes = tokenize(&event.content);
        let references = resolve_all(&nodes, &event);
        ResolvedNote {
            event,
            nodes,
            references,
        }
    }

    /// Number of references that did not resolve to a mention
    pub fn unresolved_count(&self) -> usize {
        self.references.iter().filter(|r| !r.is_resolved()).count()
    }
}

/// Service for resolving the tag references of an event read from JSON
pub struct ResolveReferencesService;

impl ResolveReferencesService {
    pub fn execute(path: Option<&Path>) -> Result<ResolvedNote> {
        let event = read_event(path)?;
        let note = ResolvedNote::from_event(event);
        debug!(
            references = note.references.len(),
            unresolved = note.unresolved_count(),
            "resolved tag references"
        );
        Ok(note)
    }
}
