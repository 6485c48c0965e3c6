//! Application layer - Use cases and orchestration

pub mod parse_note;
pub mod resolve_references;

pub use parse_note::ParseNoteService;
pub use resolve_references::{ResolveReferencesService, ResolvedNote};
