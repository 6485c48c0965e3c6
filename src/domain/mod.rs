//! Domain layer - Text note parsing and tag resolution

pub mod event;
pub mod nip19;
pub mod node;
pub mod resolver;
pub mod tokenizer;

pub use event::{Event, Tag};
pub use nip19::Nip19Entity;
pub use node::{Bech32Entity, HashTag, ParsedTextNoteNode, PlainText, TagReference, Url};
pub use resolver::{resolve_all, resolve_tag_reference, ResolvedTagReference, UnresolvedReason};
pub use tokenizer::tokenize;
