//! Tag reference resolution
//!
//! A `#[N]` placeholder in note text points at `event.tags[N]`. A `p` tag
//! makes it a user mention, an `e` tag an event mention. Anything else is
//! reported as [`ResolvedTagReference::Unresolved`] since tag lists arrive
//! from untrusted relays.

use crate::domain::event::{Event, Tag};
use crate::domain::node::{ParsedTextNoteNode, TagReference};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of resolving one tag reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ResolvedTagReference {
    MentionedUser {
        tag_index: usize,
        content: String,
        pubkey: String,
    },
    MentionedEvent {
        tag_index: usize,
        content: String,
        event_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        marker: Option<String>,
    },
    Unresolved {
        tag_index: usize,
        content: String,
        reason: UnresolvedReason,
    },
}

impl ResolvedTagReference {
    pub fn tag_index(&self) -> usize {
        match self {
            ResolvedTagReference::MentionedUser { tag_index, .. }
            | ResolvedTagReference::MentionedEvent { tag_index, .. }
            | ResolvedTagReference::Unresolved { tag_index, .. } => *tag_index,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, ResolvedTagReference::Unresolved { .. })
    }
}

/// Why a tag reference produced no mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "marker", rename_all = "camelCase")]
pub enum UnresolvedReason {
    /// The index is past the end of the tag list
    OutOfRange,
    /// The tag's type marker is neither `p` nor `e`
    UnsupportedTag(String),
    /// A `p`/`e` tag without its value, or an empty tag
    MalformedTag,
}

/// Resolve `reference` against the tag list of the event it came from
pub fn resolve_tag_reference(reference: &TagReference, event: &Event) -> ResolvedTagReference {
    let tag_index = reference.tag_index;
    let content = reference.content.clone();

    let unresolved = |reason: UnresolvedReason| {
        debug!(tag_index, ?reason, "unresolved tag reference");
        ResolvedTagReference::Unresolved {
            tag_index,
            content: content.clone(),
            reason,
        }
    };

    match event.tag(tag_index) {
        None => unresolved(UnresolvedReason::OutOfRange),
        Some(Tag::PubKey { pubkey, .. }) => ResolvedTagReference::MentionedUser {
            tag_index,
            content: content.clone(),
            pubkey,
        },
        Some(Tag::Event {
            event_id, marker, ..
        }) => ResolvedTagReference::MentionedEvent {
            tag_index,
            content: content.clone(),
            event_id,
            marker,
        },
        Some(tag @ Tag::Unknown(_)) => unresolved(UnresolvedReason::UnsupportedTag(
            tag.marker().unwrap_or_default().to_string(),
        )),
        Some(Tag::Malformed(_)) => unresolved(UnresolvedReason::MalformedTag),
    }
}

/// Resolve every tag reference in `nodes`, in order
pub fn resolve_all(nodes: &[ParsedTextNoteNode], event: &Event) -> Vec<ResolvedTagReference> {
    nodes
        .iter()
        .filter_map(|node| match node {
            ParsedTextNoteNode::TagReference(reference) => {
                Some(resolve_tag_reference(reference, event))
            }
            _ => None,
        })
        .collect()
}
