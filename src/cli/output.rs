//! Output formatting utilities

use crate::application::ResolvedNote;
use crate::domain::{Nip19Entity, ParsedTextNoteNode, ResolvedTagReference, UnresolvedReason};
use crate::error::Result;

/// Format nodes one per line: kind, quoted content, then any extracted value
pub fn format_nodes(nodes: &[ParsedTextNoteNode]) -> String {
    if nodes.is_empty() {
        return "No content\n".to_string();
    }

    let mut output = String::new();
    for node in nodes {
        output.push_str(&format!("{:<14}{:?}", node.kind(), node.content()));
        match node {
            ParsedTextNoteNode::HashTag(tag) => output.push_str(&format!("  {}", tag.tag_name)),
            ParsedTextNoteNode::TagReference(reference) => {
                output.push_str(&format!("  {}", reference.tag_index))
            }
            ParsedTextNoteNode::Bech32Entity(entity) => {
                output.push_str(&format!("  {}", describe_entity(&entity.data)))
            }
            ParsedTextNoteNode::PlainText(_) | ParsedTextNoteNode::Url(_) => {}
        }
        output.push('\n');
    }
    output
}

fn describe_entity(entity: &Nip19Entity) -> String {
    match entity {
        Nip19Entity::Npub(hex) | Nip19Entity::Nsec(hex) | Nip19Entity::Note(hex) => {
            format!("{} {}", entity.prefix(), hex)
        }
        Nip19Entity::Nprofile(profile) => format!("nprofile {}", profile.pubkey),
        Nip19Entity::Nevent(event) => format!("nevent {}", event.id),
        Nip19Entity::Naddr(addr) => {
            format!("naddr {}:{}:{}", addr.kind, addr.pubkey, addr.identifier)
        }
        Nip19Entity::Nrelay(url) => format!("nrelay {}", url),
    }
}

/// Format resolved references one per line
pub fn format_references(references: &[ResolvedTagReference]) -> String {
    if references.is_empty() {
        return "No tag references found\n".to_string();
    }

    let mut output = String::new();
    for reference in references {
        let line = match reference {
            ResolvedTagReference::MentionedUser {
                content, pubkey, ..
            } => format!("{:<6}MentionedUser   {}", content, pubkey),
            ResolvedTagReference::MentionedEvent {
                content,
                event_id,
                marker,
                ..
            } => match marker {
                Some(marker) => format!("{:<6}MentionedEvent  {} ({})", content, event_id, marker),
                None => format!("{:<6}MentionedEvent  {}", content, event_id),
            },
            ResolvedTagReference::Unresolved {
                content, reason, ..
            } => format!("{:<6}Unresolved      {}", content, describe_reason(reason)),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

fn describe_reason(reason: &UnresolvedReason) -> String {
    match reason {
        UnresolvedReason::OutOfRange => "index out of range".to_string(),
        UnresolvedReason::UnsupportedTag(marker) => format!("unsupported tag '{}'", marker),
        UnresolvedReason::MalformedTag => "malformed tag".to_string(),
    }
}

pub fn nodes_to_json(nodes: &[ParsedTextNoteNode]) -> Result<String> {
    Ok(serde_json::to_string_pretty(nodes)?)
}

pub fn resolved_note_to_json(note: &ResolvedNote) -> Result<String> {
    let value = serde_json::json!({
        "nodes": note.nodes,
        "references": note.references,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
