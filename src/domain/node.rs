//! Parsed text note nodes

use crate::domain::nip19::Nip19Entity;
use serde::{Deserialize, Serialize};

/// One classified span of a text note.
///
/// Concatenating [`ParsedTextNoteNode::content`] over a tokenized sequence
/// reproduces the original input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParsedTextNoteNode {
    PlainText(PlainText),
    #[serde(rename = "URL")]
    Url(Url),
    HashTag(HashTag),
    TagReference(TagReference),
    Bech32Entity(Bech32Entity),
}

impl ParsedTextNoteNode {
    /// Source text this node was produced from
    pub fn content(&self) -> &str {
        match self {
            ParsedTextNoteNode::PlainText(node) => &node.content,
            ParsedTextNoteNode::Url(node) => &node.content,
            ParsedTextNoteNode::HashTag(node) => &node.content,
            ParsedTextNoteNode::TagReference(node) => &node.content,
            ParsedTextNoteNode::Bech32Entity(node) => &node.content,
        }
    }

    /// Name of the variant as it appears in serialized output
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedTextNoteNode::PlainText(_) => "PlainText",
            ParsedTextNoteNode::Url(_) => "URL",
            ParsedTextNoteNode::HashTag(_) => "HashTag",
            ParsedTextNoteNode::TagReference(_) => "TagReference",
            ParsedTextNoteNode::Bech32Entity(_) => "Bech32Entity",
        }
    }

    pub fn plain_text(content: impl Into<String>) -> Self {
        ParsedTextNoteNode::PlainText(PlainText {
            content: content.into(),
        })
    }

    pub fn url(content: impl Into<String>) -> Self {
        ParsedTextNoteNode::Url(Url {
            content: content.into(),
        })
    }

    /// Build a hashtag node; `content` must start with `#`
    pub fn hash_tag(content: impl Into<String>) -> Self {
        let content = content.into();
        let tag_name = content.strip_prefix('#').unwrap_or(&content).to_string();
        ParsedTextNoteNode::HashTag(HashTag { content, tag_name })
    }

    pub fn tag_reference(tag_index: usize, content: impl Into<String>) -> Self {
        ParsedTextNoteNode::TagReference(TagReference {
            tag_index,
            content: content.into(),
        })
    }

    pub fn bech32_entity(content: impl Into<String>, data: Nip19Entity) -> Self {
        ParsedTextNoteNode::Bech32Entity(Bech32Entity {
            content: content.into(),
            data,
        })
    }
}

/// Unmatched literal text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainText {
    pub content: String,
}

/// Absolute http(s) or ws(s) URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    pub content: String,
}

/// `#word` hashtag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashTag {
    pub content: String,
    /// Tag name without the leading `#`
    pub tag_name: String,
}

/// `#[N]` placeholder pointing at the Nth entry of the note's tag list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagReference {
    pub tag_index: usize,
    pub content: String,
}

/// NIP-19 identifier found inline in the note text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bech32Entity {
    pub content: String,
    pub data: Nip19Entity,
}
