//! Nostr event and tag model

use serde::{Deserialize, Serialize};

/// A Nostr event as received from a relay.
///
/// Only `tags` and `content` matter to parsing; the remaining fields are
/// carried verbatim.
///
/// ```json
/// {
///   "id": "aa11",
///   "pubkey": "9366…",
///   "kind": 1,
///   "created_at": 1678377182,
///   "tags": [["p", "80d3…"], ["e", "b9ce…", "", "reply"]],
///   "content": "#[0] said hi",
///   "sig": "deadbeef"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub pubkey: String,
    #[serde(default)]
    pub kind: u32,
    #[serde(default)]
    pub created_at: u64,
    /// Raw tag tuples, element 0 being the type marker
    #[serde(default)]
    pub tags: Vec<Vec<String>>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sig: String,
}

impl Event {
    /// Typed view of the tag at `index`, or None when out of range
    pub fn tag(&self, index: usize) -> Option<Tag> {
        self.tags.get(index).map(|raw| Tag::parse(raw))
    }
}

/// Typed view of one tag tuple, keyed by its type marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// `["p", pubkey, relay_url?, petname?]`
    PubKey {
        pubkey: String,
        relay_url: Option<String>,
        petname: Option<String>,
    },
    /// `["e", event_id, relay_url?, marker?]`
    Event {
        event_id: String,
        relay_url: Option<String>,
        marker: Option<String>,
    },
    /// `p` or `e` tag without its value element, or an empty tuple
    Malformed(Vec<String>),
    /// Any other type marker
    Unknown(Vec<String>),
}

impl Tag {
    pub fn parse(raw: &[String]) -> Tag {
        // Trailing elements may be present but empty ("" relay hint)
        let optional = |i: usize| raw.get(i).filter(|s| !s.is_empty()).cloned();

        match raw.first().map(String::as_str) {
            Some("p") => match raw.get(1) {
                Some(pubkey) => Tag::PubKey {
                    pubkey: pubkey.clone(),
                    relay_url: optional(2),
                    petname: optional(3),
                },
                None => Tag::Malformed(raw.to_vec()),
            },
            Some("e") => match raw.get(1) {
                Some(event_id) => Tag::Event {
                    event_id: event_id.clone(),
                    relay_url: optional(2),
                    marker: raw.get(3).cloned(),
                },
                None => Tag::Malformed(raw.to_vec()),
            },
            Some(_) => Tag::Unknown(raw.to_vec()),
            None => Tag::Malformed(Vec::new()),
        }
    }

    /// The type marker (element 0), if any
    pub fn marker(&self) -> Option<&str> {
        match self {
            Tag::PubKey { .. } => Some("p"),
            Tag::Event { .. } => Some("e"),
            Tag::Malformed(raw) | Tag::Unknown(raw) => raw.first().map(String::as_str),
        }
    }
}
