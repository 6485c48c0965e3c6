//! Anchored matchers tried at each cursor position
//!
//! Every matcher receives the remaining input starting at the cursor and
//! either claims a non-empty prefix of it or declines.

use crate::domain::nip19;
use crate::domain::node::ParsedTextNoteNode;
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

/// A prefix of the remaining input claimed by a matcher
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Match {
    /// Byte length of the claimed prefix
    pub len: usize,
    pub node: ParsedTextNoteNode,
}

pub(super) type Matcher = fn(&str) -> Option<Match>;

/// Matchers in priority order; the first to succeed wins
pub(super) const MATCHERS: [Matcher; 4] = [
    match_bech32_entity,
    match_url,
    match_tag_reference,
    match_hash_tag,
];

/// Characters trimmed off the end of a URL candidate
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', '\''];

fn bech32_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let pattern = format!(
            r"(?i)^(?:{})1[ac-hj-np-z02-9]+",
            nip19::PREFIXES.join("|")
        );
        Regex::new(&pattern).unwrap()
    })
}

/// Scheme and host: `http`, `https`, `ws`, `wss` (case-sensitive)
fn url_head_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(?:https?|wss?)://[-a-zA-Z0-9.]+").unwrap())
}

fn url_port_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^:([0-9]+)").unwrap())
}

/// Optional path, query and fragment
fn url_tail_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:/[-A-Za-z0-9_~!$&'()*+.,/:;@=%\[\]]*)?",
            r"(?:\?[-A-Za-z0-9_~!$&'()*+.,/:;@=%?\[\]]*)?",
            r"(?:#[-A-Za-z0-9_~!$&'()*+.,/:;@=%?#\[\]]*)?",
        ))
        .unwrap()
    })
}

fn tag_reference_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#\[([0-9]+)\]").unwrap())
}

/// `\w` is Unicode-aware: letters, marks, decimal digits, connector punctuation
fn hash_tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#\w+").unwrap())
}

pub(super) fn match_bech32_entity(rest: &str) -> Option<Match> {
    if !rest.starts_with(['n', 'N']) {
        return None;
    }
    let candidate = bech32_regex().find(rest)?.as_str();

    match nip19::decode(candidate) {
        Ok(entity) => Some(Match {
            len: candidate.len(),
            node: ParsedTextNoteNode::bech32_entity(candidate, entity),
        }),
        Err(e) => {
            trace!(candidate, error = %e, "rejected bech32 candidate");
            None
        }
    }
}

pub(super) fn match_url(rest: &str) -> Option<Match> {
    if !rest.starts_with(['h', 'w']) {
        return None;
    }
    let head = url_head_regex().find(rest)?;
    let authority_start = rest.find("://")? + 3;
    let mut end = head.end();

    // A colon only belongs to the URL when a valid port follows it
    if let Some(port) = url_port_regex().captures(&rest[end..]) {
        if port[1].parse::<u16>().is_ok() {
            end += port[0].len();
        }
    }

    if let Some(tail) = url_tail_regex().find(&rest[end..]) {
        end += tail.end();
    }

    let url = trim_url(&rest[..end], authority_start);
    let host = &url[authority_start..];
    if !host.bytes().any(|b| b.is_ascii_alphanumeric()) {
        trace!(candidate = &rest[..end], "URL candidate has no host");
        return None;
    }

    Some(Match {
        len: url.len(),
        node: ParsedTextNoteNode::url(url),
    })
}

/// Drop trailing sentence punctuation and unbalanced closing brackets,
/// never cutting into `scheme://`
fn trim_url(url: &str, min_len: usize) -> &str {
    let mut url = url;

    while url.len() > min_len {
        let Some(last) = url.chars().last() else {
            break;
        };
        let unbalanced = match last {
            ')' => url.matches(')').count() > url.matches('(').count(),
            ']' => url.matches(']').count() > url.matches('[').count(),
            c => TRAILING_PUNCTUATION.contains(&c),
        };
        if !unbalanced {
            break;
        }
        url = &url[..url.len() - last.len_utf8()];
    }

    url
}

pub(super) fn match_tag_reference(rest: &str) -> Option<Match> {
    if !rest.starts_with("#[") {
        return None;
    }
    let caps = tag_reference_regex().captures(rest)?;
    let whole = caps.get(0)?.as_str();
    let tag_index = caps[1].parse::<usize>().ok()?;

    Some(Match {
        len: whole.len(),
        node: ParsedTextNoteNode::tag_reference(tag_index, whole),
    })
}

pub(super) fn match_hash_tag(rest: &str) -> Option<Match> {
    if !rest.starts_with('#') {
        return None;
    }
    let found = hash_tag_regex().find(rest)?.as_str();

    Some(Match {
        len: found.len(),
        node: ParsedTextNoteNode::hash_tag(found),
    })
}
