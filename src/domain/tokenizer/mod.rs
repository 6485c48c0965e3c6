//! Text note tokenizer
//!
//! Scans a note body left to right. At every cursor position the matchers are
//! tried in priority order (bech32 entity, URL, tag reference, hashtag); the
//! first one that claims a prefix of the remaining input produces the next
//! node. Characters no matcher claims accumulate into a single plain text
//! node.
//!
//! # Examples
//!
//! ```
//! use notescan::domain::tokenizer::tokenize;
//! use notescan::domain::ParsedTextNoteNode;
//!
//! let nodes = tokenize("gm #nostr");
//! assert_eq!(
//!     nodes,
//!     vec![
//!         ParsedTextNoteNode::plain_text("gm "),
//!         ParsedTextNoteNode::hash_tag("#nostr"),
//!     ]
//! );
//! ```

mod matchers;

use crate::domain::node::ParsedTextNoteNode;
use matchers::MATCHERS;
use tracing::debug;

/// Split a note body into classified nodes
///
/// Never fails: anything no matcher recognizes is plain text. Concatenating
/// the nodes' content reproduces `input`.
pub fn tokenize(input: &str) -> Vec<ParsedTextNoteNode> {
    let mut nodes = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < input.len() {
        let rest = &input[cursor..];

        match MATCHERS.iter().find_map(|matcher| matcher(rest)) {
            Some(found) => {
                if plain_start < cursor {
                    nodes.push(ParsedTextNoteNode::plain_text(&input[plain_start..cursor]));
                }
                nodes.push(found.node);
                cursor += found.len;
                plain_start = cursor;
            }
            None => {
                cursor += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < input.len() {
        nodes.push(ParsedTextNoteNode::plain_text(&input[plain_start..]));
    }

    debug!(bytes = input.len(), nodes = nodes.len(), "tokenized text note");
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nip19::tests::{encode, tlv_record, NPUB, NPUB_HEX};
    use crate::domain::nip19::{Nip19Entity, ProfilePointer};

    fn text(s: &str) -> ParsedTextNoteNode {
        ParsedTextNoteNode::plain_text(s)
    }

    fn url(s: &str) -> ParsedTextNoteNode {
        ParsedTextNoteNode::url(s)
    }

    #[test]
    fn test_url_with_hash_and_hashtag() {
        let parsed = tokenize("this is url\nhttps://github.com/syusui-s/rabbit/#readme #rabbit");
        assert_eq!(
            parsed,
            vec![
                text("this is url\n"),
                url("https://github.com/syusui-s/rabbit/#readme"),
                text(" "),
                ParsedTextNoteNode::hash_tag("#rabbit"),
            ]
        );
    }

    #[test]
    fn test_punycode_url() {
        let parsed = tokenize("This is Japanese domain: https://xn--p8j9a0d9c9a.xn--q9jyb4c/");
        assert_eq!(
            parsed,
            vec![
                text("This is Japanese domain: "),
                url("https://xn--p8j9a0d9c9a.xn--q9jyb4c/"),
            ]
        );
    }

    #[test]
    fn test_image_urls() {
        let parsed = tokenize(
            "https://i.gyazo.com/8f177b9953fdb9513ad00d0743d9c608.png\nhttps://i.gyazo.com/346ad7260f6a999720c2d13317ff795f.jpg",
        );
        assert_eq!(
            parsed,
            vec![
                url("https://i.gyazo.com/8f177b9953fdb9513ad00d0743d9c608.png"),
                text("\n"),
                url("https://i.gyazo.com/346ad7260f6a999720c2d13317ff795f.jpg"),
            ]
        );
    }

    #[test]
    fn test_url_with_plus() {
        let parsed = tokenize("this is my page\nhttps://example.com/abc+def?q=ghi+jkl#lmn+opq");
        assert_eq!(
            parsed,
            vec![
                text("this is my page\n"),
                url("https://example.com/abc+def?q=ghi+jkl#lmn+opq"),
            ]
        );
    }

    #[test]
    fn test_url_with_parentheses() {
        let parsed = tokenize("I wrote this page\nhttps://example.com/test(test)?q=(q)#(h)");
        assert_eq!(
            parsed,
            vec![
                text("I wrote this page\n"),
                url("https://example.com/test(test)?q=(q)#(h)"),
            ]
        );
    }

    #[test]
    fn test_relay_urls() {
        let parsed = tokenize(
            "this is my using relays: wss://relay.damus.io, wss://relay.snort.social, ws://localhost:3000",
        );
        assert_eq!(
            parsed,
            vec![
                text("this is my using relays: "),
                url("wss://relay.damus.io"),
                text(", "),
                url("wss://relay.snort.social"),
                text(", "),
                url("ws://localhost:3000"),
            ]
        );
    }

    #[test]
    fn test_invalid_port() {
        assert_eq!(
            tokenize("ws://localhost:port"),
            vec![url("ws://localhost"), text(":port")]
        );
    }

    #[test]
    fn test_tag_references() {
        assert_eq!(
            tokenize("this is pubkey\n#[0] #[1]"),
            vec![
                text("this is pubkey\n"),
                ParsedTextNoteNode::tag_reference(0, "#[0]"),
                text(" "),
                ParsedTextNoteNode::tag_reference(1, "#[1]"),
            ]
        );
    }

    #[test]
    fn test_npub() {
        let parsed = tokenize(&format!("this is pubkey\n{}\nhello", NPUB));
        assert_eq!(
            parsed,
            vec![
                text("this is pubkey\n"),
                ParsedTextNoteNode::bech32_entity(NPUB, Nip19Entity::Npub(NPUB_HEX.to_string())),
                text("\nhello"),
            ]
        );
    }

    #[test]
    fn test_nprofile() {
        let payload = tlv_record(0, &[0x5a; 32]);
        let nprofile = encode("nprofile", &payload);
        let parsed = tokenize(&format!("cc {} !", nprofile));
        assert_eq!(
            parsed,
            vec![
                text("cc "),
                ParsedTextNoteNode::bech32_entity(
                    nprofile.as_str(),
                    Nip19Entity::Nprofile(ProfilePointer {
                        pubkey: "5a".repeat(32),
                        relays: vec![],
                    })
                ),
                text(" !"),
            ]
        );
    }

    #[test]
    fn test_long_nprofile_is_one_entity() {
        let mut payload = tlv_record(0, &[0x5a; 32]);
        for i in 0..25 {
            payload.extend(tlv_record(1, format!("wss://relay-{:02}.example.com", i).as_bytes()));
        }
        let nprofile = encode("nprofile", &payload);
        assert!(nprofile.len() > 1023);

        let parsed = tokenize(&format!("{} gm", nprofile));
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].kind(), "Bech32Entity");
        assert_eq!(parsed[0].content(), nprofile);
    }

    #[test]
    fn test_invalid_bech32_is_plain_text() {
        let broken = format!("see {}x", &NPUB[..NPUB.len() - 1]);
        assert_eq!(tokenize(&broken), vec![text(&broken)]);
    }

    #[test]
    fn test_stray_hashes_are_plain_text() {
        assert_eq!(tokenize("# #[x] #"), vec![text("# #[x] #")]);
    }

    #[test]
    fn test_hashtag_inside_word() {
        assert_eq!(
            tokenize("C#sharp"),
            vec![text("C"), ParsedTextNoteNode::hash_tag("#sharp")]
        );
    }

    #[test]
    fn test_tag_reference_followed_by_word() {
        assert_eq!(
            tokenize("#[2]abc"),
            vec![ParsedTextNoteNode::tag_reference(2, "#[2]"), text("abc")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_multibyte_plain_text() {
        assert_eq!(
            tokenize("こんにちは #ウサギ"),
            vec![text("こんにちは "), ParsedTextNoteNode::hash_tag("#ウサギ")]
        );
    }
}
