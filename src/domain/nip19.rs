//! NIP-19 bech32 entity decoding
//!
//! Bare keys and ids (`npub`, `nsec`, `note`) carry a 32-byte payload. Shareable
//! identifiers (`nprofile`, `nevent`, `naddr`, `nrelay`) carry a list of TLV
//! records:
//!
//! | type | meaning |
//! |------|---------|
//! | 0    | special: key / id (32 bytes), `naddr` identifier or relay URL (UTF-8) |
//! | 1    | relay URL (UTF-8, repeatable) |
//! | 2    | author public key (32 bytes) |
//! | 3    | kind (big-endian u32) |
//!
//! # Examples
//!
//! ```
//! use notescan::domain::nip19::{decode, Nip19Entity};
//!
//! let entity =
//!     decode("npub1srf6g8v2qpnecqg9l2kzehmkg0ym5f5rtnlsj6lhl8r6pmhger7q5mtt3q").unwrap();
//! assert_eq!(
//!     entity,
//!     Nip19Entity::Npub(
//!         "80d3a41d8a00679c0105faac2cdf7643c9ba26835cff096bf7f9c7a0eee8c8fc".to_string()
//!     )
//! );
//! ```

use bech32::primitives::decode::CheckedHrpstring;
use bech32::Checksum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const TLV_SPECIAL: u8 = 0;
const TLV_RELAY: u8 = 1;
const TLV_AUTHOR: u8 = 2;
const TLV_KIND: u8 = 3;

/// Bech32 with the code length limit raised from 1023 to 5000 characters
///
/// `nprofile` and `naddr` identifiers with many relays or a long `d` tag
/// routinely exceed the limit of the stock `Bech32` checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NostrBech32 {}

impl Checksum for NostrBech32 {
    type MidstateRepr = u32;
    const CODE_LENGTH: usize = 5000;
    const CHECKSUM_LENGTH: usize = 6;
    const GENERATOR_SH: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];
    const TARGET_RESIDUE: u32 = 1;
}

/// Human-readable prefixes recognized inside note text
pub const PREFIXES: [&str; 7] = [
    "npub", "nsec", "note", "nprofile", "nevent", "naddr", "nrelay",
];

/// Decoded NIP-19 entity, serialized as `{"type": <prefix>, "data": <payload>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Nip19Entity {
    /// Public key, lowercase hex
    Npub(String),
    /// Secret key, lowercase hex
    Nsec(String),
    /// Event id, lowercase hex
    Note(String),
    Nprofile(ProfilePointer),
    Nevent(EventPointer),
    Naddr(AddressPointer),
    /// Relay URL
    Nrelay(String),
}

impl Nip19Entity {
    /// The bech32 prefix this entity is encoded under
    pub fn prefix(&self) -> &'static str {
        match self {
            Nip19Entity::Npub(_) => "npub",
            Nip19Entity::Nsec(_) => "nsec",
            Nip19Entity::Note(_) => "note",
            Nip19Entity::Nprofile(_) => "nprofile",
            Nip19Entity::Nevent(_) => "nevent",
            Nip19Entity::Naddr(_) => "naddr",
            Nip19Entity::Nrelay(_) => "nrelay",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePointer {
    pub pubkey: String,
    pub relays: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPointer {
    pub id: String,
    pub relays: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<u32>,
}

/// Pointer to a parameterized replaceable event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPointer {
    pub identifier: String,
    pub pubkey: String,
    pub kind: u32,
    pub relays: Vec<String>,
}

/// Reasons a bech32 candidate is not a NIP-19 entity
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Nip19Error {
    #[error("Invalid bech32 string: {0}")]
    Bech32(String),

    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    #[error("Expected {expected} bytes for {field}, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Missing TLV record: {0}")]
    MissingField(&'static str),

    #[error("Truncated TLV record")]
    TruncatedTlv,

    #[error("Field {0} is not valid UTF-8")]
    InvalidUtf8(&'static str),
}

/// Decode a complete bech32 string into a NIP-19 entity
///
/// The checksum must be plain bech32 (not bech32m) over at most 5000
/// characters, the prefix one of [`PREFIXES`], and the payload well-formed
/// for that prefix.
pub fn decode(encoded: &str) -> Result<Nip19Entity, Nip19Error> {
    let checked = CheckedHrpstring::new::<NostrBech32>(encoded)
        .map_err(|e| Nip19Error::Bech32(e.to_string()))?;
    let prefix = checked.hrp().as_str().to_ascii_lowercase();
    let data: Vec<u8> = checked.byte_iter().collect();

    match prefix.as_str() {
        "npub" => Ok(Nip19Entity::Npub(hex32("pubkey", &data)?)),
        "nsec" => Ok(Nip19Entity::Nsec(hex32("seckey", &data)?)),
        "note" => Ok(Nip19Entity::Note(hex32("id", &data)?)),
        "nprofile" => {
            let tlv = Tlv::parse(&data)?;
            let pubkey = tlv.special.ok_or(Nip19Error::MissingField("pubkey"))?;
            Ok(Nip19Entity::Nprofile(ProfilePointer {
                pubkey: hex32("pubkey", pubkey)?,
                relays: tlv.relays()?,
            }))
        }
        "nevent" => {
            let tlv = Tlv::parse(&data)?;
            let id = tlv.special.ok_or(Nip19Error::MissingField("id"))?;
            Ok(Nip19Entity::Nevent(EventPointer {
                id: hex32("id", id)?,
                relays: tlv.relays()?,
                author: tlv.author.map(|a| hex32("author", a)).transpose()?,
                kind: tlv.kind.map(kind_u32).transpose()?,
            }))
        }
        "naddr" => {
            let tlv = Tlv::parse(&data)?;
            let identifier = tlv.special.ok_or(Nip19Error::MissingField("identifier"))?;
            let author = tlv.author.ok_or(Nip19Error::MissingField("author"))?;
            let kind = tlv.kind.ok_or(Nip19Error::MissingField("kind"))?;
            Ok(Nip19Entity::Naddr(AddressPointer {
                identifier: utf8("identifier", identifier)?,
                pubkey: hex32("author", author)?,
                kind: kind_u32(kind)?,
                relays: tlv.relays()?,
            }))
        }
        "nrelay" => {
            let tlv = Tlv::parse(&data)?;
            let url = tlv.special.ok_or(Nip19Error::MissingField("relay"))?;
            Ok(Nip19Entity::Nrelay(utf8("relay", url)?))
        }
        _ => Err(Nip19Error::UnknownPrefix(prefix)),
    }
}

/// TLV records of a shareable identifier; the first occurrence of each
/// single-valued type wins, unknown types are skipped
#[derive(Debug, Default)]
struct Tlv<'a> {
    special: Option<&'a [u8]>,
    relays: Vec<&'a [u8]>,
    author: Option<&'a [u8]>,
    kind: Option<&'a [u8]>,
}

impl<'a> Tlv<'a> {
    fn parse(mut data: &'a [u8]) -> Result<Self, Nip19Error> {
        let mut tlv = Tlv::default();

        while !data.is_empty() {
            if data.len() < 2 {
                return Err(Nip19Error::TruncatedTlv);
            }
            let (kind, len) = (data[0], data[1] as usize);
            let value = data.get(2..2 + len).ok_or(Nip19Error::TruncatedTlv)?;
            data = &data[2 + len..];

            match kind {
                TLV_SPECIAL => {
                    tlv.special.get_or_insert(value);
                }
                TLV_RELAY => tlv.relays.push(value),
                TLV_AUTHOR => {
                    tlv.author.get_or_insert(value);
                }
                TLV_KIND => {
                    tlv.kind.get_or_insert(value);
                }
                _ => {}
            }
        }

        Ok(tlv)
    }

    fn relays(&self) -> Result<Vec<String>, Nip19Error> {
        self.relays.iter().map(|r| utf8("relay", r)).collect()
    }
}

fn hex32(field: &'static str, bytes: &[u8]) -> Result<String, Nip19Error> {
    if bytes.len() != 32 {
        return Err(Nip19Error::InvalidLength {
            field,
            expected: 32,
            actual: bytes.len(),
        });
    }
    Ok(hex::encode(bytes))
}

fn kind_u32(bytes: &[u8]) -> Result<u32, Nip19Error> {
    let array: [u8; 4] = bytes.try_into().map_err(|_| Nip19Error::InvalidLength {
        field: "kind",
        expected: 4,
        actual: bytes.len(),
    })?;
    Ok(u32::from_be_bytes(array))
}

fn utf8(field: &'static str, bytes: &[u8]) -> Result<String, Nip19Error> {
    String::from_utf8(bytes.to_vec()).map_err(|_| Nip19Error::InvalidUtf8(field))
}
