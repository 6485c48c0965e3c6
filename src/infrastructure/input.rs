//! Reading note text and events from files or stdin

use crate::domain::Event;
use crate::error::{NotescanError, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read the whole of `path`, or stdin when no path is given
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Parse a NIP-01 event from JSON text
pub fn parse_event(json: &str) -> Result<Event> {
    serde_json::from_str(json).map_err(|e| NotescanError::InvalidEvent(e.to_string()))
}

/// Read and parse an event from `path`, or stdin when no path is given
pub fn read_event(path: Option<&Path>) -> Result<Event> {
    let json = read_text(path)?;
    parse_event(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.txt");
        fs::write(&path, "gm #nostr\n").unwrap();

        assert_eq!(read_text(Some(path.as_path())).unwrap(), "gm #nostr\n");
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = read_text(Some(temp.path().join("nope.txt").as_path()));
        assert!(matches!(result, Err(NotescanError::Io(_))));
    }

    #[test]
    fn test_parse_event() {
        let event = parse_event(r##"{"kind": 1, "content": "#[0]", "tags": [["p", "abc"]]}"##)
            .unwrap();
        assert_eq!(event.kind, 1);
        assert_eq!(event.tags, vec![vec!["p".to_string(), "abc".to_string()]]);
    }

    #[test]
    fn test_parse_invalid_event() {
        let result = parse_event(r#"{"tags": "not a list"}"#);
        assert!(matches!(result, Err(NotescanError::InvalidEvent(_))));

        let result = parse_event("not json");
        assert!(matches!(result, Err(NotescanError::InvalidEvent(_))));
    }
}
