//! Read a capture file into an untyped JSON tree.

use serde_json::Value;
use std::io;
use std::path::Path;

use crate::error::{ConvertError, Result};

/// Reads and parses the whole capture file.
///
/// A missing file is reported as [`ConvertError::InputNotFound`] so callers
/// can tell it apart from other read failures.
pub fn load_capture(path: &Path) -> Result<Value> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConvertError::InputNotFound(path.to_path_buf())
        } else {
            ConvertError::ReadInput {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    tracing::debug!("read {} bytes from {}", bytes.len(), path.display());
    parse_capture(&bytes).map_err(|source| ConvertError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses capture bytes already in memory.
pub fn parse_capture(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_capture_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        match load_capture(&path) {
            Err(ConvertError::InputNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_capture_bad_json_is_parse_error() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"{ not json").unwrap();
        f.flush().unwrap();
        assert!(matches!(
            load_capture(f.path()),
            Err(ConvertError::ParseInput { .. })
        ));
    }

    #[test]
    fn load_capture_keeps_key_order() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(br#"{"pluginStates2":{"z":{},"a":{}}}"#).unwrap();
        f.flush().unwrap();
        let doc = load_capture(f.path()).unwrap();
        let keys: Vec<&String> = doc["pluginStates2"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a"]);
    }
}
