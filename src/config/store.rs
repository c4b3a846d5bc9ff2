//! JSON document storage on the local filesystem.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{EipError, Result};

/// Loads and saves JSON documents.
///
/// Files are UTF-8, pretty-printed JSON. Writes go through a temporary file
/// followed by a rename so a crash never leaves a half-written document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStore;

impl JsonStore {
    /// Create a store.
    pub fn new() -> Self {
        Self
    }

    /// Whether a document exists at `path`.
    pub fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    /// Read and parse the document at `path`.
    pub fn load(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| EipError::DocumentParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write `document` to `path`, creating parent directories.
    pub fn save(&self, path: &Path, document: &Value) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content =
            serde_json::to_string_pretty(document).map_err(|e| EipError::Other(e.into()))?;
        content.push('\n');

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        tracing::debug!("Saved {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("providers").join("a.org").join("provider.json");
        let store = JsonStore::new();

        store.save(&path, &json!({"domain": "a.org"})).unwrap();

        assert!(store.exists(&path));
    }

    #[test]
    fn load_returns_saved_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("eip.json");
        let store = JsonStore::new();
        let doc = json!({"provider": "a.org", "openvpn_port": 443, "nested": {"k": [1, 2]}});

        store.save(&path, &doc).unwrap();

        assert_eq!(store.load(&path).unwrap(), doc);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("eip.json");
        JsonStore::new().save(&path, &json!({})).unwrap();
        assert!(!temp.path().join("eip.json.tmp").exists());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = JsonStore::new()
            .load(&temp.path().join("missing.json"))
            .unwrap_err();
        assert!(matches!(err, EipError::Io(_)));
    }

    #[test]
    fn load_corrupt_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("eip.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonStore::new().load(&path).unwrap_err();
        assert!(matches!(err, EipError::DocumentParse { .. }));
    }

    #[test]
    fn exists_is_false_for_directories() {
        let temp = TempDir::new().unwrap();
        assert!(!JsonStore::new().exists(temp.path()));
    }
}
