//! Durable preference flags.
//!
//! Two string keys are stored: `darkMode` holds `"true"`/`"false"` and
//! `language` holds a two-letter code. The file backend keeps them in a flat
//! JSON object under the config directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{PrefsError, PrefsResult};
use crate::locale::Language;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const LANGUAGE_KEY: &str = "language";

/// String key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> PrefsResult<()>;
}

/// JSON file backed store. Every `set` rewrites the file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> PrefsResult<Self> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|source| {
                PrefsError::Malformed {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(PrefsError::Read { path, source }),
        };
        Ok(Self { path, values })
    }

    /// Default location: `<config dir>/folio/prefs.json`.
    pub fn default_path() -> PathBuf {
        crate::config::Config::config_dir().join("prefs.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> PrefsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PrefsError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let encoded = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, encoded).map_err(|source| PrefsError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> PrefsResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// In-memory store, used when the file cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> PrefsResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored theme flag. `None` when absent or not a boolean string.
pub fn load_dark_mode(store: &dyn PreferenceStore) -> Option<bool> {
    match store.get(DARK_MODE_KEY)?.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn save_dark_mode(store: &mut dyn PreferenceStore, dark: bool) -> PrefsResult<()> {
    store.set(DARK_MODE_KEY, if dark { "true" } else { "false" })
}

/// Stored language. `None` when absent or unknown.
pub fn load_language(store: &dyn PreferenceStore) -> Option<Language> {
    Language::from_code(&store.get(LANGUAGE_KEY)?)
}

pub fn save_language(store: &mut dyn PreferenceStore, language: Language) -> PrefsResult<()> {
    store.set(LANGUAGE_KEY, language.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(load_dark_mode(&store), None);
        assert_eq!(load_language(&store), None);
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        save_dark_mode(&mut store, false).unwrap();
        save_language(&mut store, Language::Zh).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"darkMode\": \"false\""));
        assert!(raw.contains("\"language\": \"zh\""));

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(load_dark_mode(&reopened), Some(false));
        assert_eq!(load_language(&reopened), Some(Language::Zh));
    }

    #[test]
    fn test_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(PrefsError::Malformed { .. })
        ));
    }

    #[test]
    fn test_garbage_values_ignored() {
        let mut store = MemoryStore::default();
        store.set(DARK_MODE_KEY, "yes").unwrap();
        store.set(LANGUAGE_KEY, "fr").unwrap();
        assert_eq!(load_dark_mode(&store), None);
        assert_eq!(load_language(&store), None);
    }
}
