use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

const STORE_VERSION: u32 = 1;

/// On-disk layout of the store
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Get the default store file path inside `data_dir`
pub fn get_store_path(data_dir: &Path) -> PathBuf {
    data_dir.join("store.json")
}

/// String-keyed store of JSON blobs, persisted as a single JSON document.
///
/// Writes go straight to disk: every `set`/`remove` rewrites the file
/// atomically so a crash never leaves a half-written store behind.
#[derive(Debug, Clone)]
pub struct KvStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl KvStore {
    /// Store that lives only in memory (nothing is ever written)
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: BTreeMap::new(),
        }
    }

    /// Open the store at `path`
    ///
    /// If the file doesn't exist, returns an empty store bound to that path.
    /// If the file exists but has an unsupported version, returns an error.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path: Some(path.to_path_buf()),
                entries: BTreeMap::new(),
            });
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open store file at {}", path.display()))?;

        let stored: StoreFile = serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse store file at {}", path.display()))?;

        if stored.version != STORE_VERSION {
            anyhow::bail!("Unsupported store version: {}", stored.version);
        }

        Ok(Self {
            path: Some(path.to_path_buf()),
            entries: stored.entries,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Raw value stored under `key`, verbatim
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Store `value` under `key`. Memory is only updated once the write lands.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.into());
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }

    /// Remove `key`. Returns true if it was present.
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        if !self.entries.contains_key(key) {
            return Ok(false);
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.flush(&next)?;
        self.entries = next;
        Ok(true)
    }

    /// Decode the JSON blob under `key`. `Ok(None)` when the key is absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(raw) => {
                let value = serde_json::from_str(raw)
                    .with_context(|| format!("Stored value for '{}' is not valid", key))?;
                Ok(Some(value))
            }
        }
    }

    pub fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize value for '{}'", key))?;
        self.set(key, raw)
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create store directory at {}", parent.display())
                })?;
            }
        }

        let mut file = AtomicWriteFile::open(path)
            .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

        let stored = StoreFile {
            version: STORE_VERSION,
            entries: entries.clone(),
        };
        serde_json::to_writer_pretty(&mut file, &stored).context("Failed to serialize store")?;

        file.commit().context("Failed to save store")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_returns_empty() {
        let tmp = TempDir::new().unwrap();
        let store = KvStore::open(&get_store_path(tmp.path())).unwrap();
        assert!(store.is_empty());
        assert!(store.path().is_some());
    }

    #[test]
    fn test_set_and_reopen_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = get_store_path(tmp.path());

        let mut store = KvStore::open(&path).unwrap();
        store.set("result", "Data Science").unwrap();
        store.set("answers", r#"{"q1":"q1_data"}"#).unwrap();

        let reopened = KvStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.get("result"), Some("Data Science"));
        // Blobs come back verbatim
        assert_eq!(reopened.get("answers"), Some(r#"{"q1":"q1_data"}"#));
    }

    #[test]
    fn test_set_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("store.json");

        let mut store = KvStore::open(&path).unwrap();
        store.set("k", "v").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_remove() {
        let tmp = TempDir::new().unwrap();
        let path = get_store_path(tmp.path());

        let mut store = KvStore::open(&path).unwrap();
        store.set("userToken", "authenticated").unwrap();
        assert!(store.remove("userToken").unwrap());
        assert!(!store.remove("userToken").unwrap());

        let reopened = KvStore::open(&path).unwrap();
        assert!(!reopened.contains("userToken"));
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let tmp = TempDir::new().unwrap();
        // A regular file where the store directory should be
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = get_store_path(&blocker);

        let mut store = KvStore::open(&path).unwrap();
        assert!(store.set("userToken", "authenticated").is_err());
        assert!(!store.contains("userToken"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unsupported_version_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = get_store_path(tmp.path());
        fs::write(&path, r#"{"version": 2, "entries": {}}"#).unwrap();

        let err = KvStore::open(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported store version"));
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = get_store_path(tmp.path());
        fs::write(&path, "not json").unwrap();

        assert!(KvStore::open(&path).is_err());
    }

    #[test]
    fn test_json_helpers() {
        let mut store = KvStore::in_memory();
        store.set_json("savedRecs", &vec!["1", "4"]).unwrap();

        let ids: Option<Vec<String>> = store.get_json("savedRecs").unwrap();
        assert_eq!(ids, Some(vec!["1".to_string(), "4".to_string()]));

        let missing: Option<Vec<String>> = store.get_json("nope").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_get_json_malformed_is_error() {
        let mut store = KvStore::in_memory();
        store.set("profile", "{broken").unwrap();

        let result: Result<Option<Vec<String>>> = store.get_json("profile");
        assert!(result.is_err());
    }

    #[test]
    fn test_in_memory_never_writes() {
        let mut store = KvStore::in_memory();
        store.set("a", "b").unwrap();
        assert!(store.path().is_none());
        assert_eq!(store.get("a"), Some("b"));
    }
}
