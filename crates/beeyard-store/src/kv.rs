//! Key-value persistence: the store's only external boundary.
//!
//! Backends move opaque bytes; the typed [`save`] / [`load_or`] helpers
//! handle JSON encoding. Loading never fails; a slot that is missing or
//! cannot be decoded falls back to the caller's default.

use crate::error::{KvError, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// The four durable slots used by the apiary store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreKey {
    Hives,
    Inspections,
    Harvests,
    Settings,
}

impl StoreKey {
    pub const ALL: [StoreKey; 4] = [
        StoreKey::Hives,
        StoreKey::Inspections,
        StoreKey::Harvests,
        StoreKey::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Hives => "hives",
            StoreKey::Inspections => "inspections",
            StoreKey::Harvests => "harvests",
            StoreKey::Settings => "settings",
        }
    }
}

/// Byte-level keyed storage with overwrite (last write wins) semantics.
pub trait KvStore {
    /// Read the bytes stored under `key`, or `None` if nothing was saved.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError>;

    /// Replace whatever is stored under `key`.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), KvError>;
}

/// Serialize `value` as JSON into `key`.
pub fn save<K, T>(kv: &mut K, key: StoreKey, value: &T) -> Result<(), StoreError>
where
    K: KvStore + ?Sized,
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Serialize {
        key: key.as_str(),
        source,
    })?;
    kv.put(key.as_str(), &bytes)?;
    tracing::debug!(key = key.as_str(), bytes = bytes.len(), "saved");
    Ok(())
}

/// Deserialize the value stored under `key`.
///
/// Returns `None` when nothing was saved or the slot cannot be read or
/// decoded; the latter two are logged and otherwise treated as absent.
pub fn load<K, T>(kv: &K, key: StoreKey) -> Option<T>
where
    K: KvStore + ?Sized,
    T: DeserializeOwned,
{
    let bytes = match kv.get(key.as_str()) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(key = key.as_str(), error = %err, "unreadable slot, treating as empty");
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key = key.as_str(), error = %err, "undecodable slot, treating as empty");
            None
        }
    }
}

/// Deserialize the value stored under `key`, or return `default`.
pub fn load_or<K, T>(kv: &K, key: StoreKey, default: T) -> T
where
    K: KvStore + ?Sized,
    T: DeserializeOwned,
{
    load(kv, key).unwrap_or(default)
}

/// In-memory backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    slots: BTreeMap<String, Vec<u8>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        Ok(self.slots.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), KvError> {
        self.slots.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Directory backend: one `<key>.json` file per key.
///
/// Writes land in a temporary sibling first and are renamed into place,
/// so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct JsonDirKv {
    dir: PathBuf,
}

impl JsonDirKv {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for JsonDirKv {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        let path = self.path_for(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error(key, &path, err)),
        };
        validate_payload_bytes(key, &path, &bytes)?;
        Ok(Some(bytes))
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), KvError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.dir).map_err(|e| io_error(key, &self.dir, e))?;

        let tmp_path = tmp_write_path(&path);
        let write_result = (|| -> Result<(), KvError> {
            let file = File::create(&tmp_path).map_err(|e| io_error(key, &tmp_path, e))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(value)
                .map_err(|e| io_error(key, &tmp_path, e))?;
            writer.flush().map_err(|e| io_error(key, &tmp_path, e))?;
            let file = writer
                .into_inner()
                .map_err(|e| io_error(key, &tmp_path, e.into_error()))?;
            file.sync_all().map_err(|e| io_error(key, &tmp_path, e))?;
            Ok(())
        })();

        if let Err(error) = write_result {
            let _ = fs::remove_file(&tmp_path);
            return Err(error);
        }

        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            KvError::Io {
                key: key.to_string(),
                message: format!("{} -> {}: {e}", tmp_path.display(), path.display()),
            }
        })?;

        // Persist the rename itself; not supported on every platform.
        if let Ok(dir) = File::open(&self.dir) {
            let _ = dir.sync_all();
        }

        Ok(())
    }
}

fn io_error(key: &str, path: &Path, err: std::io::Error) -> KvError {
    KvError::Io {
        key: key.to_string(),
        message: format!("{}: {err}", path.display()),
    }
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}.{}", std::process::id(), unique));
    PathBuf::from(tmp)
}

fn validate_payload_bytes(key: &str, path: &Path, bytes: &[u8]) -> Result<(), KvError> {
    if bytes.contains(&0) {
        return Err(KvError::Corrupt {
            key: key.to_string(),
            message: format!("{}: contains NUL byte(s)", path.display()),
        });
    }
    if std::str::from_utf8(bytes).is_err() {
        return Err(KvError::Corrupt {
            key: key.to_string(),
            message: format!("{}: contains non-UTF-8 byte sequence(s)", path.display()),
        });
    }
    Ok(())
}
