use super::{KeyValueStore, StorageError};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Why a slice was reset to its default while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub key: String,
    pub reason: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' was reset to its default: {}", self.key, self.reason)
    }
}

/// Read and decode the slice stored under `key`.
///
/// A missing or blank value yields the default silently. A value that cannot
/// be read or decoded also yields the default, together with a warning.
pub fn load_slice<T, S>(store: &S, key: &str) -> (T, Option<LoadWarning>)
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => return (T::default(), None),
        Err(e) => return (T::default(), Some(warn(key, e.to_string()))),
    };

    match serde_json::from_str(&raw) {
        Ok(value) => (value, None),
        Err(e) => (T::default(), Some(warn(key, e.to_string()))),
    }
}

fn warn(key: &str, reason: String) -> LoadWarning {
    log::warn!("Storage: falling back to default for '{}': {}", key, reason);
    LoadWarning {
        key: key.to_string(),
        reason,
    }
}

/// Serialize the full value of a slice and write it under `key`
pub fn save_slice<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &json)
}
