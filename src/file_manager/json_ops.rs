// Atomic JSON file operations

use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

lazy_static::lazy_static! {
    static ref FILE_LOCK: Mutex<()> = Mutex::new(());
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize data: {0}")]
    Serialize(#[source] serde_json::Error),
}

fn io_err(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let _lock = FILE_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }

    let mut file = File::open(path).map_err(|e| io_err(path, e))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| io_err(path, e))?;

    serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes JSON atomically using write-to-temp-then-rename
pub fn write_json_file<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    let _lock = FILE_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let json_string = serde_json::to_string_pretty(data).map_err(StoreError::Serialize)?;

    let temp_path = path.with_extension("tmp");

    let mut temp_file = File::create(&temp_path).map_err(|e| io_err(&temp_path, e))?;

    temp_file
        .write_all(json_string.as_bytes())
        .map_err(|e| io_err(&temp_path, e))?;

    temp_file.sync_all().map_err(|e| io_err(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| io_err(path, e))?;

    Ok(())
}

pub fn read_json_file_or_default<T: DeserializeOwned + Default>(
    path: &Path,
) -> Result<T, StoreError> {
    if path.exists() {
        read_json_file(path)
    } else {
        Ok(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("armory-test-{}-{}-{}.json", name, std::process::id(), nanos))
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let path = temp_path("round-trip");
        let data = vec!["a".to_string(), "b".to_string()];
        write_json_file(&path, &data).unwrap();
        let back: Vec<String> = read_json_file(&path).unwrap();
        assert_eq!(back, data);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let path = temp_path("missing");
        let result: Result<Vec<String>, _> = read_json_file(&path);
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_read_or_default_on_missing_file() {
        let path = temp_path("default");
        let value: Vec<String> = read_json_file_or_default(&path).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_write_replaces_previous_contents() {
        let path = temp_path("replace");
        write_json_file(&path, &vec![1, 2, 3]).unwrap();
        write_json_file(&path, &vec![9]).unwrap();
        let back: Vec<i32> = read_json_file(&path).unwrap();
        assert_eq!(back, vec![9]);
        let _ = fs::remove_file(&path);
    }
}
