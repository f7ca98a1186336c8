//! Object storage for uploaded images.

use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Suffix of in-flight upload files; they never show up as objects.
const TMP_SUFFIX: &str = ".upload.tmp";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid object path: {0}")]
    InvalidPath(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub path: String,
    pub url: String,
    pub size: u64,
}

pub trait ObjectStore: Send + Sync {
    /// Stores `bytes` at `path`, replacing any previous object, and returns its public URL.
    fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, StorageError>;

    /// Objects directly under `prefix`, sorted by path.
    fn list(&self, prefix: &str) -> Result<Vec<FileRef>, StorageError>;

    /// Removes every object in `paths`. Missing objects are ignored.
    fn remove(&self, paths: &[String]) -> Result<(), StorageError>;

    fn public_url(&self, path: &str) -> String;
}

/// Filesystem-backed store rooted at `<data_dir>/storage`.
pub struct LocalObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalObjectStore {
    pub fn new(root: PathBuf, public_base_url: impl Into<String>) -> Self {
        Self {
            root,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        Ok(self.root.join(validate_object_path(path)?))
    }
}

fn tmp_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(TMP_SUFFIX);
    target.with_file_name(name)
}

/// Accepts relative paths made of plain components only.
pub fn validate_object_path(path: &str) -> Result<PathBuf, StorageError> {
    let trimmed = path.trim_matches('/');
    if path.starts_with('/') || path.contains('\\') {
        return Err(StorageError::InvalidPath(path.to_string()));
    }
    let mut clean = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            _ => return Err(StorageError::InvalidPath(path.to_string())),
        }
    }
    Ok(clean)
}

impl ObjectStore for LocalObjectStore {
    fn upload(&self, path: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let target = self.resolve(path)?;
        if target == self.root || path.ends_with(TMP_SUFFIX) {
            return Err(StorageError::InvalidPath(path.to_string()));
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(&target);
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &target)?;
        info!(path, size = bytes.len(), "stored object");
        Ok(self.public_url(path))
    }

    fn list(&self, prefix: &str) -> Result<Vec<FileRef>, StorageError> {
        let dir = self.resolve(prefix)?;
        if !dir.exists() {
            return Ok(Vec::new());
        }
        if !dir.is_dir() {
            return Err(StorageError::NotFound(prefix.to_string()));
        }
        let base = validate_object_path(prefix)?;
        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name.ends_with(TMP_SUFFIX) {
                continue;
            }
            let path = object_key(&base.join(&name));
            files.push(FileRef {
                url: self.public_url(&path),
                path,
                size: metadata.len(),
            });
        }
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn remove(&self, paths: &[String]) -> Result<(), StorageError> {
        let targets = paths
            .iter()
            .map(|path| self.resolve(path))
            .collect::<Result<Vec<_>, _>>()?;
        for target in targets {
            match fs::remove_file(&target) {
                Ok(()) => debug!(path = %target.display(), "removed object"),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base_url, path.trim_start_matches('/'))
    }
}

fn object_key(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
