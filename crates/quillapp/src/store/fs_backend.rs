use super::backend::KvBackend;
use crate::error::{QuillError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed key/value store: one file per key under a single root
/// directory. Keys are restricted to the flat layout in [`crate::keys`]
/// (alphanumerics, `-` and `_`), so they are used as file names directly.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(QuillError::Io)?;
        }
        Ok(())
    }
}

impl KvBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(QuillError::Io)?;
        Ok(Some(value))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;

        // Atomic write: tmp then rename, so a crash mid-write leaves the
        // previous document intact.
        let tmp_path = self.root.join(format!(".{}.tmp", key));
        fs::write(&tmp_path, value).map_err(QuillError::Io)?;
        fs::rename(&tmp_path, self.key_path(key)).map_err(QuillError::Io)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(QuillError::Io)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(QuillError::Io)? {
            let entry = entry.map_err(QuillError::Io)?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                // Skip stray tmp artifacts from interrupted writes.
                if !name.starts_with('.') {
                    keys.push(name.to_string());
                }
            }
        }
        Ok(keys)
    }
}
