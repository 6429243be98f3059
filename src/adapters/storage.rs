use crate::core::Storage;
use crate::utils::error::{Result, UtilizationError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Filesystem storage. Relative paths resolve against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => UtilizationError::FileNotFound {
                path: full_path.display().to_string(),
            },
            _ => UtilizationError::IoError(e),
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(())
    }
}
