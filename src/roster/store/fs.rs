use super::DataStore;
use crate::error::{Result, RosterError};
use std::fs;
use std::path::{Path, PathBuf};

/// Single-file JSON storage.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
                fs::create_dir_all(dir).map_err(RosterError::Io)
            }
            _ => Ok(()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "students_data.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }
}

impl DataStore for FileStore {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(RosterError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, document: &str) -> Result<()> {
        self.ensure_parent()?;

        // Write then rename so a crash never leaves a half-written document
        let tmp = self.tmp_path();
        fs::write(&tmp, document).map_err(RosterError::Io)?;
        fs::rename(&tmp, &self.path).map_err(RosterError::Io)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
