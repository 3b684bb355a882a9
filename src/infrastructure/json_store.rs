// src/infrastructure/json_store.rs
use crate::application::DrugStore;
use crate::domain::{DomainError, Drug};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument, warn};

/// Saved-drug list persisted as a single JSON array file.
///
/// The file is read once when the store opens. Every mutation rewrites the
/// whole list through a temp file in the same directory, so an interrupted
/// write never leaves a truncated blob behind.
pub struct JsonFileStore {
    path: PathBuf,
    drugs: Vec<Drug>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty list; an
    /// unreadable or corrupt one degrades to empty rather than blocking
    /// the user.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!(path = %path.display(), "Opening drug store");
        let drugs = read_list(&path);
        Self { path, drugs }
    }

    fn persist(&self) -> Result<(), DomainError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| {
            DomainError::Store(format!("Failed to create {}: {}", parent.display(), e))
        })?;

        let json = serde_json::to_string_pretty(&self.drugs)
            .map_err(|e| DomainError::Store(format!("Failed to serialize drug list: {}", e)))?;

        let mut tmp = NamedTempFile::new_in(parent)
            .map_err(|e| DomainError::Store(format!("Failed to create temp file: {}", e)))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| DomainError::Store(format!("Failed to write drug list: {}", e)))?;
        tmp.persist(&self.path).map_err(|e| {
            DomainError::Store(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

fn read_list(path: &Path) -> Vec<Drug> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No drug store file yet, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read drug store, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(drugs) => drugs,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Drug store is not valid JSON, starting empty"
            );
            Vec::new()
        }
    }
}

impl DrugStore for JsonFileStore {
    fn load(&mut self) -> Vec<Drug> {
        self.drugs.clone()
    }

    #[instrument(level = "debug", skip(self, drug), fields(id = drug.id))]
    fn save(&mut self, drug: Drug) -> Result<bool, DomainError> {
        if self.drugs.iter().any(|d| d.id == drug.id) {
            debug!("Drug already saved");
            return Ok(false);
        }

        self.drugs.push(drug);
        if let Err(e) = self.persist() {
            // keep memory consistent with the file on a failed write
            self.drugs.pop();
            return Err(e);
        }

        Ok(true)
    }

    #[instrument(level = "debug", skip(self))]
    fn remove(&mut self, id: i64) -> Result<Option<Drug>, DomainError> {
        let Some(index) = self.drugs.iter().position(|d| d.id == id) else {
            debug!("Drug not in saved list");
            return Ok(None);
        };

        let removed = self.drugs.remove(index);
        if let Err(e) = self.persist() {
            self.drugs.insert(index, removed);
            return Err(e);
        }

        Ok(Some(removed))
    }
}
