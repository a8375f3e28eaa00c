// src/infrastructure/json_store.rs
use crate::application::MemoRepository;
use crate::constants::MEMOS_KEY;
use crate::domain::{DomainError, MemoBlock};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Key-value store kept in a single JSON object file.
///
/// `set` only changes the in-memory map; `save` rewrites the whole file.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonStore {
    /// Open the store at `path`. A missing file is an empty store.
    #[instrument(level = "debug")]
    pub fn open(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store {}", path.display()))?;
            if raw.trim().is_empty() {
                Map::new()
            } else {
                serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse store {}", path.display()))?
            }
        } else {
            debug!("Store file does not exist yet");
            Map::new()
        };
        Ok(Self { path, entries })
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.entries
            .get(key)
            .map(|v| serde_json::from_value(v.clone()))
            .transpose()
            .with_context(|| format!("Failed to decode store key '{key}'"))
    }

    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)
            .with_context(|| format!("Failed to encode store key '{key}'"))?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    /// Write the map through a temp file in the same directory, then rename over the store.
    pub fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create store directory {}", dir.display()))?;

        let json = serde_json::to_string_pretty(&self.entries).context("Failed to encode store")?;
        let mut tmp = NamedTempFile::new_in(&dir).context("Failed to create temp file")?;
        tmp.write_all(json.as_bytes())
            .context("Failed to write temp file")?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace store {}", self.path.display()))?;

        debug!(path = %self.path.display(), "Saved store");
        Ok(())
    }
}

impl MemoRepository for JsonStore {
    fn load_blocks(&mut self) -> Result<Option<Vec<MemoBlock>>, DomainError> {
        self.get(MEMOS_KEY)
            .map_err(|e| DomainError::Store(format!("{e:#}")))
    }

    fn save_blocks(&mut self, blocks: &[MemoBlock]) -> Result<(), DomainError> {
        self.set(MEMOS_KEY, blocks)
            .and_then(|()| self.save())
            .map_err(|e| DomainError::Store(format!("{e:#}")))
    }
}
