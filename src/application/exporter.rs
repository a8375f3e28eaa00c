// src/application/exporter.rs
use crate::application::memo_filter::unique_tags;
use crate::domain::{DomainError, MemoBlock};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Snapshot of the whole collection as offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub memo_blocks: Vec<MemoBlock>,
    pub available_tags: Vec<String>,
}

impl ExportDocument {
    pub fn from_blocks(blocks: &[MemoBlock]) -> Self {
        Self {
            memo_blocks: blocks.to_vec(),
            available_tags: unique_tags(blocks),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::Format(e.to_string()))
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write export to {}", path.display()))?;
        info!(path = %path.display(), blocks = self.memo_blocks.len(), "Exported memo blocks");
        Ok(())
    }
}
