use anyhow::{Context, Result};
use frogmemo::application::{BlockDefaults, MemoBook};
use frogmemo::domain::MemoBlock;
use frogmemo::infrastructure::JsonStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary store file for integration tests
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    /// Empty store: the file does not exist yet
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().join("store.json");
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Store pre-populated with `blocks` under the memos key
    pub fn with_blocks(blocks: &[MemoBlock]) -> Result<Self> {
        let store = Self::new()?;
        let mut json = store.open_store()?;
        json.set("memos", blocks)?;
        json.save()?;
        Ok(store)
    }

    pub fn open_store(&self) -> Result<JsonStore> {
        JsonStore::open(&self.path)
    }

    pub fn open_book(&self) -> Result<MemoBook<JsonStore>> {
        Ok(MemoBook::open(self.open_store()?, BlockDefaults::default())?)
    }

    pub fn raw_json(&self) -> Result<serde_json::Value> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[allow(dead_code)]
pub fn block(id: &str, title: &str, content: &str, tags: &[&str]) -> MemoBlock {
    let mut b = MemoBlock::new(id);
    b.title = title.to_string();
    b.content = content.to_string();
    b.tags = tags.iter().map(|t| t.to_string()).collect();
    b
}

/// The two blocks used across filter and export tests
#[allow(dead_code)]
pub fn alpha_beta() -> Vec<MemoBlock> {
    vec![
        block("1", "Alpha", "SELECT * FROM t", &["work"]),
        block("2", "Beta", "let x=1", &["personal"]),
    ]
}
