// src/domain/memo.rs
use crate::constants::{DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_TITLE, DEFAULT_TAG, MIN_BLOCK_HEIGHT};
use crate::domain::Format;
use serde::{Deserialize, Serialize};

/// One user-editable note. The whole collection of blocks is the unit of persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoBlock {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub format: Format,
    pub show_line_numbers: bool,
    pub height: u32,
}

impl MemoBlock {
    /// A block with default field values.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: DEFAULT_BLOCK_TITLE.to_string(),
            content: String::new(),
            tags: vec![DEFAULT_TAG.to_string()],
            format: Format::Auto,
            show_line_numbers: false,
            height: DEFAULT_BLOCK_HEIGHT,
        }
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = clamp_height(height);
    }

    pub fn toggle_line_numbers(&mut self) {
        self.show_line_numbers = !self.show_line_numbers;
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Append a tag unless it is blank or already present. Returns whether the tags changed.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove a tag. Removing the last one leaves exactly the default tag.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        let removed = self.tags.len() != before;
        if self.tags.is_empty() {
            self.tags.push(DEFAULT_TAG.to_string());
        }
        removed
    }

    /// Restore invariants on data read from outside (store, import).
    pub fn normalize(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags.drain(..) {
            let tag = tag.trim().to_string();
            if !tag.is_empty() && !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        if seen.is_empty() {
            seen.push(DEFAULT_TAG.to_string());
        }
        self.tags = seen;
        self.height = clamp_height(self.height);
    }
}

pub fn clamp_height(height: u32) -> u32 {
    height.max(MIN_BLOCK_HEIGHT)
}
