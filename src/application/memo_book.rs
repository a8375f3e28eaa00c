// src/application/memo_book.rs
use crate::application::beautifier::{BuiltinFormatter, CodeFormatter};
use crate::application::detector::{can_beautify, resolve_format};
use crate::application::exporter::ExportDocument;
use crate::application::memo_filter::{unique_tags, MemoFilter};
use crate::constants::{DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_TITLE};
use crate::domain::memo::clamp_height;
use crate::domain::{DomainError, Format, MemoBlock};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, error, info, instrument, warn};

/// Persistence seam for the memo collection. The whole collection is written on every save.
pub trait MemoRepository {
    /// `None` when nothing has been stored yet.
    fn load_blocks(&mut self) -> Result<Option<Vec<MemoBlock>>, DomainError>;

    fn save_blocks(&mut self, blocks: &[MemoBlock]) -> Result<(), DomainError>;
}

/// Write-only clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), DomainError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Transient, dismissible message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Field values for newly created blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDefaults {
    pub title: String,
    pub format: Format,
    pub height: u32,
    pub show_line_numbers: bool,
}

impl Default for BlockDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_BLOCK_TITLE.to_string(),
            format: Format::Auto,
            height: DEFAULT_BLOCK_HEIGHT,
            show_line_numbers: false,
        }
    }
}

/// In-memory memo collection; the source of truth for the session.
///
/// Every mutation rewrites the full collection through the repository. A
/// failed write is logged and queued as a notification, the in-memory state
/// is kept either way.
pub struct MemoBook<R: MemoRepository, F: CodeFormatter = BuiltinFormatter> {
    repository: R,
    formatter: F,
    defaults: BlockDefaults,
    blocks: Vec<MemoBlock>,
    notifications: Vec<Notification>,
}

impl<R: MemoRepository> MemoBook<R> {
    pub fn open(repository: R, defaults: BlockDefaults) -> Result<Self, DomainError> {
        Self::with_formatter(repository, BuiltinFormatter::new(), defaults)
    }
}

impl<R: MemoRepository, F: CodeFormatter> MemoBook<R, F> {
    /// Load the stored collection, seeding one default block when nothing is stored.
    pub fn with_formatter(
        mut repository: R,
        formatter: F,
        defaults: BlockDefaults,
    ) -> Result<Self, DomainError> {
        let stored = repository.load_blocks()?;
        let mut book = Self {
            repository,
            formatter,
            defaults,
            blocks: Vec::new(),
            notifications: Vec::new(),
        };

        match stored {
            Some(mut blocks) if !blocks.is_empty() => {
                blocks.iter_mut().for_each(MemoBlock::normalize);
                info!(count = blocks.len(), "Loaded memo blocks");
                book.blocks = blocks;
            }
            _ => {
                info!("No stored memo blocks, seeding default block");
                let block = book.default_block();
                book.blocks.push(block);
                book.persist();
            }
        }
        Ok(book)
    }

    pub fn blocks(&self) -> &[MemoBlock] {
        &self.blocks
    }

    pub fn block(&self, id: &str) -> Result<&MemoBlock, DomainError> {
        self.blocks
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| DomainError::BlockNotFound(id.to_string()))
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn filtered(&self, filter: &MemoFilter) -> Vec<&MemoBlock> {
        filter.apply(&self.blocks)
    }

    pub fn unique_tags(&self) -> Vec<String> {
        unique_tags(&self.blocks)
    }

    /// Deleting is only offered while more than one block exists.
    pub fn can_delete(&self) -> bool {
        self.blocks.len() > 1
    }

    pub fn add_block(&mut self) -> String {
        self.add_block_with(|_| {})
    }

    /// Create a default block, let `init` fill it in, and persist once.
    pub fn add_block_with(&mut self, init: impl FnOnce(&mut MemoBlock)) -> String {
        let mut block = self.default_block();
        init(&mut block);
        block.normalize();
        let id = block.id.clone();
        debug!(id = %id, "Adding memo block");
        self.blocks.push(block);
        self.persist();
        id
    }

    pub fn update_content(
        &mut self,
        id: &str,
        content: impl Into<String>,
    ) -> Result<(), DomainError> {
        let content = content.into();
        self.update(id, |b| b.content = content)
    }

    pub fn update_title(&mut self, id: &str, title: impl Into<String>) -> Result<(), DomainError> {
        let title = title.into();
        self.update(id, |b| b.title = title)
    }

    pub fn update_format(&mut self, id: &str, format: Format) -> Result<(), DomainError> {
        self.update(id, |b| b.format = format)
    }

    /// Returns the new setting.
    pub fn toggle_line_numbers(&mut self, id: &str) -> Result<bool, DomainError> {
        self.update(id, |b| {
            b.toggle_line_numbers();
            b.show_line_numbers
        })
    }

    /// Returns the stored, clamped height.
    pub fn update_height(&mut self, id: &str, height: u32) -> Result<u32, DomainError> {
        self.update(id, |b| {
            b.set_height(height);
            b.height
        })
    }

    pub fn add_tag(&mut self, id: &str, tag: &str) -> Result<bool, DomainError> {
        self.update(id, |b| b.add_tag(tag))
    }

    pub fn remove_tag(&mut self, id: &str, tag: &str) -> Result<bool, DomainError> {
        self.update(id, |b| b.remove_tag(tag))
    }

    /// Remove a block. The last remaining block is never removed; `Ok(false)` then.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_block(&mut self, id: &str) -> Result<bool, DomainError> {
        let index = self
            .blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| DomainError::BlockNotFound(id.to_string()))?;

        if !self.can_delete() {
            debug!(id, "Refusing to delete the last memo block");
            return Ok(false);
        }

        self.blocks.remove(index);
        self.persist();
        info!(id, "Deleted memo block");
        Ok(true)
    }

    /// Reformat a block's content. A formatter failure leaves the content as is
    /// and is reported as an error notification. Blank or plain-text content is
    /// left alone and nothing is saved.
    #[instrument(level = "debug", skip(self))]
    pub fn beautify(&mut self, id: &str) -> Result<(), DomainError> {
        let block = self.block(id)?;
        if !can_beautify(&block.content, block.format) {
            debug!(id, "Nothing to format");
            self.notifications.push(Notification::info("Nothing to format"));
            return Ok(());
        }
        let format = resolve_format(block.format, &block.content);

        match self.formatter.format(&block.content, format) {
            Ok(formatted) => {
                self.update(id, |b| b.content = formatted)?;
                self.notifications
                    .push(Notification::info(format!("{} formatted", format.label())));
            }
            Err(e) => {
                warn!(id, error = %e, "Formatting failed");
                self.notifications
                    .push(Notification::error(format!("Formatting failed: {e}")));
            }
        }
        Ok(())
    }

    pub fn copy_to(
        &mut self,
        id: &str,
        clipboard: &mut impl Clipboard,
    ) -> Result<(), DomainError> {
        let content = &self.block(id)?.content;
        clipboard.write_text(content)?;
        self.notifications.push(Notification::info("Copied to clipboard"));
        Ok(())
    }

    pub fn export_document(&self) -> ExportDocument {
        ExportDocument::from_blocks(&self.blocks)
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn update<T>(
        &mut self,
        id: &str,
        edit: impl FnOnce(&mut MemoBlock) -> T,
    ) -> Result<T, DomainError> {
        let block = self
            .blocks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| DomainError::BlockNotFound(id.to_string()))?;
        let out = edit(block);
        self.persist();
        Ok(out)
    }

    fn persist(&mut self) {
        match self.repository.save_blocks(&self.blocks) {
            Ok(()) => debug!(count = self.blocks.len(), "Persisted memo blocks"),
            Err(e) => {
                error!(error = %e, "Failed to persist memo blocks");
                self.notifications.push(Notification::error(format!("Save failed: {e}")));
            }
        }
    }

    fn default_block(&self) -> MemoBlock {
        let mut block = MemoBlock::new(self.next_id());
        block.title = self.defaults.title.clone();
        block.format = self.defaults.format;
        block.height = clamp_height(self.defaults.height);
        block.show_line_numbers = self.defaults.show_line_numbers;
        block
    }

    /// Millisecond timestamp, bumped past every numeric id in use so ids stay unique
    /// and increase even when the clock does not.
    fn next_id(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let highest = self
            .blocks
            .iter()
            .filter_map(|b| b.id.parse::<u128>().ok())
            .max();
        match highest {
            Some(h) if h >= now => (h + 1).to_string(),
            _ => now.to_string(),
        }
    }
}
