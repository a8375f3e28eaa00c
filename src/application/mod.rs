// src/application/mod.rs
pub mod beautifier;
pub mod detector;
pub mod exporter;
pub mod memo_book;
pub mod memo_filter;

pub use beautifier::{BuiltinFormatter, CodeFormatter};
pub use detector::{can_beautify, detect_format, resolve_format, FormatDetector};
pub use exporter::ExportDocument;
pub use memo_book::{
    BlockDefaults, Clipboard, MemoBook, MemoRepository, Notification, NotificationLevel,
};
pub use memo_filter::{unique_tags, MemoFilter};
