// src/constants.rs
//
// Application-wide constants shared by the domain, the store and the CLI.

/// Tag given to new blocks and substituted when a block loses its last tag.
///
/// Used in: `domain/memo.rs`
pub const DEFAULT_TAG: &str = "uncategorized";

/// Active-tag value that disables tag-tab filtering.
///
/// Used in: `application/memo_filter.rs`, `lib.rs`
pub const ALL_TAGS: &str = "all";

/// Smallest display height a block may have. Every height update is clamped to it.
pub const MIN_BLOCK_HEIGHT: u32 = 100;

pub const DEFAULT_BLOCK_HEIGHT: u32 = 200;

pub const DEFAULT_BLOCK_TITLE: &str = "New memo";

/// Key under which the memo collection is kept in the JSON store.
pub const MEMOS_KEY: &str = "memos";

/// File name used both for the store and for exports.
pub const STORE_FILE_NAME: &str = "store.json";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name below the platform data/config dirs.
pub const APP_DIR_NAME: &str = "frogmemo";

/// Characters of content shown in list previews.
pub const PREVIEW_WIDTH: usize = 60;
