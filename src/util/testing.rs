// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{Clipboard, MemoRepository};
use crate::domain::{DomainError, MemoBlock};

/// Shared mock repository for testing code that depends on MemoRepository
///
/// Records every saved snapshot so tests can assert on what was persisted.
///
/// # Examples
///
/// ```
/// use frogmemo::util::testing::MockMemoRepository;
/// use frogmemo::domain::MemoBlock;
///
/// let mock = MockMemoRepository::builder()
///     .with_blocks(vec![MemoBlock::new("1")])
///     .with_save_failure("disk full")
///     .build();
/// assert_eq!(mock.save_count(), 0);
/// ```
pub struct MockMemoRepository {
    stored: Option<Vec<MemoBlock>>,
    load_failure: Option<String>,
    save_failure: Option<String>,
    saved: Vec<Vec<MemoBlock>>,
}

impl MockMemoRepository {
    pub fn builder() -> MockMemoRepositoryBuilder {
        MockMemoRepositoryBuilder::new()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saved.len()
    }

    pub fn last_saved(&self) -> Option<&[MemoBlock]> {
        self.saved.last().map(Vec::as_slice)
    }
}

impl MemoRepository for MockMemoRepository {
    fn load_blocks(&mut self) -> Result<Option<Vec<MemoBlock>>, DomainError> {
        match &self.load_failure {
            Some(msg) => Err(DomainError::Store(msg.clone())),
            None => Ok(self.stored.clone()),
        }
    }

    fn save_blocks(&mut self, blocks: &[MemoBlock]) -> Result<(), DomainError> {
        if let Some(msg) = &self.save_failure {
            return Err(DomainError::Store(msg.clone()));
        }
        self.stored = Some(blocks.to_vec());
        self.saved.push(blocks.to_vec());
        Ok(())
    }
}

/// Builder for MockMemoRepository
///
/// Provides a fluent interface for configuring mock behavior.
#[derive(Default)]
pub struct MockMemoRepositoryBuilder {
    stored: Option<Vec<MemoBlock>>,
    load_failure: Option<String>,
    save_failure: Option<String>,
}

impl MockMemoRepositoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks returned by load_blocks; without this the store looks absent
    pub fn with_blocks(mut self, blocks: Vec<MemoBlock>) -> Self {
        self.stored = Some(blocks);
        self
    }

    /// Make load_blocks fail with a store error
    pub fn with_load_failure(mut self, message: &str) -> Self {
        self.load_failure = Some(message.to_string());
        self
    }

    /// Make every save_blocks call fail with a store error
    pub fn with_save_failure(mut self, message: &str) -> Self {
        self.save_failure = Some(message.to_string());
        self
    }

    pub fn build(self) -> MockMemoRepository {
        MockMemoRepository {
            stored: self.stored,
            load_failure: self.load_failure,
            save_failure: self.save_failure,
            saved: Vec::new(),
        }
    }
}

/// Clipboard that records what was written.
#[derive(Debug, Default)]
pub struct MockClipboard {
    pub contents: Vec<String>,
    pub fail: bool,
}

impl Clipboard for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::Clipboard("mock clipboard unavailable".to_string()));
        }
        self.contents.push(text.to_string());
        Ok(())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
