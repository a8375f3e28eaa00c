// src/application/memo_filter.rs
use crate::constants::ALL_TAGS;
use crate::domain::{MemoBlock, SearchScope};
use std::collections::BTreeSet;

/// Tag-tab and search parameters that select the visible blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoFilter {
    pub active_tag: String,
    pub search_term: String,
    pub scope: SearchScope,
}

impl Default for MemoFilter {
    fn default() -> Self {
        Self {
            active_tag: ALL_TAGS.to_string(),
            search_term: String::new(),
            scope: SearchScope::All,
        }
    }
}

impl MemoFilter {
    pub fn new(
        active_tag: impl Into<String>,
        search_term: impl Into<String>,
        scope: SearchScope,
    ) -> Self {
        Self {
            active_tag: active_tag.into(),
            search_term: search_term.into(),
            scope,
        }
    }

    /// Only tag-tab filtering.
    pub fn by_tag(tag: impl Into<String>) -> Self {
        Self {
            active_tag: tag.into(),
            ..Self::default()
        }
    }

    /// Only text search; a search always looks at every tag tab.
    pub fn by_search(term: impl Into<String>, scope: SearchScope) -> Self {
        Self {
            search_term: term.into(),
            scope,
            ..Self::default()
        }
    }

    /// Normalized search needle, `None` when the term is blank.
    fn needle(&self) -> Option<String> {
        let term = self.search_term.trim();
        (!term.is_empty()).then(|| term.to_lowercase())
    }

    /// Order-preserving subsequence of `blocks` selected by this filter.
    ///
    /// An active search supersedes the tag tab: the result does not depend
    /// on `active_tag` while a term is present.
    pub fn apply<'a>(&self, blocks: &'a [MemoBlock]) -> Vec<&'a MemoBlock> {
        match self.needle() {
            Some(needle) => blocks
                .iter()
                .filter(|b| matches_search(b, &needle, self.scope))
                .collect(),
            None if self.active_tag != ALL_TAGS => {
                blocks.iter().filter(|b| b.has_tag(&self.active_tag)).collect()
            }
            None => blocks.iter().collect(),
        }
    }

    pub fn matches(&self, block: &MemoBlock) -> bool {
        match self.needle() {
            Some(needle) => matches_search(block, &needle, self.scope),
            None => self.active_tag == ALL_TAGS || block.has_tag(&self.active_tag),
        }
    }
}

fn matches_search(block: &MemoBlock, needle: &str, scope: SearchScope) -> bool {
    (scope.includes_title() && block.title.to_lowercase().contains(needle))
        || (scope.includes_content() && block.content.to_lowercase().contains(needle))
        || (scope.includes_tags()
            && block.tags.iter().any(|t| t.to_lowercase().contains(needle)))
}

/// Sorted, deduplicated union of every block's tags.
pub fn unique_tags(blocks: &[MemoBlock]) -> Vec<String> {
    blocks
        .iter()
        .flat_map(|b| b.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
