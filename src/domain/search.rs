// src/domain/search.rs
use crate::domain::DomainError;
use std::fmt;
use std::str::FromStr;

/// Which fields of a memo block a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Title,
    Content,
    Tags,
}

impl SearchScope {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Title => "title",
            SearchScope::Content => "content",
            SearchScope::Tags => "tags",
        }
    }

    pub fn includes_title(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Title)
    }

    pub fn includes_content(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Content)
    }

    pub fn includes_tags(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Tags)
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(SearchScope::All),
            "title" => Ok(SearchScope::Title),
            "content" => Ok(SearchScope::Content),
            "tags" => Ok(SearchScope::Tags),
            _ => Err(DomainError::UnknownScope(s.to_string())),
        }
    }
}
