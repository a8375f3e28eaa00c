// src/domain/format.rs
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content type of a memo block. `Auto` defers to the format detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Auto,
    Json,
    Yaml,
    Javascript,
    Typescript,
    Html,
    Css,
    Sql,
    Markdown,
    Xml,
    Python,
    Java,
    Csharp,
    Cpp,
    Go,
    Rust,
    Php,
    Ruby,
    Swift,
    Kotlin,
    Shell,
    Groovy,
    Plaintext,
}

impl Format {
    pub const ALL: [Format; 23] = [
        Format::Auto,
        Format::Json,
        Format::Yaml,
        Format::Javascript,
        Format::Typescript,
        Format::Html,
        Format::Css,
        Format::Sql,
        Format::Markdown,
        Format::Xml,
        Format::Python,
        Format::Java,
        Format::Csharp,
        Format::Cpp,
        Format::Go,
        Format::Rust,
        Format::Php,
        Format::Ruby,
        Format::Swift,
        Format::Kotlin,
        Format::Shell,
        Format::Groovy,
        Format::Plaintext,
    ];

    /// Stable lowercase key, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Auto => "auto",
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Javascript => "javascript",
            Format::Typescript => "typescript",
            Format::Html => "html",
            Format::Css => "css",
            Format::Sql => "sql",
            Format::Markdown => "markdown",
            Format::Xml => "xml",
            Format::Python => "python",
            Format::Java => "java",
            Format::Csharp => "csharp",
            Format::Cpp => "cpp",
            Format::Go => "go",
            Format::Rust => "rust",
            Format::Php => "php",
            Format::Ruby => "ruby",
            Format::Swift => "swift",
            Format::Kotlin => "kotlin",
            Format::Shell => "shell",
            Format::Groovy => "groovy",
            Format::Plaintext => "plaintext",
        }
    }

    /// Human readable name shown next to a block.
    pub fn label(self) -> &'static str {
        match self {
            Format::Auto => "Auto detect",
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Javascript => "JavaScript",
            Format::Typescript => "TypeScript",
            Format::Html => "HTML",
            Format::Css => "CSS",
            Format::Sql => "SQL",
            Format::Markdown => "Markdown",
            Format::Xml => "XML",
            Format::Python => "Python",
            Format::Java => "Java",
            Format::Csharp => "C#",
            Format::Cpp => "C++",
            Format::Go => "Go",
            Format::Rust => "Rust",
            Format::Php => "PHP",
            Format::Ruby => "Ruby",
            Format::Swift => "Swift",
            Format::Kotlin => "Kotlin",
            Format::Shell => "Shell",
            Format::Groovy => "Groovy",
            Format::Plaintext => "Plain text",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Format::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::UnknownFormat(s.to_string()))
    }
}
