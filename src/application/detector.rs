// src/application/detector.rs
use crate::domain::Format;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::instrument;

lazy_static! {
    static ref DETECTOR: FormatDetector = FormatDetector::new();
}

/// Detect the format of `content` with the shared detector.
pub fn detect_format(content: &str) -> Format {
    DETECTOR.detect(content)
}

/// Whether a beautify action makes sense for `content` stored as `format`.
pub fn can_beautify(content: &str, format: Format) -> bool {
    if content.trim().is_empty() {
        return false;
    }
    match format {
        Format::Auto => detect_format(content) != Format::Plaintext,
        _ => true,
    }
}

/// The concrete format for a block: `Auto` goes through detection.
pub fn resolve_format(format: Format, content: &str) -> Format {
    match format {
        Format::Auto => detect_format(content),
        other => other,
    }
}

/// One step of the cascade: every `all_of` pattern must match and `none_of` must not.
#[derive(Debug)]
struct Rule {
    format: Format,
    all_of: Vec<Regex>,
    none_of: Option<Regex>,
}

impl Rule {
    fn new(format: Format, all_of: &[&str], none_of: Option<&str>) -> Self {
        Self {
            format,
            all_of: all_of.iter().map(|p| compile(p)).collect(),
            none_of: none_of.map(compile),
        }
    }

    fn matches(&self, text: &str) -> bool {
        self.all_of.iter().all(|re| re.is_match(text))
            && !self.none_of.as_ref().is_some_and(|re| re.is_match(text))
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("detector patterns are static and valid")
}

/// Heuristic content-type detector.
///
/// Rules run in a fixed order, most structurally unambiguous first; the first
/// match wins. Reordering rules changes results for ambiguous input, so the
/// order here is part of the contract.
#[derive(Debug)]
pub struct FormatDetector {
    rules: Vec<Rule>,
}

impl FormatDetector {
    pub fn new() -> Self {
        let rules = vec![
            Rule::new(
                Format::Yaml,
                &[r"^[\w\s]+:[\s\w]", r":\s*[\w\s.]+(?:\n|$)"],
                Some(r"[{}]"),
            ),
            Rule::new(
                Format::Javascript,
                &[r"\b(?:let|const|function)\b|=>|\bif\s*\(|\bfor\s*\(|console\.log|document\.|window\."],
                Some(
                    r"^\s*<|^\s*#include|^\s*import\s+[\w.]+;|^\s*package\s+[\w.]+;|(?m:^\s*use\s+[\w:]+;)|\bfn\s+\w+\s*\(",
                ),
            ),
            Rule::new(
                Format::Typescript,
                &[r"\b(?:interface|type)\b|:\s*(?:string|number|boolean)\b|\w<[\w<>,\s]+>"],
                None,
            ),
            Rule::new(
                Format::Html,
                &[r"(?i)</?[a-z][\s\S]*>", r"<(?:html|body|div|span|h1|p|a|img)[\s>]"],
                None,
            ),
            Rule::new(
                Format::Css,
                &[
                    r"[.#][\w-]+\s*\{|body\s*\{|@media|@keyframes|margin:|padding:|color:|background:",
                    r"\{[\s\S]*\}",
                ],
                None,
            ),
            Rule::new(
                Format::Sql,
                &[r"(?i)(?:SELECT|INSERT|UPDATE|DELETE|CREATE|ALTER)[\s\S]*(?:FROM|INTO|TABLE|DATABASE)"],
                None,
            ),
            Rule::new(
                Format::Shell,
                &[concat!(
                    r"(?:^|\n\s*)(?:#!/bin/(?:ba)?sh",
                    r"|(?:apt|sudo|echo|export|cd|ls|grep|mkdir|rm|cp|chmod|chown|source)\b",
                    r"|if\s+\[|for\s+\w+\s+in|while\s+\[|function\s+\w+\(\)",
                    r"|\./|\$\{|\$\(|&&|\|\|)",
                )],
                None,
            ),
            Rule::new(
                Format::Python,
                &[r#"def |import |from .+ import|class .+:|if __name__ == ['"]__main__['"]|print\("#],
                Some(r"\{|\}|;$"),
            ),
            Rule::new(
                Format::Java,
                &[r"public\s+(?:class|interface)|import\s+java\.|package\s+[\w.]+;|@Override|class\s+\w+\s+(?:\{|extends)"],
                None,
            ),
            Rule::new(
                Format::Cpp,
                &[r"#include\s*<[\w.]+>|using namespace|std::|int main\(\)"],
                None,
            ),
            Rule::new(
                Format::Go,
                &[r"package\s+[\w.]+|func\s+\w+\(|import\s+\(|type\s+\w+\s+struct"],
                None,
            ),
            Rule::new(
                Format::Rust,
                &[
                    r"fn\s+\w+|let\s+mut|impl\s+|use\s+[\w:]+;|\)\s*->\s*[\w:<>]+",
                    r"[\w)>]\s*\{",
                ],
                None,
            ),
            Rule::new(
                Format::Php,
                &[r"<\?php|\$\w+\s*=|function\s+\w+\s*\(|namespace\s+[\w\\]+;|use\s+[\w\\]+;"],
                None,
            ),
            Rule::new(
                Format::Groovy,
                &[r"def\s+\w+\s*=|class\s+\w+|import\s+[\w.]+|@\w+"],
                Some(r"<\?php"),
            ),
        ];
        Self { rules }
    }

    /// Best-guess format. Never fails; unrecognised input is `Plaintext`.
    #[instrument(level = "trace", skip(self, content), ret)]
    pub fn detect(&self, content: &str) -> Format {
        let text = content.trim();
        if text.is_empty() {
            return Format::Plaintext;
        }

        if serde_json::from_str::<serde_json::Value>(text).is_ok() {
            return Format::Json;
        }

        self.rules
            .iter()
            .find(|rule| rule.matches(text))
            .map_or(Format::Plaintext, |rule| rule.format)
    }
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new()
    }
}
