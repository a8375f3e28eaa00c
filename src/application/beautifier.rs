// src/application/beautifier.rs
use crate::domain::{DomainError, Format};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::{debug, instrument};

/// Reformats block content for a concrete format.
///
/// Invoked only on explicit user request. Implementations must leave the
/// caller's content untouched on failure; the caller decides what to do
/// with the error.
pub trait CodeFormatter {
    fn format(&self, content: &str, format: Format) -> Result<String, DomainError>;
}

/// Dependency-free formatter covering the formats the detector produces most.
/// Formats without a pass are returned unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinFormatter;

impl BuiltinFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl CodeFormatter for BuiltinFormatter {
    #[instrument(level = "debug", skip(self, content), fields(len = content.len()))]
    fn format(&self, content: &str, format: Format) -> Result<String, DomainError> {
        if content.trim().is_empty() {
            return Ok(content.to_string());
        }

        let formatted = match format {
            Format::Json => format_json(content)?,
            Format::Yaml => normalize_indentation(content, 2),
            Format::Python => normalize_indentation(content, 4),
            Format::Javascript | Format::Typescript | Format::Css => reindent_braces(content, 2),
            Format::Html | Format::Xml => format_markup(content),
            Format::Sql => format_sql(content),
            Format::Markdown => format_markdown(content),
            other => {
                debug!(format = %other, "No formatter for format, leaving content as is");
                content.to_string()
            }
        };
        Ok(formatted)
    }
}

fn format_json(content: &str) -> Result<String, DomainError> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| DomainError::Format(format!("Invalid JSON: {e}")))?;
    serde_json::to_string_pretty(&value).map_err(|e| DomainError::Format(e.to_string()))
}

/// Re-level indentation: every distinct deeper indent opens one level of `unit` spaces.
/// Tabs count as four columns. Blank lines are kept empty.
fn normalize_indentation(content: &str, unit: usize) -> String {
    let mut stack: Vec<usize> = vec![0];
    let mut out = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.push(String::new());
            continue;
        }

        let width: usize = line
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| if c == '\t' { 4 } else { 1 })
            .sum();

        while stack.len() > 1 && width < stack[stack.len() - 1] {
            stack.pop();
        }
        if width > stack[stack.len() - 1] {
            stack.push(width);
        }

        let level = stack.len() - 1;
        out.push(format!("{}{}", " ".repeat(level * unit), trimmed));
    }

    join_lines(out)
}

/// Indent by bracket nesting, ignoring brackets inside string literals.
fn reindent_braces(content: &str, unit: usize) -> String {
    let mut level: usize = 0;
    let mut out = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.push(String::new());
            continue;
        }

        let leading_closers = trimmed
            .chars()
            .take_while(|c| matches!(c, '}' | ']' | ')'))
            .count();
        let print_level = level.saturating_sub(leading_closers);
        out.push(format!("{}{}", " ".repeat(print_level * unit), trimmed));

        let delta = bracket_delta(trimmed);
        level = if delta < 0 {
            level.saturating_sub(delta.unsigned_abs())
        } else {
            level + delta as usize
        };
    }

    join_lines(out)
}

fn bracket_delta(line: &str) -> isize {
    let mut delta = 0isize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in line.chars() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '{' | '[' | '(' => delta += 1,
            '}' | ']' | ')' => delta -= 1,
            _ => {}
        }
    }
    delta
}

lazy_static! {
    static ref MARKUP_TOKEN: Regex =
        Regex::new(r"<[^>]+>|[^<]+").expect("Failed to compile markup token regex");
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr",
];

#[derive(Debug, PartialEq)]
enum MarkupToken<'a> {
    Open(&'a str),
    Close(&'a str),
    Standalone(&'a str),
    Text(&'a str),
}

fn classify_markup(token: &str) -> MarkupToken<'_> {
    if !token.starts_with('<') {
        return MarkupToken::Text(token);
    }
    if token.starts_with("</") {
        return MarkupToken::Close(token);
    }
    if token.starts_with("<!") || token.starts_with("<?") || token.ends_with("/>") {
        return MarkupToken::Standalone(token);
    }
    let name: String = token[1..]
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '-' || *c == ':')
        .collect::<String>()
        .to_ascii_lowercase();
    if VOID_ELEMENTS.contains(&name.as_str()) {
        MarkupToken::Standalone(token)
    } else {
        MarkupToken::Open(token)
    }
}

/// One element per line with nested indentation. An element holding only text
/// stays on a single line.
fn format_markup(content: &str) -> String {
    let tokens: Vec<MarkupToken> = MARKUP_TOKEN
        .find_iter(content)
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
        .map(classify_markup)
        .collect();

    let mut out = Vec::new();
    let mut level: usize = 0;
    let mut i = 0;
    while i < tokens.len() {
        let pad = "  ".repeat(level);
        match (&tokens[i], tokens.get(i + 1), tokens.get(i + 2)) {
            (
                MarkupToken::Open(open),
                Some(MarkupToken::Text(text)),
                Some(MarkupToken::Close(close)),
            ) => {
                out.push(format!("{pad}{open}{text}{close}"));
                i += 3;
                continue;
            }
            (MarkupToken::Open(open), _, _) => {
                out.push(format!("{pad}{open}"));
                level += 1;
            }
            (MarkupToken::Close(close), _, _) => {
                level = level.saturating_sub(1);
                out.push(format!("{}{close}", "  ".repeat(level)));
            }
            (MarkupToken::Standalone(tag), _, _) => out.push(format!("{pad}{tag}")),
            (MarkupToken::Text(text), _, _) => out.push(format!("{pad}{text}")),
        }
        i += 1;
    }

    out.join("\n")
}

lazy_static! {
    static ref SQL_KEYWORD: Regex = Regex::new(concat!(
        r"(?i)\b(?:GROUP\s+BY|ORDER\s+BY|LEFT\s+JOIN|RIGHT\s+JOIN|INNER\s+JOIN",
        r"|INSERT\s+INTO|DELETE\s+FROM|CREATE\s+TABLE|ALTER\s+TABLE|DROP\s+TABLE",
        r"|SELECT|FROM|WHERE|HAVING|JOIN|LIMIT|OFFSET|VALUES|UPDATE|SET)\b",
    ))
    .expect("Failed to compile SQL keyword regex");
}

/// Upper-case clause keywords and put each on its own line with the clause body indented.
fn format_sql(content: &str) -> String {
    let marked = SQL_KEYWORD.replace_all(content, |caps: &Captures| {
        let keyword = caps[0].split_whitespace().collect::<Vec<_>>().join(" ");
        format!("\n\u{0}{}\n", keyword.to_uppercase())
    });

    marked
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| match l.strip_prefix('\u{0}') {
            Some(keyword) => keyword.to_string(),
            None => format!("  {l}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

lazy_static! {
    static ref HEADING_SPACE: Regex =
        Regex::new(r"(?m)^(#+)([^\s#])").expect("Failed to compile heading regex");
    static ref LIST_ITEM: Regex =
        Regex::new(r"^(?:[-*+]\s|\d+\.\s)").expect("Failed to compile list item regex");
}

fn format_markdown(content: &str) -> String {
    let spaced = HEADING_SPACE.replace_all(content, "$1 $2");

    let mut out: Vec<String> = Vec::new();
    for line in spaced.lines() {
        let trimmed = line.trim_start();
        let is_heading = trimmed.starts_with('#');
        let is_item = LIST_ITEM.is_match(trimmed);

        if let Some(prev) = out.last() {
            let prev_trimmed = prev.trim_start();
            let prev_blank = prev_trimmed.is_empty();
            let prev_item = LIST_ITEM.is_match(prev_trimmed);
            if !prev_blank && (is_heading || (is_item && !prev_item)) {
                out.push(String::new());
            }
        }
        out.push(line.trim_end().to_string());
    }

    join_lines(out)
}

fn join_lines(lines: Vec<String>) -> String {
    let mut joined = lines.join("\n");
    while joined.ends_with('\n') {
        joined.pop();
    }
    joined
}
