// src/ports/text.rs
use crate::application::{detect_format, Notification, NotificationLevel};
use crate::constants::PREVIEW_WIDTH;
use crate::domain::{Format, MemoBlock};
use crate::util::text::preview;
use tracing::instrument;

/// Plain-text rendering of memo blocks for the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Full view: header, format line, tags, then the content.
    #[instrument(level = "trace", skip(self, block), fields(id = %block.id))]
    pub fn render(&self, block: &MemoBlock) -> String {
        let mut out = format!("{} [{}]\n", block.title, block.id);
        out.push_str(&format!("format: {}\n", self.format_line(block)));
        out.push_str(&format!("tags: {}\n", block.tags.join(", ")));
        out.push('\n');
        out.push_str(&self.render_content(block));
        out
    }

    /// Content with a right-aligned line-number gutter when the block asks for one.
    pub fn render_content(&self, block: &MemoBlock) -> String {
        if !block.show_line_numbers {
            return block.content.clone();
        }
        let lines: Vec<&str> = block.content.lines().collect();
        let width = lines.len().max(1).to_string().len();
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{:>width$} | {}", i + 1, line, width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Single list row: id, title, tags and a content preview separated by tabs.
    pub fn render_row(&self, block: &MemoBlock) -> String {
        format!(
            "{}\t{}\t[{}]\t{}",
            block.id,
            block.title,
            block.tags.join(", "),
            preview(&block.content, PREVIEW_WIDTH)
        )
    }

    pub fn render_notification(&self, notification: &Notification) -> String {
        match notification.level {
            NotificationLevel::Info => notification.message.clone(),
            NotificationLevel::Error => format!("error: {}", notification.message),
        }
    }

    fn format_line(&self, block: &MemoBlock) -> String {
        match block.format {
            Format::Auto => format!(
                "{} ({})",
                Format::Auto.label(),
                detect_format(&block.content).label()
            ),
            other => other.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(content: &str) -> MemoBlock {
        let mut b = MemoBlock::new("42");
        b.title = "Query".to_string();
        b.content = content.to_string();
        b
    }

    #[test]
    fn given_auto_block_when_rendering_then_shows_detected_format() {
        let presenter = TextPresenter::new();

        let out = presenter.render(&block("SELECT * FROM t"));

        assert!(out.starts_with("Query [42]\n"));
        assert!(out.contains("format: Auto detect (SQL)\n"));
        assert!(out.contains("tags: uncategorized\n"));
        assert!(out.ends_with("\n\nSELECT * FROM t"));
    }

    #[test]
    fn given_line_numbers_enabled_when_rendering_content_then_adds_aligned_gutter() {
        let presenter = TextPresenter::new();
        let mut b = block(&(1..=10).map(|i| i.to_string()).collect::<Vec<_>>().join("\n"));
        b.show_line_numbers = true;

        let out = presenter.render_content(&b);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " 1 | 1");
        assert_eq!(lines[9], "10 | 10");
    }

    #[test]
    fn given_long_content_when_rendering_row_then_truncates_preview() {
        let presenter = TextPresenter::new();
        let first_line = "a very long first line ".repeat(4);

        let row = presenter.render_row(&block(&format!("{first_line}\nsecond")));

        let expected_preview = format!("{}...", &first_line[..PREVIEW_WIDTH - 3]);
        assert_eq!(row, format!("42\tQuery\t[uncategorized]\t{expected_preview}"));
    }

    #[test]
    fn given_error_notification_when_rendering_then_prefixes_error() {
        let presenter = TextPresenter::new();

        assert_eq!(
            presenter.render_notification(&Notification::error("Save failed")),
            "error: Save failed"
        );
    }
}
