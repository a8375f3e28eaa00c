// src/infrastructure/clipboard.rs
use crate::application::Clipboard;
use crate::domain::DomainError;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Copy utilities tried in order, with their arguments.
#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];
#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
];

/// Clipboard backed by the platform's copy utility.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn pipe_into(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        // stdin is dropped at the end of the match so the child sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        // Reap the child even when the write failed
        let status = child.wait()?;
        written?;
        Ok(status.success())
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), DomainError> {
        let mut last_error = String::from("no clipboard utility available");
        for (program, args) in CANDIDATES {
            match Self::pipe_into(program, args, text) {
                Ok(true) => {
                    debug!(program, bytes = text.len(), "Copied to clipboard");
                    return Ok(());
                }
                Ok(false) => last_error = format!("{program} exited with failure"),
                Err(e) => last_error = format!("{program}: {e}"),
            }
        }
        Err(DomainError::Clipboard(last_error))
    }
}
