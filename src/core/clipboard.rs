//! Clipboard seam. The core only decides *what* to copy; an adapter
//! implementation decides how the host clipboard is reached.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard is reachable from this environment.
    Unavailable(String),
    /// Writing to the clipboard channel failed.
    Io(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            ClipboardError::Io(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Records everything copied. Useful where no terminal is attached.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Vec<String>,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_records() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.copy("<Button />").unwrap();
        assert_eq!(clipboard.contents, vec!["<Button />"]);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClipboardError::Unavailable("no tty".to_string()).to_string(),
            "clipboard unavailable: no tty"
        );
    }
}
