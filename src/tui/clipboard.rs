//! Terminal clipboard via the OSC 52 escape sequence.
//!
//! The terminal emulator owns the clipboard; we only ask it to store the
//! text. Terminals that ignore OSC 52 give no error back, so success here
//! means the request was written.

use std::io::{self, Write};

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use log::debug;

use crate::core::clipboard::{Clipboard, ClipboardError};

pub struct TerminalClipboard<W: Write> {
    out: W,
}

impl TerminalClipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for TerminalClipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Unavailable("nothing to copy".to_string()));
        }
        debug!("Copying {} bytes via OSC 52", text.len());
        execute!(self.out, CopyToClipboard::to_clipboard_from(text))
            .map_err(|e| ClipboardError::Io(e.to_string()))
    }
}
