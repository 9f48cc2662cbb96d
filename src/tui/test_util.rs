//! Rendering helpers for TUI tests.

use ratatui::buffer::Buffer;
use unicode_width::UnicodeWidthStr;

/// Buffer contents as text, one line per row. Cells hidden behind a
/// double-width glyph are skipped so CJK text reads naturally.
pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    let mut out = String::new();
    for row in buffer.content().chunks(width.max(1)) {
        let mut skip = 0;
        for cell in row {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = cell.symbol();
            out.push_str(symbol);
            skip = symbol.width().saturating_sub(1);
        }
        out.push('\n');
    }
    out
}
