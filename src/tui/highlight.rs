//! Example source → ratatui `Text` with syntect highlighting.
//!
//! Examples are JSX snippets. syntect's default set has no JSX grammar, so
//! the JavaScript syntax is used, and plain text when even that is missing.

use std::sync::LazyLock;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const THEME: &str = "base16-ocean.dark";

fn example_syntax() -> Option<&'static SyntaxReference> {
    ["jsx", "js", "javascript"]
        .iter()
        .find_map(|token| SYNTAX_SET.find_syntax_by_token(token))
}

/// Highlight `code`. Tabs are expanded to four spaces because ratatui
/// renders `\t` as zero-width.
pub fn highlight(code: &str) -> Text<'static> {
    let code = code.replace('\t', "    ");
    let (Some(syntax), Some(theme)) = (example_syntax(), THEME_SET.themes.get(THEME)) else {
        return plain(&code);
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut text = Text::default();
    for line in LinesWithEndings::from(code.as_str()) {
        let Ok(ranges) = highlighter.highlight_line(line, &SYNTAX_SET) else {
            text.lines.push(Line::from(line.trim_end_matches('\n').to_string()));
            continue;
        };
        let spans: Vec<Span<'static>> = ranges
            .into_iter()
            .filter_map(|(hl_style, frag)| {
                let content = frag.trim_end_matches('\n');
                if content.is_empty() {
                    return None;
                }
                let fg = Color::Rgb(
                    hl_style.foreground.r,
                    hl_style.foreground.g,
                    hl_style.foreground.b,
                );
                Some(Span::styled(content.to_string(), Style::default().fg(fg)))
            })
            .collect();
        text.lines.push(Line::from(spans));
    }
    text
}

fn plain(code: &str) -> Text<'static> {
    let style = Style::default().fg(Color::White);
    Text::from(
        code.lines()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(text: &Text) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_highlight_keeps_content_and_line_count() {
        let code = "<Button type=\"primary\">\n  主要按钮\n</Button>";
        let text = highlight(code);
        assert_eq!(
            flatten(&text),
            vec!["<Button type=\"primary\">", "  主要按钮", "</Button>"]
        );
    }

    #[test]
    fn test_tabs_expanded() {
        let text = highlight("\tfoo();");
        assert_eq!(flatten(&text), vec!["    foo();"]);
    }

    #[test]
    fn test_blank_lines_preserved() {
        let text = highlight("a();\n\nb();");
        assert_eq!(text.lines.len(), 3);
    }
}
