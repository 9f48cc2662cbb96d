//! # Code Panel
//!
//! Highlighted example source followed by the usage instructions, inside a
//! scroll view. The header carries the copy button label, which flips to
//! "Copied" for a short while after a successful copy.
//!
//! ```text
//! 代码示例                                   [c] 复制代码
//! ┌──────────────────────────────────────────────────┐
//! │<Button type="primary">主要按钮</Button>          ▐│
//! │                                                  ▐│
//! │使用说明                                          ▐│
//! │1. 复制上面的代码到你的 React 组件中              ▐│
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Lines are not wrapped; the canvas grows wide instead and gains a
//! horizontal scrollbar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::Lang;
use crate::tui::component::Component;
use crate::tui::highlight::highlight;

pub struct CodePanel<'a> {
    pub code: &'a str,
    pub lang: Lang,
    pub copied: bool,
    pub scroll_state: &'a mut ScrollViewState,
}

impl<'a> CodePanel<'a> {
    pub fn new(
        code: &'a str,
        lang: Lang,
        copied: bool,
        scroll_state: &'a mut ScrollViewState,
    ) -> Self {
        Self {
            code,
            lang,
            copied,
            scroll_state,
        }
    }

    fn header(&self) -> Line<'static> {
        let button = if self.copied {
            Span::styled(
                format!("✓ {}", self.lang.pick("已复制", "Copied")),
                Style::default().fg(Color::Green),
            )
        } else {
            Span::styled(
                self.lang.pick("复制代码", "Copy Code"),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
        };
        Line::from(vec![Span::styled("[c] ", Style::default().fg(Color::DarkGray)), button])
            .right_aligned()
    }
}

/// The four usage steps shown under the example.
pub fn usage_lines(lang: Lang) -> Vec<Line<'static>> {
    let steps: [&str; 4] = match lang {
        Lang::Zh => [
            "1. 复制上面的代码到你的 React 组件中",
            "2. 确保你已经正确导入了所需的 Ant Design 组件",
            "3. 根据你的需求修改属性和事件处理函数",
            "4. 运行你的应用查看效果",
        ],
        Lang::En => [
            "1. Copy the code above to your React component",
            "2. Make sure you have properly imported the required Ant Design components",
            "3. Modify properties and event handlers according to your needs",
            "4. Run your application to see the effect",
        ],
    };
    let mut lines = vec![Line::from(Span::styled(
        lang.pick("使用说明", "Usage Instructions"),
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))];
    lines.extend(steps.into_iter().map(Line::from));
    lines
}

impl Component for CodePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);

        frame.render_widget(
            Span::styled(
                self.lang.pick("代码示例", "Code Example"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            header_area,
        );
        frame.render_widget(self.header(), header_area);

        let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(body_area);
        frame.render_widget(block, body_area);

        let mut content: Text<'static> = highlight(self.code);
        content.lines.push(Line::default());
        content.lines.extend(usage_lines(self.lang));

        // One column is reserved for the vertical scrollbar
        let content_width = (content.width() as u16).max(inner.width.saturating_sub(1));
        let content_height = content.height() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Automatic);
        scroll_view.render_widget(
            Paragraph::new(content),
            Rect::new(0, 0, content_width, content_height),
        );
        frame.render_stateful_widget(scroll_view, inner, self.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_util::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(lang: Lang, copied: bool) -> String {
        let mut state = ScrollViewState::default();
        let mut terminal = Terminal::new(TestBackend::new(90, 14)).unwrap();
        terminal
            .draw(|f| {
                CodePanel::new(
                    "<Button type=\"primary\">Primary</Button>",
                    lang,
                    copied,
                    &mut state,
                )
                .render(f, f.area())
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_code_and_usage_are_shown() {
        let text = render(Lang::En, false);
        assert!(text.contains("Code Example"));
        assert!(text.contains("<Button type=\"primary\">Primary</Button>"));
        assert!(text.contains("Usage Instructions"));
        assert!(text.contains("4. Run your application to see the effect"));
    }

    #[test]
    fn test_copy_label_flips() {
        assert!(render(Lang::Zh, false).contains("复制代码"));
        let copied = render(Lang::Zh, true);
        assert!(copied.contains("已复制"));
        assert!(!copied.contains("复制代码"));
    }

    #[test]
    fn test_usage_has_four_steps() {
        let lines = usage_lines(Lang::Zh);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].to_string(), "使用说明");
    }
}
