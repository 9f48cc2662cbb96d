//! # TitleBar Component
//!
//! Top line: localized app title, the search field and the language toggle
//! hint.
//!
//! ```text
//! 前端组件中英文对照   🔍 搜索组件...                 [Ctrl+L] EN
//! ```
//!
//! Purely presentational. Props come from the core `App` (language, query)
//! and the TUI state (whether the search box is being edited).

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::Lang;
use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub lang: Lang,
    pub query: &'a str,
    pub editing: bool,
}

impl<'a> TitleBar<'a> {
    pub fn new(lang: Lang, query: &'a str, editing: bool) -> Self {
        Self {
            lang,
            query,
            editing,
        }
    }

    fn search_line(&self) -> Line<'static> {
        let icon = Span::styled("🔍 ", Style::default().fg(Color::DarkGray));
        if self.query.is_empty() && !self.editing {
            let placeholder = self.lang.pick("搜索组件... (/)", "Search components... (/)");
            return Line::from(vec![
                icon,
                Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
            ]);
        }
        let style = if self.editing {
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let mut spans = vec![icon, Span::styled(self.query.to_string(), style)];
        if self.editing {
            spans.push(Span::styled("▏", Style::default().fg(Color::White)));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, search_area, lang_area] = Layout::horizontal([
            Constraint::Length(28),
            Constraint::Min(10),
            Constraint::Length(14),
        ])
        .areas(area);

        let title = self.lang.pick("📘 前端组件中英文对照", "📘 Frontend Components Guide");
        frame.render_widget(
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            title_area,
        );

        frame.render_widget(Paragraph::new(self.search_line()), search_area);

        // The toggle names the language you switch *to*
        let target = self.lang.pick("EN", "中文");
        let toggle = Line::from(vec![
            Span::styled("[Ctrl+L] ", Style::default().fg(Color::DarkGray)),
            Span::styled(target, Style::default().fg(Color::Yellow)),
        ])
        .right_aligned();
        frame.render_widget(toggle, lang_area);
    }
}
