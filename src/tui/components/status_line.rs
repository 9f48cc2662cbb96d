//! # Status Line
//!
//! Bottom row. Shows the active notification, colored by level, or the key
//! help for the current mode when there is none.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::Lang;
use crate::core::state::{Notification, NotificationLevel};
use crate::tui::component::Component;

pub struct StatusLine<'a> {
    pub notification: Option<&'a Notification>,
    pub lang: Lang,
    pub searching: bool,
}

impl<'a> StatusLine<'a> {
    pub fn new(notification: Option<&'a Notification>, lang: Lang, searching: bool) -> Self {
        Self {
            notification,
            lang,
            searching,
        }
    }

    fn help(&self) -> Vec<(&'static str, &'static str)> {
        let l = self.lang;
        if self.searching {
            return vec![
                ("Enter", l.pick("完成", "done")),
                ("Esc", l.pick("完成", "done")),
                ("Ctrl+L", l.pick("切换语言", "language")),
            ];
        }
        vec![
            ("↑↓", l.pick("选择", "select")),
            ("Tab", l.pick("切换面板", "focus")),
            ("1/2/3", l.pick("标签页", "tabs")),
            ("/", l.pick("搜索", "search")),
            ("c", l.pick("复制代码", "copy code")),
            ("l", l.pick("切换语言", "language")),
            ("q", l.pick("退出", "quit")),
        ]
    }
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = match self.notification {
            Some(notification) => {
                let (icon, color) = match notification.level {
                    NotificationLevel::Success => ("✓", Color::Green),
                    NotificationLevel::Error => ("✗", Color::Red),
                    NotificationLevel::Info => ("ℹ", Color::Blue),
                };
                Line::from(Span::styled(
                    format!(" {icon} {}", notification.message),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
            }
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (key, label) in self.help() {
                    spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
                    spans.push(Span::styled(
                        format!(" {label}  "),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                Line::from(spans)
            }
        };
        frame.render_widget(line, area);
    }
}
