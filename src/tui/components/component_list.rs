//! # Component List
//!
//! Components of the selected category that survive the search filter.
//! Each entry is two rows: the localized name, then a dimmed description.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::Lang;
use crate::catalog::ComponentRecord;
use crate::tui::component::Component;
use crate::tui::components::category_menu::border_style;
use crate::tui::text::truncate_width;

pub struct ComponentList<'a> {
    pub components: &'a [&'a ComponentRecord],
    pub selected: Option<&'a str>,
    pub lang: Lang,
    pub focused: bool,
}

impl<'a> ComponentList<'a> {
    pub fn new(
        components: &'a [&'a ComponentRecord],
        selected: Option<&'a str>,
        lang: Lang,
        focused: bool,
    ) -> Self {
        Self {
            components,
            selected,
            lang,
            focused,
        }
    }
}

impl Component for ComponentList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!(
            " {} ({}) ",
            self.lang.pick("组件列表", "Component List"),
            self.components.len()
        );
        let block = Block::bordered()
            .title(title)
            .border_style(border_style(self.focused));

        if self.components.is_empty() {
            let empty = Paragraph::new(self.lang.pick("无匹配组件", "No matching components"))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .components
            .iter()
            .map(|component| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        truncate_width(component.name.get(self.lang), inner_width),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        truncate_width(component.description.get(self.lang), inner_width),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let selected_index = self
            .selected
            .and_then(|id| self.components.iter().position(|c| c.id == id));
        let mut state = ListState::default().with_selected(selected_index);

        let list = List::new(items)
            .block(block)
            .highlight_symbol("▌")
            .highlight_style(Style::default().fg(Color::Cyan).bg(Color::Rgb(20, 40, 60)));

        frame.render_stateful_widget(list, area, &mut state);
    }
}
