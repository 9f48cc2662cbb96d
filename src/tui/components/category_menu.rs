//! # Category Menu
//!
//! Sidebar list of catalog categories in payload order. The highlighted row
//! is always the selected category; there is no separate cursor.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::Lang;
use crate::catalog::Catalog;
use crate::tui::component::Component;
use crate::tui::text::truncate_width;

pub struct CategoryMenu<'a> {
    pub catalog: &'a Catalog,
    pub selected: Option<&'a str>,
    pub lang: Lang,
    pub focused: bool,
}

impl<'a> CategoryMenu<'a> {
    pub fn new(catalog: &'a Catalog, selected: Option<&'a str>, lang: Lang, focused: bool) -> Self {
        Self {
            catalog,
            selected,
            lang,
            focused,
        }
    }
}

impl Component for CategoryMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .catalog
            .categories()
            .map(|(_, category)| ListItem::new(Line::from(truncate_width(&category.title, inner_width))))
            .collect();

        let selected_index = self
            .selected
            .and_then(|key| self.catalog.category_keys().position(|k| k == key));
        let mut state = ListState::default().with_selected(selected_index);

        let list = List::new(items)
            .block(
                Block::bordered()
                    .title(self.lang.pick(" 分类 ", " Categories "))
                    .border_style(border_style(self.focused)),
            )
            .highlight_symbol("▌")
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_stateful_widget(list, area, &mut state);
    }
}

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;
    use crate::tui::test_util::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_lists_titles_and_marks_selection() {
        let catalog = sample_catalog();
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|f| {
                CategoryMenu::new(&catalog, Some("layout"), Lang::En, true).render(f, f.area())
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Categories"));
        assert!(text.contains("Basic Components"));
        assert!(text.contains("▌布局组件 Layout"));
    }
}
