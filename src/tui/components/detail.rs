//! # Component Detail
//!
//! Right-hand pane for the selected component:
//!
//! ```text
//! ┌ 按钮 [button] ──────────────────────────────────┐
//! │用于触发操作的基础组件                             │
//! │ 组件预览 │ 代码示例 │ 属性说明                    │
//! │                                                  │
//! │ <active tab>                                     │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! With no component selected the pane shows a placeholder instead.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs, Wrap};
use tui_scrollview::ScrollViewState;

use crate::Lang;
use crate::catalog::ComponentRecord;
use crate::core::preview::PreviewRegistry;
use crate::core::props::project;
use crate::tui::component::Component;
use crate::tui::components::category_menu::border_style;
use crate::tui::components::code_panel::CodePanel;
use crate::tui::components::preview_panel::PreviewPanel;
use crate::tui::components::props_table::PropsTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Preview,
    Code,
    Props,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Preview, DetailTab::Code, DetailTab::Props];

    pub fn title(self, lang: Lang) -> &'static str {
        match self {
            DetailTab::Preview => lang.pick("组件预览", "Component Preview"),
            DetailTab::Code => lang.pick("代码示例", "Code Example"),
            DetailTab::Props => lang.pick("属性说明", "Properties"),
        }
    }

    pub fn index(self) -> usize {
        match self {
            DetailTab::Preview => 0,
            DetailTab::Code => 1,
            DetailTab::Props => 2,
        }
    }
}

pub struct Detail<'a> {
    pub component: Option<&'a ComponentRecord>,
    pub lang: Lang,
    pub tab: DetailTab,
    pub focused: bool,
    pub registry: &'a PreviewRegistry,
    pub copied: bool,
    /// Line offset for the preview and props tabs, clamped to the content
    /// on every render.
    pub offset: &'a mut u16,
    pub code_scroll: &'a mut ScrollViewState,
}

impl Detail<'_> {
    fn render_placeholder(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(border_style(self.focused));
        let text = Paragraph::new(self.lang.pick("请选择一个组件", "Select a component"))
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .block(block);
        frame.render_widget(text, area);
    }
}

impl Component for Detail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(component) = self.component else {
            self.render_placeholder(frame, area);
            return;
        };

        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", component.name.get(self.lang)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("[{}] ", component.id), Style::default().fg(Color::DarkGray)),
        ]);
        let block = Block::bordered()
            .title(title)
            .border_style(border_style(self.focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let description_text = component.description.get(self.lang);
        let description_height = textwrap::wrap(description_text, inner.width.max(1) as usize)
            .len()
            .clamp(1, 3) as u16;
        let description = Paragraph::new(description_text.to_string())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });

        let [description_area, tabs_area, _, body_area] = Layout::vertical([
            Constraint::Length(description_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        frame.render_widget(description, description_area);

        let tabs = Tabs::new(DetailTab::ALL.map(|t| t.title(self.lang)))
            .select(self.tab.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        frame.render_widget(tabs, tabs_area);

        match self.tab {
            DetailTab::Preview => {
                let sketch = self.registry.sketch(component, self.lang);
                let mut panel = PreviewPanel::new(&sketch, *self.offset);
                *self.offset = (*self.offset).min(panel.max_offset(body_area));
                panel.offset = *self.offset;
                panel.render(frame, body_area);
            }
            DetailTab::Code => {
                CodePanel::new(
                    &component.code_example,
                    self.lang,
                    self.copied,
                    self.code_scroll,
                )
                .render(frame, body_area);
            }
            DetailTab::Props => {
                let rows = project(&component.props, self.lang);
                let mut table = PropsTable::new(&rows, self.lang, *self.offset);
                *self.offset = (*self.offset).min(table.max_offset());
                table.offset = *self.offset;
                table.render(frame, body_area);
            }
        }
    }
}
