use crate::Lang;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{CategoryMenu, ComponentList, Detail, StatusLine, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SIDEBAR_WIDTH: u16 = 30;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, status_area] = layout.areas(frame.area());

    TitleBar::new(app.language, &app.query, tui.search.editing).render(frame, title_area);

    // Main area - loading, error OR browser
    if app.is_loading() {
        draw_loading_view(frame, main_area, app.language, spinner_frame);
    } else if let Some(error_msg) = app.load_error() {
        draw_error_view(frame, main_area, app.language, error_msg);
    } else {
        draw_browser(frame, main_area, app, tui);
    }

    StatusLine::new(app.notification.as_ref(), app.language, tui.search.editing)
        .render(frame, status_area);
}

fn draw_loading_view(frame: &mut Frame, area: Rect, lang: Lang, spinner_frame: usize) {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    let line = Line::from(vec![
        Span::styled(format!("{spinner} "), Style::default().fg(Color::Cyan)),
        Span::raw(lang.pick("加载中…", "Loading…")),
    ])
    .centered();
    frame.render_widget(line, row);
}

fn draw_error_view(frame: &mut Frame, area: Rect, lang: Lang, error_msg: &str) {
    let text = vec![
        Line::from(Span::styled(
            lang.pick("加载组件数据失败", "Failed to load component data"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(error_msg.to_string()),
        Line::default(),
        Line::from(Span::styled(
            lang.pick("按 q 退出", "Press q to quit"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let error_paragraph = Paragraph::new(text)
        .block(Block::bordered().title(" ERROR ").border_style(Style::default().fg(Color::Red)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

fn draw_browser(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let Some(catalog) = app.catalog.as_ref() else {
        return;
    };
    let [sidebar_area, detail_area] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)]).areas(area);

    // Category menu takes what it needs, at most half the sidebar
    let menu_height = (catalog.len() as u16 + 2).min(sidebar_area.height / 2);
    let [menu_area, list_area] =
        Layout::vertical([Constraint::Length(menu_height), Constraint::Min(3)]).areas(sidebar_area);

    CategoryMenu::new(
        catalog,
        app.selection.category.as_deref(),
        app.language,
        tui.focus == Focus::Categories,
    )
    .render(frame, menu_area);

    let visible = app.visible_components();
    ComponentList::new(
        &visible,
        app.selection.component.as_deref(),
        app.language,
        tui.focus == Focus::Components,
    )
    .render(frame, list_area);

    Detail {
        component: app.current_component(),
        lang: app.language,
        tab: tui.tab,
        focused: tui.focus == Focus::Detail,
        registry: &tui.registry,
        copied: app.copied_at.is_some(),
        offset: &mut tui.detail_offset,
        code_scroll: &mut tui.code_scroll,
    }
    .render(frame, detail_area);
}
