//! # Preview Panel
//!
//! Draws a [`PreviewSketch`] as styled text: buttons become bracketed
//! labels, fields become underlined placeholders, tables become aligned
//! columns and so on.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::preview::{
    ButtonState, ButtonVariant, FieldKind, MockButton, MockControl, MockField, PreviewBlock,
    PreviewSketch,
};
use crate::tui::component::Component;
use crate::tui::text::{display_width, pad_width};

pub struct PreviewPanel<'a> {
    pub sketch: &'a PreviewSketch,
    pub offset: u16,
}

impl<'a> PreviewPanel<'a> {
    pub fn new(sketch: &'a PreviewSketch, offset: u16) -> Self {
        Self { sketch, offset }
    }

    /// Largest offset that still keeps the last wrapped line at the bottom.
    pub fn max_offset(&self, area: Rect) -> u16 {
        let width = area.width.max(1) as usize;
        let height: usize = sketch_lines(self.sketch, area.width)
            .iter()
            .map(|line| line.width().div_ceil(width).max(1))
            .sum();
        u16::try_from(height)
            .unwrap_or(u16::MAX)
            .saturating_sub(area.height)
    }
}

impl Component for PreviewPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(sketch_lines(self.sketch, area.width))
            .wrap(Wrap { trim: false })
            .scroll((self.offset, 0));
        frame.render_widget(paragraph, area);
    }
}

/// Lines for every block, separated by blank lines.
pub fn sketch_lines(sketch: &PreviewSketch, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, block) in sketch.blocks.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(block_lines(block, width));
    }
    lines
}

fn block_lines(block: &PreviewBlock, width: u16) -> Vec<Line<'static>> {
    match block {
        PreviewBlock::Buttons(buttons) => {
            let mut spans = Vec::new();
            for button in buttons {
                spans.push(button_span(button));
                spans.push(Span::raw(" "));
            }
            vec![Line::from(spans)]
        }
        PreviewBlock::Fields(fields) => fields.iter().flat_map(field_lines).collect(),
        PreviewBlock::Grid(rows) => rows
            .iter()
            .map(|spans| grid_row(spans, width.saturating_sub(2)))
            .collect(),
        PreviewBlock::Menu {
            items,
            selected,
            horizontal,
        } => menu_lines(items, *selected, *horizontal),
        PreviewBlock::Table {
            headers,
            rows,
            page_size,
        } => table_lines(headers, rows, *page_size),
        PreviewBlock::Dialog {
            title,
            body,
            ok,
            cancel,
        } => dialog_lines(title, body, ok, cancel),
        PreviewBlock::Alert { title, body } => vec![
            Line::from(vec![
                Span::styled("ℹ ", Style::default().fg(Color::Blue)),
                Span::styled(title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(
                format!("  {body}"),
                Style::default().fg(Color::Gray),
            )),
        ],
        PreviewBlock::Controls { title, controls } => {
            let mut lines = vec![Line::from(Span::styled(
                title.clone(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ))];
            lines.extend(controls.iter().map(control_line));
            lines
        }
    }
}

fn button_span(button: &MockButton) -> Span<'static> {
    let label = match button.state {
        ButtonState::Loading => format!("⟳ {}", button.label),
        _ => button.label.clone(),
    };
    let base = match button.variant {
        ButtonVariant::Primary => Style::default().fg(Color::White).bg(Color::Blue),
        ButtonVariant::Default => Style::default().fg(Color::White),
        ButtonVariant::Dashed => Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        ButtonVariant::Text => Style::default().fg(Color::Gray),
        ButtonVariant::Link => Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
    };
    let style = match button.state {
        ButtonState::Disabled => Style::default().fg(Color::DarkGray),
        _ => base,
    };
    let text = match button.variant {
        ButtonVariant::Dashed => format!("┆ {label} ┆"),
        ButtonVariant::Text | ButtonVariant::Link => label,
        _ => format!("[ {label} ]"),
    };
    Span::styled(text, style)
}

fn field_lines(field: &MockField) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(label) = &field.label {
        lines.push(Line::from(Span::styled(
            format!("* {label}"),
            Style::default().fg(Color::White),
        )));
    }
    let suffix = match field.kind {
        FieldKind::Text | FieldKind::TextArea => "",
        FieldKind::Search => " 🔍",
        FieldKind::Password => " 👁",
    };
    let placeholder = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::UNDERLINED);
    lines.push(Line::from(vec![
        Span::styled(pad_width(&field.placeholder, 30), placeholder),
        Span::raw(suffix),
    ]));
    if field.kind == FieldKind::TextArea {
        for _ in 0..2 {
            lines.push(Line::from(Span::styled(" ".repeat(30), placeholder)));
        }
    }
    lines
}

/// One grid row: each column is a bordered cell proportional to its span
/// out of 24.
fn grid_row(spans: &[u8], width: u16) -> Line<'static> {
    let mut out = Vec::new();
    for span in spans {
        let cell_width = (width as usize * *span as usize / 24).max(8);
        let label = format!("col-{span}");
        let inner = cell_width.saturating_sub(2);
        let pad = inner.saturating_sub(display_width(&label));
        let left = pad / 2;
        out.push(Span::styled(
            format!("│{}{}{}│", " ".repeat(left), label, " ".repeat(pad - left)),
            Style::default().fg(Color::Cyan),
        ));
    }
    Line::from(out)
}

fn menu_lines(items: &[String], selected: usize, horizontal: bool) -> Vec<Line<'static>> {
    let styled = |i: usize, item: &String| {
        if i == selected {
            Span::styled(
                item.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        } else {
            Span::raw(item.clone())
        }
    };
    if horizontal {
        let mut spans = Vec::new();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(styled(i, item));
        }
        vec![Line::from(spans)]
    } else {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if i == selected { "▌" } else { " " };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Blue)),
                    styled(i, item),
                ])
            })
            .collect()
    }
}

fn table_lines(headers: &[String], rows: &[Vec<String>], page_size: usize) -> Vec<Line<'static>> {
    let column_widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .filter_map(|r| r.get(col))
                .chain(std::iter::once(&headers[col]))
                .map(|s| display_width(s))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let render_row = |cells: &[String], style: Style| {
        let spans: Vec<Span<'static>> = cells
            .iter()
            .zip(&column_widths)
            .map(|(cell, w)| Span::styled(format!("{}  ", pad_width(cell, *w)), style))
            .collect();
        Line::from(spans)
    };

    let mut lines = vec![render_row(
        headers,
        Style::default().add_modifier(Modifier::BOLD),
    )];
    let page_size = page_size.max(1);
    lines.extend(
        rows.iter()
            .take(page_size)
            .map(|r| render_row(r, Style::default())),
    );
    let pages = rows.len().div_ceil(page_size);
    lines.push(Line::from(Span::styled(
        format!("‹ 1 / {pages} ›"),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn dialog_lines(title: &str, body: &str, ok: &str, cancel: &str) -> Vec<Line<'static>> {
    let inner = [title, body]
        .iter()
        .map(|s| display_width(s))
        .max()
        .unwrap_or(0)
        .max(display_width(ok) + display_width(cancel) + 8)
        + 2;
    let border = Style::default().fg(Color::Gray);
    let row = |content: Vec<Span<'static>>, used: usize| {
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(content);
        spans.push(Span::raw(" ".repeat(inner.saturating_sub(used))));
        spans.push(Span::styled(" │", border));
        Line::from(spans)
    };
    vec![
        Line::from(Span::styled(format!("┌{}┐", "─".repeat(inner + 2)), border)),
        row(
            vec![Span::styled(
                title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )],
            display_width(title),
        ),
        row(vec![Span::raw(body.to_string())], display_width(body)),
        row(
            vec![
                Span::raw(format!("[ {cancel} ]")),
                Span::raw(" "),
                Span::styled(
                    format!("[ {ok} ]"),
                    Style::default().fg(Color::White).bg(Color::Blue),
                ),
            ],
            display_width(cancel) + display_width(ok) + 9,
        ),
        Line::from(Span::styled(format!("└{}┘", "─".repeat(inner + 2)), border)),
    ]
}

fn control_line(control: &MockControl) -> Line<'static> {
    match control {
        MockControl::Switch { on, off, checked } => {
            let (knob, label) = if *checked { ("( ●)", on) } else { ("(● )", off) };
            Line::from(format!("{knob} {label}"))
        }
        MockControl::Select { options, selected } => Line::from(format!(
            "[ {} ▾ ]",
            options.get(*selected).map(String::as_str).unwrap_or("")
        )),
        MockControl::Checkboxes { options, checked } => Line::from(
            options
                .iter()
                .enumerate()
                .map(|(i, o)| {
                    let mark = if checked.contains(&i) { "☑" } else { "☐" };
                    format!("{mark} {o}")
                })
                .collect::<Vec<_>>()
                .join("  "),
        ),
        MockControl::DatePicker { placeholder } => Line::from(vec![
            Span::styled(pad_width(placeholder, 16), Style::default().fg(Color::DarkGray)),
            Span::raw(" 📅"),
        ]),
        MockControl::Slider { label, value } => {
            let filled = *value as usize / 5;
            Line::from(format!(
                "{label}{value}  {}●{}",
                "━".repeat(filled),
                "─".repeat(20 - filled.min(20))
            ))
        }
        MockControl::Progress(percent) => {
            let filled = *percent as usize / 5;
            Line::from(vec![
                Span::styled("█".repeat(filled), Style::default().fg(Color::Blue)),
                Span::styled(
                    "░".repeat(20 - filled.min(20)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!(" {percent}%")),
            ])
        }
        MockControl::Badge(count) => Line::from(vec![
            Span::raw("▢"),
            Span::styled(
                format!(" {count} "),
                Style::default().fg(Color::White).bg(Color::Red),
            ),
        ]),
        MockControl::Avatar => Line::from(Span::styled(
            "( 👤 )",
            Style::default().fg(Color::White).bg(Color::DarkGray),
        )),
    }
}
