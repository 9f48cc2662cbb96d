//! # Props Table
//!
//! Property documentation as a five-column table. Description cells wrap
//! and the row grows to fit. A missing default or option list shows a
//! dimmed `-`; an empty-string default shows `""`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use crate::Lang;
use crate::core::props::{Choices, DefaultValue, PropertyRow, headers};
use crate::tui::component::Component;

const NAME_WIDTH: u16 = 14;
const TYPE_WIDTH: u16 = 10;
const DEFAULT_WIDTH: u16 = 14;
const OPTIONS_WIDTH: u16 = 20;

pub struct PropsTable<'a> {
    pub rows: &'a [PropertyRow],
    pub lang: Lang,
    pub offset: u16,
}

impl<'a> PropsTable<'a> {
    pub fn new(rows: &'a [PropertyRow], lang: Lang, offset: u16) -> Self {
        Self { rows, lang, offset }
    }

    /// Rows can be skipped until only the last one is left.
    pub fn max_offset(&self) -> u16 {
        u16::try_from(self.rows.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }
}

fn dim(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn default_cell(default: &DefaultValue) -> Line<'static> {
    match default {
        DefaultValue::NoDefault => Line::from(dim("-")),
        DefaultValue::Literal(value) if value.is_empty() => Line::from("\"\""),
        DefaultValue::Literal(value) => Line::from(value.clone()),
    }
}

fn choices_cell(choices: &Choices, width: usize) -> Text<'static> {
    match choices {
        Choices::Unspecified => Text::from(dim("-")),
        Choices::Values(values) => wrap(&values.join(" | "), width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Magenta))))
            .collect(),
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Width left for the description column once the fixed columns and the
/// column gaps are taken.
fn description_width(total: u16) -> u16 {
    total
        .saturating_sub(NAME_WIDTH + TYPE_WIDTH + DEFAULT_WIDTH + OPTIONS_WIDTH + 4)
        .max(10)
}

impl Component for PropsTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.rows.is_empty() {
            frame.render_widget(
                Paragraph::new(self.lang.pick("暂无属性", "No properties"))
                    .style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }

        let desc_width = description_width(area.width);
        let header = Row::new(headers(self.lang).map(Cell::from))
            .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan))
            .bottom_margin(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .skip(self.offset as usize)
            .map(|row| {
                let description = wrap(&row.description, desc_width as usize);
                let options = choices_cell(&row.choices, OPTIONS_WIDTH as usize);
                let height = description.len().max(options.height()).max(1) as u16;
                Row::new(vec![
                    Cell::from(Span::styled(
                        row.name.clone(),
                        Style::default().fg(Color::Yellow),
                    )),
                    Cell::from(Text::from_iter(description)),
                    Cell::from(Span::styled(
                        row.type_label.clone(),
                        Style::default().fg(Color::Green),
                    )),
                    Cell::from(default_cell(&row.default)),
                    Cell::from(options),
                ])
                .height(height)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(NAME_WIDTH),
                Constraint::Length(desc_width),
                Constraint::Length(TYPE_WIDTH),
                Constraint::Length(DEFAULT_WIDTH),
                Constraint::Length(OPTIONS_WIDTH),
            ],
        )
        .header(header)
        .column_spacing(1);

        frame.render_widget(table, area);
    }
}
