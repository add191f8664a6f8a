use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Cell, Paragraph, Row, Table,
    },
    Frame,
};
use std::f64::consts::TAU;

use crate::chart::{self, ChartData};
use crate::export::CELL_ASPECT;
use crate::models::ThemeStyle;
use crate::ui::app::{App, Field, InputMode};
use crate::ui::theme;
use crate::ui::util::truncate;

/// Sampling grid for the pie, per half axis.
const PIE_STEPS: i32 = 60;
/// Rows given to the pie in an exported report.
pub(crate) const REPORT_PIE_ROWS: u16 = 14;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Entry form
            Constraint::Min(8),    // Entries + chart
        ])
        .split(area);

    render_form(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_entries(f, body[0], app, true);
    render_chart(f, body[1], app);
}

/// Static layout for exported snapshots: every entry, then the chart.
pub(crate) fn render_report(f: &mut Frame, area: Rect, app: &App) {
    let rows = entries_height(app.tracker.ledger().len());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(rows), Constraint::Min(REPORT_PIE_ROWS)])
        .split(area);

    render_entries(f, chunks[0], app, false);
    render_chart(f, chunks[1], app);
}

/// Rows needed to list `len` entries inside a bordered table with a header.
pub(crate) fn entries_height(len: usize) -> u16 {
    u16::try_from(len.max(1) + 3).unwrap_or(u16::MAX)
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let style = app.tracker.theme().style();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let editing = app.input_mode == InputMode::Insert;
    let fields = [
        (Field::Category, " Category ", &app.category_input, cols[0]),
        (Field::Amount, " Amount ", &app.amount_input, cols[1]),
    ];

    for (field, title, value, rect) in fields {
        let focused = editing && app.focus == field;
        let input = Paragraph::new(Span::styled(value.as_str(), theme::normal_style(&style))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style(&style, focused))
                .title(Span::styled(title, theme::dim_style(&style))),
        );
        f.render_widget(input, rect);

        if focused {
            let x = cursor_column(rect, value);
            f.set_cursor_position((x, rect.y + 1));
        }
    }
}

/// Column just past the typed text, clamped inside the field's border.
pub(crate) fn cursor_column(rect: Rect, value: &str) -> u16 {
    let offset = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    rect.x
        .saturating_add(1)
        .saturating_add(offset)
        .min(rect.right().saturating_sub(2))
}

fn render_entries(f: &mut Frame, area: Rect, app: &App, interactive: bool) {
    let style = app.tracker.theme().style();
    let ledger = app.tracker.ledger();
    let money = app.tracker.money();

    let total = Line::from(Span::styled(
        format!(" Total: {} ", money.format(ledger.total())),
        theme::title_style(&style),
    ))
    .right_aligned();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(&style, false))
        .title(Span::styled(
            format!(" Entries ({}) ", ledger.len()),
            theme::dim_style(&style).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(total);

    if ledger.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No entries yet", theme::dim_style(&style))),
            Line::from(Span::styled(
                "Type a category and an amount, then press Enter",
                theme::dim_style(&style),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header = Row::new(
        ["#", "Category", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style(&style))),
    )
    .height(1);

    let (skip, take) = if interactive {
        (app.scroll, area.height.saturating_sub(3) as usize)
    } else {
        (0, ledger.len())
    };
    let name_width = (area.width as usize).saturating_sub(24).max(4);

    let rows: Vec<Row> = ledger
        .entries()
        .enumerate()
        .skip(skip)
        .take(take)
        .map(|(i, entry)| {
            let row_style = if interactive && i == app.selected {
                theme::selected_style(&style)
            } else if i % 2 == 1 {
                theme::alt_row_style(&style)
            } else {
                theme::normal_style(&style)
            };
            let swatch = app
                .tracker
                .colors()
                .get(i)
                .map(|c| Span::styled("■ ", Style::default().fg(*c)))
                .unwrap_or_else(|| Span::raw("  "));

            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(Line::from(vec![
                    swatch,
                    Span::raw(truncate(&entry.category, name_width)),
                ])),
                Cell::from(money.format(entry.amount)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(8),
        Constraint::Length(16),
    ];
    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

fn render_chart(f: &mut Frame, area: Rect, app: &App) {
    let chart = app.tracker.chart();
    let style = app.tracker.theme().style();

    let legend_rows = u16::try_from(chart.labels.len() + 2).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(legend_rows)])
        .split(area);

    render_pie(f, chunks[0], &chart, &style);
    render_legend(f, chunks[1], &chart, &style);
}

fn render_pie(f: &mut Frame, area: Rect, chart: &ChartData, style: &ThemeStyle) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(style, false))
        .title(Span::styled(
            format!(" {} ", chart.title),
            Style::default()
                .fg(chart.title_color)
                .add_modifier(Modifier::BOLD),
        ));

    if chart.is_empty() {
        let msg = Paragraph::new(Span::styled("Nothing to chart yet", theme::dim_style(style)))
            .centered()
            .block(block);
        f.render_widget(msg, area);
        return;
    }

    let slices = chart.slices();
    let shares: Vec<f64> = slices.iter().map(|s| s.share).collect();
    let points = pie_points(&shares);

    // keep the pie round on non-square cells
    let inner_w = f64::from(area.width.saturating_sub(2)).max(1.0);
    let inner_h = (f64::from(area.height.saturating_sub(2)) * CELL_ASPECT).max(1.0);
    let (x_half, y_half) = if inner_w >= inner_h {
        (inner_w / inner_h, 1.0)
    } else {
        (1.0, inner_h / inner_w)
    };

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-x_half, x_half])
        .y_bounds([-y_half, y_half])
        .paint(|ctx| {
            for (coords, slice) in points.iter().zip(&slices) {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: slice.color,
                });
            }
        });
    f.render_widget(canvas, area);
}

/// Sample the unit disc and bucket each point into the slice it falls in.
/// Angles run clockwise from 12 o'clock.
pub(crate) fn pie_points(shares: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut slices = vec![Vec::new(); shares.len()];
    let steps = f64::from(PIE_STEPS);
    for iy in -PIE_STEPS..=PIE_STEPS {
        for ix in -PIE_STEPS..=PIE_STEPS {
            let (x, y) = (f64::from(ix) / steps, f64::from(iy) / steps);
            if x * x + y * y > 1.0 {
                continue;
            }
            let mut turn = x.atan2(y) / TAU;
            if turn < 0.0 {
                turn += 1.0;
            }
            if let Some(i) = chart::slice_at(shares, turn) {
                slices[i].push((x, y));
            }
        }
    }
    slices
}

fn render_legend(f: &mut Frame, area: Rect, chart: &ChartData, style: &ThemeStyle) {
    let width = (area.width as usize).saturating_sub(6);
    let lines: Vec<Line> = chart
        .slices()
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let text = chart.tooltip(i).unwrap_or_else(|| slice.label.to_string());
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(slice.color)),
                Span::styled(truncate(&text, width), Style::default().fg(chart.legend_color)),
            ])
        })
        .collect();

    let legend = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(style, false)),
    );
    f.render_widget(legend, area);
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
