use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode};
use super::commands;
use super::theme;
use crate::models::ThemeStyle;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    let style = app.tracker.theme().style();

    render_title_bar(f, chunks[0], app, &style);
    super::screens::dashboard::render(f, chunks[1], app);
    render_status_bar(f, chunks[2], app, &style);
    render_command_bar(f, chunks[3], app, &style);

    if app.show_help {
        render_help_overlay(f, f.area(), &style);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App, style: &ThemeStyle) {
    let title = Line::from(vec![
        Span::styled(" Money Control ", theme::title_style(style)),
        Span::styled(format!(" {} ", app.tracker.theme()), theme::dim_style(style)),
    ]);
    f.render_widget(Paragraph::new(title).style(theme::header_style(style)), area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, style: &ThemeStyle) {
    let mode_label = format!(" {} ", app.input_mode);
    let ledger = app.tracker.ledger();
    let info = format!(
        " {} entries | total {}",
        ledger.len(),
        app.tracker.money().format(ledger.total())
    );

    let right = match app.input_mode {
        InputMode::Insert => " Tab switch field | Enter add | Esc normal ",
        InputMode::Normal => " i insert | x remove | R reset | t theme | e export | ? help ",
        InputMode::Command => " Enter run | Esc cancel ",
        InputMode::Confirm => " y confirm | any other key cancels ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, theme::mode_style(style)),
        Span::styled(&info, theme::status_bar_style(style)),
        Span::styled(" ".repeat(pad), theme::status_bar_style(style)),
        Span::styled(right, theme::status_bar_style(style)),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App, style: &ThemeStyle) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", theme::title_style(style)),
                Span::styled(&app.command_input, theme::command_bar_style(style)),
            ]),
            Some(
                u16::try_from(app.command_input.chars().count())
                    .unwrap_or(u16::MAX)
                    .saturating_add(1),
            ),
        ),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(&app.confirm_message, theme::title_style(style)),
                Span::styled(" [y/N] ", theme::error_style(style)),
            ]),
            None,
        ),
        InputMode::Normal | InputMode::Insert => (
            match &app.flash {
                Some(flash) if flash.is_error => {
                    Line::from(Span::styled(&flash.message, theme::error_style(style)))
                }
                Some(flash) => {
                    Line::from(Span::styled(&flash.message, theme::command_bar_style(style)))
                }
                None => Line::from(Span::styled(
                    " Press Esc then : for commands, ? for help",
                    theme::dim_style(style),
                )),
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(theme::command_bar_style(style));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        let x = area.x.saturating_add(offset).min(area.right().saturating_sub(1));
        f.set_cursor_position((x, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect, style: &ThemeStyle) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            theme::dim_style(style).add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style(style)));

    let mut help_text = vec![
        Line::from(Span::styled(" Money Control Help ", theme::title_style(style))),
        Line::from(""),
        section(" Entry form (INSERT)"),
        row("  Tab/Shift-Tab    Switch field          Enter      Next field / Add"),
        row("  Esc              Normal mode"),
        Line::from(""),
        section(" Normal mode"),
        row("  i / a            Edit the form         j/k        Move cursor"),
        row("  g / G            Top / Bottom          x / Del    Remove entry"),
        row("  R                Reset all data        t / T      Next/Prev theme"),
        row("  e                Export snapshot       q          Quit"),
        row("  :                Command mode          ?          This help"),
        Line::from(""),
        section(" Commands"),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<10} {desc}"),
            theme::normal_style(style),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(style),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = u16::try_from(help_text.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area.height.saturating_sub(2));
    let popup_width = 76.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(style, true))
            .style(theme::command_bar_style(style)),
    );
    f.render_widget(help, popup_area);
}
