use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::ui::app::{App, Field, InputMode};
use crate::ui::commands;

/// How often the loop wakes without input, so flashes can expire.
const TICK: Duration = Duration::from_millis(250);

pub(crate) fn as_tui(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // title, status and command bars, form, table borders and header
            let content_height = f.area().height.saturating_sub(9) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
                {
                    app.running = false;
                    continue;
                }
                if app.show_help {
                    app.show_help = false;
                    continue;
                }
                match app.input_mode {
                    InputMode::Normal => handle_normal_input(key, app),
                    InputMode::Insert => handle_insert_input(key, app),
                    InputMode::Command => handle_command_input(key, app),
                    InputMode::Confirm => handle_confirm_input(key, app),
                }
            }
        }

        app.expire_flash(Local::now());
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    let now = Local::now();
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Enter => {
            app.input_mode = InputMode::Insert;
        }
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Char('x') | KeyCode::Delete => app.remove_selected(now),
        KeyCode::Char('R') => app.request_reset(),
        KeyCode::Char('t') => app.cycle_theme(true, now),
        KeyCode::Char('T') => app.cycle_theme(false, now),
        KeyCode::Char('e') => {
            if let Err(e) = app.export(now) {
                tracing::warn!(error = %e, "export failed");
                app.set_error(format!("Export failed: {e}"), now);
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.flash = None,
        _ => {}
    }
}

fn handle_insert_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Tab | KeyCode::BackTab => app.focus = app.focus.toggle(),
        KeyCode::Enter => match app.focus {
            Field::Category => app.focus = app.focus.toggle(),
            Field::Amount => app.submit_entry(Local::now()),
        },
        KeyCode::Backspace => {
            app.focused_input().pop();
        }
        KeyCode::Char(c) => app.focused_input().push(c),
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            if let Err(e) = commands::handle_command(&input, app) {
                tracing::warn!(command = %input, error = %e, "command failed");
                app.set_error(format!("Error: {e}"), Local::now());
            }
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            if app.command_input.pop().is_none() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) {
    let answer = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
    app.resolve_confirm(answer, Local::now());
}
