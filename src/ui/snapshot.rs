use anyhow::{Context, Result};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::path::PathBuf;

use crate::export::{self, Raster, TextDocument, DOCUMENT_NAME};
use crate::ui::app::App;
use crate::ui::screens::dashboard;

/// Draw the report layout off-screen, `app.export_width` columns wide and as
/// tall as the entries and chart need.
pub(crate) fn capture(app: &App) -> Result<Raster> {
    let height = dashboard::entries_height(app.tracker.ledger().len())
        .saturating_add(dashboard::REPORT_PIE_ROWS)
        .saturating_add(legend_rows(app.tracker.ledger().len()));
    let mut terminal = Terminal::new(TestBackend::new(app.export_width, height))
        .context("Failed to create capture surface")?;
    terminal
        .draw(|f| dashboard::render_report(f, f.area(), app))
        .context("Failed to draw snapshot")?;
    Ok(raster_from(terminal.backend().buffer()))
}

fn legend_rows(len: usize) -> u16 {
    u16::try_from(len + 2).unwrap_or(u16::MAX)
}

fn raster_from(buffer: &Buffer) -> Raster {
    let area = buffer.area;
    let lines = (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .filter_map(|x| buffer.cell((x, y)))
                .map(|cell| cell.symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect();
    Raster {
        width: area.width,
        lines,
    }
}

/// Capture the dashboard and write it to `money_control.txt` in the app's
/// export directory. Returns the file path and page count.
pub(crate) fn export_document(app: &App) -> Result<(PathBuf, usize)> {
    let raster = capture(app)?;
    std::fs::create_dir_all(&app.export_dir).with_context(|| {
        format!(
            "Failed to create export directory: {}",
            app.export_dir.display()
        )
    })?;
    let path = app.export_dir.join(DOCUMENT_NAME);
    let pages = export::write_document(&raster, &mut TextDocument::default(), &path)?;
    Ok((path, pages))
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
