use anyhow::{Context, Result};
use std::path::Path;

/// Page size in document units (A4 in millimetres).
pub(crate) const PAGE_WIDTH: f64 = 210.0;
pub(crate) const PAGE_HEIGHT: f64 = 295.0;

/// A terminal cell is roughly twice as tall as it is wide.
pub(crate) const CELL_ASPECT: f64 = 2.0;

pub(crate) const DOCUMENT_NAME: &str = "money_control.txt";

/// Captured view: one string per terminal row, all `width` cells wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Raster {
    pub(crate) width: u16,
    pub(crate) lines: Vec<String>,
}

impl Raster {
    pub(crate) fn height(&self) -> usize {
        self.lines.len()
    }

    /// Size in square units, correcting for the cell aspect.
    pub(crate) fn image_size(&self) -> (f64, f64) {
        (
            f64::from(self.width),
            self.height() as f64 * CELL_ASPECT,
        )
    }
}

/// Where the whole image is drawn on one page. `offset_y` is zero on the
/// first page and negative afterwards, shifting the image up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Placement {
    pub(crate) offset_y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

/// Lay an image out over as many pages as its scaled height needs.
///
/// The image is scaled to the page width. Pages are added while the height
/// still to be shown is `>= 0`, so an image exactly one page tall gets a
/// trailing blank page.
pub(crate) fn paginate(image_width: f64, image_height: f64) -> Vec<Placement> {
    if image_width <= 0.0 || image_height <= 0.0 {
        return vec![Placement {
            offset_y: 0.0,
            width: PAGE_WIDTH,
            height: 0.0,
        }];
    }

    let height = image_height * PAGE_WIDTH / image_width;
    let mut placements = vec![Placement {
        offset_y: 0.0,
        width: PAGE_WIDTH,
        height,
    }];

    let mut remaining = height - PAGE_HEIGHT;
    while remaining >= 0.0 {
        placements.push(Placement {
            offset_y: remaining - height,
            width: PAGE_WIDTH,
            height,
        });
        remaining -= PAGE_HEIGHT;
    }
    placements
}

/// Sink for a paginated visual snapshot. A new document starts with one
/// empty page.
pub(crate) trait DocumentWriter {
    fn add_page(&mut self);
    fn add_image(&mut self, raster: &Raster, placement: &Placement);
    fn save(&self, path: &Path) -> Result<()>;
}

/// Plain-text document: each page holds the raster rows visible through it;
/// pages are separated by form feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextDocument {
    pages: Vec<Vec<String>>,
}

impl Default for TextDocument {
    fn default() -> Self {
        Self {
            pages: vec![Vec::new()],
        }
    }
}

impl TextDocument {
    #[cfg(test)]
    pub(crate) fn pages(&self) -> &[Vec<String>] {
        &self.pages
    }

    pub(crate) fn render(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\x0c")
    }
}

impl DocumentWriter for TextDocument {
    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn add_image(&mut self, raster: &Raster, placement: &Placement) {
        if raster.height() == 0 || placement.width <= 0.0 || placement.height <= 0.0 {
            return;
        }
        let units_per_row = placement.height / raster.height() as f64;
        let top = (-placement.offset_y).max(0.0);
        // a row belongs to the page its top edge falls on
        let first = (top / units_per_row - 1e-9).ceil() as usize;
        let end = ((top + PAGE_HEIGHT) / units_per_row - 1e-9).ceil() as usize;

        let rows = raster
            .lines
            .iter()
            .skip(first)
            .take(end.saturating_sub(first))
            .cloned();
        if let Some(page) = self.pages.last_mut() {
            page.extend(rows);
        }
    }

    fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())
            .with_context(|| format!("Failed to write document: {}", path.display()))
    }
}

/// Paginate `raster` into `writer` and save it at `path`. Returns the page count.
pub(crate) fn write_document<W: DocumentWriter>(
    raster: &Raster,
    writer: &mut W,
    path: &Path,
) -> Result<usize> {
    let (width, height) = raster.image_size();
    let placements = paginate(width, height);
    for (i, placement) in placements.iter().enumerate() {
        if i > 0 {
            writer.add_page();
        }
        writer.add_image(raster, placement);
    }
    writer.save(path)?;
    tracing::info!(
        pages = placements.len(),
        path = %path.display(),
        "snapshot document written"
    );
    Ok(placements.len())
}
