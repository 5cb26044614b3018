//! Sparse coordinate grid reconstruction and text rendering.
//!
//! The first table row is a header naming the columns. Each following row
//! carries an x-coordinate, a y-coordinate and a character. Coordinates are
//! Cartesian (origin bottom-left, y grows upward), so lines are emitted from
//! `max_y` down to 0 while columns run left to right from 0 to `max_x`.
//!
//! Bad rows are skipped, never reported: rows with fewer than three cells,
//! rows whose coordinates are not base-10 integers, and rows too short for
//! the resolved column positions.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::error::{GridError, Result};
use crate::table::{Row, Table};

/// Header label of the x-coordinate column.
pub const X_LABEL: &str = "x-coordinate";
/// Header label of the y-coordinate column.
pub const Y_LABEL: &str = "y-coordinate";
/// Header label of the character column.
pub const CHARACTER_LABEL: &str = "Character";

/// Rows shorter than this are skipped before any parsing.
const MIN_ROW_CELLS: usize = 3;

/// Default cap on rendered cells, `(max_x + 1) * (max_y + 1)`.
pub const DEFAULT_MAX_CELLS: u64 = 16 * 1024 * 1024;

/// Column positions of the three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub x: usize,
    pub y: usize,
    pub character: usize,
}

impl FieldMapping {
    /// Mapping used when the header does not name all three fields:
    /// column 0 = x, column 1 = character, column 2 = y.
    pub const POSITIONAL: Self = Self {
        x: 0,
        character: 1,
        y: 2,
    };

    /// Locate the fields by exact, case-sensitive label match.
    ///
    /// If any label is missing the whole mapping silently falls back to
    /// [`FieldMapping::POSITIONAL`]. A header that merely differs in case or
    /// spelling (`"X-Coordinate"`) is therefore read positionally, which may
    /// be wrong for that document. Callers get no signal either way.
    pub fn resolve(header: &[String]) -> Self {
        let find = |label: &str| header.iter().position(|cell| cell == label);

        match (find(X_LABEL), find(Y_LABEL), find(CHARACTER_LABEL)) {
            (Some(x), Some(y), Some(character)) => Self { x, y, character },
            _ => {
                debug!(?header, "Header labels not found, using positional mapping");
                Self::POSITIONAL
            }
        }
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::POSITIONAL
    }
}

/// Largest x and largest y seen, tracked independently. Starts at (0, 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundingExtent {
    pub max_x: i64,
    pub max_y: i64,
}

impl BoundingExtent {
    fn include(&mut self, x: i64, y: i64) {
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Number of cells in the rendered rectangle.
    pub fn cell_count(&self) -> u64 {
        (self.max_x.unsigned_abs() + 1).saturating_mul(self.max_y.unsigned_abs() + 1)
    }
}

/// Counts of data rows accepted into, or skipped from, the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridStats {
    pub accepted: usize,
    pub skipped: usize,
}

/// Sparse mapping from `(x, y)` to the text drawn there.
#[derive(Debug, Clone, Default)]
pub struct CoordinateGrid {
    cells: HashMap<(i64, i64), String>,
    extent: BoundingExtent,
    stats: GridStats,
}

impl CoordinateGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from data rows (header already removed).
    pub fn from_rows(rows: &[Row], mapping: FieldMapping) -> Self {
        let mut grid = Self::new();
        for row in rows {
            match parse_row(row, mapping) {
                Some((x, y, character)) => {
                    grid.insert(x, y, character);
                    grid.stats.accepted += 1;
                }
                None => grid.stats.skipped += 1,
            }
        }
        grid
    }

    /// Record `text` at `(x, y)`, replacing anything already there.
    ///
    /// A negative coordinate is stored but lies outside the rendered
    /// rectangle; its other axis still widens the extent.
    pub fn insert(&mut self, x: i64, y: i64, text: impl Into<String>) {
        self.cells.insert((x, y), text.into());
        self.extent.include(x, y);
    }

    pub fn get(&self, x: i64, y: i64) -> Option<&str> {
        self.cells.get(&(x, y)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn extent(&self) -> BoundingExtent {
        self.extent
    }

    pub fn stats(&self) -> GridStats {
        self.stats
    }

    /// Text lines from `max_y` down to 0, each covering x = 0..=`max_x`.
    ///
    /// Empty positions are a single space. Stored text is emitted verbatim,
    /// so a multi-character cell pushes the rest of its line to the right.
    pub fn lines(&self) -> Vec<String> {
        let BoundingExtent { max_x, max_y } = self.extent;
        (0..=max_y)
            .rev()
            .map(|y| (0..=max_x).map(|x| self.get(x, y).unwrap_or(" ")).collect())
            .collect()
    }
}

/// Pull `(x, y, character)` out of a data row, or `None` to skip it.
fn parse_row(row: &[String], mapping: FieldMapping) -> Option<(i64, i64, String)> {
    if row.len() < MIN_ROW_CELLS {
        return None;
    }
    let x = row.get(mapping.x)?.parse::<i64>().ok()?;
    let y = row.get(mapping.y)?.parse::<i64>().ok()?;
    let character = row.get(mapping.character)?.clone();
    Some((x, y, character))
}

/// Outcome of rendering a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    /// The document had no table rows at all.
    NoData,
    /// One line per grid row, top (highest y) first.
    Lines(Vec<String>),
}

impl Render {
    /// Rendered lines; empty for [`Render::NoData`].
    pub fn lines(&self) -> &[String] {
        match self {
            Self::NoData => &[],
            Self::Lines(lines) => lines,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

/// Caps applied before the output rectangle is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    pub max_cells: u64,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

/// Build the grid for `table` without rendering it.
///
/// Returns `None` when the table has no rows.
pub fn build_grid(table: &Table) -> Option<CoordinateGrid> {
    let header = table.header()?;
    let mapping = FieldMapping::resolve(header);
    let grid = CoordinateGrid::from_rows(table.data_rows(), mapping);

    let stats = grid.stats();
    debug!(
        ?mapping,
        accepted = stats.accepted,
        skipped = stats.skipped,
        extent = ?grid.extent(),
        "Built coordinate grid"
    );
    Some(grid)
}

/// Render `table` as text lines.
///
/// A table holding only a header renders as a single line with one space.
/// No extent cap is applied; see [`render_with_limits`].
pub fn render(table: &Table) -> Render {
    match build_grid(table) {
        Some(grid) => Render::Lines(grid.lines()),
        None => Render::NoData,
    }
}

/// Like [`render`], but refuses extents larger than `limits` allows.
#[instrument(skip(table), fields(rows = table.len()))]
pub fn render_with_limits(table: &Table, limits: RenderLimits) -> Result<Render> {
    let Some(grid) = build_grid(table) else {
        return Ok(Render::NoData);
    };

    let extent = grid.extent();
    if extent.cell_count() > limits.max_cells {
        return Err(GridError::ExtentTooLarge {
            max_x: extent.max_x,
            max_y: extent.max_y,
            limit: limits.max_cells,
        });
    }

    Ok(Render::Lines(grid.lines()))
}
