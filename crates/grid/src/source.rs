//! Text and JSON grid sources.
//!
//! Text maps use one line per row: `#` or `1` is a wall, `.`, space or `0` is
//! open. Empty lines are skipped; a line of spaces is an open row. Rows are never padded, so ragged text is
//! reported as a jagged grid.

use crate::tile::{GridError, Tile, TileGrid};
use std::path::Path;

const WALL_SYMBOLS: [char; 2] = ['#', '1'];
const OPEN_SYMBOLS: [char; 3] = ['.', ' ', '0'];

impl TileGrid {
    /// Parse a text map.
    pub fn parse_text(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for (column, symbol) in line.chars().enumerate() {
                let tile = if WALL_SYMBOLS.contains(&symbol) {
                    Tile::Wall
                } else if OPEN_SYMBOLS.contains(&symbol) {
                    Tile::Open
                } else {
                    return Err(GridError::UnknownSymbol {
                        line: line_no + 1,
                        column: column + 1,
                        symbol,
                    });
                };
                row.push(tile);
            }
            rows.push(row);
        }
        Self::new(rows)
    }

    /// Render as a text map using `#` and `.`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.rows());
        for (cell, tile) in self.cells() {
            out.push(if tile.is_wall() { '#' } else { '.' });
            if cell.x + 1 == self.columns() {
                out.push('\n');
            }
        }
        out
    }

    /// Parse a JSON array of integer rows.
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<u8>> = serde_json::from_str(json)?;
        Self::from_rows(&rows)
    }

    pub fn to_json(&self) -> Result<String, GridError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load a grid from disk. Files ending in `.json` are parsed as JSON,
    /// anything else as a text map.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let grid = if is_json {
            Self::from_json(&data)?
        } else {
            Self::parse_text(&data)?
        };
        tracing::debug!(
            path = %path.display(),
            columns = grid.columns(),
            rows = grid.rows(),
            "loaded tile grid"
        );
        Ok(grid)
    }
}
