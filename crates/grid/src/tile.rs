use mazeworld_common::CellCoord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell of a maze floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Open,
    Wall,
}

impl Tile {
    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }
}

impl TryFrom<u8> for Tile {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Tile::Open),
            1 => Ok(Tile::Wall),
            other => Err(other),
        }
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        match tile {
            Tile::Open => 0,
            Tile::Wall => 1,
        }
    }
}

/// Errors raised while constructing or loading a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows or no columns")]
    Empty,
    #[error("row {row} has {found} tiles, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile value {value} at {cell}")]
    UnknownTile { cell: CellCoord, value: u8 },
    #[error("unknown map symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A validated, immutable, row-major tile grid.
///
/// Row `z` runs along world Z, column `x` along world X. Serializes as an
/// array of integer rows (0 = open, 1 = wall).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct TileGrid {
    pub(crate) columns: usize,
    pub(crate) rows: usize,
    pub(crate) tiles: Vec<Tile>,
}

impl TileGrid {
    /// Build a grid from typed rows. Fails on an empty grid or jagged rows.
    pub fn new(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if columns == 0 {
            return Err(GridError::Empty);
        }
        let mut tiles = Vec::with_capacity(columns * rows.len());
        for (z, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(GridError::Jagged {
                    row: z,
                    expected: columns,
                    found: row.len(),
                });
            }
            tiles.extend_from_slice(row);
        }
        Ok(Self {
            columns,
            rows: rows.len(),
            tiles,
        })
    }

    /// Build a grid from integer rows (0 = open, 1 = wall).
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let mut typed = Vec::with_capacity(rows.len());
        for (z, row) in rows.iter().enumerate() {
            let mut typed_row = Vec::with_capacity(row.len());
            for (x, &value) in row.iter().enumerate() {
                let tile = Tile::try_from(value).map_err(|value| GridError::UnknownTile {
                    cell: CellCoord::new(x, z),
                    value,
                })?;
                typed_row.push(tile);
            }
            typed.push(typed_row);
        }
        Self::new(typed)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed grid; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `cell`, or `None` outside the grid.
    pub fn get(&self, cell: CellCoord) -> Option<Tile> {
        if cell.x >= self.columns || cell.z >= self.rows {
            return None;
        }
        self.tiles.get(cell.z * self.columns + cell.x).copied()
    }

    /// Cells outside the grid count as walls.
    pub fn is_wall(&self, cell: CellCoord) -> bool {
        self.get(cell).is_none_or(Tile::is_wall)
    }

    /// All cells in row-major order (z ascending, then x ascending).
    pub fn cells(&self) -> impl Iterator<Item = (CellCoord, Tile)> + '_ {
        let columns = self.columns;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &tile)| (CellCoord::new(i % columns, i / columns), tile))
    }

    /// First open cell in row-major order.
    pub fn first_open(&self) -> Option<CellCoord> {
        self.cells()
            .find(|(_, tile)| tile.is_open())
            .map(|(cell, _)| cell)
    }

    pub fn wall_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_wall()).count()
    }

    pub fn open_count(&self) -> usize {
        self.len() - self.wall_count()
    }

    /// Integer rows, the inverse of [`TileGrid::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.tiles
            .chunks(self.columns)
            .map(|row| row.iter().map(|&t| u8::from(t)).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for TileGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<TileGrid> for Vec<Vec<u8>> {
    fn from(grid: TileGrid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> TileGrid {
        TileGrid::from_rows(&[vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap()
    }

    #[test]
    fn dimensions_and_counts() {
        let g = ring();
        assert_eq!(g.columns(), 3);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.len(), 9);
        assert_eq!(g.wall_count(), 8);
        assert_eq!(g.open_count(), 1);
    }

    #[test]
    fn empty_grid_rejected() {
        let rows: Vec<Vec<u8>> = Vec::new();
        assert!(matches!(TileGrid::from_rows(&rows), Err(GridError::Empty)));
    }

    #[test]
    fn grid_of_empty_rows_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![], vec![]];
        assert!(matches!(TileGrid::from_rows(&rows), Err(GridError::Empty)));
    }

    #[test]
    fn jagged_rows_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 1, 1], vec![1, 0], vec![1, 1, 1]];
        match TileGrid::from_rows(&rows) {
            Err(GridError::Jagged {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected jagged error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_tile_value_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 2], vec![0, 0]];
        match TileGrid::from_rows(&rows) {
            Err(GridError::UnknownTile { cell, value }) => {
                assert_eq!(cell, CellCoord::new(1, 0));
                assert_eq!(value, 2);
            }
            other => panic!("expected unknown tile error, got {other:?}"),
        }
    }

    #[test]
    fn get_and_out_of_bounds() {
        let g = ring();
        assert_eq!(g.get(CellCoord::new(1, 1)), Some(Tile::Open));
        assert_eq!(g.get(CellCoord::new(0, 1)), Some(Tile::Wall));
        assert_eq!(g.get(CellCoord::new(3, 0)), None);
        assert!(g.is_wall(CellCoord::new(5, 5)));
        assert!(!g.is_wall(CellCoord::new(1, 1)));
    }

    #[test]
    fn cells_iterate_row_major() {
        let g = TileGrid::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        let coords: Vec<CellCoord> = g.cells().map(|(c, _)| c).collect();
        assert_eq!(
            coords,
            vec![
                CellCoord::new(0, 0),
                CellCoord::new(1, 0),
                CellCoord::new(0, 1),
                CellCoord::new(1, 1),
            ]
        );
    }

    #[test]
    fn first_open_scans_rows_before_columns() {
        let g = TileGrid::from_rows(&[vec![1, 1, 1], vec![1, 1, 0], vec![0, 1, 1]]).unwrap();
        assert_eq!(g.first_open(), Some(CellCoord::new(2, 1)));
        let solid = TileGrid::from_rows(&[vec![1, 1], vec![1, 1]]).unwrap();
        assert_eq!(solid.first_open(), None);
    }

    #[test]
    fn rows_round_trip() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 0, 1], vec![0, 0, 1]];
        let g = TileGrid::from_rows(&rows).unwrap();
        assert_eq!(g.to_rows(), rows);
    }

    #[test]
    fn serde_uses_integer_rows() {
        let g = ring();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[1,1,1],[1,0,1],[1,1,1]]");
        let bad: Result<TileGrid, _> = serde_json::from_str("[[1,1],[1]]");
        assert!(bad.is_err());
    }
}
