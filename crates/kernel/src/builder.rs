use crate::instance::{BuiltWorld, InstanceKind, PlacedInstance, SpawnTransform, WorldUnits};
use glam::{Quat, Vec2, Vec3};
use mazeworld_common::CellCoord;
use mazeworld_grid::{GridError, TileGrid};
use std::fmt;

/// Distance the spawn is pushed off the cell's lower corner, on every axis.
pub const DEFAULT_SPAWN_OFFSET: f32 = 0.1;

/// Why a caller-supplied spawn cell was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnCellProblem {
    OutOfBounds,
    Wall,
}

impl fmt::Display for SpawnCellProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("outside the grid"),
            Self::Wall => f.write_str("a wall tile"),
        }
    }
}

/// Errors from building a world. Raised before any output is produced.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),
    #[error("invalid world units: {field} must be positive, got {value}")]
    InvalidUnits { field: &'static str, value: f32 },
    #[error("grid has no open cell to spawn in")]
    NoOpenCell,
    #[error("spawn cell {cell} is {problem}")]
    InvalidSpawnCell {
        cell: CellCoord,
        problem: SpawnCellProblem,
    },
}

/// Where and how to place the spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    /// Explicit cell; `None` picks the first open cell in row-major order.
    pub cell: Option<CellCoord>,
    pub facing: Option<Quat>,
    pub corner_offset: f32,
}

impl Default for SpawnRequest {
    fn default() -> Self {
        Self {
            cell: None,
            facing: None,
            corner_offset: DEFAULT_SPAWN_OFFSET,
        }
    }
}

impl SpawnRequest {
    pub fn at(cell: CellCoord) -> Self {
        Self {
            cell: Some(cell),
            ..Default::default()
        }
    }
}

/// Compiles tile grids into wall/floor instances and a spawn transform.
///
/// Holds only configuration, so one builder can be reused for any number of
/// grids, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridWorldBuilder {
    units: WorldUnits,
    spawn: SpawnRequest,
}

impl GridWorldBuilder {
    pub fn new(units: WorldUnits) -> Self {
        Self {
            units,
            spawn: SpawnRequest::default(),
        }
    }

    pub fn with_spawn(mut self, spawn: SpawnRequest) -> Self {
        self.spawn = spawn;
        self
    }

    /// Validate raw integer rows, then build.
    pub fn build_rows<C: Clone>(
        &self,
        rows: &[Vec<u8>],
        wall_collider: C,
        floor_collider: C,
    ) -> Result<BuiltWorld<C>, BuildError> {
        let grid = TileGrid::from_rows(rows)?;
        self.build(&grid, wall_collider, floor_collider)
    }

    /// Build the world for `grid`.
    ///
    /// Walls are emitted in row-major order (z ascending, then x), each
    /// centered on its cell with its base at y = -0.5. A single floor covering
    /// the whole grid follows the walls.
    pub fn build<C: Clone>(
        &self,
        grid: &TileGrid,
        wall_collider: C,
        floor_collider: C,
    ) -> Result<BuiltWorld<C>, BuildError> {
        validate_units(&self.units)?;
        let spawn = self.resolve_spawn(grid)?;

        let width = self.units.corridor_width;
        let height = self.units.wall_height;
        let mut instances = Vec::with_capacity(grid.wall_count() + 1);

        for (cell, tile) in grid.cells() {
            if !tile.is_wall() {
                continue;
            }
            instances.push(PlacedInstance {
                kind: InstanceKind::Wall,
                position: Vec3::new(
                    cell.x as f32 * width,
                    height / 2.0 - 0.5,
                    cell.z as f32 * width,
                ),
                scale: Vec3::new(width, height, width),
                tiling: Vec2::ONE,
                collider: wall_collider.clone(),
            });
        }

        let cols = grid.columns() as f32;
        let rows = grid.rows() as f32;
        instances.push(PlacedInstance {
            kind: InstanceKind::Floor,
            position: Vec3::new(
                (cols * width - width) / 2.0,
                -0.5,
                (rows * width - width) / 2.0,
            ),
            scale: Vec3::new(cols * width, 1.0, rows * width),
            tiling: Vec2::new(cols, rows),
            collider: floor_collider,
        });

        tracing::debug!(
            columns = grid.columns(),
            rows = grid.rows(),
            walls = instances.len() - 1,
            spawn = %spawn.cell,
            "built grid world"
        );

        Ok(BuiltWorld {
            instances,
            spawn,
            units: self.units,
            columns: grid.columns(),
            rows: grid.rows(),
        })
    }

    fn resolve_spawn(&self, grid: &TileGrid) -> Result<SpawnTransform, BuildError> {
        let offset = self.spawn.corner_offset;
        if !offset.is_finite() || offset <= 0.0 {
            return Err(BuildError::InvalidUnits {
                field: "corner_offset",
                value: offset,
            });
        }

        let cell = match self.spawn.cell {
            Some(cell) => match grid.get(cell) {
                None => {
                    return Err(BuildError::InvalidSpawnCell {
                        cell,
                        problem: SpawnCellProblem::OutOfBounds,
                    });
                }
                Some(tile) if tile.is_wall() => {
                    return Err(BuildError::InvalidSpawnCell {
                        cell,
                        problem: SpawnCellProblem::Wall,
                    });
                }
                Some(_) => cell,
            },
            None => grid.first_open().ok_or(BuildError::NoOpenCell)?,
        };

        let width = self.units.corridor_width;
        Ok(SpawnTransform {
            position: Vec3::new(
                cell.x as f32 * width + offset,
                offset,
                cell.z as f32 * width + offset,
            ),
            facing: self.spawn.facing,
            cell,
        })
    }
}

fn validate_units(units: &WorldUnits) -> Result<(), BuildError> {
    if !units.corridor_width.is_finite() || units.corridor_width <= 0.0 {
        return Err(BuildError::InvalidUnits {
            field: "corridor_width",
            value: units.corridor_width,
        });
    }
    if !units.wall_height.is_finite() || units.wall_height <= 0.0 {
        return Err(BuildError::InvalidUnits {
            field: "wall_height",
            value: units.wall_height,
        });
    }
    Ok(())
}

/// Build `grid` with `units` and the default spawn rule.
pub fn build<C: Clone>(
    grid: &TileGrid,
    units: WorldUnits,
    wall_collider: C,
    floor_collider: C,
) -> Result<BuiltWorld<C>, BuildError> {
    GridWorldBuilder::new(units).build(grid, wall_collider, floor_collider)
}
