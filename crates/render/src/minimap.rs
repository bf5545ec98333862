use crate::renderer::{RenderView, Renderer};
use mazeworld_common::CellCoord;
use mazeworld_kernel::BuiltWorld;

/// Top-down ASCII map rebuilt from placed walls.
///
/// `#` wall, `.` open, `@` spawn cell, `v` the cell under the camera eye when
/// it differs from the spawn.
#[derive(Debug, Default)]
pub struct MinimapRenderer {
    pub show_camera: bool,
}

impl MinimapRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for MinimapRenderer {
    type Output = String;

    fn render<C>(&self, world: &BuiltWorld<C>, view: &RenderView) -> String {
        let mut cells = vec![vec!['.'; world.columns]; world.rows];
        for wall in world.walls() {
            match world.cell_at(wall.position) {
                Some(CellCoord { x, z }) => cells[z][x] = '#',
                None => tracing::warn!(position = ?wall.position, "wall outside grid bounds"),
            }
        }
        if self.show_camera {
            if let Some(CellCoord { x, z }) = world.cell_at(view.eye) {
                cells[z][x] = 'v';
            }
        }
        let CellCoord { x, z } = world.spawn.cell;
        if let Some(c) = cells.get_mut(z).and_then(|row| row.get_mut(x)) {
            *c = '@';
        }

        let mut out = String::with_capacity((world.columns + 1) * world.rows);
        for row in cells {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
