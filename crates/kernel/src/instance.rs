use glam::{Quat, Vec2, Vec3};
use mazeworld_common::CellCoord;
use serde::{Deserialize, Serialize};

/// World-space size of one grid cell and the height of its walls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldUnits {
    pub corridor_width: f32,
    pub wall_height: f32,
}

impl WorldUnits {
    pub fn new(corridor_width: f32, wall_height: f32) -> Self {
        Self {
            corridor_width,
            wall_height,
        }
    }
}

impl Default for WorldUnits {
    fn default() -> Self {
        Self {
            corridor_width: 10.0,
            wall_height: 20.0,
        }
    }
}

/// What a placed instance represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstanceKind {
    Wall,
    Floor,
}

/// A piece of static geometry ready for a host to spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedInstance<C> {
    pub kind: InstanceKind,
    /// Center of the instance in world space.
    pub position: Vec3,
    pub scale: Vec3,
    /// Texture repeat count across the instance faces.
    pub tiling: Vec2,
    /// Opaque collider handle supplied by the caller.
    pub collider: C,
}

/// Where the player-controlled entity starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTransform {
    pub position: Vec3,
    /// `None` leaves the controller's default facing in place.
    pub facing: Option<Quat>,
    /// Grid cell the spawn was derived from.
    pub cell: CellCoord,
}

/// The output of one build: every placed instance plus the spawn.
///
/// Walls come first in row-major order, followed by the single floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltWorld<C> {
    pub instances: Vec<PlacedInstance<C>>,
    pub spawn: SpawnTransform,
    pub units: WorldUnits,
    pub columns: usize,
    pub rows: usize,
}

impl<C> BuiltWorld<C> {
    pub fn walls(&self) -> impl Iterator<Item = &PlacedInstance<C>> {
        self.instances
            .iter()
            .filter(|i| i.kind == InstanceKind::Wall)
    }

    pub fn wall_count(&self) -> usize {
        self.walls().count()
    }

    pub fn floor(&self) -> Option<&PlacedInstance<C>> {
        self.instances
            .iter()
            .find(|i| i.kind == InstanceKind::Floor)
    }

    /// World-space footprint of the grid on the XZ plane.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 * self.units.corridor_width,
            self.rows as f32 * self.units.corridor_width,
        )
    }

    /// Grid cell whose center is closest to `position`, if inside the grid.
    pub fn cell_at(&self, position: Vec3) -> Option<CellCoord> {
        let w = self.units.corridor_width;
        let x = (position.x / w).round();
        let z = (position.z / w).round();
        if x < 0.0 || z < 0.0 {
            return None;
        }
        let cell = CellCoord::new(x as usize, z as usize);
        (cell.x < self.columns && cell.z < self.rows).then_some(cell)
    }

    /// Deterministic FNV-1a digest of the placed geometry and spawn.
    /// Colliders are opaque and do not contribute.
    pub fn layout_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        let mix_vec3 = |h: &mut u64, v: Vec3| {
            mix(h, &v.x.to_le_bytes());
            mix(h, &v.y.to_le_bytes());
            mix(h, &v.z.to_le_bytes());
        };
        mix(&mut h, &(self.columns as u64).to_le_bytes());
        mix(&mut h, &(self.rows as u64).to_le_bytes());
        for instance in &self.instances {
            let tag = match instance.kind {
                InstanceKind::Wall => 1u8,
                InstanceKind::Floor => 2u8,
            };
            mix(&mut h, &[tag]);
            mix_vec3(&mut h, instance.position);
            mix_vec3(&mut h, instance.scale);
        }
        mix_vec3(&mut h, self.spawn.position);
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BuiltWorld<()> {
        BuiltWorld {
            instances: vec![
                PlacedInstance {
                    kind: InstanceKind::Wall,
                    position: Vec3::new(0.0, 9.5, 0.0),
                    scale: Vec3::new(10.0, 20.0, 10.0),
                    tiling: Vec2::ONE,
                    collider: (),
                },
                PlacedInstance {
                    kind: InstanceKind::Floor,
                    position: Vec3::new(5.0, -0.5, 0.0),
                    scale: Vec3::new(20.0, 1.0, 10.0),
                    tiling: Vec2::new(2.0, 1.0),
                    collider: (),
                },
            ],
            spawn: SpawnTransform {
                position: Vec3::new(10.1, 0.1, 0.1),
                facing: None,
                cell: CellCoord::new(1, 0),
            },
            units: WorldUnits::default(),
            columns: 2,
            rows: 1,
        }
    }

    #[test]
    fn default_units() {
        let u = WorldUnits::default();
        assert_eq!(u.corridor_width, 10.0);
        assert_eq!(u.wall_height, 20.0);
    }

    #[test]
    fn accessors() {
        let w = sample();
        assert_eq!(w.wall_count(), 1);
        assert_eq!(w.floor().unwrap().tiling, Vec2::new(2.0, 1.0));
        assert_eq!(w.extent(), Vec2::new(20.0, 10.0));
    }

    #[test]
    fn cell_at_rounds_to_nearest_center() {
        let w = sample();
        assert_eq!(w.cell_at(Vec3::new(10.1, 0.0, 0.1)), Some(CellCoord::new(1, 0)));
        assert_eq!(w.cell_at(Vec3::new(3.0, 0.0, 4.9)), Some(CellCoord::new(0, 0)));
        assert_eq!(w.cell_at(Vec3::new(30.0, 0.0, 0.0)), None);
        assert_eq!(w.cell_at(Vec3::new(-8.0, 0.0, 0.0)), None);
    }

    #[test]
    fn layout_hash_ignores_collider_but_not_geometry() {
        let a = sample();
        let b = BuiltWorld {
            instances: a
                .instances
                .iter()
                .map(|i| PlacedInstance {
                    kind: i.kind,
                    position: i.position,
                    scale: i.scale,
                    tiling: i.tiling,
                    collider: 7u32,
                })
                .collect(),
            spawn: a.spawn,
            units: a.units,
            columns: a.columns,
            rows: a.rows,
        };
        assert_eq!(a.layout_hash(), b.layout_hash());

        let mut moved = sample();
        moved.instances[0].position.x = 1.0;
        assert_ne!(a.layout_hash(), moved.layout_hash());
    }

    #[test]
    fn built_world_serializes() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"kind\":\"Wall\""));
        let back: BuiltWorld<()> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
