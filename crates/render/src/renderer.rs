use glam::Vec3;
use mazeworld_kernel::{BuiltWorld, InstanceKind, SpawnTransform};

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 10.0, 10.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
        }
    }
}

impl RenderView {
    /// First-person view from the spawn, raised to `eye_height` and looking
    /// along the spawn facing (-Z when unset).
    pub fn from_spawn(spawn: &SpawnTransform, eye_height: f32) -> Self {
        let eye = spawn.position + Vec3::Y * eye_height;
        let forward = spawn
            .facing
            .map(|q| q * Vec3::NEG_Z)
            .unwrap_or(Vec3::NEG_Z);
        Self {
            eye,
            target: eye + forward,
            ..Self::default()
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads a built world and a view configuration, then produces
/// output. Collider payloads are opaque and ignored.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given world and view.
    fn render<C>(&self, world: &BuiltWorld<C>, view: &RenderView) -> Self::Output;
}

/// Human-readable dump of a built world, one line per instance.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render<C>(&self, world: &BuiltWorld<C>, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Maze World ({}x{}, hash={:#018x}) ===\n",
            world.columns,
            world.rows,
            world.layout_hash()
        ));
        out.push_str(&format!(
            "Units: corridor={:.2} wall_height={:.2}\n",
            world.units.corridor_width, world.units.wall_height
        ));
        out.push_str(&format!(
            "Instances: {} ({} walls, 1 floor)\n",
            world.instances.len(),
            world.wall_count()
        ));
        let s = world.spawn.position;
        out.push_str(&format!(
            "Spawn: cell={} pos=({:.2}, {:.2}, {:.2})\n",
            world.spawn.cell, s.x, s.y, s.z
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        for instance in &world.instances {
            let kind = match instance.kind {
                InstanceKind::Wall => "wall ",
                InstanceKind::Floor => "floor",
            };
            let p = instance.position;
            let sc = instance.scale;
            out.push_str(&format!(
                "  {kind} pos=({:.2}, {:.2}, {:.2}) scale=({:.2}, {:.2}, {:.2})\n",
                p.x, p.y, p.z, sc.x, sc.y, sc.z
            ));
        }

        out
    }
}
