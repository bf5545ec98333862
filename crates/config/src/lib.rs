//! Configuration for a maze world.
//!
//! Every field has a default, so an empty file (or no file) yields the stock
//! dungeon: 10-unit corridors, 20-unit walls, walk 5 / run 8.
//!
//! # Layout
//! Files ending in `.yaml` or `.yml` are read as YAML, `.json` as JSON.

use mazeworld_grid::{GridError, TileGrid};
use mazeworld_kernel::{DEFAULT_SPAWN_OFFSET, SpawnRequest, WorldUnits};
use mazeworld_session::MovementTuning;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// First-person controller tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub height: f32,
    /// Spawn offset from the spawn cell's lower corner.
    pub start_offset: f32,
    pub mouse_sensitivity: f32,
    pub walk_speed: f32,
    pub run_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let movement = MovementTuning::default();
        Self {
            height: 0.4,
            start_offset: DEFAULT_SPAWN_OFFSET,
            mouse_sensitivity: 120.0,
            walk_speed: movement.walk_speed,
            run_speed: movement.run_speed,
        }
    }
}

/// Asset names and lighting, handed to the host untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub wall_texture: String,
    pub floor_texture: String,
    pub sky_texture: String,
    pub ambience: String,
    pub ambient_light: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            wall_texture: "assets/stone".into(),
            floor_texture: "assets/stone".into(),
            sky_texture: "assets/stars".into(),
            ambience: "assets/ambience".into(),
            ambient_light: 0.3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub units: WorldUnits,
    pub player: PlayerConfig,
    pub style: StyleConfig,
    /// Grid file; the built-in dungeon when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<PathBuf>,
}

enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

impl MazeConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = format_of(path)?;
        let data = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Yaml => serde_yaml::from_str(&data)?,
            Format::Json => serde_json::from_str(&data)?,
        };
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let data = match format_of(path)? {
            Format::Yaml => serde_yaml::to_string(self)?,
            Format::Json => serde_json::to_string_pretty(self)?,
        };
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn movement(&self) -> MovementTuning {
        MovementTuning {
            walk_speed: self.player.walk_speed,
            run_speed: self.player.run_speed,
        }
    }

    pub fn spawn_request(&self) -> SpawnRequest {
        SpawnRequest {
            corner_offset: self.player.start_offset,
            ..Default::default()
        }
    }

    /// Load the configured layout, falling back to the built-in dungeon.
    ///
    /// A relative layout path is resolved against `base`, normally the
    /// directory holding the config file.
    pub fn grid(&self, base: Option<&Path>) -> Result<TileGrid, GridError> {
        match &self.layout {
            Some(layout) => {
                let path = match base {
                    Some(dir) if layout.is_relative() => dir.join(layout),
                    _ => layout.clone(),
                };
                TileGrid::load(path)
            }
            None => Ok(TileGrid::dungeon()),
        }
    }
}

pub fn crate_info() -> &'static str {
    "mazeworld-config v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_dungeon() {
        let c = MazeConfig::default();
        assert_eq!(c.units.corridor_width, 10.0);
        assert_eq!(c.units.wall_height, 20.0);
        assert_eq!(c.player.height, 0.4);
        assert_eq!(c.player.start_offset, 0.1);
        assert_eq!(c.player.mouse_sensitivity, 120.0);
        assert_eq!(c.movement(), MovementTuning::default());
        assert_eq!(c.style.wall_texture, "assets/stone");
        assert!(c.layout.is_none());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "units:\n  wall_height: 6\nplayer:\n  run_speed: 12\n";
        let c: MazeConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(c.units.wall_height, 6.0);
        assert_eq!(c.units.corridor_width, 10.0);
        assert_eq!(c.player.run_speed, 12.0);
        assert_eq!(c.player.walk_speed, 5.0);
    }

    #[test]
    fn empty_json_object_is_default() {
        let c: MazeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, MazeConfig::default());
    }

    #[test]
    fn save_and_load_yaml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = MazeConfig::default();
        c.units.corridor_width = 4.0;
        c.layout = Some(PathBuf::from("maze.txt"));

        for name in ["world.yaml", "world.yml", "world.json"] {
            let path = dir.path().join(name);
            c.save(&path).unwrap();
            assert_eq!(MazeConfig::load(&path).unwrap(), c);
        }
    }

    #[test]
    fn unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.toml");
        assert!(matches!(
            MazeConfig::default().save(&path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            MazeConfig::load(&path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "units: [unclosed").unwrap();
        assert!(matches!(MazeConfig::load(&path), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn spawn_request_uses_start_offset() {
        let mut c = MazeConfig::default();
        c.player.start_offset = 0.5;
        let req = c.spawn_request();
        assert_eq!(req.corner_offset, 0.5);
        assert!(req.cell.is_none());
    }

    #[test]
    fn grid_defaults_to_dungeon_and_resolves_relative_layout() {
        let c = MazeConfig::default();
        assert_eq!(c.grid(None).unwrap(), TileGrid::dungeon());

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tiny.txt"), "###\n#.#\n###\n").unwrap();
        let c = MazeConfig {
            layout: Some(PathBuf::from("tiny.txt")),
            ..Default::default()
        };
        let g = c.grid(Some(dir.path())).unwrap();
        assert_eq!(g.columns(), 3);
        assert_eq!(g.open_count(), 1);
    }
}
