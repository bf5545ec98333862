use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mazeworld_common::ColliderShape;
use mazeworld_config::MazeConfig;
use mazeworld_grid::TileGrid;
use mazeworld_input::{InputEvent, Key};
use mazeworld_kernel::{BuiltWorld, GridWorldBuilder};
use mazeworld_render::{DebugTextRenderer, MinimapRenderer, RenderView, Renderer};
use mazeworld_session::{MenuAction, Session};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mazeworld-cli", about = "CLI tool for maze world operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (.yaml, .yml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Build the world and print every placed instance
    Build {
        /// Grid file (text map or .json); overrides the config layout
        #[arg(short, long)]
        grid: Option<PathBuf>,
        /// Print the built world as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a top-down map of the built world
    Map {
        #[arg(short, long)]
        grid: Option<PathBuf>,
    },
    /// Check a grid file and report its dimensions
    Validate {
        #[arg(short, long)]
        grid: PathBuf,
    },
    /// Run a scripted session against the built world
    Play {
        #[arg(short, long)]
        grid: Option<PathBuf>,
        /// Comma-separated steps: a key name taps it, +key holds, -key
        /// releases, `tick` runs a frame update, `resume`/`quit` click the menu
        #[arg(
            short,
            long,
            allow_hyphen_values = true,
            default_value = "tick,+shift,tick,esc,tick,resume,-shift,tick,esc,quit"
        )]
        keys: String,
    },
}

/// One step of a scripted session.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Tap(Key),
    Hold(Key),
    Release(Key),
    Tick,
    Menu(MenuAction),
}

fn parse_script(script: &str) -> Result<Vec<Step>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|token| -> Result<Step> {
            let step = match token {
                "tick" => Step::Tick,
                "resume" => Step::Menu(MenuAction::Resume),
                "quit" => Step::Menu(MenuAction::Quit),
                _ => {
                    if let Some(name) = token.strip_prefix('+') {
                        Step::Hold(name.parse()?)
                    } else if let Some(name) = token.strip_prefix('-') {
                        Step::Release(name.parse()?)
                    } else {
                        Step::Tap(token.parse()?)
                    }
                }
            };
            Ok(step)
        })
        .collect()
}

fn load_config(path: Option<&Path>) -> Result<MazeConfig> {
    match path {
        Some(p) => {
            MazeConfig::load(p).with_context(|| format!("loading config {}", p.display()))
        }
        None => Ok(MazeConfig::default()),
    }
}

fn load_grid(
    config: &MazeConfig,
    config_path: Option<&Path>,
    grid: Option<&Path>,
) -> Result<TileGrid> {
    match grid {
        Some(p) => TileGrid::load(p).with_context(|| format!("loading grid {}", p.display())),
        None => {
            let base = config_path.and_then(Path::parent);
            config.grid(base).context("loading configured layout")
        }
    }
}

fn build_world(
    config: &MazeConfig,
    config_path: Option<&Path>,
    grid: Option<&Path>,
) -> Result<BuiltWorld<ColliderShape>> {
    let grid = load_grid(config, config_path, grid)?;
    let world = GridWorldBuilder::new(config.units)
        .with_spawn(config.spawn_request())
        .build(&grid, ColliderShape::Box, ColliderShape::Mesh)?;
    Ok(world)
}

fn describe(session: &Session) -> String {
    let s = session.state();
    format!(
        "paused={} menu={} cursor_locked={} player_enabled={} speed={:.1} quit={}",
        s.paused,
        s.menu_visible,
        s.cursor_locked,
        s.player.enabled,
        s.player.speed,
        s.quit_requested
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config_path = cli.config.as_deref();
    let config = load_config(config_path)?;

    match cli.command {
        Commands::Info => {
            println!("mazeworld-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("grid: {}", mazeworld_grid::crate_info());
            println!("kernel: {}", mazeworld_kernel::crate_info());
            println!("input: {}", mazeworld_input::crate_info());
            println!("session: {}", mazeworld_session::crate_info());
            println!("config: {}", mazeworld_config::crate_info());
            println!("render: {}", mazeworld_render::crate_info());
        }
        Commands::Build { grid, json } => {
            let world = build_world(&config, config_path, grid.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&world)?);
            } else {
                let view = RenderView::from_spawn(&world.spawn, config.player.height);
                print!("{}", DebugTextRenderer::new().render(&world, &view));
            }
        }
        Commands::Map { grid } => {
            let world = build_world(&config, config_path, grid.as_deref())?;
            let view = RenderView::from_spawn(&world.spawn, config.player.height);
            print!("{}", MinimapRenderer::new().render(&world, &view));
        }
        Commands::Validate { grid } => {
            let tiles = TileGrid::load(&grid)
                .with_context(|| format!("invalid grid {}", grid.display()))?;
            println!(
                "{}: {}x{} ({} walls, {} open)",
                grid.display(),
                tiles.columns(),
                tiles.rows(),
                tiles.wall_count(),
                tiles.open_count()
            );
            match tiles.first_open() {
                Some(cell) => println!("spawn cell: {cell}"),
                None => bail!("grid has no open cell to spawn in"),
            }
        }
        Commands::Play { grid, keys } => {
            let steps = parse_script(&keys)?;
            let world = build_world(&config, config_path, grid.as_deref())?;
            let mut session = Session::new(&world.spawn, config.movement());
            println!("start: {}", describe(&session));

            for step in steps {
                match step {
                    Step::Tap(key) => {
                        session.handle(InputEvent::Pressed(key));
                        session.handle(InputEvent::Released(key));
                    }
                    Step::Hold(key) => {
                        session.handle(InputEvent::Pressed(key));
                    }
                    Step::Release(key) => {
                        session.handle(InputEvent::Released(key));
                    }
                    Step::Tick => {
                        if !session.update() {
                            tracing::debug!("frame skipped while paused");
                        }
                    }
                    Step::Menu(action) => {
                        session.select(action);
                    }
                }
                println!("{step:?}: {}", describe(&session));
                if session.should_quit() {
                    break;
                }
            }
        }
    }

    Ok(())
}
