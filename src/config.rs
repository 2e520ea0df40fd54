//! Runtime configuration: an optional JSON file, then command-line overrides.
use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::game::combat::{CombatState, STARTING_AMMO, STARTING_HEALTH};
use crate::game::enemy::{self, DEFAULT_ENEMIES, Enemy};
use crate::game::grid::GridMap;
use crate::game::player::{DEFAULT_MOVE_SPEED, DEFAULT_TURN_SPEED, Pose};
use crate::game::state::{GameState, Movement};
use crate::render::casters::{
    CastParams, DEFAULT_FOV, DEFAULT_MAX_DEPTH, DEFAULT_NUM_RAYS, DEFAULT_STEP,
};
use crate::render::projector::Screen;
use crate::render::topdown::{DEBUG_RAYS, TILE};

/// Largest accepted screen edge, in pixels.
pub const MAX_SCREEN_DIM: i32 = 16_384;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON config file; the flags below override its values.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Text map file: '0' is open floor, any other character is wall.
    #[arg(short, long, value_name = "FILE")]
    pub map: Option<PathBuf>,
    #[arg(long)]
    pub width: Option<i32>,
    #[arg(long)]
    pub height: Option<i32>,
    #[arg(long)]
    pub fps: Option<u32>,
    /// Rays cast per frame.
    #[arg(long)]
    pub rays: Option<usize>,
    /// Extra enemies dropped on random open tiles.
    #[arg(long, value_name = "N")]
    pub random_enemies: Option<usize>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Run without a window for `--frames` ticks.
    #[arg(long)]
    pub headless: bool,
    #[arg(long, default_value_t = 60)]
    pub frames: u32,
    /// Write the last headless frame as a PPM image.
    #[arg(long, value_name = "FILE", requires = "headless")]
    pub capture: Option<PathBuf>,
    /// Capture the 2D map view instead of the first-person view.
    #[arg(long, requires = "capture")]
    pub top_down: bool,
    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
    pub fov: f64,
    pub num_rays: usize,
    pub max_depth: f64,
    pub step: f64,
    /// Pixels per tile in the top-down view.
    pub tile_px: i32,
    pub debug_rays: usize,
    pub move_speed: f64,
    pub turn_speed: f64,
    pub start: Pose,
    pub ammo: i32,
    pub health: f64,
    pub enemies: Vec<[f64; 2]>,
    pub random_enemies: usize,
    pub seed: u64,
    /// Built-in level when unset.
    pub map: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fps: 60,
            fov: DEFAULT_FOV,
            num_rays: DEFAULT_NUM_RAYS,
            max_depth: DEFAULT_MAX_DEPTH,
            step: DEFAULT_STEP,
            tile_px: TILE,
            debug_rays: DEBUG_RAYS,
            move_speed: DEFAULT_MOVE_SPEED,
            turn_speed: DEFAULT_TURN_SPEED,
            start: Pose::new(3.0, 3.0, 0.0),
            ammo: STARTING_AMMO,
            health: STARTING_HEALTH,
            enemies: DEFAULT_ENEMIES.iter().map(|&(x, y)| [x, y]).collect(),
            random_enemies: 0,
            seed: 0,
            map: None,
        }
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// File values (or defaults), overridden by any flag given on the command line.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(map) = &cli.map { self.map = Some(map.clone()); }
        if let Some(w) = cli.width { self.width = w; }
        if let Some(h) = cli.height { self.height = h; }
        if let Some(fps) = cli.fps { self.fps = fps; }
        if let Some(rays) = cli.rays { self.num_rays = rays; }
        if let Some(n) = cli.random_enemies { self.random_enemies = n; }
        if let Some(seed) = cli.seed { self.seed = seed; }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(invalid(format!("screen size {}x{} must be positive", self.width, self.height)));
        }
        if self.width > MAX_SCREEN_DIM || self.height > MAX_SCREEN_DIM {
            return Err(invalid(format!(
                "screen size {}x{} exceeds {MAX_SCREEN_DIM} pixels per side",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(invalid("fps must be positive"));
        }
        if self.num_rays == 0 || self.num_rays > self.width as usize {
            return Err(invalid(format!(
                "ray count {} must be between 1 and the screen width {}",
                self.num_rays, self.width
            )));
        }
        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(invalid(format!("fov {} must lie in (0, pi)", self.fov)));
        }
        if !(self.max_depth.is_finite() && self.max_depth > 0.0) {
            return Err(invalid("max_depth must be positive and finite"));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(invalid("step must be positive and finite"));
        }
        if self.tile_px <= 0 {
            return Err(invalid("tile_px must be positive"));
        }
        if self.ammo < 0 {
            return Err(invalid("ammo cannot be negative"));
        }
        if !(self.health.is_finite() && self.health > 0.0) {
            return Err(invalid("health must be positive and finite"));
        }
        Ok(())
    }

    pub fn cast_params(&self) -> CastParams {
        CastParams {
            fov: self.fov,
            num_rays: self.num_rays,
            max_depth: self.max_depth,
            step: self.step,
        }
    }

    pub fn debug_cast_params(&self) -> CastParams {
        CastParams { num_rays: self.debug_rays, ..self.cast_params() }
    }

    pub fn screen(&self) -> Screen {
        Screen { width: self.width, height: self.height }
    }

    /// Fixed frame time for runs without a real clock.
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.fps as f64
    }

    pub fn load_map(&self) -> Result<GridMap, ConfigError> {
        match &self.map {
            Some(path) => Ok(GridMap::load(path)?),
            None => Ok(GridMap::default()),
        }
    }

    pub fn build_state(&self) -> Result<GameState, ConfigError> {
        self.validate()?;
        let map = self.load_map()?;
        if map.solid_at(self.start.x, self.start.y) {
            return Err(invalid(format!(
                "start position ({}, {}) is inside a wall",
                self.start.x, self.start.y
            )));
        }

        let mut enemies: Vec<Enemy> = self.enemies.iter().map(|&[x, y]| Enemy::new(x, y)).collect();
        if self.random_enemies > 0 {
            let mut rng = StdRng::seed_from_u64(self.seed);
            let player_tile = (self.start.x as usize, self.start.y as usize);
            enemies.extend(enemy::spawn_random(&map, self.random_enemies, player_tile, &mut rng));
        }
        info!(
            width = map.width(),
            height = map.height(),
            enemies = enemies.len(),
            "level ready"
        );

        let mut state = GameState::new(
            map,
            self.start,
            enemies,
            CombatState { ammo: self.ammo, health: self.health },
        );
        state.movement = Movement { move_speed: self.move_speed, turn_speed: self.turn_speed };
        Ok(state)
    }
}
