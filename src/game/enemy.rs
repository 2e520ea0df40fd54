//! Enemy roster: fixed, index-addressable, never shrinks.
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::game::grid::GridMap;

pub const DEFAULT_ENEMIES: [(f64, f64); 2] = [(5.5, 2.5), (2.5, 3.5)];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub alive: bool,
}

impl Enemy {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, alive: true }
    }
}

pub fn default_enemies() -> Vec<Enemy> {
    DEFAULT_ENEMIES.iter().map(|&(x, y)| Enemy::new(x, y)).collect()
}

pub fn living(enemies: &[Enemy]) -> impl Iterator<Item = (usize, &Enemy)> {
    enemies.iter().enumerate().filter(|(_, e)| e.alive)
}

/// Places up to `count` enemies at the centres of distinct random open tiles,
/// skipping the tile `avoid` (the player's). Fewer are returned when the map
/// runs out of free tiles.
pub fn spawn_random<R: Rng + ?Sized>(
    map: &GridMap,
    count: usize,
    avoid: (usize, usize),
    rng: &mut R,
) -> Vec<Enemy> {
    let mut free: Vec<(usize, usize)> =
        map.open_cells().into_iter().filter(|&c| c != avoid).collect();
    if count > free.len() {
        warn!(requested = count, available = free.len(), "not enough open tiles for enemies");
    }
    free.shuffle(rng);
    free.into_iter()
        .take(count)
        .map(|(i, j)| Enemy::new(i as f64 + 0.5, j as f64 + 0.5))
        .collect()
}
