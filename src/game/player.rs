//! Player pose, relative bearings and collision-checked movement.
use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::game::grid::GridMap;

pub const DEFAULT_MOVE_SPEED: f64 = 2.0; // units per second
pub const DEFAULT_TURN_SPEED: f64 = 2.0; // radians per second

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub angle: f64, // radians, 0 = +x, grows towards +y
}

/// Distance and signed angle of a world point as seen from a pose.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bearing {
    pub dist: f64,
    pub rel_angle: f64,
}

/// Wraps an angle into `(-PI, PI]`.
#[inline]
pub fn normalize_angle(a: f64) -> f64 {
    if !a.is_finite() {
        return a;
    }
    let mut a = a % TAU;
    if a > PI { a -= TAU; }
    if a <= -PI { a += TAU; }
    a
}

impl Pose {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self { x, y, angle }
    }

    #[inline]
    pub fn direction(&self) -> (f64, f64) {
        (self.angle.cos(), self.angle.sin())
    }

    /// Bearing of `(x, y)` relative to the facing direction. Negative means
    /// the point lies towards decreasing angle (left of centre on screen).
    pub fn bearing_to(&self, x: f64, y: f64) -> Bearing {
        let dx = x - self.x;
        let dy = y - self.y;
        Bearing {
            dist: (dx * dx + dy * dy).sqrt(),
            rel_angle: normalize_angle(dy.atan2(dx) - self.angle),
        }
    }

    /// Applies `(dx, dy)` one axis at a time so the player slides along walls.
    /// Returns whether any component was accepted.
    pub fn try_move(&mut self, map: &GridMap, dx: f64, dy: f64) -> bool {
        let mut moved = false;
        let nx = self.x + dx;
        if !map.solid_at(nx, self.y) {
            self.x = nx;
            moved = true;
        }
        let ny = self.y + dy;
        if !map.solid_at(self.x, ny) {
            self.y = ny;
            moved = true;
        }
        moved
    }

    /// Moves `distance` units along the facing direction (negative walks back).
    pub fn advance(&mut self, map: &GridMap, distance: f64) -> bool {
        let (c, s) = self.direction();
        self.try_move(map, c * distance, s * distance)
    }

    pub fn turn(&mut self, delta: f64) {
        self.angle += delta;
    }
}
