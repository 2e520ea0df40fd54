//! The per-session aggregate and its frame step.
use tracing::info;

use crate::game::combat::{self, CombatState, ShotOutcome};
use crate::game::enemy::Enemy;
use crate::game::grid::GridMap;
use crate::game::input::{Controls, TouchAction, classify_touch};
use crate::game::player::{DEFAULT_MOVE_SPEED, DEFAULT_TURN_SPEED, Pose};
use crate::render::casters::CastParams;
use crate::render::hud::Hud;
use crate::render::projector::{self, Frame, Screen};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Alive,
    Dead,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Movement {
    pub move_speed: f64,
    pub turn_speed: f64,
}

impl Default for Movement {
    fn default() -> Self {
        Self { move_speed: DEFAULT_MOVE_SPEED, turn_speed: DEFAULT_TURN_SPEED }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub shots: Vec<ShotOutcome>,
    pub damage: f64,
    /// Set on the single tick where health first reached zero.
    pub died: bool,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub map: GridMap,
    pub pose: Pose,
    pub enemies: Vec<Enemy>,
    pub combat: CombatState,
    pub movement: Movement,
    phase: Phase,
}

impl GameState {
    pub fn new(map: GridMap, pose: Pose, enemies: Vec<Enemy>, combat: CombatState) -> Self {
        Self { map, pose, enemies, combat, movement: Movement::default(), phase: Phase::Alive }
    }

    pub fn phase(&self) -> Phase { self.phase }

    /// Advances one frame: fire, touch, keyboard movement, proximity damage,
    /// then the death check. Does nothing once dead.
    pub fn tick(&mut self, controls: &Controls, dt: f64) -> TickReport {
        let mut report = TickReport::default();
        if self.phase == Phase::Dead {
            return report;
        }

        if controls.shoot {
            report.shots.push(self.fire());
        }

        for &touch in &controls.touches {
            match classify_touch(touch) {
                TouchAction::Advance(step) => {
                    self.pose.advance(&self.map, step);
                }
                TouchAction::Turn(delta) => self.pose.turn(delta),
                TouchAction::Shoot => report.shots.push(self.fire()),
                TouchAction::Ignore => {}
            }
        }

        let stride = self.movement.move_speed * dt;
        if controls.forward {
            self.pose.advance(&self.map, stride);
        }
        if controls.backward {
            self.pose.advance(&self.map, -stride);
        }
        if controls.turn_left {
            self.pose.turn(-self.movement.turn_speed * dt);
        }
        if controls.turn_right {
            self.pose.turn(self.movement.turn_speed * dt);
        }

        report.damage = combat::apply_proximity_damage(&mut self.combat, &self.pose, &self.enemies);

        if self.combat.health <= 0.0 {
            self.phase = Phase::Dead;
            report.died = true;
            info!(health = self.combat.health, "player died");
        }
        report
    }

    fn fire(&mut self) -> ShotOutcome {
        combat::shoot(&mut self.combat, &self.pose, &mut self.enemies)
    }

    pub fn frame(&self, params: &CastParams, screen: Screen) -> Frame {
        projector::build_frame(&self.pose, &self.map, &self.enemies, params, screen)
    }

    pub fn hud(&self) -> Hud {
        Hud::from(&self.combat)
    }
}
