//! Hitscan shooting and proximity damage.
use tracing::debug;

use crate::game::enemy::Enemy;
use crate::game::player::Pose;

pub const STARTING_AMMO: i32 = 10;
pub const STARTING_HEALTH: f64 = 100.0;
/// Half-width of the hitscan cone, radians.
pub const HIT_CONE: f64 = 0.1;
pub const HIT_RANGE: f64 = 5.0;
pub const MELEE_RANGE: f64 = 1.0;
/// Health lost per frame per adjacent enemy. Applied per tick, not per second,
/// so the drain rate scales with the frame rate.
pub const DRAIN_PER_TICK: f64 = 0.2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CombatState {
    pub ammo: i32,
    pub health: f64,
}

impl Default for CombatState {
    fn default() -> Self {
        Self { ammo: STARTING_AMMO, health: STARTING_HEALTH }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShotOutcome {
    pub fired: bool,
    pub kills: Vec<usize>,
}

/// Fires one round along the facing direction. Every living enemy inside the
/// cone and range dies; with no ammo nothing changes.
pub fn shoot(combat: &mut CombatState, pose: &Pose, enemies: &mut [Enemy]) -> ShotOutcome {
    if combat.ammo <= 0 {
        return ShotOutcome::default();
    }
    combat.ammo -= 1;

    let mut kills = Vec::new();
    for (idx, enemy) in enemies.iter_mut().enumerate() {
        if !enemy.alive {
            continue;
        }
        let b = pose.bearing_to(enemy.x, enemy.y);
        if b.rel_angle.abs() < HIT_CONE && b.dist < HIT_RANGE {
            enemy.alive = false;
            kills.push(idx);
        }
    }
    debug!(ammo = combat.ammo, ?kills, "shot fired");
    ShotOutcome { fired: true, kills }
}

/// Drains health once per living enemy within melee range. Returns the damage dealt.
pub fn apply_proximity_damage(combat: &mut CombatState, pose: &Pose, enemies: &[Enemy]) -> f64 {
    let mut damage = 0.0;
    for enemy in enemies.iter().filter(|e| e.alive) {
        if pose.bearing_to(enemy.x, enemy.y).dist < MELEE_RANGE {
            combat.health -= DRAIN_PER_TICK;
            damage += DRAIN_PER_TICK;
        }
    }
    damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::enemy::default_enemies;

    #[test]
    fn empty_magazine_changes_nothing() {
        let mut combat = CombatState { ammo: 0, health: 100.0 };
        let pose = Pose::new(3.0, 3.0, 0.0);
        let mut enemies = vec![Enemy::new(4.0, 3.0)];
        let out = shoot(&mut combat, &pose, &mut enemies);
        assert_eq!(out, ShotOutcome::default());
        assert_eq!(combat.ammo, 0);
        assert!(enemies[0].alive);
    }

    #[test]
    fn reference_enemy_outside_cone_survives() {
        let mut combat = CombatState::default();
        let pose = Pose::new(3.0, 3.0, 0.0);
        let mut enemies = default_enemies();
        let out = shoot(&mut combat, &pose, &mut enemies);
        assert!(out.fired);
        assert!(out.kills.is_empty());
        assert_eq!(combat.ammo, STARTING_AMMO - 1);
        assert!(enemies.iter().all(|e| e.alive));
    }

    #[test]
    fn facing_enemy_kills_once() {
        let mut combat = CombatState::default();
        let mut enemies = default_enemies();
        let b = Pose::new(3.0, 3.0, 0.0).bearing_to(5.5, 2.5);
        let pose = Pose::new(3.0, 3.0, b.rel_angle);

        let first = shoot(&mut combat, &pose, &mut enemies);
        assert_eq!(first.kills, vec![0]);
        assert_eq!(combat.ammo, 9);
        assert!(!enemies[0].alive);
        assert!(enemies[1].alive);

        let second = shoot(&mut combat, &pose, &mut enemies);
        assert!(second.fired);
        assert!(second.kills.is_empty());
        assert_eq!(combat.ammo, 8);
    }

    #[test]
    fn one_shot_can_kill_several() {
        let mut combat = CombatState::default();
        let pose = Pose::new(1.0, 1.0, 0.0);
        let mut enemies = vec![Enemy::new(2.0, 1.0), Enemy::new(4.0, 1.05), Enemy::new(7.0, 1.0)];
        let out = shoot(&mut combat, &pose, &mut enemies);
        assert_eq!(out.kills, vec![0, 1]);
        assert!(enemies[2].alive, "beyond hitscan range");
    }

    #[test]
    fn enemy_behind_is_not_hit() {
        let mut combat = CombatState::default();
        let pose = Pose::new(3.0, 3.0, 0.0);
        let mut enemies = vec![Enemy::new(2.0, 3.0)];
        assert!(shoot(&mut combat, &pose, &mut enemies).kills.is_empty());
    }

    #[test]
    fn proximity_damage_stacks_per_enemy() {
        let mut combat = CombatState::default();
        let pose = Pose::new(3.0, 3.0, 0.0);
        let mut enemies = vec![Enemy::new(3.5, 3.0), Enemy::new(3.0, 3.9), Enemy::new(4.5, 3.0)];
        let dmg = apply_proximity_damage(&mut combat, &pose, &enemies);
        assert!((dmg - 2.0 * DRAIN_PER_TICK).abs() < 1e-12);
        assert!((combat.health - (STARTING_HEALTH - 0.4)).abs() < 1e-9);

        enemies[0].alive = false;
        enemies[1].alive = false;
        assert_eq!(apply_proximity_damage(&mut combat, &pose, &enemies), 0.0);
    }
}
