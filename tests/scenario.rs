use raycast_shooter::config::GameConfig;
use raycast_shooter::game::combat::STARTING_AMMO;
use raycast_shooter::game::input::Controls;
use raycast_shooter::game::player::Pose;
use raycast_shooter::game::state::Phase;
use raycast_shooter::render::projector::{ENEMY, SpriteRect};

const DT: f64 = 1.0 / 60.0;

#[test]
fn reference_level_first_frame() {
    let config = GameConfig::default();
    let state = config.build_state().unwrap();
    let frame = state.frame(&config.cast_params(), config.screen());

    assert_eq!(frame.walls.len(), 120);
    assert!(frame.walls.iter().all(|w| w.screen_width == 6));
    assert_eq!(frame.sprites, vec![SpriteRect { x: 194, y: 244, size: 113, color: ENEMY }]);
    assert_eq!(state.hud().ammo_text(), "Ammo: 10");
}

#[test]
fn aim_shoot_and_clear_the_sprite() {
    let config = GameConfig::default();
    let mut state = config.build_state().unwrap();

    // face the first enemy straight on
    let target = state.enemies[0];
    let bearing = state.pose.bearing_to(target.x, target.y);
    state.pose.turn(bearing.rel_angle);

    let report = state.tick(&Controls { shoot: true, ..Controls::default() }, DT);
    assert_eq!(report.shots.len(), 1);
    assert_eq!(report.shots[0].kills, vec![0]);
    assert!(!state.enemies[0].alive);
    assert_eq!(state.combat.ammo, STARTING_AMMO - 1);

    let frame = state.frame(&config.cast_params(), config.screen());
    assert!(frame.sprites.is_empty());
}

#[test]
fn standing_next_to_an_enemy_is_fatal() {
    let config = GameConfig {
        enemies: vec![[3.5, 3.0]],
        health: 1.0,
        ..GameConfig::default()
    };
    let mut state = config.build_state().unwrap();
    let mut deaths = 0;
    for _ in 0..20 {
        if state.tick(&Controls::default(), DT).died {
            deaths += 1;
        }
    }
    assert_eq!(deaths, 1);
    assert_eq!(state.phase(), Phase::Dead);
    assert_eq!(state.hud().health, 0);
}

#[test]
fn walking_into_a_wall_slides_along_it() {
    let config = GameConfig {
        start: Pose::new(1.5, 1.5, std::f64::consts::FRAC_PI_4 * 3.0),
        enemies: vec![],
        ..GameConfig::default()
    };
    let mut state = config.build_state().unwrap();
    let forward = Controls { forward: true, ..Controls::default() };
    for _ in 0..120 {
        state.tick(&forward, DT);
    }
    assert!(!state.map.solid_at(state.pose.x, state.pose.y));
    // x is stopped by the west wall while y keeps sliding south
    assert!(state.pose.x >= 1.0 && state.pose.x < 1.05, "x = {}", state.pose.x);
    assert!(state.pose.y > 3.5 && state.pose.y < 4.0, "y = {}", state.pose.y);
}
