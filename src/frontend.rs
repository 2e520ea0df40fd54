//! raylib window: input sampling, drawing and the main loop.
use std::thread;
use std::time::Duration;

use raylib::prelude::*;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::game::input::{Controls, Touch};
use crate::game::state::GameState;
use crate::render::casters;
use crate::render::hud::{
    AMMO_POS, GAME_OVER_COLOR, GAME_OVER_HOLD_MS, GAME_OVER_TEXT, HEALTH_POS, HUD_COLOR,
    HUD_FONT_SIZE, game_over_pos,
};
use crate::render::projector::{CEILING, FLOOR, Frame, Rgb};
use crate::render::topdown::{TopDownView, project_top_down};

fn color(c: Rgb) -> Color {
    Color::new(c.r, c.g, c.b, 255)
}

/// Snapshot of held keys, the fire edge and the first touch point.
/// `was_touching` is whether a finger was down on the previous frame.
fn read_controls(rl: &RaylibHandle, width: i32, height: i32, was_touching: bool) -> Controls {
    let mut controls = Controls {
        forward: rl.is_key_down(KeyboardKey::KEY_W),
        backward: rl.is_key_down(KeyboardKey::KEY_S),
        turn_left: rl.is_key_down(KeyboardKey::KEY_A),
        turn_right: rl.is_key_down(KeyboardKey::KEY_D),
        shoot: rl.is_key_pressed(KeyboardKey::KEY_SPACE),
        touches: Vec::new(),
    };
    if rl.get_touch_point_count() > 0 {
        controls.touches.push(Touch {
            x: rl.get_touch_x() as f64 / width as f64,
            y: rl.get_touch_y() as f64 / height as f64,
            pressed: !was_touching,
        });
    }
    controls
}

fn draw_first_person(d: &mut RaylibDrawHandle, frame: &Frame, width: i32, height: i32) {
    d.draw_rectangle(0, 0, width, height / 2, color(CEILING));
    d.draw_rectangle(0, height / 2, width, height - height / 2, color(FLOOR));
    for s in &frame.walls {
        d.draw_rectangle(s.screen_x_start, s.y_top, s.screen_width, s.height, color(s.color));
    }
    for s in &frame.sprites {
        d.draw_rectangle(s.x, s.y, s.size, s.size, color(s.color));
    }
}

fn draw_top_down(d: &mut RaylibDrawHandle, view: &TopDownView) {
    for c in &view.cells {
        d.draw_rectangle(c.x, c.y, c.w, c.h, color(c.color));
    }
    for s in &view.rays {
        d.draw_line(s.x0, s.y0, s.x1, s.y1, color(s.color));
    }
    for m in &view.markers {
        d.draw_rectangle(m.x, m.y, m.w, m.h, color(m.color));
    }
}

/// Runs until the window closes or the game-over banner has been shown.
pub fn run(state: &mut GameState, config: &GameConfig) {
    let (mut rl, rl_thread) = raylib::init()
        .size(config.width, config.height)
        .title("Raycast Shooter")
        .build();
    rl.set_target_fps(config.fps);

    let params = config.cast_params();
    let debug_params = config.debug_cast_params();
    let screen = config.screen();
    let mut top_down = false;
    let mut was_touching = false;

    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_M) {
            top_down = !top_down;
            debug!(top_down, "view toggled");
        }

        let controls = read_controls(&rl, config.width, config.height, was_touching);
        was_touching = !controls.touches.is_empty();
        let dt = rl.get_frame_time() as f64;
        let report = state.tick(&controls, dt);

        let frame = state.frame(&params, screen);
        let hud = state.hud();
        let view = top_down.then(|| {
            let rays = casters::cast(&state.pose, &state.map, &debug_params);
            project_top_down(&state.map, &state.pose, &state.enemies, &rays, config.tile_px)
        });

        {
            let mut d = rl.begin_drawing(&rl_thread);
            d.clear_background(Color::BLACK);
            match &view {
                Some(view) => draw_top_down(&mut d, view),
                None => draw_first_person(&mut d, &frame, config.width, config.height),
            }
            d.draw_text(&hud.ammo_text(), AMMO_POS.0, AMMO_POS.1, HUD_FONT_SIZE, color(HUD_COLOR));
            d.draw_text(&hud.health_text(), HEALTH_POS.0, HEALTH_POS.1, HUD_FONT_SIZE, color(HUD_COLOR));
            if report.died {
                let (x, y) = game_over_pos(config.width, config.height);
                d.draw_text(GAME_OVER_TEXT, x, y, HUD_FONT_SIZE, color(GAME_OVER_COLOR));
            }
        }

        if report.died {
            info!("game over");
            thread::sleep(Duration::from_millis(GAME_OVER_HOLD_MS));
            break;
        }
    }
}
