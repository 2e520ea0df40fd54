//! Windowless runner: fixed-dt ticks with no input, optional PPM capture
//! of the final frame in either view.
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::game::input::Controls;
use crate::game::state::GameState;
use crate::render::casters;
use crate::render::framebuffer::Framebuffer;
use crate::render::hud::Hud;
use crate::render::topdown::project_top_down;

/// Which view a capture rasterizes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CaptureView {
    #[default]
    FirstPerson,
    TopDown,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub frames_run: u32,
    pub died: bool,
    pub hud: Hud,
}

/// Ticks up to `frames` times, stopping early if the player dies.
pub fn run(
    state: &mut GameState,
    config: &GameConfig,
    frames: u32,
    capture: Option<&Path>,
    view: CaptureView,
) -> io::Result<HeadlessSummary> {
    let controls = Controls::default();
    let dt = config.frame_dt();
    let mut frames_run = 0;
    let mut died = false;

    while frames_run < frames {
        let report = state.tick(&controls, dt);
        frames_run += 1;
        if report.damage > 0.0 {
            debug!(frame = frames_run, damage = report.damage, health = state.combat.health, "took damage");
        }
        if report.died {
            died = true;
            break;
        }
    }

    if let Some(path) = capture {
        let fb = rasterize(state, config, view);
        fb.write_ppm(BufWriter::new(File::create(path)?))?;
        info!(path = %path.display(), ?view, width = fb.width(), height = fb.height(), "frame captured");
    }

    let summary = HeadlessSummary { frames_run, died, hud: state.hud() };
    info!(frames = summary.frames_run, died, ammo = summary.hud.ammo, health = summary.hud.health, "headless run finished");
    Ok(summary)
}

/// Draws the current state into a screen-sized framebuffer.
pub fn rasterize(state: &GameState, config: &GameConfig, view: CaptureView) -> Framebuffer {
    let mut fb = Framebuffer::new(config.width as u32, config.height as u32);
    match view {
        CaptureView::FirstPerson => {
            let frame = state.frame(&config.cast_params(), config.screen());
            debug!(walls = frame.walls.len(), sprites = frame.sprites.len(), "first-person frame");
            fb.draw_frame(&frame);
        }
        CaptureView::TopDown => {
            let rays = casters::cast(&state.pose, &state.map, &config.debug_cast_params());
            let view = project_top_down(&state.map, &state.pose, &state.enemies, &rays, config.tile_px);
            fb.draw_top_down(&view);
        }
    }
    fb
}
