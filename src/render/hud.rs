//! HUD text and the game-over banner.
use crate::game::combat::CombatState;
use crate::render::projector::Rgb;

pub const HUD_COLOR: Rgb = Rgb::new(255, 255, 255);
pub const HUD_FONT_SIZE: i32 = 20;
pub const AMMO_POS: (i32, i32) = (10, 10);
pub const HEALTH_POS: (i32, i32) = (10, 30);

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const GAME_OVER_COLOR: Rgb = Rgb::new(255, 0, 0);
/// How long the banner stays up before the loop ends.
pub const GAME_OVER_HOLD_MS: u64 = 3000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    pub ammo: i32,
    /// Truncated toward zero, never rounded.
    pub health: i32,
}

impl From<&CombatState> for Hud {
    fn from(c: &CombatState) -> Self {
        Self { ammo: c.ammo, health: c.health as i32 }
    }
}

impl Hud {
    pub fn ammo_text(&self) -> String {
        format!("Ammo: {}", self.ammo)
    }

    pub fn health_text(&self) -> String {
        format!("Health: {}", self.health)
    }
}

/// Top-left corner of the banner, slightly left of centre.
pub fn game_over_pos(width: i32, height: i32) -> (i32, i32) {
    (width / 2 - 50, height / 2)
}
