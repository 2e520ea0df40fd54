//! Screen-space projection of rays and enemies into flat rectangles.
//!
//! There is no depth buffer: sprites are emitted after every wall slice and
//! are drawn on top regardless of what stands between them and the camera.
use crate::game::enemy::{Enemy, living};
use crate::game::grid::GridMap;
use crate::game::player::Pose;
use crate::render::casters::{self, CastParams, Ray};

/// Additive floor keeping `height / depth` finite at zero depth.
pub const DEPTH_EPSILON: f64 = 0.0001;
/// Red channel lost per world unit of corrected depth.
pub const SHADE_PER_UNIT: f64 = 12.0;
pub const SPRITE_SCALE: f64 = 300.0;
pub const SPRITE_DIST_FLOOR: f64 = 0.1;
pub const SPRITE_MAX_SIZE: i32 = 200;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const CEILING: Rgb = Rgb::new(100, 100, 100);
pub const FLOOR: Rgb = Rgb::new(50, 50, 50);
pub const ENEMY: Rgb = Rgb::new(200, 50, 50);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub width: i32,
    pub height: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WallSlice {
    pub screen_x_start: i32,
    pub screen_width: i32,
    pub y_top: i32,
    pub height: i32,
    pub color: Rgb,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpriteRect {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub color: Rgb,
}

/// Everything drawn for one view: walls first, then sprites on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub walls: Vec<WallSlice>,
    pub sprites: Vec<SpriteRect>,
}

/// Monochrome red, darker with distance.
pub fn shade(depth: f64) -> Rgb {
    let fade = ((depth * SHADE_PER_UNIT) as i32).clamp(0, 255);
    Rgb::new((255 - fade) as u8, 0, 0)
}

/// Slice for ray `index` of `num_rays`; `None` when the ray found no wall.
pub fn project_wall(index: usize, num_rays: usize, ray: &Ray, screen: Screen) -> Option<WallSlice> {
    if !ray.hit || num_rays == 0 {
        return None;
    }
    let column = screen.width / num_rays as i32;
    let depth = ray.corrected_depth;
    // `as` saturates, so a zero depth still yields a finite height
    let height = ((screen.height as f64 / (depth + DEPTH_EPSILON)) as i32).min(screen.height);
    Some(WallSlice {
        screen_x_start: index as i32 * column,
        screen_width: column,
        y_top: screen.height / 2 - height / 2,
        height,
        color: shade(depth),
    })
}

pub fn project_walls(rays: &[Ray], screen: Screen) -> Vec<WallSlice> {
    rays.iter()
        .enumerate()
        .filter_map(|(i, ray)| project_wall(i, rays.len(), ray, screen))
        .collect()
}

/// Square billboard for an enemy strictly inside the field of view.
pub fn project_sprite(pose: &Pose, enemy: &Enemy, fov: f64, screen: Screen) -> Option<SpriteRect> {
    let b = pose.bearing_to(enemy.x, enemy.y);
    let half = fov / 2.0;
    if !(b.rel_angle > -half && b.rel_angle < half) {
        return None;
    }
    let size = ((SPRITE_SCALE / (b.dist + SPRITE_DIST_FLOOR)) as i32).min(SPRITE_MAX_SIZE);
    let offset = (b.rel_angle * (screen.width as f64 / fov)) as i32;
    Some(SpriteRect {
        x: screen.width / 2 + offset - size / 2,
        y: screen.height / 2 - size / 2,
        size,
        color: ENEMY,
    })
}

/// Living enemies in creation order; no sorting by distance.
pub fn project_sprites(pose: &Pose, enemies: &[Enemy], fov: f64, screen: Screen) -> Vec<SpriteRect> {
    living(enemies)
        .filter_map(|(_, e)| project_sprite(pose, e, fov, screen))
        .collect()
}

pub fn build_frame(
    pose: &Pose,
    map: &GridMap,
    enemies: &[Enemy],
    params: &CastParams,
    screen: Screen,
) -> Frame {
    let rays = casters::cast(pose, map, params);
    Frame {
        walls: project_walls(&rays, screen),
        sprites: project_sprites(pose, enemies, params.fov, screen),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::enemy::default_enemies;

    const SCREEN: Screen = Screen { width: 800, height: 600 };

    fn hit(depth: f64) -> Ray {
        Ray { angle: 0.0, raw_depth: depth, corrected_depth: depth, hit: true }
    }

    #[test]
    fn wall_height_is_inverse_depth_and_centered() {
        let slice = project_wall(60, 120, &hit(6.0), SCREEN).unwrap();
        assert_eq!(slice.screen_x_start, 360);
        assert_eq!(slice.screen_width, 6);
        assert_eq!(slice.height, 99);
        assert_eq!(slice.y_top, 300 - 49);
        assert_eq!(slice.color, Rgb::new(183, 0, 0));
    }

    #[test]
    fn zero_depth_clamps_to_screen_height() {
        let slice = project_wall(0, 120, &hit(0.0), SCREEN).unwrap();
        assert_eq!(slice.height, 600);
        assert_eq!(slice.y_top, 0);
        assert_eq!(slice.color, Rgb::new(255, 0, 0));
    }

    #[test]
    fn far_walls_fade_to_black() {
        assert_eq!(shade(25.0), Rgb::new(0, 0, 0));
        assert_eq!(shade(21.25), Rgb::new(0, 0, 0));
        assert_eq!(shade(1.0), Rgb::new(243, 0, 0));
    }

    #[test]
    fn misses_draw_nothing() {
        let mut ray = hit(20.0);
        ray.hit = false;
        assert_eq!(project_wall(3, 120, &ray, SCREEN), None);
        let walls = project_walls(&[hit(2.0), ray, hit(3.0)], SCREEN);
        assert_eq!(walls.len(), 2);
        assert_eq!(walls[1].screen_x_start, 2 * (800 / 3));
    }

    #[test]
    fn reference_enemy_sprite_placement() {
        let pose = Pose::new(3.0, 3.0, 0.0);
        let sprites = project_sprites(&pose, &default_enemies(), std::f64::consts::PI / 3.0, SCREEN);
        // the second enemy is behind the player
        assert_eq!(sprites, vec![SpriteRect { x: 194, y: 244, size: 113, color: ENEMY }]);
    }

    #[test]
    fn sprite_size_is_capped() {
        let pose = Pose::new(3.0, 3.0, 0.0);
        let s = project_sprite(&pose, &Enemy::new(3.3, 3.0), 1.0, SCREEN).unwrap();
        assert_eq!(s.size, SPRITE_MAX_SIZE);
        assert_eq!(s.x, 400 - 100);
        assert_eq!(s.y, 300 - 100);
    }

    #[test]
    fn sprites_on_the_fov_edge_are_culled() {
        let pose = Pose::new(0.0, 0.0, 0.0);
        let edge = Enemy::new(2.0, 1.0);
        // a field of view whose half-angle equals the bearing exactly
        let fov = 2.0 * pose.bearing_to(edge.x, edge.y).rel_angle;
        assert!(project_sprite(&pose, &edge, fov, SCREEN).is_none());
        assert!(project_sprite(&pose, &Enemy::new(2.0, 0.9), fov, SCREEN).is_some());
        assert!(project_sprite(&pose, &Enemy::new(1.0, 2.0), fov, SCREEN).is_none());
    }

    #[test]
    fn dead_enemies_are_skipped() {
        let pose = Pose::new(3.0, 3.0, 0.0);
        let mut enemies = default_enemies();
        enemies[0].alive = false;
        assert!(project_sprites(&pose, &enemies, 1.0, SCREEN).is_empty());
    }

    #[test]
    fn frame_has_one_slice_per_hit_ray() {
        let frame = build_frame(
            &Pose::new(3.0, 3.0, 0.0),
            &GridMap::default(),
            &default_enemies(),
            &CastParams::default(),
            SCREEN,
        );
        assert_eq!(frame.walls.len(), 120);
        assert_eq!(frame.sprites.len(), 1);
        let mid = frame.walls[60];
        assert_eq!(mid.screen_x_start, 360);
        assert_eq!(mid.height, 99);
    }
}
