//! Fixed-step ray marching against the tile grid.
use std::f64::consts::PI;

use crate::game::grid::GridMap;
use crate::game::player::Pose;

pub const DEFAULT_FOV: f64 = PI / 3.0;
pub const DEFAULT_NUM_RAYS: usize = 120;
pub const DEFAULT_MAX_DEPTH: f64 = 20.0;
pub const DEFAULT_STEP: f64 = 0.05;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CastParams {
    pub fov: f64,
    pub num_rays: usize,
    pub max_depth: f64,
    pub step: f64,
}

impl Default for CastParams {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            num_rays: DEFAULT_NUM_RAYS,
            max_depth: DEFAULT_MAX_DEPTH,
            step: DEFAULT_STEP,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub angle: f64,
    /// Distance marched along the ray; `max_depth` on a miss.
    pub raw_depth: f64,
    /// `raw_depth` projected onto the view direction (no fisheye).
    pub corrected_depth: f64,
    pub hit: bool,
}

/// Marches from the pose along `angle` until a solid sample or `max_depth`.
/// Returns the depth reached and whether a wall stopped it.
pub fn cast_ray(pose: &Pose, map: &GridMap, angle: f64, max_depth: f64, step: f64) -> (f64, bool) {
    // a non-positive step would never advance
    if !(step > 0.0) {
        return (max_depth, false);
    }
    let (sin_a, cos_a) = angle.sin_cos();
    let mut depth = 0.0;
    while depth < max_depth {
        let x = pose.x + cos_a * depth;
        let y = pose.y + sin_a * depth;
        if map.solid_at(x, y) {
            return (depth, true);
        }
        depth += step;
    }
    (max_depth, false)
}

/// Casts `num_rays` rays evenly across `[angle - fov/2, angle + fov/2)`.
pub fn cast(pose: &Pose, map: &GridMap, params: &CastParams) -> Vec<Ray> {
    if params.num_rays == 0 {
        return Vec::new();
    }
    let start = pose.angle - params.fov / 2.0;
    let delta = params.fov / params.num_rays as f64;

    (0..params.num_rays)
        .map(|i| {
            let angle = start + i as f64 * delta;
            let (raw_depth, hit) = cast_ray(pose, map, angle, params.max_depth, params.step);
            Ray {
                angle,
                raw_depth,
                corrected_depth: raw_depth * (pose.angle - angle).cos(),
                hit,
            }
        })
        .collect()
}
