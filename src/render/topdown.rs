//! 2D debug view: walls as squares, player and enemies as dots, and a
//! fan of rays out to their hit points.
use crate::game::enemy::{Enemy, living};
use crate::game::grid::{Cell, GridMap};
use crate::game::player::Pose;
use crate::render::casters::Ray;
use crate::render::projector::{ENEMY, Rgb};

/// Pixels per tile in the top-down view.
pub const TILE: i32 = 64;
pub const DEBUG_RAYS: usize = 25;

pub const WALL_COLOR: Rgb = Rgb::new(255, 0, 0);
pub const PLAYER_COLOR: Rgb = Rgb::new(255, 255, 0);
pub const RAY_COLOR: Rgb = Rgb::new(255, 255, 255);
const MARKER: i32 = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub color: Rgb,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    pub color: Rgb,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopDownView {
    pub cells: Vec<Rect>,
    pub rays: Vec<Segment>,
    pub markers: Vec<Rect>,
}

fn to_px(v: f64, tile: i32) -> i32 {
    (v * tile as f64) as i32
}

fn marker(x: f64, y: f64, tile: i32, color: Rgb) -> Rect {
    Rect {
        x: to_px(x, tile) - MARKER / 2,
        y: to_px(y, tile) - MARKER / 2,
        w: MARKER,
        h: MARKER,
        color,
    }
}

pub fn project_top_down(
    map: &GridMap,
    pose: &Pose,
    enemies: &[Enemy],
    rays: &[Ray],
    tile: i32,
) -> TopDownView {
    let mut view = TopDownView::default();

    for j in 0..map.height() {
        for i in 0..map.width() {
            if map.cell(i, j) == Some(Cell::Wall) {
                view.cells.push(Rect {
                    x: i as i32 * tile,
                    y: j as i32 * tile,
                    w: tile,
                    h: tile,
                    color: WALL_COLOR,
                });
            }
        }
    }

    let (px, py) = (to_px(pose.x, tile), to_px(pose.y, tile));
    for ray in rays {
        let (s, c) = ray.angle.sin_cos();
        view.rays.push(Segment {
            x0: px,
            y0: py,
            x1: to_px(pose.x + c * ray.raw_depth, tile),
            y1: to_px(pose.y + s * ray.raw_depth, tile),
            color: RAY_COLOR,
        });
    }

    for (_, e) in living(enemies) {
        view.markers.push(marker(e.x, e.y, tile, ENEMY));
    }
    view.markers.push(marker(pose.x, pose.y, tile, PLAYER_COLOR));
    view
}
