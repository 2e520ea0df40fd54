//! First-person raycasting shooter on a tile grid.
//!
//! The simulation (`game`) and the projection to drawables (`render`) are
//! plain data and never touch a window; `frontend` adds raylib on top and
//! `headless` drives the same loop without one.

pub mod config;
pub mod error;
pub mod game;
pub mod headless;
pub mod render;

#[cfg(feature = "window")]
pub mod frontend;
