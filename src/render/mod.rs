//! Raycasting and everything that turns game state into drawables.
//!
//! Re-exports:
//! - `casters`: Fixed-step ray marching
//! - `projector`: Wall slices, sprite rects and the per-frame `Frame`
//! - `hud`: Ammo/health text and the game-over banner
//! - `topdown`: 2D debug map view
//! - `framebuffer`: CPU rasterizer for headless capture

pub mod casters;
pub mod projector;
pub mod hud;
pub mod topdown;
pub mod framebuffer;
