//! Game data and simulation (world, player, enemies, combat, frame step).
//!
//! Re-exports:
//! - `grid`: Tile map loading and solidity queries
//! - `player`: Pose, bearings and movement with wall sliding
//! - `enemy`: Enemy roster and random placement
//! - `combat`: Hitscan shooting and proximity damage
//! - `input`: Per-frame control snapshot and touch zones
//! - `state`: `GameState` aggregate and its `tick`

pub mod grid;
pub mod player;
pub mod enemy;
pub mod combat;
pub mod input;
pub mod state;
