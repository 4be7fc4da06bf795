//! Flight-and-combat simulation for ASTROCRUSH.
//!
//! Flies the camera along a closed track, resolves laser shots against the
//! target field by raycast, animates bolts through their lifecycle and keeps
//! score against the session countdown. Produces a `FrameSnapshot` per frame.

pub mod aim;
pub mod engine;
pub mod geometry;
pub mod projectiles;
pub mod session;
pub mod systems;
pub mod targets;
pub mod track;

pub use astrocrush_core as core;
pub use engine::{CombatLoop, SimConfig};
