//! Frame snapshot: the complete visible state handed to the renderer each tick.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, ProjectileEvent};
use crate::types::{CameraState, ProjectileId, Rgb, SimTime, TargetId};

/// Complete frame state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub session: SessionView,
    pub camera: CameraState,
    /// Crosshair offset on the aim plane, in camera space.
    pub crosshair: Vec2,
    /// Living targets, ordered by id.
    pub targets: Vec<TargetView>,
    /// Projectiles still animating, ordered by id.
    pub projectiles: Vec<ProjectileView>,
    pub audio_events: Vec<AudioEvent>,
    pub projectile_events: Vec<ProjectileEvent>,
}

/// Score, clock and phase for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: SessionPhase,
    pub difficulty: Difficulty,
    pub score: u32,
    pub time_remaining_secs: u32,
}

/// A target as seen by the renderer and by queries on the target field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub id: TargetId,
    pub position: Vec3,
    /// Euler angles in radians (XYZ order).
    pub orientation: Vec3,
    /// Half edge length of the bounding cube.
    pub half_extent: f32,
    pub color: Rgb,
    pub alive: bool,
}

/// A laser bolt as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub position: Vec3,
    pub state: ProjectileState,
    pub color: Rgb,
    pub scale: f32,
    pub opacity: f32,
    /// Target this bolt destroyed; its model can be hidden once the bolt impacts.
    pub target: Option<TargetId>,
}
