//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the simulation crate, not in components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{ImpactKind, ProjectileState};
use crate::types::{ProjectileId, Rgb, TargetId};

/// World placement of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub orientation: Vec3,
}

/// Oriented bounding cube used for ray tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitBox {
    /// Half the cube's edge length.
    pub half_extent: f32,
}

/// Identity and appearance of a target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetInfo {
    pub id: TargetId,
    pub color: Rgb,
    /// Track parameter the target was placed at (before jitter).
    pub track_param: f32,
}

/// Marks a target that is destroyed (and scored) when hit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Destructible;

/// Laser bolt state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub position: Vec3,
    /// Unit direction towards the impact point, scaled by per-tick speed.
    pub step: Vec3,
    pub state: ProjectileState,
    /// Resolved once at spawn time.
    pub impact_point: Vec3,
    /// Colour the bolt adopts on impact.
    pub impact_color: Rgb,
    /// Current display colour.
    pub color: Rgb,
    pub scale: f32,
    pub opacity: f32,
    pub impact_kind: ImpactKind,
    /// Target destroyed by this shot, if any.
    pub target: Option<TargetId>,
}
