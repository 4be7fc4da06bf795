//! Events emitted by the simulation for audio and visual feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{Difficulty, ImpactKind};
use crate::types::ProjectileId;

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Session started; background music should begin.
    MusicStart { difficulty: Difficulty },
    /// Session ended or was reset; background music should stop.
    MusicStop,
    /// A laser bolt was spawned.
    LaserFired { projectile_id: ProjectileId },
    /// A bolt reached its impact point and started exploding.
    Explosion {
        projectile_id: ProjectileId,
        kind: ImpactKind,
    },
}

/// Lifecycle transitions reported by the projectile simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectileEvent {
    /// Bolt snapped to its impact point.
    Impacted { id: ProjectileId, point: Vec3 },
    /// Bolt began its explosion animation.
    Exploded { id: ProjectileId },
    /// Explosion finished; the bolt is inactive.
    Expired { id: ProjectileId },
}

impl ProjectileEvent {
    pub fn id(&self) -> ProjectileId {
        match self {
            ProjectileEvent::Impacted { id, .. }
            | ProjectileEvent::Exploded { id }
            | ProjectileEvent::Expired { id } => *id,
        }
    }
}
