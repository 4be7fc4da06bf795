//! Snapshot system: gathers the visible state into a `FrameSnapshot`.
//!
//! This system is read-only; it never modifies simulation state.

use astrocrush_core::components::Projectile;
use astrocrush_core::events::{AudioEvent, ProjectileEvent};
use astrocrush_core::state::{FrameSnapshot, ProjectileView};
use astrocrush_core::types::{CameraState, SimTime};

use crate::aim::AimController;
use crate::projectiles::ProjectileSim;
use crate::session::Session;
use crate::targets::TargetField;

/// Build a complete FrameSnapshot from the current state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: &SimTime,
    session: &Session,
    camera: &CameraState,
    aim: &AimController,
    targets: &TargetField,
    projectiles: &ProjectileSim,
    audio_events: Vec<AudioEvent>,
    projectile_events: Vec<ProjectileEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        session: session.view(),
        camera: *camera,
        crosshair: aim.aim_offset(),
        targets: targets.targets(),
        projectiles: projectiles.projectiles().iter().map(build_projectile).collect(),
        audio_events,
        projectile_events,
    }
}

fn build_projectile(projectile: &Projectile) -> ProjectileView {
    ProjectileView {
        id: projectile.id,
        position: projectile.position,
        state: projectile.state,
        color: projectile.color,
        scale: projectile.scale,
        opacity: projectile.opacity,
        target: projectile.target,
    }
}
