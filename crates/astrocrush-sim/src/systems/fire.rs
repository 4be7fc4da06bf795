//! Fire resolution: raycast, score, spawn a bolt.

use astrocrush_core::constants::{LASER_COLOR_HEX, TUBE_COLOR_HEX, TUBE_RADIUS};
use astrocrush_core::enums::ImpactKind;
use astrocrush_core::events::AudioEvent;
use astrocrush_core::types::{ProjectileId, Ray, Rgb, TargetId};

use crate::projectiles::{Impact, ProjectileSim};
use crate::session::Session;
use crate::targets::TargetField;
use crate::track::PathTrack;

/// Where a shot that hits no target ends up.
#[derive(Debug, Clone, Copy)]
pub struct MissResolver<'a> {
    /// Distance along the aim ray of the default miss point.
    pub range: f32,
    /// When set, misses stop at the tunnel wall if it is closer than `range`.
    pub tunnel: Option<&'a PathTrack>,
}

impl MissResolver<'_> {
    pub fn resolve(&self, ray: &Ray) -> Impact {
        if let Some(track) = self.tunnel {
            if let Some(distance) = track.tube_exit_distance(ray, TUBE_RADIUS, self.range) {
                return Impact {
                    point: ray.at(distance),
                    color: Rgb::from_hex(TUBE_COLOR_HEX),
                    kind: ImpactKind::Wall,
                    target: None,
                };
            }
        }
        Impact {
            point: ray.at(self.range),
            color: Rgb::from_hex(LASER_COLOR_HEX),
            kind: ImpactKind::OpenSpace,
            target: None,
        }
    }
}

/// What one fire request did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotOutcome {
    pub projectile_id: ProjectileId,
    pub kind: ImpactKind,
    /// Target destroyed by the shot.
    pub destroyed: Option<TargetId>,
}

/// Resolve a single fire request against the current target set.
///
/// A hit on a destructible target destroys it and scores immediately, so a
/// later request in the same tick no longer sees it.
pub fn fire_one(
    ray: &Ray,
    targets: &mut TargetField,
    projectiles: &mut ProjectileSim,
    session: &mut Session,
    miss: &MissResolver<'_>,
    audio_events: &mut Vec<AudioEvent>,
) -> ShotOutcome {
    let (impact, destroyed) = match targets.raycast_nearest(ray) {
        Some(hit) if hit.destructible => {
            targets.destroy(hit.target_id);
            session.record_hit();
            tracing::debug!(target = hit.target_id.0, distance = hit.distance, "target destroyed");
            (
                Impact {
                    point: hit.point,
                    color: hit.color,
                    kind: ImpactKind::Target,
                    target: Some(hit.target_id),
                },
                Some(hit.target_id),
            )
        }
        Some(hit) => (
            Impact {
                point: hit.point,
                color: hit.color,
                kind: ImpactKind::Obstacle,
                target: None,
            },
            None,
        ),
        None => {
            let impact = miss.resolve(ray);
            tracing::debug!(kind = ?impact.kind, "shot missed");
            (impact, None)
        }
    };

    let projectile_id = projectiles.spawn(ray.origin, impact);
    audio_events.push(AudioEvent::LaserFired { projectile_id });

    ShotOutcome {
        projectile_id,
        kind: impact.kind,
        destroyed,
    }
}
