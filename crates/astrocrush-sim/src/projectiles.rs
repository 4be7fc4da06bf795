//! Laser bolt lifecycle: travel, impact, explosion, expiry.
//!
//! Each bolt is a hecs entity carrying a `Projectile` component. The
//! per-bolt state machine lives in [`step`]; `ProjectileSim` applies it to
//! every bolt once per tick and reports the transitions it saw.

use glam::Vec3;
use hecs::{Entity, World};

use astrocrush_core::components::Projectile;
use astrocrush_core::constants::*;
use astrocrush_core::enums::{ImpactKind, ProjectileState};
use astrocrush_core::events::ProjectileEvent;
use astrocrush_core::types::{ProjectileId, Rgb, TargetId};

/// Where a bolt is going and what it looks like when it gets there.
/// Resolved once, at spawn time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub point: Vec3,
    pub color: Rgb,
    pub kind: ImpactKind,
    pub target: Option<TargetId>,
}

#[derive(Default)]
pub struct ProjectileSim {
    world: World,
    next_id: u32,
    sweep_buffer: Vec<Entity>,
}

impl ProjectileSim {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch a fresh bolt from `origin` towards `impact.point`.
    pub fn spawn(&mut self, origin: Vec3, impact: Impact) -> ProjectileId {
        let id = ProjectileId(self.next_id);
        self.next_id += 1;

        let step = (impact.point - origin)
            .try_normalize()
            .unwrap_or(Vec3::ZERO)
            * PROJECTILE_SPEED;

        self.world.spawn((Projectile {
            id,
            position: origin,
            step,
            state: ProjectileState::Traveling,
            impact_point: impact.point,
            impact_color: impact.color,
            color: Rgb::from_hex(LASER_COLOR_HEX),
            scale: 1.0,
            opacity: 1.0,
            impact_kind: impact.kind,
            target: impact.target,
        },));
        id
    }

    /// Advance every bolt by one tick. Events are ordered by projectile id,
    /// and within a projectile in lifecycle order.
    pub fn advance_all(&mut self) -> Vec<ProjectileEvent> {
        let mut events = Vec::new();
        for (_entity, projectile) in self.world.query_mut::<&mut Projectile>() {
            step(projectile, &mut events);
        }
        // Stable: keeps Impacted before Exploded for the same bolt.
        events.sort_by_key(ProjectileEvent::id);
        events
    }

    /// Despawn expired bolts and return their ids in ascending order.
    pub fn sweep_expired(&mut self) -> Vec<ProjectileId> {
        self.sweep_buffer.clear();
        let mut removed = Vec::new();

        for (entity, projectile) in self.world.query_mut::<&Projectile>() {
            if projectile.state == ProjectileState::Expired {
                self.sweep_buffer.push(entity);
                removed.push(projectile.id);
            }
        }
        for entity in self.sweep_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }

        removed.sort();
        removed
    }

    pub fn get(&self, id: ProjectileId) -> Option<Projectile> {
        let mut query = self.world.query::<&Projectile>();
        query
            .iter()
            .find(|(_, projectile)| projectile.id == id)
            .map(|(_, projectile)| *projectile)
    }

    /// All bolts not yet swept, ordered by id.
    pub fn projectiles(&self) -> Vec<Projectile> {
        let mut query = self.world.query::<&Projectile>();
        let mut all: Vec<Projectile> = query.iter().map(|(_, projectile)| *projectile).collect();
        all.sort_by_key(|projectile| projectile.id);
        all
    }

    /// Number of bolts not yet swept.
    pub fn active_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Drop every bolt. Ids keep increasing so none is ever reused.
    pub fn clear(&mut self) {
        self.world.clear();
    }
}

/// Apply one tick of the lifecycle to a single bolt.
pub fn step(projectile: &mut Projectile, events: &mut Vec<ProjectileEvent>) {
    match projectile.state {
        ProjectileState::Traveling => {
            let before = projectile.impact_point - projectile.position;
            projectile.position += projectile.step;
            let remaining = projectile.impact_point - projectile.position;

            // Close enough, or this step carried the bolt past the point.
            if remaining.length() < IMPACT_THRESHOLD || remaining.dot(before) <= 0.0 {
                projectile.position = projectile.impact_point;
                projectile.color = projectile.impact_color;
                projectile.state = ProjectileState::Impacted;
                events.push(ProjectileEvent::Impacted {
                    id: projectile.id,
                    point: projectile.impact_point,
                });
                begin_explosion(projectile, events);
            }
        }
        ProjectileState::Impacted => begin_explosion(projectile, events),
        ProjectileState::Exploding => {
            if projectile.opacity > OPACITY_EPSILON {
                projectile.opacity *= EXPLOSION_DECAY_FACTOR;
                projectile.scale += EXPLOSION_GROWTH_STEP;
            } else {
                projectile.opacity = 0.0;
                projectile.scale = MIN_SCALE;
                projectile.state = ProjectileState::Expired;
                events.push(ProjectileEvent::Expired { id: projectile.id });
            }
        }
        ProjectileState::Expired => {}
    }
}

fn begin_explosion(projectile: &mut Projectile, events: &mut Vec<ProjectileEvent>) {
    projectile.state = ProjectileState::Exploding;
    events.push(ProjectileEvent::Exploded { id: projectile.id });
}
