//! The set of destructible targets distributed along the track.
//!
//! `TargetField` owns a hecs world holding one entity per living target.
//! Destroyed targets are despawned, so every query only ever sees live ones.

use std::collections::BTreeMap;

use glam::Vec3;
use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use astrocrush_core::components::{Destructible, HitBox, TargetInfo, Transform};
use astrocrush_core::constants::*;
use astrocrush_core::state::TargetView;
use astrocrush_core::types::{Ray, Rgb, TargetId};

use crate::geometry::{orientation_quat, ray_cube_distance};
use crate::track::{wrap_unit, PathTrack};

/// Result of a successful ray query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub target_id: TargetId,
    pub point: Vec3,
    pub color: Rgb,
    /// Distance from the ray origin to `point`.
    pub distance: f32,
    /// Whether hitting this target destroys and scores it.
    pub destructible: bool,
}

/// Spawn parameters for a single target.
#[derive(Debug, Clone, Copy)]
pub struct TargetSpec {
    pub position: Vec3,
    pub orientation: Vec3,
    pub color: Rgb,
    pub track_param: f32,
    pub destructible: bool,
}

#[derive(Default)]
pub struct TargetField {
    world: World,
    index: BTreeMap<TargetId, Entity>,
    next_id: u32,
}

impl TargetField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field with `count` targets spread evenly along `track`.
    ///
    /// Target `i` sits at `p = (i / count + rand * 0.1) mod 1`, jittered by
    /// `rand - 0.4` on x and z, with a random orientation in `[0, π)` per axis.
    /// The same seed always yields the same field.
    pub fn populate(&mut self, count: u32, track: &PathTrack, seed: u64) {
        self.clear();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        for i in 0..count {
            let p = wrap_unit(i as f32 / count as f32 + rng.gen::<f32>() * TARGET_PARAM_JITTER);
            let mut position = track.point_at(p);
            position.x += rng.gen::<f32>() - TARGET_JITTER_BIAS;
            position.z += rng.gen::<f32>() - TARGET_JITTER_BIAS;

            let orientation = Vec3::new(
                rng.gen::<f32>() * std::f32::consts::PI,
                rng.gen::<f32>() * std::f32::consts::PI,
                rng.gen::<f32>() * std::f32::consts::PI,
            );

            self.spawn(TargetSpec {
                position,
                orientation,
                color: Rgb::from_hsl(TARGET_HUE_OFFSET + p, 1.0, 0.5),
                track_param: p,
                destructible: true,
            });
        }
    }

    /// Add one target and return its id. Ids are assigned in spawn order.
    pub fn spawn(&mut self, spec: TargetSpec) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;

        let info = TargetInfo {
            id,
            color: spec.color,
            track_param: spec.track_param,
        };
        let transform = Transform {
            position: spec.position,
            orientation: spec.orientation,
        };
        let hit_box = HitBox {
            half_extent: TARGET_SIZE / 2.0,
        };

        let entity = if spec.destructible {
            self.world.spawn((info, transform, hit_box, Destructible))
        } else {
            self.world.spawn((info, transform, hit_box))
        };
        self.index.insert(id, entity);
        id
    }

    /// Closest living target along `ray`. Ties on distance go to the lowest id.
    pub fn raycast_nearest(&self, ray: &Ray) -> Option<Hit> {
        let mut best: Option<Hit> = None;

        let mut query = self
            .world
            .query::<(&TargetInfo, &Transform, &HitBox, Option<&Destructible>)>();
        for (_entity, (info, transform, hit_box, destructible)) in query.iter() {
            let rotation = orientation_quat(transform.orientation);
            let Some(distance) =
                ray_cube_distance(ray, transform.position, rotation, hit_box.half_extent)
            else {
                continue;
            };

            let closer = match &best {
                None => true,
                Some(current) => {
                    distance < current.distance
                        || (distance == current.distance && info.id < current.target_id)
                }
            };
            if closer {
                best = Some(Hit {
                    target_id: info.id,
                    point: ray.at(distance),
                    color: info.color,
                    distance,
                    destructible: destructible.is_some(),
                });
            }
        }

        best
    }

    /// Remove a target. Unknown or already destroyed ids are a no-op.
    pub fn destroy(&mut self, id: TargetId) -> Option<TargetView> {
        let entity = self.index.remove(&id)?;
        let view = self.view(entity).map(|mut view| {
            view.alive = false;
            view
        });
        let _ = self.world.despawn(entity);
        view
    }

    pub fn get(&self, id: TargetId) -> Option<TargetView> {
        self.index.get(&id).and_then(|&entity| self.view(entity))
    }

    pub fn is_alive(&self, id: TargetId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn alive_count(&self) -> usize {
        self.index.len()
    }

    /// Living targets ordered by id.
    pub fn targets(&self) -> Vec<TargetView> {
        self.index
            .values()
            .filter_map(|&entity| self.view(entity))
            .collect()
    }

    /// Remove every target and restart id assignment at 0.
    pub fn clear(&mut self) {
        self.world.clear();
        self.index.clear();
        self.next_id = 0;
    }

    fn view(&self, entity: Entity) -> Option<TargetView> {
        let info = self.world.get::<&TargetInfo>(entity).ok()?;
        let transform = self.world.get::<&Transform>(entity).ok()?;
        let hit_box = self.world.get::<&HitBox>(entity).ok()?;
        Some(TargetView {
            id: info.id,
            position: transform.position,
            orientation: transform.orientation,
            half_extent: hit_box.half_extent,
            color: info.color,
            alive: true,
        })
    }
}
