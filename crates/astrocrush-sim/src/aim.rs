//! Pointer-driven aiming.
//!
//! The crosshair lives on a plane one unit in front of the camera. Pointer
//! coordinates are scaled onto that plane by an aspect-dependent fudge factor
//! and the aim ray runs from the camera through the crosshair.

use glam::{Vec2, Vec3};

use astrocrush_core::constants::{AIM_FUDGE, AIM_PLANE_DISTANCE, DEFAULT_ASPECT};
use astrocrush_core::types::{CameraState, Ray};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimController {
    /// Last pointer position in normalised device coordinates (y up).
    pointer: Vec2,
    fudge: Vec2,
}

impl Default for AimController {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            fudge: fudge_for_aspect(DEFAULT_ASPECT),
        }
    }
}

impl AimController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the latest pointer position. Out-of-range values are kept as-is.
    pub fn update_from_pointer(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer = Vec2::new(x, y);
        }
    }

    /// Recompute the fudge factor for a new viewport. Returns `false` and
    /// keeps the previous factor if the size is degenerate.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> bool {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return false;
        }
        self.fudge = fudge_for_aspect(width / height);
        true
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn fudge(&self) -> Vec2 {
        self.fudge
    }

    /// Crosshair offset on the aim plane, in camera space.
    pub fn aim_offset(&self) -> Vec2 {
        self.pointer * self.fudge
    }

    /// Ray from the camera through the crosshair.
    pub fn current_aim_ray(&self, camera: &CameraState) -> Ray {
        let forward = camera.forward();
        let right = forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
        let up = right.cross(forward);

        let offset = self.aim_offset();
        let crosshair =
            camera.position + right * offset.x + up * offset.y + forward * AIM_PLANE_DISTANCE;
        Ray::new(camera.position, crosshair - camera.position)
    }
}

fn fudge_for_aspect(aspect: f32) -> Vec2 {
    Vec2::new(aspect * AIM_FUDGE, AIM_FUDGE)
}

/// Convert a pointer position in viewport pixels (origin top-left) to
/// normalised device coordinates with y up.
pub fn pointer_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}
