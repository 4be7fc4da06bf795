//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Stable identifier of a target within one session (`0..num_targets`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u32);

/// Identifier of a fired projectile. Never reused within an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectileId(pub u32);

/// Linear RGB colour, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Colour from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Colour from hue/saturation/lightness. Hue wraps modulo 1,
    /// saturation and lightness are clamped to `[0, 1]`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(1.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::new(l, l, l);
        }

        let high = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let low = 2.0 * l - high;

        Self {
            r: hue_to_channel(low, high, h + 1.0 / 3.0),
            g: hue_to_channel(low, high, h),
            b: hue_to_channel(low, high, h - 1.0 / 3.0),
        }
    }

    /// Packed `0xRRGGBB` value (rounded per channel).
    pub fn to_hex(&self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

fn hue_to_channel(low: f32, high: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        low + (high - low) * 6.0 * t
    } else if t < 0.5 {
        high
    } else if t < 2.0 / 3.0 {
        low + (high - low) * 6.0 * (2.0 / 3.0 - t)
    } else {
        low
    }
}

/// A half-line in world space. `direction` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalising `direction`. A degenerate direction
    /// falls back to -Z (camera forward in a default view).
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(Vec3::NEG_Z),
        }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Camera pose along the flight path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vec3,
    pub look_at: Vec3,
    /// Eased progression time (`pow(t * speed, 1.2)`); never decreases.
    pub elapsed_time: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            elapsed_time: 0.0,
        }
    }
}

impl CameraState {
    /// Unit vector from the camera towards its look-at point.
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated frames since the session started.
    pub tick: u64,
    /// Session-relative time of the last frame, in milliseconds.
    pub session_ms: f64,
}

impl SimTime {
    /// Advance by one frame to `session_ms`. Time never runs backwards.
    pub fn advance_to(&mut self, session_ms: f64) {
        self.tick += 1;
        self.session_ms = self.session_ms.max(session_ms);
    }
}
