//! The closed flight path the camera flies and targets are placed along.
//!
//! A closed uniform Catmull-Rom spline through the control points,
//! re-parameterised by arc length so that equal steps of the track
//! parameter cover equal distances.

use glam::Vec3;

use astrocrush_core::constants::{ARC_LENGTH_DIVISIONS, LOOK_AHEAD_FRACTION, TUBE_MARCH_STEP};
use astrocrush_core::types::Ray;

use crate::geometry::{catmull_rom, distance_to_segment};

/// Camera placement sampled from the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    pub position: Vec3,
    /// Point slightly further along the track, for orientation.
    pub look_at: Vec3,
}

/// Immutable closed spline.
#[derive(Debug, Clone)]
pub struct PathTrack {
    points: Vec<Vec3>,
    /// Cumulative chord length at `i / ARC_LENGTH_DIVISIONS` of the raw spline parameter.
    arc_lengths: Vec<f32>,
    /// Centre line sampled at equal arc-length steps (closed: last connects to first).
    centerline: Vec<Vec3>,
}

impl PathTrack {
    /// Build a track from at least three finite control points.
    pub fn new(points: Vec<Vec3>) -> Result<Self, String> {
        if points.len() < 3 {
            return Err(format!(
                "track needs at least 3 control points, got {}",
                points.len()
            ));
        }
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(format!("control point {i} is not finite"));
        }
        Ok(Self::build(points))
    }

    /// Regular polygon approximation of a circle in the XZ plane.
    /// Fewer than 3 segments are raised to 3.
    pub fn circle(radius: f32, segments: usize) -> Self {
        let segments = segments.max(3);
        let points = (0..segments)
            .map(|i| {
                let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
                Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
            })
            .collect();
        Self::build(points)
    }

    /// The built-in tunnel: a rolling figure loop about 20 units across.
    pub fn default_tunnel() -> Self {
        const SEGMENTS: usize = 16;
        let points = (0..SEGMENTS)
            .map(|i| {
                let a = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
                Vec3::new(
                    10.0 * a.cos(),
                    2.0 * (2.0 * a).sin(),
                    8.0 * a.sin() + 2.0 * (3.0 * a).sin(),
                )
            })
            .collect();
        Self::build(points)
    }

    fn build(points: Vec<Vec3>) -> Self {
        let mut track = Self {
            points,
            arc_lengths: Vec::with_capacity(ARC_LENGTH_DIVISIONS + 1),
            centerline: Vec::with_capacity(ARC_LENGTH_DIVISIONS),
        };

        let mut total = 0.0;
        let mut last = track.raw_point(0.0);
        track.arc_lengths.push(0.0);
        for i in 1..=ARC_LENGTH_DIVISIONS {
            let current = track.raw_point(i as f32 / ARC_LENGTH_DIVISIONS as f32);
            total += current.distance(last);
            track.arc_lengths.push(total);
            last = current;
        }

        track.centerline = (0..ARC_LENGTH_DIVISIONS)
            .map(|i| track.point_at(i as f32 / ARC_LENGTH_DIVISIONS as f32))
            .collect();
        track
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// Approximate length of one lap.
    pub fn length(&self) -> f32 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Position and look-ahead point at track parameter `p` (wrapped into `[0, 1)`).
    pub fn sample_normalized(&self, p: f32) -> TrackSample {
        let p = wrap_unit(p);
        TrackSample {
            position: self.point_at(p),
            look_at: self.point_at(p + LOOK_AHEAD_FRACTION),
        }
    }

    /// Point at arc-length parameter `p` (wrapped).
    pub fn point_at(&self, p: f32) -> Vec3 {
        self.raw_point(self.arc_to_raw(wrap_unit(p)))
    }

    /// Unit tangent at arc-length parameter `p` (wrapped).
    pub fn tangent_at(&self, p: f32) -> Vec3 {
        const DELTA: f32 = 1e-3;
        (self.point_at(p + DELTA) - self.point_at(p - DELTA))
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z)
    }

    /// Distance along `ray` at which it leaves a tube of `radius` around the
    /// track, searching up to `max_range`. `None` if the ray never starts
    /// inside the tube or stays inside for the whole range.
    pub fn tube_exit_distance(&self, ray: &Ray, radius: f32, max_range: f32) -> Option<f32> {
        let mut was_inside = false;
        let mut t = 0.0;
        while t <= max_range {
            let inside = self.distance_to_centerline(ray.at(t)) <= radius;
            if inside {
                was_inside = true;
            } else if was_inside {
                return Some(t);
            } else {
                return None;
            }
            t += TUBE_MARCH_STEP;
        }
        None
    }

    /// Shortest distance from `point` to the sampled centre line.
    pub fn distance_to_centerline(&self, point: Vec3) -> f32 {
        let n = self.centerline.len();
        (0..n)
            .map(|i| distance_to_segment(point, self.centerline[i], self.centerline[(i + 1) % n]))
            .fold(f32::INFINITY, f32::min)
    }

    /// Spline point at raw (per-segment uniform) parameter `t ∈ [0, 1]`.
    fn raw_point(&self, t: f32) -> Vec3 {
        let n = self.points.len();
        let scaled = wrap_unit(t) * n as f32;
        let segment = (scaled.floor() as usize).min(n - 1);
        let u = scaled - segment as f32;

        let p0 = self.points[(segment + n - 1) % n];
        let p1 = self.points[segment];
        let p2 = self.points[(segment + 1) % n];
        let p3 = self.points[(segment + 2) % n];
        catmull_rom(p0, p1, p2, p3, u)
    }

    /// Map an arc-length fraction to the raw spline parameter.
    fn arc_to_raw(&self, u: f32) -> f32 {
        let total = self.length();
        if total <= 0.0 {
            return u;
        }
        let target = u * total;

        // Last index whose cumulative length does not exceed the target.
        let i = match self
            .arc_lengths
            .binary_search_by(|len| len.partial_cmp(&target).unwrap_or(std::cmp::Ordering::Less))
        {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let i = i.min(ARC_LENGTH_DIVISIONS - 1);

        let before = self.arc_lengths[i];
        let after = self.arc_lengths[i + 1];
        let span = after - before;
        let fraction = if span > 0.0 {
            ((target - before) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (i as f32 + fraction) / ARC_LENGTH_DIVISIONS as f32
    }
}

/// Wrap a track parameter into `[0, 1)`.
pub fn wrap_unit(p: f32) -> f32 {
    if !p.is_finite() {
        return 0.0;
    }
    let wrapped = p.rem_euclid(1.0);
    // rem_euclid can round tiny negative inputs up to exactly 1.0.
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
