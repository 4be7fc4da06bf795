//! Small geometric helpers: spline evaluation, ray/box and point/segment tests.

use glam::{EulerRot, Quat, Vec3};

use astrocrush_core::types::Ray;

/// Uniform Catmull-Rom interpolation between `p1` and `p2` at `u ∈ [0, 1]`.
pub fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, u: f32) -> Vec3 {
    let u2 = u * u;
    let u3 = u2 * u;
    0.5 * ((2.0 * p1)
        + (p2 - p0) * u
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * u2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * u3)
}

/// Rotation for Euler angles applied in XYZ order.
pub fn orientation_quat(euler: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z)
}

/// Distance along `ray` to an oriented cube, or `None` if the ray misses.
///
/// Slab test in the cube's local frame. A ray starting inside the cube
/// hits it at distance 0.
pub fn ray_cube_distance(ray: &Ray, center: Vec3, rotation: Quat, half_extent: f32) -> Option<f32> {
    let inverse = rotation.inverse();
    let origin = inverse * (ray.origin - center);
    let dir = inverse * ray.direction;

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < 1e-8 {
            if o.abs() > half_extent {
                return None;
            }
            continue;
        }
        let t1 = (-half_extent - o) / d;
        let t2 = (half_extent - o) / d;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(t_near.max(0.0))
}

/// Shortest distance from `point` to the segment `a..b`.
pub fn distance_to_segment(point: Vec3, a: Vec3, b: Vec3) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catmull_rom_hits_control_points() {
        let p = [
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 2.0),
            Vec3::new(2.0, 3.0, 0.0),
        ];
        assert!(catmull_rom(p[0], p[1], p[2], p[3], 0.0).distance(p[1]) < 1e-6);
        assert!(catmull_rom(p[0], p[1], p[2], p[3], 1.0).distance(p[2]) < 1e-6);
    }

    #[test]
    fn ray_hits_axis_aligned_cube_front_face() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let t = ray_cube_distance(&ray, Vec3::ZERO, Quat::IDENTITY, 0.5).unwrap();
        assert!((t - 4.5).abs() < 1e-5);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(ray_cube_distance(&ray, Vec3::ZERO, Quat::IDENTITY, 0.5).is_none());
    }

    #[test]
    fn ray_parallel_outside_slab_misses() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 5.0), Vec3::NEG_Z);
        assert!(ray_cube_distance(&ray, Vec3::ZERO, Quat::IDENTITY, 0.5).is_none());
    }

    #[test]
    fn ray_from_inside_hits_at_zero() {
        let ray = Ray::new(Vec3::new(0.1, 0.0, 0.0), Vec3::Y);
        assert_eq!(
            ray_cube_distance(&ray, Vec3::ZERO, Quat::IDENTITY, 0.5),
            Some(0.0)
        );
    }

    #[test]
    fn rotated_cube_corner_is_reachable() {
        // Rotated 45° about Y, the cube's corner sticks out to ~0.707 along +X.
        let rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_4);
        let ray = Ray::new(Vec3::new(0.65, 5.0, 0.0), Vec3::NEG_Y);
        assert!(ray_cube_distance(&ray, Vec3::ZERO, rotation, 0.5).is_some());
        assert!(ray_cube_distance(&ray, Vec3::ZERO, Quat::IDENTITY, 0.5).is_none());
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = Vec3::ZERO;
        let b = Vec3::X;
        assert!((distance_to_segment(Vec3::new(0.5, 1.0, 0.0), a, b) - 1.0).abs() < 1e-6);
        assert!((distance_to_segment(Vec3::new(3.0, 0.0, 0.0), a, b) - 2.0).abs() < 1e-6);
    }
}
