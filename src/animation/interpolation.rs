//! Centralized interpolation utilities for animation.

use glam::{Quat, Vec3, Vec4};

/// Periodic triangle wave: rises 0 → 1 over the first half of `period`
/// and falls back to 0 over the second half.
///
/// `elapsed` may be any finite value; it is wrapped with a euclidean
/// remainder so negative times stay in phase. `period` must be positive.
#[inline]
#[must_use]
pub fn triangle_wave(elapsed: f64, period: f64) -> f64 {
    let t = elapsed.rem_euclid(period);
    (1.0 - (t / (period * 0.5) - 1.0).abs()).clamp(0.0, 1.0)
}

/// Lerp two positions.
#[inline]
#[must_use]
pub fn lerp_position(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    start + (end - start) * t
}

/// Component-wise quaternion lerp followed by normalization.
///
/// Not a slerp, and `end` is not flipped into the hemisphere of
/// `start`. When the blend collapses to zero length
/// (antipodal inputs at the midpoint) `start` is returned.
#[inline]
#[must_use]
pub fn nlerp_orientation(start: Quat, end: Quat, t: f32) -> Quat {
    let blended = Vec4::from(start).lerp(Vec4::from(end), t);
    blended
        .try_normalize()
        .map_or(start, Quat::from_vec4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_wave_shape() {
        assert_eq!(triangle_wave(0.0, 4.0), 0.0);
        assert!((triangle_wave(1.0, 4.0) - 0.5).abs() < 1e-12);
        assert!((triangle_wave(2.0, 4.0) - 1.0).abs() < 1e-12);
        assert!((triangle_wave(3.0, 4.0) - 0.5).abs() < 1e-12);
        assert!(triangle_wave(4.0, 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_wave_is_periodic() {
        for i in 0..20 {
            let t = f64::from(i) * 0.37;
            assert!((triangle_wave(t, 3.0) - triangle_wave(t + 9.0, 3.0)).abs() < 1e-9);
        }
        // Negative time wraps instead of going out of range.
        let v = triangle_wave(-1.0, 4.0);
        assert!((v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lerp_position() {
        let start = Vec3::ZERO;
        let end = Vec3::new(10.0, 20.0, 30.0);
        let result = lerp_position(start, end, 0.5);
        assert!((result - Vec3::new(5.0, 10.0, 15.0)).length() < 0.001);
    }

    #[test]
    fn test_nlerp_endpoints_and_unit_length() {
        let a = Quat::IDENTITY;
        let b = Quat::from_rotation_x(1.2);
        assert!(nlerp_orientation(a, b, 0.0).dot(a) > 1.0 - 1e-6);
        assert!(nlerp_orientation(a, b, 1.0).dot(b) > 1.0 - 1e-6);
        assert!(nlerp_orientation(a, b, 0.37).is_normalized());
    }

    #[test]
    fn test_nlerp_matches_component_blend() {
        let a = Quat::from_rotation_y(0.4);
        let b = Quat::from_rotation_z(-0.9);
        let mid = nlerp_orientation(a, b, 0.5);
        let raw = (Vec4::from(a) + Vec4::from(b)) * 0.5;
        let expected = raw.normalize();
        assert!((Vec4::from(mid) - expected).length() < 1e-6);
    }

    #[test]
    fn test_nlerp_antipodal_midpoint_keeps_start() {
        let a = Quat::from_rotation_x(0.5);
        let b = -a;
        assert_eq!(nlerp_orientation(a, b, 0.5), a);
    }
}
