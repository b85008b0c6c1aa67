//! Lumen math - vectors, rays and intervals shared by the renderer.
//!
//! Everything is double precision: the ground sphere of the demo scene has
//! radius 1000, and at that scale f32 rounding puts scattered ray origins
//! inside the surface they just left.

// Re-export glam for convenience
pub use glam;
pub use glam::DVec3;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// 3-component vector used for directions, points and colors.
pub type Vec3 = DVec3;

/// RGB color in linear space. Structurally identical to a free vector.
pub type Color = Vec3;

/// Point in world space.
pub type Point3 = Vec3;

/// Returns true if every component of `v` is close to zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    const S: f64 = 1e-8;
    v.x.abs() < S && v.y.abs() < S && v.z.abs() < S
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(Vec3::new(1e-9, -1e-9, 0.0)));
        assert!(!near_zero(Vec3::new(0.0, 1e-3, 0.0)));
    }

    #[test]
    fn test_color_is_vec3() {
        let c: Color = Color::new(0.5, 0.25, 1.0);
        let p: Point3 = Point3::new(0.5, 0.25, 1.0);
        assert_eq!(c * 2.0, Vec3::new(1.0, 0.5, 2.0));
        assert_eq!(c, p);
    }
}
