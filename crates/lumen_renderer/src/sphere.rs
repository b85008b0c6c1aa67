//! Sphere primitive.

use std::sync::Arc;

use crate::hittable::{HitRecord, Hittable};
use crate::Material;
use lumen_math::{Interval, Point3, Ray};

/// A sphere with a shared material.
///
/// A negative radius is kept as given: the outward normal then points
/// inward, which is how hollow glass shells are modelled.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        // Half-discriminant form of |P(t) - C|^2 = r^2
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::with_face_normal(
            ray,
            root,
            p,
            outward_normal,
            &self.material,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Lambertian};
    use lumen_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const RAY_T: Interval = Interval::new(0.001, f64::INFINITY);

    fn grey_sphere(center: Point3, radius: f64) -> Sphere {
        Sphere::new(
            center,
            radius,
            Arc::new(Lambertian::new(Color::splat(0.5)).into()),
        )
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, RAY_T).expect("should hit");
        assert!((rec.t - 0.5).abs() < 0.001);
        assert!(rec.front_face);
        assert!((rec.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);

        let away = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.hit(&away, RAY_T).is_none());

        let sideways = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&sideways, RAY_T).is_none());
    }

    #[test]
    fn test_outside_and_receding_never_hits() {
        let mut rng = StdRng::seed_from_u64(99);
        let center = Vec3::new(1.0, -2.0, 3.0);
        let sphere = grey_sphere(center, 1.5);

        for _ in 0..500 {
            let dir = crate::random_unit_vector(&mut rng);
            // Origin 3 radii out along dir, moving further out.
            let origin = center + dir * 4.5;
            let ray = Ray::new_simple(origin, dir + 0.3 * crate::random_unit_vector(&mut rng));
            if ray.direction().dot(origin - center) <= 0.0 {
                continue;
            }
            assert!(sphere.hit(&ray, RAY_T).is_none());
        }
    }

    #[test]
    fn test_inside_hit_is_back_face() {
        let sphere = grey_sphere(Vec3::ZERO, 2.0);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));

        let rec = sphere.hit(&ray, RAY_T).expect("should hit from inside");
        assert!((rec.t - 2.0).abs() < 1e-5);
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_negative_radius_flips_orientation() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -2.0), -0.5);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, RAY_T).expect("should hit");
        assert!((rec.t - 1.5).abs() < 1e-5);
        // Outward normal points inward, so the ray sees a back face.
        assert!(!rec.front_face);
        assert!(rec.normal.dot(ray.direction()) <= 0.0);
    }

    #[test]
    fn test_normal_opposes_ray_and_is_unit() {
        let mut rng = StdRng::seed_from_u64(5);
        let spheres = [
            grey_sphere(Vec3::new(0.0, 0.0, -3.0), 1.0),
            grey_sphere(Vec3::new(0.0, 0.0, -3.0), -1.0),
        ];

        for sphere in &spheres {
            for _ in 0..500 {
                let origin = Vec3::new(0.0, 0.0, -3.0) + 2.0 * crate::random_in_unit_disk(&mut rng);
                let target = Vec3::new(0.0, 0.0, -3.0) + 0.9 * crate::random_unit_vector(&mut rng);
                let ray = Ray::new_simple(origin, target - origin);

                if let Some(rec) = sphere.hit(&ray, RAY_T) {
                    assert!(ray.direction().dot(rec.normal) <= 0.0);
                    assert!((rec.normal.length() - 1.0).abs() < 1e-4);
                }
            }
        }
    }

    #[test]
    fn test_interval_excludes_near_root() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -2.0), 0.5);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Near root 1.5 outside the interval, far root 2.5 inside.
        let rec = sphere.hit(&ray, Interval::new(2.0, 10.0)).expect("far root");
        assert!((rec.t - 2.5).abs() < 1e-5);
        assert!(!rec.front_face);

        assert!(sphere.hit(&ray, Interval::new(3.0, 10.0)).is_none());
    }
}
