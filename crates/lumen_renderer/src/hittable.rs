//! Hittable capability, HitRecord and the scene aggregate.

use crate::{Material, Sphere};
use lumen_math::{Interval, Point3, Ray, Vec3};

/// Record of a ray-surface intersection.
///
/// Produced fresh by each successful intersection test and borrowed from
/// the surface that was struck.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Unit surface normal, always facing against the incoming ray
    pub normal: Vec3,
    /// Material of the struck surface
    pub material: &'a Material,
    /// Ray parameter of the intersection
    pub t: f64,
    /// Whether the ray arrived from outside the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the geometric outward normal.
    ///
    /// `outward_normal` must be unit length. The stored normal is flipped
    /// when the ray hits the back face, so shading never re-checks orientation.
    pub fn with_face_normal(
        ray: &Ray,
        t: f64,
        p: Point3,
        outward_normal: Vec3,
        material: &'a Material,
    ) -> Self {
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p,
            normal,
            material,
            t,
            front_face,
        }
    }
}

/// Anything a ray can intersect.
pub trait Hittable: Send + Sync {
    /// Closest intersection with `t` strictly inside `ray_t`, if any.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

/// Closed set of concrete surfaces a scene can hold.
#[derive(Debug, Clone)]
pub enum Surface {
    Sphere(Sphere),
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl Hittable for Surface {
    #[inline]
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        match self {
            Surface::Sphere(sphere) => sphere.hit(ray, ray_t),
        }
    }
}

/// Insertion-ordered list of surfaces. The whole scene is one of these.
#[derive(Debug, Clone, Default)]
pub struct HittableList {
    objects: Vec<Surface>,
}

impl HittableList {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add a surface to the end of the list.
    pub fn add(&mut self, object: impl Into<Surface>) {
        self.objects.push(object.into());
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Surface] {
        &self.objects
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest: Option<HitRecord<'a>> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Lambertian};
    use std::sync::Arc;

    fn sphere(z: f64, radius: f64, albedo: Color) -> Sphere {
        Sphere::new(
            Vec3::new(0.0, 0.0, z),
            radius,
            Arc::new(Lambertian::new(albedo).into()),
        )
    }

    fn albedo_of(material: &Material) -> Color {
        match material {
            Material::Lambertian(lambertian) => lambertian.albedo(),
            _ => panic!("expected a lambertian material"),
        }
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(world.is_empty());
        assert!(world.hit(&ray, Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn test_closest_hit_independent_of_order() {
        let near = Color::new(1.0, 0.0, 0.0);
        let far = Color::new(0.0, 0.0, 1.0);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let ray_t = Interval::new(0.001, f64::INFINITY);

        // Overlapping spheres along the ray: near one is entered at t = 1.5,
        // far one at t = 2.0.
        let mut near_first = HittableList::new();
        near_first.add(sphere(-2.0, 0.5, near));
        near_first.add(sphere(-3.0, 1.0, far));

        let mut far_first = HittableList::new();
        far_first.add(sphere(-3.0, 1.0, far));
        far_first.add(sphere(-2.0, 0.5, near));

        for world in [&near_first, &far_first] {
            let rec = world.hit(&ray, ray_t).expect("ray should hit");
            assert!((rec.t - 1.5).abs() < 1e-5, "t was {}", rec.t);
            assert_eq!(albedo_of(rec.material), near);
        }
    }

    #[test]
    fn test_upper_bound_respected() {
        let mut world = HittableList::new();
        world.add(sphere(-5.0, 1.0, Color::ONE));
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(world.hit(&ray, Interval::new(0.001, 3.0)).is_none());
        assert!(world.hit(&ray, Interval::new(0.001, 5.0)).is_some());
    }

    #[test]
    fn test_face_normal_flips_for_back_face() {
        let material = Material::from(Lambertian::new(Color::ONE));
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let front = HitRecord::with_face_normal(&ray, 1.0, Vec3::ZERO, Vec3::Z, &material);
        assert!(front.front_face);
        assert_eq!(front.normal, Vec3::Z);

        let back = HitRecord::with_face_normal(&ray, 1.0, Vec3::ZERO, -Vec3::Z, &material);
        assert!(!back.front_face);
        assert_eq!(back.normal, Vec3::Z);
    }
}
