//! Demonstration scene: a ground plane of small random spheres around three
//! large feature spheres.

use std::sync::Arc;

use log::info;
use lumen_math::{Color, Point3, Vec3};
use lumen_renderer::{CameraConfig, Dielectric, HittableList, Lambertian, Material, Metal, Sphere};
use rand::Rng;

use crate::cli::Args;

fn random_color(rng: &mut impl Rng, min: f64, max: f64) -> Color {
    Color::new(
        rng.gen_range(min..max),
        rng.gen_range(min..max),
        rng.gen_range(min..max),
    )
}

/// Build the random sphere field.
pub fn random_spheres(rng: &mut impl Rng) -> HittableList {
    let mut world = HittableList::new();

    let ground_material = Arc::new(Material::from(Lambertian::new(Color::splat(0.5))));
    world.add(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground_material,
    ));

    // Shared by every small glass sphere.
    let glass = Arc::new(Material::from(Dielectric::new(1.5)));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat: f64 = rng.gen();
            let center = Point3::new(
                a as f64 + 0.9 * rng.gen::<f64>(),
                0.2,
                b as f64 + 0.9 * rng.gen::<f64>(),
            );

            // Keep clear of the metal feature sphere
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                // diffuse
                let albedo = random_color(rng, 0.0, 1.0) * random_color(rng, 0.0, 1.0);
                Arc::new(Lambertian::new(albedo).into())
            } else if choose_mat < 0.95 {
                // metal
                let albedo = random_color(rng, 0.5, 1.0);
                let fuzz = rng.gen_range(0.0..0.5);
                Arc::new(Metal::new(albedo, fuzz).into())
            } else {
                Arc::clone(&glass)
            };

            world.add(Sphere::new(center, 0.2, material));
        }
    }

    world.add(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, glass));
    world.add(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1)).into()),
    ));
    world.add(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0).into()),
    ));

    info!("Created {} objects", world.len());
    world
}

/// Camera framing the sphere field, with quality settings from the command line.
pub fn camera_config(args: &Args) -> CameraConfig {
    CameraConfig::default()
        .with_image(args.width, 16.0 / 9.0)
        .with_quality(args.samples_per_pixel, args.max_depth)
        .with_threads(args.threads)
        .with_position(Point3::new(13.0, 2.0, 3.0), Point3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.6, 10.0)
}
