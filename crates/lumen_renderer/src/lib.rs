//! Lumen renderer - CPU path tracing of sphere scenes.
//!
//! A Monte Carlo path tracer: many jittered camera rays per pixel are
//! bounced through the scene by per-surface materials and averaged.
//! Scanlines are split into contiguous bands, one per worker thread.

mod band;
mod camera;
mod error;
mod hittable;
mod material;
mod output;
mod renderer;
mod sampling;
mod sphere;

pub use band::{row_bands, row_seed, Band};
pub use camera::{Camera, CameraConfig};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList, Surface};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{color_to_rgb, linear_to_gamma, ImageBuffer};
pub use renderer::{ray_color, render_pixel, sky_gradient, SHADOW_ACNE_EPSILON};
pub use sampling::{gen_f64, gen_f64_range, random_in_unit_disk, random_unit_vector, sample_square};
pub use sphere::Sphere;

/// Re-export math types from lumen_math
pub use lumen_math::{Color, Interval, Point3, Ray, Vec3};
