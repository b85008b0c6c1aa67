//! Core path tracing integrator and the parallel render driver.
//!
//! Implements Monte Carlo path tracing with:
//! - Bounce loop with a fixed depth budget
//! - Box-filter anti-aliasing via multi-sampling
//! - Scanline bands rendered on a rayon pool, one band per worker

use std::num::NonZeroUsize;
use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;

use crate::band::{row_bands, row_seed, Band};
use crate::{Camera, Color, Hittable, ImageBuffer, Interval, Ray, RenderResult};

/// Closest distance a scattered ray may hit, so it does not re-hit the
/// surface it left because of rounding.
pub const SHADOW_ACNE_EPSILON: f64 = 0.001;

/// Compute the radiance carried back along a ray.
///
/// Follows the ray for at most `depth` bounces, multiplying in each
/// material's attenuation. Terminates with the sky color on a miss, or
/// black on absorption or when the bounce budget runs out. A depth of
/// zero returns black without touching the scene.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut ray = *ray;
    let mut attenuation = Color::ONE;

    for _ in 0..depth {
        let Some(rec) = world.hit(&ray, Interval::new(SHADOW_ACNE_EPSILON, f64::INFINITY)) else {
            return attenuation * sky_gradient(&ray);
        };

        match rec.material.scatter(&ray, &rec, rng) {
            Some(result) => {
                attenuation *= result.attenuation;
                ray = result.scattered;
            }
            None => return Color::ZERO,
        }
    }

    Color::ZERO
}

/// Background seen by rays that leave the scene: white at the bottom
/// blending to light blue at the top.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}

/// Average of `samples_per_pixel` radiance estimates for pixel (x, y).
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel() {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, camera.max_depth(), rng);
    }

    pixel_color * camera.samples_scale()
}

/// Render every scanline of a band into the band's own slice of pixels.
fn render_band(camera: &Camera, world: &dyn Hittable, band: &Band, seed: u64, pixels: &mut [Color]) {
    let width = camera.image_width() as usize;

    for (y, line) in band.rows().zip(pixels.chunks_mut(width)) {
        let mut rng = StdRng::seed_from_u64(row_seed(seed, y));
        for (x, pixel) in line.iter_mut().enumerate() {
            *pixel = render_pixel(camera, world, x as u32, y, &mut rng);
        }
    }
}

/// Worker count for a configured value; 0 asks the platform.
pub(crate) fn resolve_threads(num_threads: usize) -> usize {
    if num_threads > 0 {
        num_threads
    } else {
        std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    }
}

impl Camera {
    /// Render the scene with a freshly drawn seed.
    pub fn render(&self, world: &dyn Hittable) -> RenderResult<ImageBuffer> {
        let seed = rand::thread_rng().gen();
        self.render_seeded(world, seed)
    }

    /// Render the scene with every scanline's random stream derived from `seed`.
    ///
    /// Blocks until all bands are finished; there is no partial result.
    /// The output does not depend on the number of workers.
    pub fn render_seeded(&self, world: &dyn Hittable, seed: u64) -> RenderResult<ImageBuffer> {
        let width = self.image_width();
        let height = self.image_height();
        let workers = resolve_threads(self.config().num_threads);
        let bands = row_bands(height, workers);

        info!(
            "Rendering {}x{} @ {} spp, depth {}, {} band(s) on {} worker(s)",
            width,
            height,
            self.samples_per_pixel(),
            self.max_depth(),
            bands.len(),
            workers
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(bands.len())
            .build()?;

        let mut image = ImageBuffer::new(width, height);

        // Hand each band its own disjoint slice of the pixel buffer.
        let mut rest: &mut [Color] = &mut image.pixels;
        let mut jobs = Vec::with_capacity(bands.len());
        for band in &bands {
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(band.pixel_count(width));
            jobs.push((band, head));
            rest = tail;
        }

        let start = Instant::now();
        pool.install(|| {
            jobs.into_par_iter().for_each(|(band, pixels)| {
                render_band(self, world, band, seed, pixels);
                debug!(
                    "Band {} done (rows {}..{})",
                    band.index,
                    band.y,
                    band.y + band.height
                );
            });
        });
        debug!("All bands finished in {:.2?}", start.elapsed());

        Ok(image)
    }
}
