//! Lumen - render a field of random spheres with a CPU path tracer.
//!
//! The image goes to stdout as plain PPM unless `-o` names a file;
//! progress and timing go to stderr through the logger.

use std::io::{self, BufWriter};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use lumen_renderer::Camera;

mod cli;
mod scene;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse_or_exit();

    // Logs go to stderr so stdout stays a clean image stream
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let world = scene::random_spheres(&mut rand::thread_rng());
    let camera = Camera::new(&scene::camera_config(&args));

    info!("Starting render...");
    info!("Image size: {}x{}", camera.image_width(), camera.image_height());
    info!("Samples per pixel: {}", camera.samples_per_pixel());
    info!("Max ray depth: {}", camera.max_depth());

    let start = Instant::now();
    let image = camera.render(&world).context("Render failed")?;
    info!("Render completed in {} seconds", start.elapsed().as_secs());

    match &args.output {
        Some(path) => {
            image
                .save(path)
                .with_context(|| format!("Failed to save image to {}", path.display()))?;
            info!("Saved to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            image
                .write_ppm(&mut writer)
                .context("Failed to write image to stdout")?;
        }
    }

    Ok(())
}
