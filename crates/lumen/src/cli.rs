use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Path trace a field of random spheres")]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Image width in pixels
    #[arg(short = 'w', value_name = "WIDTH", default_value_t = 400)]
    pub width: u32,

    /// Samples per pixel
    #[arg(short = 's', value_name = "SAMPLES", default_value_t = 100)]
    pub samples_per_pixel: u32,

    /// Max ray depth
    #[arg(short = 'd', value_name = "DEPTH", default_value_t = 50)]
    pub max_depth: u32,

    /// Thread count (0 uses the system default)
    #[arg(short = 't', value_name = "THREADS", default_value_t = 0)]
    pub threads: usize,

    /// Save to this file instead of writing PPM to stdout (format from extension)
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parse the process arguments.
    ///
    /// `-h` prints usage and exits with 0. Any other problem (unknown flag,
    /// missing value, malformed number) prints to stderr and exits with 1.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(err) => {
                let code = match err.kind() {
                    ErrorKind::DisplayHelp => 0,
                    _ => 1,
                };
                // Nothing more useful to do if the terminal is gone.
                let _ = err.print();
                std::process::exit(code);
            }
        }
    }
}
