use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{Level, LevelFilter, Metadata, Record, error, info};
use raylib::prelude::*;

mod engine;
mod flake;
mod slide;
mod texture_loader;

use snowfall::constants::*;
use snowfall::{SlideshowConfig, SnowfallConfig};

use crate::engine::SnowfallEngine;
use crate::texture_loader::load_sorted_image_paths;

/// Preview the snowfall over a slideshow of the images in a directory.
#[derive(Parser, Debug)]
#[command(name = "snowfall", version, about)]
struct Args {
    /// Directory holding the slideshow images
    image_directory: PathBuf,

    /// Image used for the flakes, white circles when it cannot be loaded
    #[arg(long, default_value = SNOWFLAKE_IMAGE_URL)]
    flake_image: String,

    /// Number of flakes
    #[arg(long, default_value_t = TOTAL_SNOWFLAKES)]
    count: usize,

    /// Largest flake size, in percent of the window width
    #[arg(long, default_value_t = MAX_SNOWFLAKE_SIZE)]
    max_size: f64,

    /// Time each slide stays up, in milliseconds
    #[arg(long, default_value_t = SLIDE_INTERVAL_MS)]
    interval_ms: u64,

    /// Log debug messages
    #[arg(short, long)]
    verbose: bool,
}

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level = match record.level() {
                Level::Error => "error",
                Level::Warn => "warning",
                Level::Info => "info",
                Level::Debug => "debug",
                Level::Trace => "trace",
            };
            eprintln!("{}: {}", level, record.args());
        }
    }

    fn flush(&self) {}
}

fn run(args: Args) -> Result<()> {
    let image_paths = load_sorted_image_paths(&args.image_directory)
        .with_context(|| format!("error loading images from '{}'", args.image_directory.display()))?;

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Snowfall Slideshow")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let snow_config = SnowfallConfig {
        total: args.count,
        max_size: args.max_size,
        image_url: args.flake_image,
    };
    let slide_config = SlideshowConfig {
        interval: Duration::from_millis(args.interval_ms),
    };

    let mut engine = SnowfallEngine::new();
    engine.initialize(&mut rl, &thread, image_paths, snow_config, slide_config)?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let mut d = rl.begin_drawing(&thread);
        engine.render_frame(dt, &mut d);
    }

    info!("window closed after {} slide changes", engine.slides_shown());
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }

    if let Err(e) = run(args) {
        error!("{:#}", e);
        process::exit(1);
    }
}
