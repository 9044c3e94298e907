//! flipmodal demo.
//!
//! Shows an animated modal, clicks its backdrop, hides it in response and
//! prints every frame as text. The modal always starts hidden, whatever
//! `visible` the config sets. Set `RUST_LOG=debug` to see transition logs.

#![forbid(unsafe_code)]

mod config;
mod script;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::script::RunSettings;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "flipmodal-demo")]
#[command(about = "Scripted show/hide of an animated modal, printed frame by frame")]
struct Args {
    /// Config file (.toml or .json)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Animation type: default, vertical, horizontal or flipAndScale
    #[arg(short, long)]
    animation: Option<String>,

    /// Card position: center, bottom or top
    #[arg(short, long)]
    position: Option<String>,

    /// Transition duration in milliseconds (0 means the default)
    #[arg(short, long, value_name = "MS")]
    duration: Option<u32>,

    /// Screen width in cells
    #[arg(long, default_value_t = 60)]
    width: u16,

    /// Screen height in cells
    #[arg(long, default_value_t = 20)]
    height: u16,

    /// Frames per second
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Skip the card transform and fade
    #[arg(long)]
    no_animation: bool,

    /// Sleep between frames and use wall-clock deltas
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    let mut options = config.modal.clone();
    if let Some(animation) = args.animation.as_deref() {
        options = options.animation_type(animation);
    }
    if let Some(position) = args.position.as_deref() {
        options = options.card_position(position);
    }
    if let Some(duration) = args.duration {
        options = options.duration_ms(duration);
    }
    if args.no_animation {
        options = options.no_animation(true);
    }
    config.modal = options;

    let settings = RunSettings {
        width: args.width,
        height: args.height,
        frame_interval: Duration::from_secs_f64(1.0 / f64::from(args.fps)),
        realtime: args.realtime,
    };
    tracing::debug!(?settings, "run settings");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    script::run(config.modal, &config.title, &config.body, settings, &mut out)?;
    out.flush()?;
    Ok(())
}
