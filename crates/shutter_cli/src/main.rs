//! Shutter CLI
//!
//! Simulate gestures on a shutter button and check configurations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shutter_animation::FrameClock;
use shutter_core::{validate_geometry, ShutterButton, ShutterConfig};
use shutter_paint::Size;

mod config;
mod script;

use script::Script;

#[derive(Parser)]
#[command(name = "shutter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Camera shutter button simulator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a gesture script and print the resulting timeline
    Simulate {
        /// Configuration file (defaults to ./shutter.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Steps such as "press@0,release@650"
        #[arg(short, long)]
        script: String,

        /// Frame length in milliseconds
        #[arg(long, default_value = "16")]
        frame_ms: f32,

        /// Stop at this time; defaults to the last step plus one full
        /// expand and collapse
        #[arg(long)]
        until: Option<f32>,

        /// Pace frames with the wall clock
        #[arg(long)]
        realtime: bool,
    },

    /// Check a configuration against a canvas size
    Validate {
        /// Configuration file (defaults to ./shutter.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Canvas width in pixels
        #[arg(long)]
        width: f32,

        /// Canvas height in pixels
        #[arg(long)]
        height: f32,
    },

    /// Print the default configuration
    Defaults,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Simulate {
            config,
            script,
            frame_ms,
            until,
            realtime,
        } => cmd_simulate(config.as_deref(), &script, frame_ms, until, realtime),

        Commands::Validate {
            config,
            width,
            height,
        } => cmd_validate(config.as_deref(), width, height),

        Commands::Defaults => cmd_defaults(),
    }
}

/// Listener output collected between two prints
#[derive(Clone, Default)]
struct Timeline {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Timeline {
    fn install(button: &mut ShutterButton) -> Self {
        let timeline = Timeline::default();
        let listeners = button.listeners_mut();

        let lines = timeline.lines.clone();
        listeners.on_state_change(move |state| {
            lines.borrow_mut().push(format!("state {state:?}"));
        });
        let lines = timeline.lines.clone();
        listeners.on_hold(move |event| {
            lines.borrow_mut().push(format!("hold {event:?}"));
        });
        let lines = timeline.lines.clone();
        listeners.on_video(move |event| {
            lines.borrow_mut().push(format!("video {event:?}"));
        });
        let lines = timeline.lines.clone();
        listeners.on_photo(move || lines.borrow_mut().push("photo".to_string()));
        let lines = timeline.lines.clone();
        listeners.on_tap(move || lines.borrow_mut().push("tap".to_string()));
        let lines = timeline.lines.clone();
        let mut last_decile = 0;
        listeners.on_progress(move |progress| {
            // One line per 10% of recording
            let decile = (progress * 10.0).floor() as u32;
            if decile < last_decile {
                last_decile = 0;
            }
            if decile > last_decile {
                last_decile = decile;
                lines
                    .borrow_mut()
                    .push(format!("progress {:.0}%", progress * 100.0));
            }
        });

        timeline
    }

    fn push(&self, line: String) {
        self.lines.borrow_mut().push(line);
    }

    fn flush(&self, at_ms: f64) {
        for line in self.lines.borrow_mut().drain(..) {
            println!("{:>9.1} ms  {}", at_ms, line);
        }
    }
}

fn cmd_simulate(
    config: Option<&Path>,
    script: &str,
    frame_ms: f32,
    until: Option<f32>,
    realtime: bool,
) -> Result<()> {
    if !(frame_ms > 0.0 && frame_ms.is_finite()) {
        anyhow::bail!("Invalid frame length {}ms", frame_ms);
    }
    let config = config::load(config)?;
    let script: Script = script.parse().context("Invalid script")?;
    let timing = &config.timing;
    let end_ms = until.unwrap_or_else(|| {
        script.end_ms() + timing.expand_delay + timing.expand_duration + timing.collapse_duration
    });

    info!(
        "Simulating {} steps until {}ms (mode {}, collapse on {})",
        script.steps().len(),
        end_ms,
        config.mode,
        config.collapse_action
    );

    let mut button = ShutterButton::attached(config).context("Invalid configuration")?;
    let timeline = Timeline::install(&mut button);
    let mut clock = FrameClock::new();
    clock.tick();

    let mut steps = script.steps().iter().peekable();
    let mut now_ms = 0.0f32;
    loop {
        while let Some(step) = steps.next_if(|step| step.at_ms <= now_ms) {
            timeline.push(format!("> {}", step.action));
            if let Err(err) = step.action.apply(&mut button) {
                warn!("{} at {}ms: {}", step.action, step.at_ms, err);
            }
        }
        timeline.flush(button.clock_ms());
        if now_ms >= end_ms {
            break;
        }

        // Stop exactly at the next step so scripted input lands on time
        let stop_ms = steps.peek().map_or(end_ms, |step| step.at_ms.min(end_ms));
        let frame = if realtime {
            std::thread::sleep(Duration::from_secs_f32(frame_ms / 1000.0));
            clock.tick()
        } else {
            frame_ms
        };
        let elapsed = frame.min(stop_ms - now_ms);

        button.tick(elapsed)?;
        now_ms += elapsed;
    }

    info!("Finished in {:?}", button.state());
    Ok(())
}

fn cmd_validate(config: Option<&Path>, width: f32, height: f32) -> Result<()> {
    let config = config::load(config)?;
    let size = Size::new(width, height);

    validate_geometry(&config.geometry, size)
        .with_context(|| format!("Geometry does not fit a {}x{} canvas", width, height))?;

    info!(
        "Geometry fits a {}x{} canvas (largest allowed radius {}px)",
        width,
        height,
        size.inner_radius()
    );
    Ok(())
}

fn cmd_defaults() -> Result<()> {
    print!("{}", config::to_toml(&ShutterConfig::default())?);
    Ok(())
}
