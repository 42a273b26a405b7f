//! Screen Flip
//!
//! Runs the two example screens against a headless host: a scripted sequence
//! of frames and Space presses, ending with Escape. Every primitive the
//! screens draw is logged instead of rendered.
//!
//! Run with: cargo run --example screens -- --presses 3 --log-level debug

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};
use screenflip::core::Key;
use screenflip::driver::Driver;
use screenflip::host::{self, Color, DrawCommand, HostEvent, LoopExit, RecordingCanvas, WindowConfig};
use screenflip::screens;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(about = "Flip between two example screens on a headless host")]
struct Args {
    /// TOML file with window settings (width, height, title)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the window width
    #[arg(long)]
    width: Option<u32>,

    /// Override the window height
    #[arg(long)]
    height: Option<u32>,

    /// Frames to run between key presses
    #[arg(long, default_value_t = 3)]
    frames: u32,

    /// Number of times to press Space before Escape
    #[arg(long, default_value_t = 2)]
    presses: u32,

    /// One of off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(args: &Args) -> anyhow::Result<WindowConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("couldn't read {}", path.display()))?;
            WindowConfig::from_toml_str(&source)?
        }
        None => WindowConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    config.validate()?;
    Ok(config)
}

fn script(args: &Args) -> Vec<HostEvent> {
    // 60 fps
    let frame = HostEvent::Frame(Duration::from_micros(16_667));
    let idle = |events: &mut Vec<HostEvent>| {
        events.extend(std::iter::repeat(frame).take(args.frames as usize));
    };

    let mut events = Vec::new();
    idle(&mut events);
    for _ in 0..args.presses {
        events.extend(HostEvent::tap(Key::Space));
        idle(&mut events);
    }
    events.extend(HostEvent::tap(Key::Escape));
    events.push(frame);
    events
}

fn describe(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level: LevelFilter = args
        .log_level
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown log level '{}'", args.log_level))?;

    pretty_env_logger::formatted_builder()
        .format_timestamp(None)
        .filter_level(level)
        .init();

    let config = load_config(&args)?;
    info!(
        "Opening \"{}\" ({}x{})",
        config.title, config.width, config.height
    );

    let registry = screens::registry()?;
    let mut driver = Driver::new(registry, screens::MAIN)?;
    let mut canvas = RecordingCanvas::new();

    let summary = host::run(&mut driver, &mut canvas, script(&args))?;

    for command in canvas.current_frame() {
        match command {
            DrawCommand::Background(color) => info!("Last background: {}", describe(*color)),
            DrawCommand::Text { text, x, y, .. } => {
                info!("Last text at ({x}, {y}): {:?}", text)
            }
            _ => {}
        }
    }

    info!(
        "Ran {} frame(s), {} transition(s), visited {:?}",
        summary.frames,
        summary.transitions,
        driver.history().get_path()
    );

    if summary.exit == LoopExit::Quit {
        info!("Quit requested by '{}'", driver.active_key());
    }

    Ok(())
}
