use clap::{ArgAction, Parser};

use sketchpad::backend::{self, StartupOptions};
use sketchpad::config::Config;
use sketchpad::draw::Color;
use sketchpad::input::{DrawingMode, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHPAD_GIT_HASH"), ")"),
    about = "Fullscreen drawing surface for Wayland compositors"
)]
struct Cli {
    /// Initial drawing mode (line, rectangle, or circle)
    #[arg(long, short = 'm', value_name = "MODE")]
    mode: Option<DrawingMode>,

    /// Initial stroke color (name or #rrggbb)
    #[arg(long, short = 'c', value_name = "COLOR", value_parser = parse_color)]
    color: Option<Color>,

    /// Initial stroke width in pixels (1-20)
    #[arg(
        long,
        short = 'w',
        value_name = "PX",
        value_parser = clap::value_parser!(u32).range(MIN_STROKE_WIDTH as i64..=MAX_STROKE_WIDTH as i64)
    )]
    width: Option<u32>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn parse_color(value: &str) -> Result<Color, String> {
    if let Some(color) = sketchpad::util::name_to_color(value) {
        return Ok(color);
    }
    Color::from_hex(value).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor with wlr-layer-shell (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    log::info!("Starting sketchpad...");
    log::info!("Controls:");
    log::info!("  - Draw: drag inside the canvas");
    log::info!("  - Shapes: 1 (line), 2 (rectangle), 3 (circle), Tab (next)");
    log::info!("  - Colors: R G B Y O P W K");
    log::info!("  - Width: + / - or scroll");
    log::info!("  - Clear canvas: X, Erase: E");
    log::info!("  - Help: F10, Exit: Escape");

    backend::run_wayland(StartupOptions {
        mode: cli.mode,
        color: cli.color,
        width: cli.width,
    })?;

    log::info!("Sketchpad closed.");
    Ok(())
}
