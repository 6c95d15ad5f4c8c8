/// wire3d Terminal Viewer - Interactive Wireframe Cube
///
/// Controls:
///   - Left drag: Rotate the view
///   - Mouse wheel: Zoom
///   - P: Toggle perspective/orthographic
///   - ESC/Q: Quit

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use wire3d_core::{Viewer, ViewerConfig, ZWrapPolicy};
use wire3d_terminal::TerminalApp;

#[derive(Parser, Debug)]
#[command(name = "wire3d", version, about = "Interactive 3D wireframe viewer for the terminal")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with orthographic projection
    #[arg(long)]
    orthographic: bool,

    /// Wrap the Z rotation angle into [0, 360) like X and Y
    #[arg(long)]
    wrap_z: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .filter_level(log::LevelFilter::Debug)
            .parse_default_env();
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if args.orthographic {
        config.perspective = false;
    }
    if args.wrap_z {
        config.z_wrap = ZWrapPolicy::Full;
    }

    let viewer = Viewer::new(&config).context("Invalid viewer configuration")?;

    let mut app = TerminalApp::new(viewer).context("Failed to query terminal size")?;
    app.run().context("Terminal viewer failed")?;

    Ok(())
}
