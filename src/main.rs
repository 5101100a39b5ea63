// What you SEE now:
// • A square window showing the desktop around the pointer, magnified.
// • Move the pointer: the magnified patch follows it (and stops at screen edges).
// • ESC, q or Q quits.

mod app;
mod capture;
mod clamp;
mod config;
mod cursor;
mod draw;
mod error;
mod input;
mod scale;
mod types;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use app::{FRAME_INTERVAL, Magnifier};
use capture::ScreenCapture;
use config::{DEFAULT_WINDOW_SIZE, DEFAULT_ZOOM_LEVEL, ViewportConfig};
use cursor::DeviceCursor;
use draw::Drawer;
use error::Error;

// ── CLI ──────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "screen-magnifier", version, about = "Real-time screen magnifier that follows the pointer")]
struct Cli {
    /// Zoom level.
    #[arg(short, long, value_name = "LEVEL", default_value_t = DEFAULT_ZOOM_LEVEL, allow_negative_numbers = true)]
    zoom: i32,

    /// Window size in pixels.
    #[arg(short, long, value_name = "SIZE", default_value_t = DEFAULT_WINDOW_SIZE, allow_negative_numbers = true)]
    size: i32,

    /// Quit the application without opening a window.
    #[arg(short, long)]
    quit: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

// ── Main ─────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Help/version go to stdout with exit 0; bad arguments exit 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    // -q wins over zoom/size values once the arguments parse at all.
    if cli.quit {
        return ExitCode::SUCCESS;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            // Still visible with logging filtered off.
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    info!("screen-magnifier v{}", env!("CARGO_PKG_VERSION"));

    /* --- 1. Settings: rejected here, before any window exists --- */
    let config = ViewportConfig::validate(cli.zoom, cli.size)?;

    /* --- 2. Screen + pointer: the display has to be there and readable --- */
    let screen = ScreenCapture::open()?;
    let geometry = screen.geometry();
    config.check_fits(&geometry)?;
    let cursor = DeviceCursor::new(geometry)?;

    /* --- 3. Window: the render target for magnified frames --- */
    let size = config.output_size() as usize;
    let drawer = Drawer::new(size)?;

    /* --- 4. Loop until ESC/q/Q --- */
    Magnifier::new(config, geometry, cursor, screen, drawer).run(FRAME_INTERVAL)
}
