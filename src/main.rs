#![allow(non_snake_case)]

mod app;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Width in logical pixels of the viewport the export targets.
const VIEWPORT_WIDTH: f64 = 390.0;
/// Height in logical pixels of the viewport the export targets.
const VIEWPORT_HEIGHT: f64 = 844.0;

/// Postsheet - attachment sheet preview
#[derive(Parser, Debug)]
#[command(name = "postsheet-desktop")]
#[command(about = "Preview the post-composer attachment sheet")]
struct Args {
    /// Window width in logical pixels (defaults to the export viewport)
    #[arg(long, default_value_t = VIEWPORT_WIDTH)]
    width: f64,

    /// Window height in logical pixels (defaults to the export viewport)
    #[arg(long, default_value_t = VIEWPORT_HEIGHT)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!(
        "Starting attachment sheet preview at {}x{}",
        args.width,
        args.height
    );

    // The export targets one fixed mobile viewport, so the window is not
    // resizable; --width/--height exist for eyeballing other canvases.
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Postsheet")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(false),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
