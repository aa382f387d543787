//! Entry point for the Faro CRM desktop app.

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

mod bridge;
mod components;
mod state;

const APP_CSS: &str = include_str!("style.css");

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "faro")]
#[command(about = "CRM for real-estate agent teams")]
struct Args {
    /// Data directory for account profiles (defaults to the platform dir)
    #[arg(short, long)]
    data_dir: Option<std::path::PathBuf>,

    /// Tracing filter, e.g. "faro_app=debug,faro_core=debug"
    #[arg(long, default_value = "faro_app=info,faro_core=info")]
    log: String,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log.clone())
        .init();

    if let Some(dir) = args.data_dir {
        bridge::set_data_dir(dir);
    }

    tracing::info!("Starting Faro CRM");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Faro CRM")
                        .with_inner_size(LogicalSize::new(1280.0, 860.0))
                        .with_resizable(true),
                )
                .with_custom_head(format!(r#"<style>{}</style>"#, APP_CSS)),
        )
        .launch(components::app::App);
}
