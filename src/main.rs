#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("questboard")
    })
}

/// QuestBoard - bounty quest browser
#[derive(Parser, Debug)]
#[command(name = "questboard-desktop")]
#[command(about = "QuestBoard - browse bounty quests by category")]
struct Args {
    /// Data directory holding quest documents and an optional catalog.json
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("questboard")
    });

    // Store data directory globally
    let _ = DATA_DIR.set(data_dir.clone());

    tracing::info!("Starting quest board with data dir: {:?}", data_dir);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Quest Board")
            .with_inner_size(dioxus::desktop::LogicalSize::new(860.0, 940.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
