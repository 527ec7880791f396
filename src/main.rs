// Entry point for the terminal Minesweeper
// Parses the difficulty, sets up logging and configuration, and launches the UI

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

use tmines::tms_color::{ColorDepth, Theme};
use tmines::tms_config::{self, config_path, data_dir, load_or_create_config};
use tmines::tms_game::{Difficulty, Game};
use tmines::tms_log;
use tmines::tms_ui::{self, View};

/// Minesweeper for the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Difficulty: 0|easy (8x8), 1|medium (15x15), 2|hard (22x22), 3|extreme (40x40)
    difficulty: Difficulty,

    /// Use ASCII glyphs instead of Unicode symbols
    #[arg(long)]
    ascii: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let cfg_path = args.config.clone().or_else(config_path);
    // The log level lives in the config file, which is read again once logging is up
    let level = cfg_path
        .as_deref()
        .and_then(|p| tms_config::read_config(p).ok())
        .map(|c| c.log_level)
        .unwrap_or_else(|| "info".to_string());
    let log_file = tms_log::init(data_dir().as_deref(), &level);

    let mut cfg = load_or_create_config(cfg_path.as_deref());
    if args.ascii {
        cfg.ascii_icons = true;
    }
    info!(difficulty = %args.difficulty, log = ?log_file, "starting");

    // One random source per process; every new game draws from it
    let mut rng = StdRng::from_entropy();
    let mut game = Game::new(args.difficulty, &mut rng)?;

    let view = View {
        theme: Theme::new(cfg.ascii_icons, ColorDepth::detect()),
        show_help: cfg.show_help,
    };
    let result = tms_ui::run(&mut game, &mut rng, &view);
    info!("exiting");
    result
}
