mod chart;
mod config;
mod db;
mod export;
mod ledger;
mod logging;
mod models;
mod money;
mod palette;
mod run;
mod tracker;
mod ui;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::tracker::Tracker;
use crate::ui::app::App;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let paths = ProjectPaths::resolve()?;
    logging::init(&paths.log)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let config = Config::load(&paths.config);
    let db = db::Database::open(&paths.db)?;
    let tracker = Tracker::open(db, config.money_format(), config.default_theme());
    let mut app = App::new(tracker, config.export_dir(), config.export_width());

    match args.len() {
        1 => run::as_tui(&mut app),
        2.. => run::as_cli(&args, &mut app),
        _ => {
            eprintln!("Usage: money-control [command]");
            Ok(())
        }
    }
}

struct ProjectPaths {
    db: PathBuf,
    log: PathBuf,
    config: PathBuf,
}

impl ProjectPaths {
    fn resolve() -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("com", "money-control", "MoneyControl")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(Self {
            db: data_dir.join("money-control.db"),
            log: data_dir.join("money-control.log"),
            config: proj_dirs.config_dir().join(config::CONFIG_FILE),
        })
    }
}
