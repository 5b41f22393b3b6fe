mod app;
mod error;
mod names;
mod paths;
mod settings;

use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

use pselect::Terminal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{Config, LevelFilter, WriteLogger};

use app::{DemoApp, Flow};
use error::DemoError;
use settings::DemoSettings;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn init_logging() -> Result<(), DemoError> {
    paths::rotate_logs();
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("pselect-demo.log"));
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}

fn run() -> Result<(), DemoError> {
    init_logging()?;
    let settings = DemoSettings::load()?;
    log::info!("starting with {:?}", settings);

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let options = names::generate_options(settings.option_count, &mut rng);
    let mut app = DemoApp::new(options, settings.multiple);

    let mut terminal = Terminal::new()?;
    loop {
        terminal.draw(|buf| app.render(buf))?;
        for event in terminal.poll(POLL_INTERVAL)? {
            if app.handle(&event) == Flow::Quit {
                log::info!("quit requested");
                return Ok(());
            }
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
