use std::fs::{self, File};

use log::{error, info};
use signup_tui::{SignupApp, Terminal, TuiError, app, paths};
use simplelog::{Config, LevelFilter, WriteLogger};

fn init_logging() -> Result<(), TuiError> {
    let dir = paths::cache_dir().ok_or(TuiError::NoCacheDir)?;
    fs::create_dir_all(&dir)?;
    paths::rotate_logs(&dir);

    let log_file = File::create(paths::latest_log(&dir))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    Ok(())
}

fn run() -> Result<(), TuiError> {
    let mut terminal = Terminal::new()?;
    let (width, height) = terminal.size();
    info!("terminal ready ({}x{})", width, height);

    let mut app = SignupApp::new();
    app::run(&mut terminal, &mut app)?;
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    info!("starting sign-up form");
    if let Err(e) = run() {
        error!("sign-up form exited with error: {}", e);
        eprintln!("Error: {}", e);
    }
}
