use clap::Parser;

use termslide::app::Presentation;
use termslide::cli::{handle_config_action, Args, Command};
use termslide::config::Config;
use termslide::error::AppError;
use termslide::logging::init_logging;
use termslide::terminal::restore_terminal;

/// Exit status after Ctrl+C, as shells report SIGINT.
const INTERRUPTED: i32 = 130;

fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        restore_terminal();
        std::process::exit(INTERRUPTED);
    })
}

fn run(args: Args) -> Result<(), AppError> {
    if let Some(Command::Config { action }) = args.command {
        return handle_config_action(action, args.config.as_deref());
    }

    let path = args.file.ok_or(AppError::MissingDocument)?;

    // Merge settings: CLI args > config file > built-in defaults
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(color) = args.color {
        config.render.color = color.into();
    }
    if args.no_status {
        config.ui.status_bar = false;
    }
    let log_file = args.log_file.or_else(|| config.log.file.clone());
    init_logging(log_file.as_deref(), &config.log.level)?;

    let depth = config.render.color.resolve();
    let mut presentation = Presentation::load(&path, &config, depth)?;

    if let Err(e) = setup_ctrlc_handler() {
        log::warn!("Could not set up Ctrl+C handler: {}", e);
    }

    presentation.run()
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        restore_terminal();
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
