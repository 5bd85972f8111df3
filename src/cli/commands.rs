//! Subcommand handlers for config actions.

use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use crate::config::{default_path, Config, DEFAULT_CONFIG};
use crate::error::AppError;

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) -> Result<(), AppError> {
    match action {
        ConfigAction::Show => {
            print!("{}", show_config(config_path)?);
        }
        ConfigAction::Init => {
            let path = init_config(config_path)?;
            println!("Created config file: {}", path.display());
        }
    }
    Ok(())
}

/// The effective configuration and where it came from.
pub fn show_config(config_path: Option<&Path>) -> Result<String, AppError> {
    let path = config_path.map(PathBuf::from).unwrap_or_else(default_path);
    let config = Config::load(Some(&path))?;

    let state = if path.exists() { "exists" } else { "not found" };
    let mut out = format!("Config file: {} ({})\n\n", path.display(), state);
    out.push_str(&config.to_toml()?);
    Ok(out)
}

/// Write the commented default config. Refuses to overwrite an existing file.
pub fn init_config(config_path: Option<&Path>) -> Result<PathBuf, AppError> {
    let path = config_path.map(PathBuf::from).unwrap_or_else(default_path);

    if path.exists() {
        return Err(AppError::ConfigExists(path));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| AppError::WriteConfig {
            path: path.clone(),
            source,
        })?;
    }

    std::fs::write(&path, DEFAULT_CONFIG).map_err(|source| AppError::WriteConfig {
        path: path.clone(),
        source,
    })?;

    log::info!("Created config file {}", path.display());
    Ok(path)
}
