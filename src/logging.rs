//! Logger setup.
//!
//! The terminal belongs to the presentation, so log records only ever go to
//! a file. Without one no logger is installed and the `log` macros are no-ops.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::AppError;

/// Install a file logger when `file` is set.
///
/// `RUST_LOG` wins over `level`. Returns whether a logger was installed.
pub fn init_logging(file: Option<&Path>, level: &str) -> Result<bool, AppError> {
    let Some(path) = file else {
        return Ok(false);
    };

    let sink = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let installed = Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Pipe(Box::new(sink)))
        .format_timestamp_millis()
        .try_init()
        .is_ok();

    if installed {
        log::info!("termslide {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }
    Ok(installed)
}
