//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::ColorChoice;

/// Present a Markdown file as a slideshow in the terminal
#[derive(Parser, Debug)]
#[command(name = "termslide")]
#[command(version, about = "Markdown slideshows in the terminal", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Markdown document to present (slides separated by `---`)
    pub file: Option<PathBuf>,

    /// Config file path (also used by `config show` and `config init`)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Color depth (default: from config, then COLORTERM)
    #[arg(long)]
    pub color: Option<ColorChoice>,

    /// Hide status bar
    #[arg(long)]
    pub no_status: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
