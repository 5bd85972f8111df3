//! termslide library crate.
//!
//! Presents a Markdown file as a slideshow in the terminal. The binary is a
//! thin wrapper; everything is exposed here for integration testing.

pub mod app;
pub mod ascii;
pub mod cli;
pub mod compositor;
pub mod config;
pub mod document;
pub mod error;
pub mod figlet;
pub mod input;
pub mod logging;
pub mod markdown;
pub mod navigator;
pub mod style;
pub mod terminal;
