//! CLI layer - Command-line interface

pub mod commands;
pub mod handlers;
pub mod interactive;
pub mod output;

pub use commands::{Cli, Commands};
