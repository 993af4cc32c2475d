//! toolbelt - A grab-bag of everyday command-line tools
//!
//! Algorithm visualizer, calculator, notes, calendar, cheatsheets, finance
//! tracker, password generator, directory organizer and size analyzer, text
//! diff and git history, behind one binary with an interactive menu.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ToolbeltError;
