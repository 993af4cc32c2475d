//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod entropy;
pub mod git;
pub mod logging;
pub mod workspace;

pub use config::Config;
pub use entropy::OsRandom;
pub use git::GitCli;
pub use workspace::{Store, Workspace};
