//! Domain layer - Algorithms, generators and record types

pub mod algorithms;
pub mod calculator;
pub mod calendar;
pub mod cheatsheet;
pub mod diff;
pub mod finance;
pub mod git_log;
pub mod note;
pub mod organizer;
pub mod password;
pub mod random;

pub use algorithms::{SearchAlgorithm, SortAlgorithm};
pub use calculator::Operation;
pub use random::RandomSource;
