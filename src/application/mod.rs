//! Application layer - Use cases and orchestration

pub mod benchmark;
pub mod calendar;
pub mod cheatsheets;
pub mod dir_size;
pub mod finance;
pub mod git_history;
pub mod init;
pub mod manage_config;
pub mod notes;
pub mod organize;
pub mod password;
pub mod text_diff;

pub use calendar::CalendarService;
pub use cheatsheets::CheatsheetService;
pub use finance::FinanceService;
pub use manage_config::ConfigService;
pub use notes::NotesService;
