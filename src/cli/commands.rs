//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "toolbelt")]
#[command(about = "A grab-bag of everyday command-line tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug details to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a toolbelt home with a default config
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Run a sorting algorithm, or `all` to compare every one
    Sort {
        /// Algorithm name (e.g. quick, "Merge Sort") or `all`
        algorithm: String,

        /// Size of the generated dataset
        #[arg(short, long, default_value_t = 100)]
        size: usize,

        /// Comma-separated values to use instead of random data
        #[arg(long, value_name = "CSV", allow_hyphen_values = true)]
        values: Option<String>,
    },

    /// Run a searching algorithm, or `all` to compare every one
    Search {
        /// Algorithm name (e.g. binary, "Jump Search") or `all`
        algorithm: String,

        /// Value to look for
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,

        /// Size of the generated dataset
        #[arg(short, long, default_value_t = 100)]
        size: usize,

        /// Comma-separated values to use instead of random data (sorted before searching)
        #[arg(long, value_name = "CSV", allow_hyphen_values = true)]
        values: Option<String>,
    },

    /// List the available sorting and searching algorithms
    Algorithms,

    /// Apply an arithmetic operation to two numbers
    #[command(allow_negative_numbers = true)]
    Calc {
        /// add, sub, mul, div (or + - * /)
        operation: String,

        a: f64,

        b: f64,
    },

    /// Simple note taking
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },

    /// Events by day
    Calendar {
        #[command(subcommand)]
        action: CalendarAction,
    },

    /// Personal cheatsheets
    Cheats {
        #[command(subcommand)]
        action: CheatsAction,
    },

    /// Income and expense tracking
    Finance {
        #[command(subcommand)]
        action: FinanceAction,
    },

    /// Generate passwords
    Password {
        #[command(subcommand)]
        action: PasswordAction,
    },

    /// Move loose files into folders by extension or type
    Organize {
        /// Directory to organize (default: current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Grouping: extension or type
        #[arg(short, long, default_value = "extension")]
        by: String,

        /// Show the planned moves without touching any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Total size of a directory with a per-folder breakdown
    Size {
        /// Directory to measure (default: current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// How many folder levels to break down
        #[arg(short, long, default_value_t = 1)]
        depth: usize,
    },

    /// Compare two text files
    Diff {
        old: PathBuf,

        new: PathBuf,

        /// Granularity: lines, words or chars
        #[arg(short, long, default_value = "lines")]
        mode: String,
    },

    /// Visualize the history of the current git repository
    Git {
        #[command(subcommand)]
        action: GitAction,
    },

    /// Interactive menu of every tool
    Menu,
}

#[derive(Subcommand, Debug)]
pub enum NotesAction {
    /// Add a note
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        content: String,
    },
    /// List notes with their numbers
    List,
    /// Show one note
    Show { number: usize },
    /// Delete one note
    Delete { number: usize },
}

#[derive(Subcommand, Debug)]
pub enum CalendarAction {
    /// Add an event
    Add {
        title: String,

        /// Day of the event, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time, HH:MM
        #[arg(short, long)]
        time: String,

        #[arg(long, default_value = "")]
        description: String,
    },
    /// Events of one day (default: today)
    View { date: Option<String> },
    /// Every day with events
    List,
    /// Delete the n-th event of a day
    Delete { date: String, number: usize },
}

#[derive(Subcommand, Debug)]
pub enum CheatsAction {
    /// Show every cheatsheet
    List,
    /// Add or replace a cheatsheet
    Add { topic: String, content: String },
    /// Remove a cheatsheet
    Remove { topic: String },
    /// Find cheatsheets whose topic or content matches
    Search { term: String },
    /// Merge topics from a Markdown file
    Import { file: PathBuf },
    /// Write every topic to a Markdown file
    Export { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum FinanceAction {
    /// Record a transaction
    Add {
        /// income or expense
        kind: String,

        amount: f64,

        description: String,

        /// YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show transactions a page at a time
    List {
        /// 1-based number of the first transaction to show
        #[arg(long, default_value_t = 1)]
        start: usize,

        /// Transactions per page (default: page_size from config)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Current balance
    Balance,
    /// Income, expense and balance totals
    Summary,
}

#[derive(Subcommand, Debug)]
pub enum PasswordAction {
    /// Random characters from the chosen sets
    Standard {
        /// Length (default: password_length from config)
        #[arg(short, long)]
        length: Option<usize>,

        #[arg(long)]
        no_uppercase: bool,

        #[arg(long)]
        no_lowercase: bool,

        #[arg(long)]
        no_digits: bool,

        #[arg(long)]
        no_special: bool,
    },
    /// Dictionary words joined by dashes
    Xkcd {
        /// Word count (default: xkcd_words from config)
        #[arg(short, long)]
        words: Option<usize>,
    },
    /// Digits only
    Pin {
        #[arg(short, long, default_value_t = 6)]
        length: usize,
    },
    /// Leetspeak version of a memorable phrase
    Phrase { phrase: String },
}

#[derive(Subcommand, Debug)]
pub enum GitAction {
    /// Recent commits as a timeline
    Log {
        /// Number of commits to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,

        /// Branch to show (default: current HEAD)
        #[arg(short, long)]
        branch: Option<String>,

        /// Include commit message bodies
        #[arg(long)]
        body: bool,
    },
    /// Local branches
    Branches,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_calc_operands() {
        let cli = Cli::try_parse_from(["toolbelt", "calc", "sub", "-3", "-4.5"]).unwrap();
        match cli.command {
            Some(Commands::Calc { a, b, .. }) => {
                assert_eq!(a, -3.0);
                assert_eq!(b, -4.5);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["toolbelt", "algorithms", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
