//! Interactive menu: pick a tool, then loop over its actions until "Back".
//! Prompts build the same actions the subcommands parse, so both surfaces
//! share one set of handlers.

use crate::cli::commands::{
    CalendarAction, CheatsAction, FinanceAction, GitAction, NotesAction, PasswordAction,
};
use crate::cli::handlers::{self, emit};
use crate::domain::{SearchAlgorithm, SortAlgorithm};
use crate::infrastructure::{Config, Workspace};
use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;
use std::str::FromStr;

const TOOLS: [&str; 12] = [
    "Algorithm visualizer",
    "Calculator",
    "Notes",
    "Calendar",
    "Cheatsheets",
    "Finance tracker",
    "Password generator",
    "Directory organizer",
    "Directory size",
    "Text diff",
    "Git history",
    "Exit",
];

/// Main interactive menu. Runs until the user chooses "Exit".
pub fn main_menu(workspace: &Workspace, config: &Config) -> Result<()> {
    loop {
        let selection = choose("Choose a tool", &TOOLS)?;
        match selection {
            0 => algorithms_menu(config)?,
            1 => calculator_menu()?,
            2 => notes_menu(workspace)?,
            3 => calendar_menu(workspace)?,
            4 => cheats_menu(workspace)?,
            5 => finance_menu(workspace, config)?,
            6 => password_menu(config)?,
            7 => organizer_menu()?,
            8 => size_menu()?,
            9 => diff_menu()?,
            10 => git_menu()?,
            _ => break,
        }
    }
    Ok(())
}

fn choose(prompt: &str, items: &[&str]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}

fn ask(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
}

fn ask_or(prompt: &str, default: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?)
}

fn ask_optional(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

fn ask_number<T>(prompt: &str, default: T) -> Result<T>
where
    T: Clone + ToString + FromStr,
    <T as FromStr>::Err: std::fmt::Debug + ToString,
{
    Ok(Input::<T>::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()?)
}

/// Print a handler result; tool errors are shown and the loop goes on
fn show(result: crate::error::Result<String>) {
    match result {
        Ok(text) => emit(&text),
        Err(e) => eprintln!("Error: {}", e.display_with_suggestions()),
    }
}

fn algorithms_menu(config: &Config) -> Result<()> {
    loop {
        match choose("Algorithm type", &["Sorting", "Searching", "Back"])? {
            0 => {
                let size = ask_number("Dataset size", 100usize)?;
                let mut names: Vec<&str> = SortAlgorithm::ALL.iter().map(|a| a.name()).collect();
                names.push("Compare all");
                let picked = choose("Sorting algorithm", &names)?;
                let algorithm = SortAlgorithm::ALL
                    .get(picked)
                    .map(|a| a.slug())
                    .unwrap_or("all");
                show(
                    handlers::dataset(size, None, false)
                        .and_then(|data| handlers::sort(algorithm, &data, config)),
                );
            }
            1 => {
                let size = ask_number("Dataset size", 100usize)?;
                let mut names: Vec<&str> =
                    SearchAlgorithm::ALL.iter().map(|a| a.name()).collect();
                names.push("Compare all");
                let picked = choose("Searching algorithm", &names)?;
                let algorithm = SearchAlgorithm::ALL
                    .get(picked)
                    .map(|a| a.slug())
                    .unwrap_or("all");
                let target = ask_number("Target value", 500i64)?;
                show(
                    handlers::dataset(size, None, true)
                        .and_then(|data| handlers::search(algorithm, &data, target, config)),
                );
            }
            _ => return Ok(()),
        }
    }
}

fn calculator_menu() -> Result<()> {
    loop {
        let operations = ["Addition", "Subtraction", "Multiplication", "Division", "Back"];
        let picked = choose("Operation", &operations)?;
        if picked == operations.len() - 1 {
            return Ok(());
        }
        let a = ask_number("First number", 0.0f64)?;
        let b = ask_number("Second number", 0.0f64)?;
        show(handlers::calc(operations[picked], a, b));
    }
}

fn notes_menu(workspace: &Workspace) -> Result<()> {
    loop {
        let action = match choose(
            "Notes",
            &["Add a note", "List notes", "View a note", "Delete a note", "Back"],
        )? {
            0 => NotesAction::Add {
                title: ask("Note title")?,
                content: ask_or("Note content", "")?,
            },
            1 => NotesAction::List,
            2 => NotesAction::Show {
                number: ask_number("Note number", 1usize)?,
            },
            3 => {
                let number = ask_number("Note number", 1usize)?;
                if !Confirm::new()
                    .with_prompt(format!("Delete note #{}?", number))
                    .default(false)
                    .interact()?
                {
                    continue;
                }
                NotesAction::Delete { number }
            }
            _ => return Ok(()),
        };
        show(handlers::notes(workspace, action));
    }
}

fn calendar_menu(workspace: &Workspace) -> Result<()> {
    loop {
        let action = match choose(
            "Calendar",
            &["Add event", "View events", "List days", "Delete event", "Back"],
        )? {
            0 => CalendarAction::Add {
                date: ask_optional("Date (YYYY-MM-DD, empty for today)")?,
                title: ask("Event title")?,
                description: ask_or("Description", "")?,
                time: ask("Time (HH:MM)")?,
            },
            1 => CalendarAction::View {
                date: ask_optional("Date (YYYY-MM-DD, empty for today)")?,
            },
            2 => CalendarAction::List,
            3 => CalendarAction::Delete {
                date: ask("Date (YYYY-MM-DD)")?,
                number: ask_number("Event number", 1usize)?,
            },
            _ => return Ok(()),
        };
        show(handlers::calendar(workspace, action));
    }
}

fn cheats_menu(workspace: &Workspace) -> Result<()> {
    loop {
        let action = match choose(
            "Cheatsheets",
            &[
                "View all cheatsheets",
                "Add a new cheatsheet",
                "Remove a cheatsheet",
                "Search cheatsheets",
                "Import from Markdown",
                "Export to Markdown",
                "Back",
            ],
        )? {
            0 => CheatsAction::List,
            1 => CheatsAction::Add {
                topic: ask("Topic")?,
                content: ask("Content")?,
            },
            2 => CheatsAction::Remove {
                topic: ask("Topic")?,
            },
            3 => CheatsAction::Search {
                term: ask("Search term")?,
            },
            4 => CheatsAction::Import {
                file: PathBuf::from(ask("Markdown file")?),
            },
            5 => CheatsAction::Export {
                file: PathBuf::from(ask_or("Markdown file", "cheatsheets.md")?),
            },
            _ => return Ok(()),
        };
        show(handlers::cheats(workspace, action));
    }
}

fn finance_menu(workspace: &Workspace, config: &Config) -> Result<()> {
    let mut start = 1usize;
    loop {
        let action = match choose(
            "Finance tracker",
            &[
                "Add income",
                "Add expense",
                "View transactions",
                "Next page",
                "View balance",
                "Summary",
                "Back",
            ],
        )? {
            picked @ (0 | 1) => FinanceAction::Add {
                kind: if picked == 0 { "income" } else { "expense" }.to_string(),
                amount: ask_number("Amount", 0.0f64)?,
                description: ask_or("Description", "")?,
                date: ask_optional("Date (YYYY-MM-DD, empty for today)")?,
            },
            2 => {
                start = 1;
                FinanceAction::List { start, limit: None }
            }
            3 => {
                start += config.page_size;
                FinanceAction::List { start, limit: None }
            }
            4 => FinanceAction::Balance,
            5 => FinanceAction::Summary,
            _ => return Ok(()),
        };
        show(handlers::finance(workspace, config, action));
    }
}

fn password_menu(config: &Config) -> Result<()> {
    loop {
        let action = match choose(
            "Password type",
            &["Standard", "XKCD style", "PIN", "Memorable phrase", "Back"],
        )? {
            0 => PasswordAction::Standard {
                length: Some(ask_number("Length", config.password_length)?),
                no_uppercase: !confirm("Include uppercase letters?")?,
                no_lowercase: !confirm("Include lowercase letters?")?,
                no_digits: !confirm("Include digits?")?,
                no_special: !confirm("Include special characters?")?,
            },
            1 => PasswordAction::Xkcd {
                words: Some(ask_number("Number of words", config.xkcd_words)?),
            },
            2 => PasswordAction::Pin {
                length: ask_number("PIN length", 6usize)?,
            },
            3 => PasswordAction::Phrase {
                phrase: ask("Phrase")?,
            },
            _ => return Ok(()),
        };
        show(handlers::password(config, action));
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(true).interact()?)
}

fn organizer_menu() -> Result<()> {
    let dir = PathBuf::from(ask_or("Directory to organize", ".")?);
    let by = ["extension", "type"][choose("Group files by", &["Extension", "Type"])?];

    let plan = handlers::organize(&dir, by, true);
    let has_moves = matches!(&plan, Ok(text) if !text.starts_with("Nothing"));
    show(plan);
    if has_moves && confirm("Move these files?")? {
        show(handlers::organize(&dir, by, false));
    }
    Ok(())
}

fn size_menu() -> Result<()> {
    let dir = PathBuf::from(ask_or("Directory", ".")?);
    let depth = ask_number("Breakdown depth", 1usize)?;
    show(handlers::size(&dir, depth));
    Ok(())
}

fn diff_menu() -> Result<()> {
    let old = PathBuf::from(ask("First file")?);
    let new = PathBuf::from(ask("Second file")?);
    let modes = ["lines", "words", "chars"];
    let mode = modes[choose("Compare by", &modes)?];
    show(handlers::diff(&old, &new, mode));
    Ok(())
}

fn git_menu() -> Result<()> {
    let dir = std::env::current_dir()?;
    loop {
        let action = match choose("Git history", &["Commit timeline", "Branches", "Back"])? {
            0 => GitAction::Log {
                limit: ask_number("Number of commits", 10usize)?,
                branch: ask_optional("Branch (empty for current)")?,
                body: confirm("Show commit message bodies?")?,
            },
            1 => GitAction::Branches,
            _ => return Ok(()),
        };
        show(handlers::git(&dir, action));
    }
}
