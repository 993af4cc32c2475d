//! Command handlers shared by the subcommands and the interactive menu.
//! Each returns the text to print.

use crate::application::{
    benchmark, dir_size, git_history, organize, password, text_diff, CalendarService,
    CheatsheetService, FinanceService, NotesService,
};
use crate::cli::commands::{
    CalendarAction, CheatsAction, FinanceAction, GitAction, NotesAction, PasswordAction,
};
use crate::cli::output;
use crate::domain::calendar::{self, Event, DATE_FORMAT};
use crate::domain::diff::DiffMode;
use crate::domain::finance::{Transaction, TransactionKind};
use crate::domain::organizer::GroupBy;
use crate::domain::password::{Charsets, Recipe};
use crate::domain::{Operation, SearchAlgorithm, SortAlgorithm};
use crate::error::{Result, ToolbeltError};
use crate::infrastructure::{Config, OsRandom, Workspace};
use chrono::{Local, NaiveDate};
use std::path::Path;
use std::str::FromStr;

/// Print handler output without doubling a trailing newline
pub fn emit(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

fn is_all(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case("all")
}

fn invalid(message: String) -> ToolbeltError {
    ToolbeltError::InvalidInput(message)
}

/// Explicit values when given, otherwise `size` random values.
/// Search input must be sorted, so `sorted` forces ascending order.
pub fn dataset(size: usize, values: Option<&str>, sorted: bool) -> Result<Vec<i64>> {
    let mut data = match values {
        Some(values) => benchmark::parse_values(values)?,
        None => benchmark::generate_dataset(size, &mut OsRandom)?,
    };
    if sorted {
        data.sort_unstable();
    }
    Ok(data)
}

fn preview(values: &[i64], limit: usize) -> String {
    let mut shown = values
        .iter()
        .take(limit)
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if values.len() > limit {
        shown.push_str(", ...");
    }
    shown
}

pub fn sort(algorithm: &str, data: &[i64], config: &Config) -> Result<String> {
    let mut text = output::format_sample(&benchmark::sample(data, config.sample_size));
    text.push('\n');

    if is_all(algorithm) {
        text.push_str(&output::format_sort_table(&benchmark::compare_sorts(data)));
    } else {
        let algorithm = SortAlgorithm::from_str(algorithm)?;
        let report = benchmark::run_sort(algorithm, data)?;
        text.push_str(&output::format_sort_report(&report));
        text.push_str(&format!(
            "Sorted: {}\n",
            preview(&report.sorted, config.sample_size)
        ));
    }
    Ok(text)
}

/// `data` must already be sorted
pub fn search(algorithm: &str, data: &[i64], target: i64, config: &Config) -> Result<String> {
    let mut text = output::format_sample(&benchmark::sample(data, config.sample_size));
    text.push_str(&format!("Target: {}\n\n", target));

    if is_all(algorithm) {
        text.push_str(&output::format_search_table(&benchmark::compare_searches(
            data, target,
        )));
    } else {
        let algorithm = SearchAlgorithm::from_str(algorithm)?;
        let report = benchmark::run_search(algorithm, data, target);
        text.push_str(&output::format_search_report(&report, data.len()));
    }
    Ok(text)
}

pub fn calc(operation: &str, a: f64, b: f64) -> Result<String> {
    let operation = Operation::from_str(operation).map_err(invalid)?;
    let result = operation.apply(a, b)?;
    Ok(format!("{} {} {} = {}", a, operation.symbol(), b, result))
}

fn parse_day(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(date) => calendar::parse_date(date),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn notes(workspace: &Workspace, action: NotesAction) -> Result<String> {
    let service = NotesService::new(workspace.clone());
    match action {
        NotesAction::Add { title, content } => {
            let note = service.add(&title, &content)?;
            Ok(format!("Note '{}' added", note.title))
        }
        NotesAction::List => Ok(output::format_note_list(&service.list()?)),
        NotesAction::Show { number } => Ok(output::format_note(&service.show(number)?)),
        NotesAction::Delete { number } => {
            let note = service.delete(number)?;
            Ok(format!("Note '{}' deleted", note.title))
        }
    }
}

pub fn calendar(workspace: &Workspace, action: CalendarAction) -> Result<String> {
    let service = CalendarService::new(workspace.clone());
    match action {
        CalendarAction::Add {
            title,
            date,
            time,
            description,
        } => {
            let day = parse_day(date.as_deref())?;
            let event = Event::new(&title, &description, &time)?;
            let text = format!(
                "Event '{}' added on {} at {}",
                event.title,
                day.format(DATE_FORMAT),
                event.time
            );
            service.add(day, event)?;
            Ok(text)
        }
        CalendarAction::View { date } => {
            let day = parse_day(date.as_deref())?;
            let events = service.view(day)?;
            Ok(output::format_event_list(
                &day.format(DATE_FORMAT).to_string(),
                &events,
            ))
        }
        CalendarAction::List => Ok(output::format_day_list(&service.list()?)),
        CalendarAction::Delete { date, number } => {
            let day = calendar::parse_date(&date)?;
            let event = service.delete(day, number)?;
            Ok(format!(
                "Event '{}' deleted from {}",
                event.title,
                day.format(DATE_FORMAT)
            ))
        }
    }
}

pub fn cheats(workspace: &Workspace, action: CheatsAction) -> Result<String> {
    let service = CheatsheetService::new(workspace.clone());
    match action {
        CheatsAction::List => Ok(output::format_cheatsheet_collection(&service.list()?)),
        CheatsAction::Add { topic, content } => {
            let verb = if service.add(&topic, &content)? {
                "updated"
            } else {
                "added"
            };
            Ok(format!("Cheatsheet '{}' {}", topic.trim(), verb))
        }
        CheatsAction::Remove { topic } => {
            service.remove(&topic)?;
            Ok(format!("Cheatsheet '{}' removed", topic.trim()))
        }
        CheatsAction::Search { term } => {
            let hits = service.search(&term)?;
            if hits.is_empty() {
                return Ok(format!("No cheatsheets match '{}'", term));
            }
            Ok(output::format_cheatsheets(
                hits.iter().map(|(t, c)| (t.as_str(), c.as_str())),
            ))
        }
        CheatsAction::Import { file } => {
            let summary = service.import(&file)?;
            Ok(format!(
                "Imported {} new and {} updated cheatsheet(s) from {}",
                summary.added,
                summary.replaced,
                file.display()
            ))
        }
        CheatsAction::Export { file } => {
            let count = service.export(&file)?;
            Ok(format!(
                "Exported {} cheatsheet(s) to {}",
                count,
                file.display()
            ))
        }
    }
}

pub fn finance(workspace: &Workspace, config: &Config, action: FinanceAction) -> Result<String> {
    let service = FinanceService::new(workspace.clone());
    match action {
        FinanceAction::Add {
            kind,
            amount,
            description,
            date,
        } => {
            let kind = TransactionKind::from_str(&kind).map_err(invalid)?;
            let day = parse_day(date.as_deref())?;
            let transaction = Transaction::new(kind, amount, &description, day)?;
            let balance = service.add(transaction)?;
            Ok(format!(
                "{} of ${:.2} recorded. {}",
                kind,
                amount,
                output::format_balance(balance)
            ))
        }
        FinanceAction::List { start, limit } => {
            let limit = limit.unwrap_or(config.page_size);
            if limit == 0 {
                return Err(invalid("limit must be greater than zero".to_string()));
            }
            let page = service.list(start.saturating_sub(1), limit)?;
            Ok(output::format_transactions(&page))
        }
        FinanceAction::Balance => Ok(output::format_balance(service.balance()?)),
        FinanceAction::Summary => Ok(output::format_summary(&service.summary()?)),
    }
}

/// Recipe for a password action, filling unset sizes from the config
pub fn password_recipe(config: &Config, action: PasswordAction) -> Recipe {
    match action {
        PasswordAction::Standard {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_special,
        } => Recipe::Standard {
            length: length.unwrap_or(config.password_length),
            charsets: Charsets {
                uppercase: !no_uppercase,
                lowercase: !no_lowercase,
                digits: !no_digits,
                special: !no_special,
            },
        },
        PasswordAction::Xkcd { words } => Recipe::Xkcd {
            words: words.unwrap_or(config.xkcd_words),
        },
        PasswordAction::Pin { length } => Recipe::Pin { length },
        PasswordAction::Phrase { phrase } => Recipe::Phrase { phrase },
    }
}

pub fn password(config: &Config, action: PasswordAction) -> Result<String> {
    let recipe = password_recipe(config, action);
    let generated = password::generate(&recipe, &mut OsRandom)?;
    Ok(format!(
        "Password: {}\nStrength: {} - {}",
        generated.password,
        generated.strength,
        generated.strength.advice()
    ))
}

pub fn organize(dir: &Path, by: &str, dry_run: bool) -> Result<String> {
    let group_by = GroupBy::from_str(by).map_err(invalid)?;
    let moves = organize::plan(dir, group_by)?;
    if dry_run || moves.is_empty() {
        return Ok(output::format_organize_plan(&moves));
    }
    Ok(output::format_organize_report(&organize::apply(moves)?))
}

pub fn size(dir: &Path, depth: usize) -> Result<String> {
    Ok(output::format_size_tree(&dir_size::analyze(dir, depth)?))
}

pub fn diff(old: &Path, new: &Path, mode: &str) -> Result<String> {
    let mode = DiffMode::from_str(mode).map_err(invalid)?;
    let result = text_diff::compare_files(old, new, mode)?;
    Ok(output::format_diff(&result, mode))
}

pub fn git(dir: &Path, action: GitAction) -> Result<String> {
    match action {
        GitAction::Log {
            limit,
            branch,
            body,
        } => {
            let commits = git_history::log(dir, branch.as_deref(), limit)?;
            Ok(output::format_commits(&commits, body))
        }
        GitAction::Branches => Ok(output::format_branches(&git_history::branches(dir)?)),
    }
}
