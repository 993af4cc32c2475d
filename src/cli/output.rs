//! Output formatting utilities

use crate::application::benchmark::{DatasetSample, SearchReport, SortReport};
use crate::application::dir_size::{format_size, SizeNode};
use crate::application::finance::Page;
use crate::application::organize::{OrganizeReport, PlannedMove};
use crate::application::text_diff::FileDiff;
use crate::domain::calendar::Event;
use crate::domain::cheatsheet::Cheatsheets;
use crate::domain::diff::{ChunkKind, DiffMode};
use crate::domain::finance::{Summary, Transaction, TransactionKind};
use crate::domain::git_log::{Branch, Commit};
use crate::domain::note::Note;
use crate::domain::{SearchAlgorithm, SortAlgorithm};
use crate::error::Result;
use std::time::Duration;

/// Milliseconds with three decimals
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3} ms", elapsed.as_secs_f64() * 1000.0)
}

pub fn format_algorithm_list() -> String {
    let mut output = String::from("Sorting algorithms:\n");
    for algorithm in SortAlgorithm::ALL {
        output.push_str(&format!("  {:<12} {}\n", algorithm.slug(), algorithm.name()));
    }
    output.push_str("\nSearching algorithms:\n");
    for algorithm in SearchAlgorithm::ALL {
        output.push_str(&format!("  {:<12} {}\n", algorithm.slug(), algorithm.name()));
    }
    output
}

pub fn format_sample(sample: &DatasetSample) -> String {
    let mut preview = sample
        .preview
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if sample.count > sample.preview.len() {
        preview.push_str(", ...");
    }

    let mut output = format!("Sample of data:\n{}\n", preview);
    if let Some((min, max)) = sample.range {
        output.push_str(&format!("Data range: {} to {}\n", min, max));
    }
    output.push_str(&format!("Total elements: {}\n", sample.count));
    output
}

pub fn format_sort_report(report: &SortReport) -> String {
    format!(
        "Algorithm: {}\nData size: {}\nTime taken: {}\nNumber of iterations: {}\n",
        report.algorithm,
        report.sorted.len(),
        format_elapsed(report.elapsed),
        report.iterations
    )
}

pub fn format_search_report(report: &SearchReport, data_size: usize) -> String {
    format!(
        "Algorithm: {}\nData size: {}\nTime taken: {}\nNumber of iterations: {}\nTarget found: {}\nIndex: {}\n",
        report.algorithm,
        data_size,
        format_elapsed(report.elapsed),
        report.iterations,
        if report.index.is_some() { "Yes" } else { "No" },
        format_index(report.index)
    )
}

fn format_index(index: Option<usize>) -> String {
    index.map(|i| i.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn format_sort_table(rows: &[(SortAlgorithm, Result<SortReport>)]) -> String {
    let mut output = format!("{:<20}{:<16}{:>12}\n", "Algorithm", "Time", "Iterations");
    output.push_str(&format!("{}\n", "-".repeat(48)));
    for (algorithm, report) in rows {
        match report {
            Ok(report) => output.push_str(&format!(
                "{:<20}{:<16}{:>12}\n",
                algorithm.name(),
                format_elapsed(report.elapsed),
                report.iterations
            )),
            Err(e) => output.push_str(&format!("{:<20}skipped: {}\n", algorithm.name(), e)),
        }
    }
    output
}

pub fn format_search_table(reports: &[SearchReport]) -> String {
    let mut output = format!(
        "{:<22}{:<16}{:>12}{:>8}{:>8}\n",
        "Algorithm", "Time", "Iterations", "Found", "Index"
    );
    output.push_str(&format!("{}\n", "-".repeat(66)));
    for report in reports {
        output.push_str(&format!(
            "{:<22}{:<16}{:>12}{:>8}{:>8}\n",
            report.algorithm.name(),
            format_elapsed(report.elapsed),
            report.iterations,
            if report.index.is_some() { "Yes" } else { "No" },
            format_index(report.index)
        ));
    }
    output
}

pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for (i, note) in notes.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}  ({})\n",
            i + 1,
            note.title,
            note.created_at.format("%Y-%m-%d %H:%M")
        ));
    }
    output
}

pub fn format_note(note: &Note) -> String {
    format!(
        "Title: {}\nCreated: {}\n\n{}\n",
        note.title,
        note.created_at.to_rfc3339(),
        note.content
    )
}

pub fn format_event_list(date: &str, events: &[Event]) -> String {
    if events.is_empty() {
        return format!("No events on {}", date);
    }

    let mut output = format!("Events on {}:\n", date);
    for (i, event) in events.iter().enumerate() {
        output.push_str(&format!("{}. {} {}", i + 1, event.time, event.title));
        if !event.description.is_empty() {
            output.push_str(&format!(" - {}", event.description));
        }
        output.push('\n');
    }
    output
}

pub fn format_day_list(days: &[(String, usize)]) -> String {
    if days.is_empty() {
        return "No events found".to_string();
    }

    let mut output = String::new();
    for (day, count) in days {
        output.push_str(&format!(
            "{}  {} event{}\n",
            day,
            count,
            if *count == 1 { "" } else { "s" }
        ));
    }
    output
}

pub fn format_cheatsheets<'a>(sheets: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut output = String::new();
    for (topic, content) in sheets {
        output.push_str(&format!("== {} ==\n{}\n\n", topic, content));
    }
    if output.is_empty() {
        return "No cheatsheets found".to_string();
    }
    output
}

/// Collection wrapper for [`format_cheatsheets`]
pub fn format_cheatsheet_collection(sheets: &Cheatsheets) -> String {
    format_cheatsheets(sheets.topics())
}

fn format_transaction(number: usize, t: &Transaction) -> String {
    let sign = match t.kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    format!(
        "{}. {}: {}${:.2} - {} ({})",
        number, t.kind, sign, t.amount, t.description, t.date
    )
}

pub fn format_transactions(page: &Page) -> String {
    if page.transactions.is_empty() {
        return if page.total == 0 {
            "No transactions found".to_string()
        } else {
            format!("No transactions past #{}", page.total)
        };
    }

    let mut output = String::new();
    for (i, t) in page.transactions.iter().enumerate() {
        output.push_str(&format_transaction(page.start + i + 1, t));
        output.push('\n');
    }
    let last = page.start + page.transactions.len();
    output.push_str(&format!(
        "Showing {}-{} of {}\n",
        page.start + 1,
        last,
        page.total
    ));
    output
}

pub fn format_balance(balance: f64) -> String {
    format!("Balance: ${:.2}", balance)
}

pub fn format_summary(summary: &Summary) -> String {
    format!(
        "Transactions: {}\nIncome:   ${:.2}\nExpenses: ${:.2}\nBalance:  ${:.2}\n",
        summary.count, summary.income, summary.expenses, summary.balance
    )
}

pub fn format_size_tree(root: &SizeNode) -> String {
    let mut output = format!("Total Size: {}\n", format_size(root.size));
    if !root.children.is_empty() {
        output.push_str("\nDirectory breakdown:\n");
        push_size_children(&mut output, &root.children, 0);
    }
    output
}

fn push_size_children(output: &mut String, nodes: &[SizeNode], depth: usize) {
    for node in nodes {
        output.push_str(&format!(
            "{}{}/ ({})\n",
            "  ".repeat(depth),
            node.name,
            format_size(node.size)
        ));
        push_size_children(output, &node.children, depth + 1);
    }
}

pub fn format_organize_plan(moves: &[PlannedMove]) -> String {
    if moves.is_empty() {
        return "Nothing to organize".to_string();
    }

    let mut output = String::new();
    for planned in moves {
        output.push_str(&format!("{} -> {}/\n", planned.file_name, planned.folder));
    }
    output.push_str(&format!("{} file(s) would be moved\n", moves.len()));
    output
}

pub fn format_organize_report(report: &OrganizeReport) -> String {
    let mut output = String::new();
    for planned in &report.moved {
        output.push_str(&format!("Moved {} -> {}/\n", planned.file_name, planned.folder));
    }
    for (planned, reason) in &report.skipped {
        output.push_str(&format!("Skipped {}: {}\n", planned.file_name, reason));
    }
    output.push_str(&format!(
        "{} moved, {} skipped\n",
        report.moved.len(),
        report.skipped.len()
    ));
    output
}

pub fn format_diff(result: &FileDiff, mode: DiffMode) -> String {
    if result.stats.is_identical() {
        return "Files are identical".to_string();
    }

    let mut output = String::new();
    match mode {
        DiffMode::Lines => {
            for chunk in &result.chunks {
                let prefix = match chunk.kind {
                    ChunkKind::Equal => ' ',
                    ChunkKind::Added => '+',
                    ChunkKind::Removed => '-',
                };
                for line in chunk.text.lines() {
                    output.push_str(&format!("{} {}\n", prefix, line));
                }
            }
        }
        DiffMode::Words | DiffMode::Chars => {
            for chunk in &result.chunks {
                match chunk.kind {
                    ChunkKind::Equal => output.push_str(&chunk.text),
                    ChunkKind::Added => output.push_str(&format!("{{+{}+}}", chunk.text)),
                    ChunkKind::Removed => output.push_str(&format!("[-{}-]", chunk.text)),
                }
            }
            if !output.ends_with('\n') {
                output.push('\n');
            }
        }
    }

    output.push_str(&format!(
        "\n{} added, {} removed, {} unchanged\n",
        result.stats.added, result.stats.removed, result.stats.unchanged
    ));
    output
}

pub fn format_commits(commits: &[Commit], show_body: bool) -> String {
    if commits.is_empty() {
        return "No commits found".to_string();
    }

    let mut output = String::from("Commit History:\n\n");
    for (i, commit) in commits.iter().enumerate() {
        output.push_str(&format!("● {} - {}\n", commit.hash, commit.subject));
        output.push_str(&format!("  Author: {}\n", commit.author));
        output.push_str(&format!("  Date: {}\n", commit.date));
        if show_body && !commit.body.is_empty() {
            output.push_str(&format!("  Message: {}\n", commit.body));
        }
        if i + 1 < commits.len() {
            output.push_str("│\n");
        }
    }
    output
}

pub fn format_branches(branches: &[Branch]) -> String {
    if branches.is_empty() {
        return "No branches found".to_string();
    }

    let mut output = String::new();
    for branch in branches {
        let marker = if branch.current { "*" } else { " " };
        output.push_str(&format!("{} {}\n", marker, branch.name));
    }
    output
}
