//! Sorting and searching algorithms with operation counters

pub mod searching;
pub mod sorting;

pub use searching::SearchOutcome;
pub use sorting::SortOutcome;

use crate::error::{Result, ToolbeltError};
use std::fmt;
use std::str::FromStr;

/// The sorting algorithms toolbelt can run and compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Quick,
    Insertion,
    Selection,
    Merge,
    Heap,
    Counting,
    Radix,
    Bucket,
    Shell,
    Comb,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 11] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Quick,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Heap,
        SortAlgorithm::Counting,
        SortAlgorithm::Radix,
        SortAlgorithm::Bucket,
        SortAlgorithm::Shell,
        SortAlgorithm::Comb,
    ];

    /// Display name, e.g. "Quick Sort"
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Heap => "Heap Sort",
            SortAlgorithm::Counting => "Counting Sort",
            SortAlgorithm::Radix => "Radix Sort",
            SortAlgorithm::Bucket => "Bucket Sort",
            SortAlgorithm::Shell => "Shell Sort",
            SortAlgorithm::Comb => "Comb Sort",
        }
    }

    /// Short command-line name, e.g. "quick"
    pub fn slug(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Counting => "counting",
            SortAlgorithm::Radix => "radix",
            SortAlgorithm::Bucket => "bucket",
            SortAlgorithm::Shell => "shell",
            SortAlgorithm::Comb => "comb",
        }
    }

    /// Sort `data`, counting operations
    pub fn run(&self, data: Vec<i64>) -> Result<SortOutcome> {
        let outcome = match self {
            SortAlgorithm::Bubble => sorting::bubble_sort(data),
            SortAlgorithm::Quick => sorting::quick_sort(data),
            SortAlgorithm::Insertion => sorting::insertion_sort(data),
            SortAlgorithm::Selection => sorting::selection_sort(data),
            SortAlgorithm::Merge => sorting::merge_sort(data),
            SortAlgorithm::Heap => sorting::heap_sort(data),
            SortAlgorithm::Counting => return sorting::counting_sort(data),
            SortAlgorithm::Radix => sorting::radix_sort(data),
            SortAlgorithm::Bucket => sorting::bucket_sort(data),
            SortAlgorithm::Shell => sorting::shell_sort(data),
            SortAlgorithm::Comb => sorting::comb_sort(data),
        };
        Ok(outcome)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = ToolbeltError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named(s, &Self::ALL, |a| (a.slug(), a.name()), "sort")
    }
}

/// The searching algorithms toolbelt can run and compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    Jump,
    Interpolation,
    Exponential,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 5] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::Binary,
        SearchAlgorithm::Jump,
        SearchAlgorithm::Interpolation,
        SearchAlgorithm::Exponential,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear Search",
            SearchAlgorithm::Binary => "Binary Search",
            SearchAlgorithm::Jump => "Jump Search",
            SearchAlgorithm::Interpolation => "Interpolation Search",
            SearchAlgorithm::Exponential => "Exponential Search",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::Binary => "binary",
            SearchAlgorithm::Jump => "jump",
            SearchAlgorithm::Interpolation => "interpolation",
            SearchAlgorithm::Exponential => "exponential",
        }
    }

    /// Search sorted `data` for `target`, counting operations
    pub fn run(&self, data: &[i64], target: i64) -> SearchOutcome {
        match self {
            SearchAlgorithm::Linear => searching::linear_search(data, target),
            SearchAlgorithm::Binary => searching::binary_search(data, target),
            SearchAlgorithm::Jump => searching::jump_search(data, target),
            SearchAlgorithm::Interpolation => searching::interpolation_search(data, target),
            SearchAlgorithm::Exponential => searching::exponential_search(data, target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = ToolbeltError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named(s, &Self::ALL, |a| (a.slug(), a.name()), "search")
    }
}

/// Match a slug ("quick"), a display name ("Quick Sort") or a slug with the
/// kind suffix ("quick-sort", "quicksort"), ignoring case.
fn parse_named<T: Copy>(
    input: &str,
    all: &[T],
    names: impl Fn(&T) -> (&'static str, &'static str),
    kind: &str,
) -> Result<T> {
    let wanted: String = input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect();
    let wanted = wanted.strip_suffix(kind).unwrap_or(&wanted);

    all.iter()
        .find(|candidate| {
            let (slug, name) = names(*candidate);
            let compact_name: String = name
                .to_lowercase()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            slug == wanted || compact_name.strip_suffix(kind) == Some(wanted)
        })
        .copied()
        .ok_or_else(|| ToolbeltError::UnknownAlgorithm(input.to_string()))
}
