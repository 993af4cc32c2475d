//! Algorithm visualizer use case: datasets, timed runs and comparisons

use crate::domain::{RandomSource, SearchAlgorithm, SortAlgorithm};
use crate::error::{Result, ToolbeltError};
use std::time::{Duration, Instant};
use tracing::debug;

/// Generated values fall in `0..VALUE_RANGE`
pub const VALUE_RANGE: usize = 1000;

/// One timed sorting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub algorithm: SortAlgorithm,
    pub elapsed: Duration,
    pub iterations: u64,
    pub sorted: Vec<i64>,
}

/// One timed searching run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub algorithm: SearchAlgorithm,
    pub elapsed: Duration,
    pub iterations: u64,
    pub index: Option<usize>,
}

/// Preview of a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSample {
    pub preview: Vec<i64>,
    /// Smallest and largest value, `None` for an empty dataset
    pub range: Option<(i64, i64)>,
    pub count: usize,
}

/// `size` random values in `0..VALUE_RANGE`, sorted ascending
pub fn generate_dataset<R: RandomSource>(size: usize, rng: &mut R) -> Result<Vec<i64>> {
    if size == 0 {
        return Err(ToolbeltError::InvalidInput(
            "dataset size must be a positive number".to_string(),
        ));
    }

    let mut data = (0..size)
        .map(|_| rng.below(VALUE_RANGE).map(|v| v as i64))
        .collect::<Result<Vec<_>>>()?;
    data.sort_unstable();

    debug!(size, "generated dataset");
    Ok(data)
}

/// Parse a comma-separated list of integers such as `5, -3,9`
pub fn parse_values(input: &str) -> Result<Vec<i64>> {
    let values = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|_| {
                ToolbeltError::InvalidInput(format!("'{}' is not a whole number", s))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        return Err(ToolbeltError::InvalidInput(
            "provide at least one value".to_string(),
        ));
    }
    Ok(values)
}

pub fn run_sort(algorithm: SortAlgorithm, data: &[i64]) -> Result<SortReport> {
    let start = Instant::now();
    let outcome = algorithm.run(data.to_vec())?;
    let elapsed = start.elapsed();

    debug!(
        algorithm = algorithm.slug(),
        len = data.len(),
        iterations = outcome.iterations,
        ?elapsed,
        "sort finished"
    );
    Ok(SortReport {
        algorithm,
        elapsed,
        iterations: outcome.iterations,
        sorted: outcome.sorted,
    })
}

/// Run a search. `data` must already be sorted ascending.
pub fn run_search(algorithm: SearchAlgorithm, data: &[i64], target: i64) -> SearchReport {
    let start = Instant::now();
    let outcome = algorithm.run(data, target);
    let elapsed = start.elapsed();

    debug!(
        algorithm = algorithm.slug(),
        len = data.len(),
        target,
        iterations = outcome.iterations,
        found = outcome.is_found(),
        "search finished"
    );
    SearchReport {
        algorithm,
        elapsed,
        iterations: outcome.iterations,
        index: outcome.index,
    }
}

/// Every sorting algorithm on its own copy of `data`, in declaration order.
/// An algorithm refusing the input fails its own row only.
pub fn compare_sorts(data: &[i64]) -> Vec<(SortAlgorithm, Result<SortReport>)> {
    SortAlgorithm::ALL
        .iter()
        .map(|algorithm| (*algorithm, run_sort(*algorithm, data)))
        .collect()
}

/// Every searching algorithm against the same sorted `data`
pub fn compare_searches(data: &[i64], target: i64) -> Vec<SearchReport> {
    SearchAlgorithm::ALL
        .iter()
        .map(|algorithm| run_search(*algorithm, data, target))
        .collect()
}

/// First `limit` values plus the value range and count
pub fn sample(data: &[i64], limit: usize) -> DatasetSample {
    let range = data
        .iter()
        .min()
        .zip(data.iter().max())
        .map(|(min, max)| (*min, *max));
    DatasetSample {
        preview: data.iter().take(limit).copied().collect(),
        range,
        count: data.len(),
    }
}
