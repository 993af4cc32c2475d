//! Searching algorithms over sorted data

/// Result of running a searching algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Position of a matching element, if any
    pub index: Option<usize>,
    pub iterations: u64,
}

impl SearchOutcome {
    fn found(index: usize, iterations: u64) -> Self {
        Self {
            index: Some(index),
            iterations,
        }
    }

    fn missing(iterations: u64) -> Self {
        Self {
            index: None,
            iterations,
        }
    }

    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }
}

/// Scan left to right. Works on unsorted data too.
pub fn linear_search(data: &[i64], target: i64) -> SearchOutcome {
    let mut iterations = 0;
    for (i, &value) in data.iter().enumerate() {
        iterations += 1;
        if value == target {
            return SearchOutcome::found(i, iterations);
        }
    }
    SearchOutcome::missing(iterations)
}

/// Classic halving search. Counts probes.
pub fn binary_search(data: &[i64], target: i64) -> SearchOutcome {
    let mut iterations = 0;
    let (mut low, mut high) = (0usize, data.len());

    // Half-open window [low, high)
    while low < high {
        iterations += 1;
        let mid = low + (high - low) / 2;
        match data[mid].cmp(&target) {
            std::cmp::Ordering::Equal => return SearchOutcome::found(mid, iterations),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }

    SearchOutcome::missing(iterations)
}

/// Jump ahead in blocks of ⌊√n⌋, then scan the block that may hold the target.
pub fn jump_search(data: &[i64], target: i64) -> SearchOutcome {
    let n = data.len();
    if n == 0 {
        return SearchOutcome::missing(0);
    }

    let mut iterations = 0;
    let step = ((n as f64).sqrt() as usize).max(1);
    let mut prev = 0;
    let mut next = step.min(n);

    while data[next - 1] < target {
        iterations += 1;
        prev = next;
        if prev >= n {
            return SearchOutcome::missing(iterations);
        }
        next = (next + step).min(n);
    }

    while prev < next {
        iterations += 1;
        if data[prev] == target {
            return SearchOutcome::found(prev, iterations);
        }
        if data[prev] > target {
            break;
        }
        prev += 1;
    }

    SearchOutcome::missing(iterations)
}

/// Probe where the target would sit if values were evenly spread.
pub fn interpolation_search(data: &[i64], target: i64) -> SearchOutcome {
    let mut iterations = 0;
    if data.is_empty() {
        return SearchOutcome::missing(iterations);
    }

    let (mut low, mut high) = (0usize, data.len() - 1);

    while low <= high && target >= data[low] && target <= data[high] {
        iterations += 1;

        // Also covers low == high; avoids a zero denominator below.
        if data[low] == data[high] {
            return if data[low] == target {
                SearchOutcome::found(low, iterations)
            } else {
                SearchOutcome::missing(iterations)
            };
        }

        let numerator = (target as i128 - data[low] as i128) * (high - low) as i128;
        let denominator = data[high] as i128 - data[low] as i128;
        let pos = low + (numerator / denominator) as usize;

        match data[pos].cmp(&target) {
            std::cmp::Ordering::Equal => return SearchOutcome::found(pos, iterations),
            std::cmp::Ordering::Less => low = pos + 1,
            std::cmp::Ordering::Greater => match pos.checked_sub(1) {
                Some(p) => high = p,
                None => break,
            },
        }

        if low >= data.len() {
            break;
        }
    }

    SearchOutcome::missing(iterations)
}

/// Double a bound until it passes the target, then binary search the last
/// window `[i/2, min(i, n))`.
pub fn exponential_search(data: &[i64], target: i64) -> SearchOutcome {
    if data.is_empty() {
        return SearchOutcome::missing(0);
    }
    if data[0] == target {
        return SearchOutcome::found(0, 1);
    }

    let mut iterations = 0;
    let mut bound = 1;
    while bound < data.len() && data[bound] <= target {
        iterations += 1;
        bound *= 2;
    }

    let start = bound / 2;
    let window = binary_search(&data[start..bound.min(data.len())], target);

    SearchOutcome {
        index: window.index.map(|i| start + i),
        iterations: iterations + window.iterations,
    }
}
