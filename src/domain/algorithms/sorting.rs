//! Sorting algorithms that count the work they do
//!
//! Each algorithm consumes its input and returns the sorted values together
//! with an operation count. What counts as one operation differs per
//! algorithm and is noted on each function.

use crate::error::{Result, ToolbeltError};

/// Largest value span counting sort will allocate a tally for.
pub const MAX_COUNTING_RANGE: u64 = 1 << 24;

/// Result of running a sorting algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub sorted: Vec<i64>,
    pub iterations: u64,
}

impl SortOutcome {
    fn new(sorted: Vec<i64>, iterations: u64) -> Self {
        Self { sorted, iterations }
    }
}

/// Bubble sort. Counts adjacent comparisons.
pub fn bubble_sort(mut data: Vec<i64>) -> SortOutcome {
    let mut iterations = 0;
    let n = data.len();

    for i in 0..n {
        for j in 0..n - i - 1 {
            iterations += 1;
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }

    SortOutcome::new(data, iterations)
}

/// Quick sort with a last-element (Lomuto) pivot. Counts pivot comparisons.
pub fn quick_sort(mut data: Vec<i64>) -> SortOutcome {
    let mut iterations = 0;
    quick_sort_slice(&mut data, &mut iterations);
    SortOutcome::new(data, iterations)
}

// Recurses into the smaller partition and loops on the larger one, so stack
// depth stays logarithmic even on already-sorted input.
fn quick_sort_slice(mut data: &mut [i64], iterations: &mut u64) {
    while data.len() > 1 {
        let pivot = partition(data, iterations);
        let (left, right) = std::mem::take(&mut data).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort_slice(left, iterations);
            data = right;
        } else {
            quick_sort_slice(right, iterations);
            data = left;
        }
    }
}

fn partition(data: &mut [i64], iterations: &mut u64) -> usize {
    let high = data.len() - 1;
    let pivot = data[high];
    let mut store = 0;

    for j in 0..high {
        *iterations += 1;
        if data[j] < pivot {
            data.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, high);
    store
}

/// Insertion sort. Counts element shifts.
pub fn insertion_sort(mut data: Vec<i64>) -> SortOutcome {
    let mut iterations = 0;
    insertion_sort_slice(&mut data, &mut iterations);
    SortOutcome::new(data, iterations)
}

fn insertion_sort_slice(data: &mut [i64], iterations: &mut u64) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            *iterations += 1;
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

/// Selection sort. Counts comparisons made while scanning for the minimum.
pub fn selection_sort(mut data: Vec<i64>) -> SortOutcome {
    let mut iterations = 0;
    let n = data.len();

    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            iterations += 1;
            if data[j] < data[min] {
                min = j;
            }
        }
        if min != i {
            data.swap(i, min);
        }
    }

    SortOutcome::new(data, iterations)
}

/// Top-down merge sort. Counts comparisons made while merging.
pub fn merge_sort(data: Vec<i64>) -> SortOutcome {
    let mut iterations = 0;
    let sorted = merge_sort_vec(data, &mut iterations);
    SortOutcome::new(sorted, iterations)
}

fn merge_sort_vec(mut data: Vec<i64>, iterations: &mut u64) -> Vec<i64> {
    if data.len() <= 1 {
        return data;
    }

    let right = data.split_off(data.len() / 2);
    let left = merge_sort_vec(data, iterations);
    let right = merge_sort_vec(right, iterations);
    merge(&left, &right, iterations)
}

fn merge(left: &[i64], right: &[i64], iterations: &mut u64) -> Vec<i64> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);

    while l < left.len() && r < right.len() {
        *iterations += 1;
        if left[l] <= right[r] {
            result.push(left[l]);
            l += 1;
        } else {
            result.push(right[r]);
            r += 1;
        }
    }

    result.extend_from_slice(&left[l..]);
    result.extend_from_slice(&right[r..]);
    result
}

/// Heap sort on a max-heap. Counts swaps, including root extractions.
pub fn heap_sort(mut data: Vec<i64>) -> SortOutcome {
    let mut iterations = 0;
    let n = data.len();

    for i in (0..n / 2).rev() {
        sift_down(&mut data, n, i, &mut iterations);
    }

    for end in (1..n).rev() {
        iterations += 1;
        data.swap(0, end);
        sift_down(&mut data, end, 0, &mut iterations);
    }

    SortOutcome::new(data, iterations)
}

fn sift_down(data: &mut [i64], len: usize, mut root: usize, iterations: &mut u64) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && data[left] > data[largest] {
            largest = left;
        }
        if right < len && data[right] > data[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }

        *iterations += 1;
        data.swap(root, largest);
        root = largest;
    }
}

/// Counting sort. Counts every step of the tally, prefix-sum, placement and
/// copy-back passes.
///
/// Fails when the span between the smallest and largest value exceeds
/// [`MAX_COUNTING_RANGE`].
pub fn counting_sort(mut data: Vec<i64>) -> Result<SortOutcome> {
    let (Some(&min), Some(&max)) = (data.iter().min(), data.iter().max()) else {
        return Ok(SortOutcome::new(data, 0));
    };

    let span = (max as i128 - min as i128) as u64;
    if span >= MAX_COUNTING_RANGE {
        return Err(ToolbeltError::InvalidInput(format!(
            "counting sort supports a value range below {}, got {}",
            MAX_COUNTING_RANGE,
            span as u128 + 1
        )));
    }

    let mut iterations = 0;
    let offset = |value: i64| (value as i128 - min as i128) as usize;
    let mut count = vec![0usize; span as usize + 1];
    let mut output = vec![0i64; data.len()];

    for &value in &data {
        count[offset(value)] += 1;
        iterations += 1;
    }

    for i in 1..count.len() {
        count[i] += count[i - 1];
        iterations += 1;
    }

    for &value in data.iter().rev() {
        let slot = &mut count[offset(value)];
        *slot -= 1;
        output[*slot] = value;
        iterations += 1;
    }

    for (dst, src) in data.iter_mut().zip(output) {
        *dst = src;
        iterations += 1;
    }

    Ok(SortOutcome::new(data, iterations))
}

/// LSD radix sort in base 10. Negative values are handled by shifting every
/// value by the minimum first. Counts max-scan steps and one step per element
/// per digit pass.
pub fn radix_sort(data: Vec<i64>) -> SortOutcome {
    let Some(&min) = data.iter().min() else {
        return SortOutcome::new(data, 0);
    };

    let mut iterations = 0;
    let mut keys: Vec<u64> = data
        .iter()
        .map(|&v| (v as i128 - min as i128) as u64)
        .collect();

    let mut max = keys[0];
    for &key in &keys[1..] {
        if key > max {
            max = key;
        }
        iterations += 1;
    }

    let mut exp: u64 = 1;
    while max / exp > 0 {
        let mut buckets: [Vec<u64>; 10] = Default::default();
        for &key in &keys {
            buckets[((key / exp) % 10) as usize].push(key);
            iterations += 1;
        }
        keys = buckets.into_iter().flatten().collect();

        exp = match exp.checked_mul(10) {
            Some(next) => next,
            None => break,
        };
    }

    let sorted = keys
        .into_iter()
        .map(|key| (key as i128 + min as i128) as i64)
        .collect();

    SortOutcome::new(sorted, iterations)
}

/// Bucket sort over ⌈√n⌉ evenly spaced buckets, each finished with insertion
/// sort. Counts distributions and insertion shifts.
pub fn bucket_sort(data: Vec<i64>) -> SortOutcome {
    let (Some(&min), Some(&max)) = (data.iter().min(), data.iter().max()) else {
        return SortOutcome::new(data, 0);
    };

    let mut iterations = 0;
    let bucket_count = ((data.len() as f64).sqrt().ceil() as usize).max(1);
    let span = max as i128 - min as i128 + 1;
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); bucket_count];

    for &value in &data {
        let index = ((value as i128 - min as i128) * bucket_count as i128 / span) as usize;
        buckets[index.min(bucket_count - 1)].push(value);
        iterations += 1;
    }

    let mut sorted = Vec::with_capacity(data.len());
    for mut bucket in buckets {
        insertion_sort_slice(&mut bucket, &mut iterations);
        sorted.append(&mut bucket);
    }

    SortOutcome::new(sorted, iterations)
}

/// Shell sort with the halving gap sequence. Counts gapped comparisons.
pub fn shell_sort(mut data: Vec<i64>) -> SortOutcome {
    let mut iterations = 0;
    let n = data.len();
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            let temp = data[i];
            let mut j = i;
            while j >= gap {
                iterations += 1;
                if data[j - gap] <= temp {
                    break;
                }
                data[j] = data[j - gap];
                j -= gap;
            }
            data[j] = temp;
        }
        gap /= 2;
    }

    SortOutcome::new(data, iterations)
}

/// Comb sort with shrink factor 1.3. Counts comparisons.
pub fn comb_sort(mut data: Vec<i64>) -> SortOutcome {
    let mut iterations = 0;
    let n = data.len();
    let mut gap = n;
    let mut sorted = false;

    while !sorted {
        gap = gap * 10 / 13;
        if gap <= 1 {
            gap = 1;
            sorted = true;
        }

        let mut i = 0;
        while i + gap < n {
            iterations += 1;
            if data[i] > data[i + gap] {
                data.swap(i, i + gap);
                sorted = false;
            }
            i += 1;
        }
    }

    SortOutcome::new(data, iterations)
}
