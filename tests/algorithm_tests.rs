//! Integration tests for the algorithm visualizer commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::toolbelt_in;

#[test]
fn test_algorithms_lists_every_name() {
    let temp = TempDir::new().unwrap();

    toolbelt_in(temp.path())
        .arg("algorithms")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bubble Sort"))
        .stdout(predicate::str::contains("Comb Sort"))
        .stdout(predicate::str::contains("Exponential Search"));
}

#[test]
fn test_sort_explicit_values() {
    let temp = TempDir::new().unwrap();

    toolbelt_in(temp.path())
        .args(["sort", "merge", "--values", "5,-3,9,0,-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm: Merge Sort"))
        .stdout(predicate::str::contains("Data size: 5"))
        .stdout(predicate::str::contains("Sorted: -3, -3, 0, 5, 9"))
        .stdout(predicate::str::contains("Data range: -3 to 9"));
}

#[test]
fn test_sort_bubble_iterations() {
    let temp = TempDir::new().unwrap();

    toolbelt_in(temp.path())
        .args(["sort", "bubble", "--values", "4,3,2,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of iterations: 6"));
}

#[test]
fn test_sort_all_compares_every_algorithm() {
    let temp = TempDir::new().unwrap();

    toolbelt_in(temp.path())
        .args(["sort", "all", "--size", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total elements: 50"))
        .stdout(predicate::str::contains("Quick Sort"))
        .stdout(predicate::str::contains("Radix Sort"))
        .stdout(predicate::str::contains("Bucket Sort"));
}

#[test]
fn test_sample_size_from_config() {
    let temp = TempDir::new().unwrap();

    toolbelt_in(temp.path())
        .args(["config", "sample_size", "3"])
        .assert()
        .success();

    toolbelt_in(temp.path())
        .args(["sort", "heap", "--values", "9,8,7,6,5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9, 8, 7, ..."))
        .stdout(predicate::str::contains("Sorted: 5, 6, 7, ..."));
}

#[test]
fn test_search_found_and_missing() {
    let temp = TempDir::new().unwrap();

    toolbelt_in(temp.path())
        .args(["search", "binary", "--values", "9,1,5,7,3", "--target", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target found: Yes"))
        .stdout(predicate::str::contains("Index: 3"));

    toolbelt_in(temp.path())
        .args(["search", "jump", "--values", "1,3,5", "--target", "-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target found: No"));
}

#[test]
fn test_search_all_on_random_data() {
    let temp = TempDir::new().unwrap();

    toolbelt_in(temp.path())
        .args(["search", "all", "--size", "200", "--target", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linear Search"))
        .stdout(predicate::str::contains("Interpolation Search"));
}

#[test]
fn test_unknown_algorithm_suggests_list() {
    let temp = TempDir::new().unwrap();

    toolbelt_in(temp.path())
        .args(["sort", "bogo"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("toolbelt algorithms"));
}

#[test]
fn test_zero_size_rejected() {
    let temp = TempDir::new().unwrap();

    toolbelt_in(temp.path())
        .args(["sort", "quick", "--size", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn test_bad_values_rejected() {
    let temp = TempDir::new().unwrap();

    toolbelt_in(temp.path())
        .args(["sort", "quick", "--values", "1,two,3"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("'two' is not a whole number"));
}

#[test]
fn test_sort_all_reports_refusals_per_row() {
    let temp = TempDir::new().unwrap();

    toolbelt_in(temp.path())
        .args(["sort", "all", "--values", "0,20000000,5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Counting Sort"))
        .stdout(predicate::str::contains("skipped: Invalid input: counting sort"))
        .stdout(predicate::str::contains("Merge Sort"))
        .stdout(predicate::str::contains("Comb Sort"));
}
