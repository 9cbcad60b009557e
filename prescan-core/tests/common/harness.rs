//! Test harness for running fixtures plain or behind generated markup

use crate::common::{Gen, TestCase};
use prescan_core::{Prescanner, ScanResult};

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: Vec<u8>,
    pub actual: ScanResult,
    pub seed: u64,
    pub errors: Vec<String>,
}

/// Scan with a window covering the whole input.
fn scan_all(input: &[u8]) -> ScanResult {
    let prescanner = Prescanner::builtin().expect("built-in table");
    prescanner.with_limit(input.len()).scan(input).0
}

/// Compare a result to the case's expectations, shifted by `offset` bytes.
fn check(case: &TestCase, actual: &ScanResult, offset: usize) -> Vec<String> {
    let mut errors = Vec::new();

    if actual.name.as_deref() != case.expected_name() {
        errors.push(format!(
            "encoding: expected {:?}, got {:?}",
            case.expected_name(),
            actual.name
        ));
    }
    if actual.label.is_some() != actual.name.is_some() {
        errors.push(format!("label/name mismatch: {:?} / {:?}", actual.label, actual.name));
    }
    if let Some(label) = &case.label {
        if actual.label.as_ref() != Some(label) {
            errors.push(format!("label: expected {:?}, got {:?}", label, actual.label));
        }
    }
    if let Some(start) = case.start {
        if actual.start != start + offset {
            errors.push(format!("start: expected {}, got {}", start + offset, actual.start));
        }
    }
    if let Some(end) = case.end {
        if actual.end != end + offset {
            errors.push(format!("end: expected {}, got {}", end + offset, actual.end));
        }
    }
    if case.expected_name().is_none() && (actual.start, actual.end) != (0, 0) {
        errors.push(format!("unresolved span should be 0..0, got {:?}", actual.span()));
    }
    errors
}

/// Run a single test case (canonical, no variations)
pub fn run_test(case: &TestCase) -> TestResult {
    let input = case.data.as_bytes().to_vec();
    let actual = scan_all(&input);
    let errors = check(case, &actual, 0);

    TestResult {
        passed: errors.is_empty(),
        input,
        actual,
        seed: 0,
        errors,
    }
}

/// Run a test case behind randomly generated, complete non-meta markup.
///
/// Whatever precedes the case must not change what it resolves to; only
/// the span moves.
pub fn run_with_prefix(case: &TestCase, gen: &mut Gen) -> TestResult {
    let mut input = gen.markup();
    let offset = input.len();
    input.extend(case.data.as_bytes());

    let actual = scan_all(&input);
    let errors = check(case, &actual, offset);

    TestResult {
        passed: errors.is_empty(),
        input,
        actual,
        seed: gen.seed,
        errors,
    }
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!("Seed: {} (set PRESCAN_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("\nInput:");
        eprintln!("{}", String::from_utf8_lossy(&self.input));
        eprintln!("\nActual: {}", self.actual);
        eprintln!("\nErrors:");
        for e in &self.errors {
            eprintln!("  - {}", e);
        }
    }
}
