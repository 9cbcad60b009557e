//! Test infrastructure for the prescan
//!
//! Provides fixture loading, seeded markup generation, and a harness that
//! runs fixtures as-is or behind generated markup.

#![allow(dead_code)]

mod loader;
mod harness;
mod generators;

pub use loader::{TestCase, load_fixtures_by_name, FIXTURE_FILES};
pub use harness::{run_test, run_with_prefix, TestResult};
pub use generators::Gen;
