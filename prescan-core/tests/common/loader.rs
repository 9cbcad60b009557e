//! Fixture loading from YAML files

use serde::Deserialize;
use std::path::Path;

/// Every fixture file under `tests/fixtures`.
pub const FIXTURE_FILES: &[&str] = &["meta_charset", "meta_content", "markup"];

/// A single test case from a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub desc: String,
    /// Document prefix to scan.
    pub data: String,
    /// Expected canonical name, `"None"` when nothing should resolve.
    pub encoding: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

impl TestCase {
    pub fn expected_name(&self) -> Option<&str> {
        match self.encoding.as_str() {
            "None" => None,
            name => Some(name),
        }
    }
}

/// Load all test cases from a YAML fixture file
pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load fixtures from the standard fixtures directory
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_meta_charset() {
        let cases = load_fixtures_by_name("meta_charset");
        assert!(!cases.is_empty());
        let simple = cases.iter().find(|c| c.id == "simple").unwrap();
        assert_eq!(simple.expected_name(), Some("ISO-8859-7"));
        assert_eq!(simple.end, Some(20));
    }
}
