//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDatasetBuilder` - Builder pattern for creating test datasets
//! - `write_csv()` - On-disk CSV fixtures for loader tests
//! - `HOME` - the home institution used by the default settings

use langboard::data::{Dataset, EnrollmentRecord};
use std::io::Write;
use tempfile::NamedTempFile;

/// Home institution in the default settings
pub const HOME: &str = "U OF OKLAHOMA";

// ============================================================================
// TestDatasetBuilder - Builder pattern for creating test datasets
// ============================================================================

/// Builder for creating test datasets.
///
/// # Example
/// ```ignore
/// let dataset = TestDatasetBuilder::new()
///     .home("Spanish", 2021, 500.0)
///     .peer("Spanish", "OTHER U", 2021, 300.0)
///     .build();
/// ```
#[derive(Default)]
pub struct TestDatasetBuilder {
    records: Vec<EnrollmentRecord>,
}

impl TestDatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a home institution record.
    pub fn home(self, language: &str, year: i32, total: f64) -> Self {
        self.record(language, HOME, year, Some(total))
    }

    /// Add a peer institution record.
    pub fn peer(self, language: &str, university: &str, year: i32, total: f64) -> Self {
        self.record(language, university, year, Some(total))
    }

    /// Add a record with an explicit, possibly blank, total.
    pub fn record(
        mut self,
        language: &str,
        university: &str,
        year: i32,
        total: Option<f64>,
    ) -> Self {
        self.records
            .push(EnrollmentRecord::new(language, university, year, total));
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::from_records(self.records).expect("test records are unique")
    }
}

/// The three-university Spanish scenario plus a peers-only language
pub fn sample_dataset() -> Dataset {
    TestDatasetBuilder::new()
        .home("Spanish", 2021, 500.0)
        .peer("Spanish", "OTHER U", 2021, 300.0)
        .peer("Spanish", "THIRD U", 2021, 700.0)
        .home("Spanish", 2016, 450.0)
        .peer("Spanish", "OTHER U", 2016, 320.0)
        .peer("Korean", "OTHER U", 2016, 20.0)
        .peer("Korean", "THIRD U", 2021, 35.0)
        .build()
}

/// Write `content` to a temporary `.csv` file.
pub fn write_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(content.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}
