//! Unit tests for langboard.

mod aggregation_tests;
mod report_tests;
mod snapshot_tests;
