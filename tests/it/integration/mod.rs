//! Integration tests for langboard.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.
