//! Property-based tests for the pagination laws.
