//! Shared test utilities

pub mod catalog;

pub use catalog::{create_test_checker, lookup_body, mock_lookup};
