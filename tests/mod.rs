//! Integration tests for dramalines
//!
//! Tests are organized by component:
//! - client_test: Catalog and episode loading (HTTP and local directory)
//! - cli_test: Argument parsing and command handlers
//! - ui_test: Full-screen rendering with a TestBackend
//! - e2e_test: End-to-end flow (catalog -> selectors -> episode -> reveal)
//!
//! Fixture data lives in tests/fixtures/site, laid out like a served site.

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
