//! Configuration Tests
//!
//! Tests for configuration loading, validation, and persistence.
