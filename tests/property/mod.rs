//! Property-based tests for walk determinism
