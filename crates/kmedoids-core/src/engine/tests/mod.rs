//! Tests for the k-medoids engine.
//!
//! # Test Organization
//!
//! - `helpers` - Dataset builders shared across test files
//! - `engine_tests` - Main convergence-loop behavior
//! - `determinism` - Thread-count and backend invariance
//! - `edge_cases` - Boundary conditions (empty clusters, k=n, caps)

mod helpers;

mod determinism;
