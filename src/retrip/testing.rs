//! Test support for round-trip runs
//!
//! The `samples` module is the canonical source of ECMAScript snippets
//! used across the test suite. Tests should pull snippets from here
//! instead of inlining copies, so every test exercises the same sources.

pub mod samples;
