//! Conversion integration tests
//!
//! JSON projection and parsing, compact codecs, and file persistence.

mod file_tests;
mod json_tests;
