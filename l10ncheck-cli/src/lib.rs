//! Command runners behind the l10ncheck binaries, exposed for tests.

pub mod compare;

pub use compare::{CompareOptions, run_compare_command};
