// Integration test support for the culture workspace.
//
// Builds throwaway data directories (custom culture files, OS locale
// snapshots, configuration files) and services over them.

pub mod test_harness;

pub use test_harness::{init_tracing, CultureHarness, TestResult};
