//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific flow against
//! mock adapters. All tests run on the host (x86_64) with no real hardware
//! required.

mod join_flow_tests;
mod scan_flow_tests;
