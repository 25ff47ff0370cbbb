//! Shared bootstrap for test binaries.

pub mod logging;
