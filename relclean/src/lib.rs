//! Release output sanitizer for build pipelines.
//!
//! A build system invokes this tool around a Release build: before the build
//! to clear stale files from output directories, and after the build to
//! publish a project and scrub development-only config files from the
//! published output. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (gating, suffix matching).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (filesystem, process execution).
//!   Isolated to enable mocking in tests.
//!
//! Orchestration modules ([`clear`], [`publish`]) coordinate core logic with
//! I/O to implement CLI commands.

pub mod clear;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod publish;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
