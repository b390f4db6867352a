//! Deterministic, pure decision logic.
//!
//! Core modules must be free of I/O side effects. They operate on plain
//! values and return deterministic outputs suitable for tests.

pub mod gate;
pub mod suffix;
