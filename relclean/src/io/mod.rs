//! I/O helpers for relclean commands.

pub mod config;
pub mod fs;
pub mod process;
pub mod publisher;
