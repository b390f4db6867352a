//! Stable exit codes for relclean commands.

/// Command succeeded, including deliberate no-op paths (wrong configuration,
/// CI marker present).
pub const OK: i32 = 0;
/// Fatal error: invalid config, missing path, or a failed publish tool.
pub const FAILURE: i32 = 1;
