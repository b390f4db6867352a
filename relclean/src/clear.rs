//! Pre-build cleanup of stale output directories.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::gate::{CiStatus, Gate, clear_gate};
use crate::io::fs::clear_files;

/// Outcome of a `clear` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// CI marker present; nothing touched.
    SkippedCi,
    /// Configuration was not Release; nothing touched.
    SkippedConfiguration,
    /// Files removed across all directories.
    Cleared { removed: usize },
}

/// Clear the immediate files of each directory in `dirs`, gated on
/// `configuration` and `ci`.
///
/// Directories are processed in argument order; the first failing directory
/// aborts the run so the owning build fails loudly.
pub fn run_clear(configuration: &str, dirs: &[PathBuf], ci: CiStatus) -> Result<ClearOutcome> {
    match clear_gate(configuration, ci) {
        Gate::SkipCi => {
            info!("CI detected, leaving output directories alone");
            return Ok(ClearOutcome::SkippedCi);
        }
        Gate::SkipConfiguration => {
            debug!(configuration, "not a Release build, nothing to clear");
            return Ok(ClearOutcome::SkippedConfiguration);
        }
        Gate::Proceed => {}
    }

    let mut removed = 0;
    for dir in dirs {
        let files = clear_files(dir)?;
        info!(dir = %dir.display(), removed = files.len(), "cleared stale output");
        removed += files.len();
    }
    Ok(ClearOutcome::Cleared { removed })
}
