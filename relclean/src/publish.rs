//! Post-build publish and dev-config scrubbing.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::gate::{Gate, publish_gate};
use crate::io::fs::remove_files_with_suffix;
use crate::io::publisher::Publisher;

/// Outcome of a `publish` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Configuration was not Release; no subprocess spawned.
    SkippedConfiguration,
    /// Publish succeeded; dev-config files removed from the output directory.
    Published { removed: usize },
}

/// Publish `project` into `out_dir` for a Release build, then scrub
/// dev-config files from the output.
pub fn run_publish(
    publisher: &dyn Publisher,
    configuration: &str,
    project: &Path,
    out_dir: &Path,
    dev_suffix: &str,
) -> Result<PublishOutcome> {
    if publish_gate(configuration) == Gate::SkipConfiguration {
        debug!(configuration, "not a Release build, nothing to publish");
        return Ok(PublishOutcome::SkippedConfiguration);
    }
    let removed = publish_and_scrub(publisher, Some(project), out_dir, dev_suffix)?;
    Ok(PublishOutcome::Published { removed })
}

/// Standalone trigger: unconditionally publish the working directory's
/// project into `out_dir` and scrub dev-config files.
pub fn run_ship(publisher: &dyn Publisher, out_dir: &Path, dev_suffix: &str) -> Result<usize> {
    publish_and_scrub(publisher, None, out_dir, dev_suffix)
}

fn publish_and_scrub(
    publisher: &dyn Publisher,
    project: Option<&Path>,
    out_dir: &Path,
    dev_suffix: &str,
) -> Result<usize> {
    // Scrub only after a successful publish; a failed publish must fail the
    // build with the output directory untouched.
    publisher
        .publish(project, out_dir)
        .context("publish project")?;

    let removed = remove_files_with_suffix(out_dir, dev_suffix)?;
    info!(
        out_dir = %out_dir.display(),
        removed = removed.len(),
        "scrubbed dev config files"
    );
    Ok(removed.len())
}
