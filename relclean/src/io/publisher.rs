//! Publish tool adapter.

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::info;

use super::config::PublishConfig;
use super::process::run_with_timeout;

/// Capability to publish a project's build artifacts into an output directory.
///
/// Injected into the command layer so dev-config cleanup can be tested
/// without a real toolchain on PATH.
pub trait Publisher {
    /// Publish `project` (or the working directory's project when `None`)
    /// into `out_dir`. Returns `Ok` only after the tool succeeded.
    fn publish(&self, project: Option<&Path>, out_dir: &Path) -> Result<()>;
}

/// Publisher shelling out to the configured external publish tool.
///
/// Always forces Release configuration and reuses already-built artifacts
/// (no-rebuild), mirroring the build-step contract.
#[derive(Debug, Clone)]
pub struct ToolPublisher {
    config: PublishConfig,
}

impl ToolPublisher {
    pub fn new(config: PublishConfig) -> Self {
        Self { config }
    }

    fn command(&self, project: Option<&Path>, out_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.config.command[0]);
        cmd.args(&self.config.command[1..]);
        if let Some(project) = project {
            cmd.arg(project);
        }
        cmd.arg("--no-build");
        cmd.args(["-c", "Release"]);
        cmd.arg("-o").arg(out_dir);
        cmd
    }
}

impl Publisher for ToolPublisher {
    fn publish(&self, project: Option<&Path>, out_dir: &Path) -> Result<()> {
        let program = self.config.command.join(" ");
        info!(
            program = %program,
            out_dir = %out_dir.display(),
            "running publish tool"
        );

        let output = run_with_timeout(
            self.command(project, out_dir),
            Duration::from_secs(self.config.timeout_secs),
            self.config.output_limit_bytes,
        )
        .with_context(|| format!("run publish tool '{program}'"))?;

        if output.timed_out {
            bail!(
                "publish tool '{program}' timed out after {}s",
                self.config.timeout_secs
            );
        }
        if !output.status.success() {
            bail!(
                "publish tool '{program}' exited with {}: {}",
                output.status,
                output.stderr_lossy()
            );
        }
        Ok(())
    }
}
