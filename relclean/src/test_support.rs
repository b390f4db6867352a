//! Test-only helpers: scripted publishers for exercising cleanup logic.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

use crate::io::publisher::Publisher;

/// One recorded call to [`ScriptedPublisher::publish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishCall {
    pub project: Option<PathBuf>,
    pub out_dir: PathBuf,
}

/// Publisher that records calls instead of spawning a tool.
///
/// A failing variant returns an error without touching the filesystem, which
/// is exactly what a crashed publish tool looks like to the caller.
pub struct ScriptedPublisher {
    calls: RefCell<Vec<PublishCall>>,
    fail: bool,
}

impl ScriptedPublisher {
    pub fn succeeding() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<PublishCall> {
        self.calls.borrow().clone()
    }
}

impl Publisher for ScriptedPublisher {
    fn publish(&self, project: Option<&Path>, out_dir: &Path) -> Result<()> {
        self.calls.borrow_mut().push(PublishCall {
            project: project.map(Path::to_path_buf),
            out_dir: out_dir.to_path_buf(),
        });
        if self.fail {
            return Err(anyhow!("scripted publish failure"));
        }
        Ok(())
    }
}
