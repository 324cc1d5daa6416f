// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped, disposable execution environments.
//!
//! Each snippet invocation gets a fresh temp directory. The child process
//! runs with that directory as cwd and HOME, so filesystem side effects land
//! there and vanish when the sandbox is dropped.

use crate::error::ExecError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Sandbox {
    dir: TempDir,
    /// Short invocation id used in file names and trace spans.
    pub invocation: String,
}

impl Sandbox {
    pub fn create() -> Result<Self, ExecError> {
        let invocation = uuid::Uuid::new_v4().simple().to_string()[..8].to_string();
        let dir = tempfile::Builder::new()
            .prefix(&format!("sv-{}-", invocation))
            .tempdir()
            .map_err(ExecError::Sandbox)?;
        Ok(Self { dir, invocation })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the rendered snippet source into the sandbox.
    pub fn write_source(&self, extension: &str, content: &str) -> Result<PathBuf, ExecError> {
        let path = self.dir.path().join(format!("snippet.{}", extension));
        std::fs::write(&path, content).map_err(ExecError::Sandbox)?;
        Ok(path)
    }
}

#[cfg(test)]
#[path = "sandbox_tests.rs"]
mod tests;
