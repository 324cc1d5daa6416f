// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for binary specs: a throwaway project directory and a
//! small assertion wrapper around the `sv` command.

#![allow(dead_code)]

use std::path::Path;
use tempfile::TempDir;

/// A temporary directory holding outline documents for one spec.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("create temp project"),
        }
    }

    /// Write a file under the project root, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write project file");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// An `sv` invocation with this project as working directory.
    pub fn sv(&self) -> Cli {
        Cli::new(Some(self.dir.path()))
    }
}

/// An `sv` invocation without a project directory.
pub fn cli() -> Cli {
    Cli::new(None)
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    fn new(dir: Option<&Path>) -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("sv").expect("sv binary");
        cmd.env("NO_COLOR", "1");
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// Run and require exit code 0.
    pub fn passes(self) -> Checked {
        self.exit_code(0)
    }

    /// Run and require exit code 1 (verification failure).
    pub fn fails(self) -> Checked {
        self.exit_code(1)
    }

    /// Run and require a specific exit code.
    pub fn exit_code(mut self, expected: i32) -> Checked {
        let output = self.cmd.output().expect("run sv");
        let checked = Checked {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.code(),
            Some(expected),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            checked.stdout,
            checked.stderr
        );
        checked
    }
}

/// Captured output with chainable content assertions.
pub struct Checked {
    pub stdout: String,
    pub stderr: String,
}

impl Checked {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly contains {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).expect("stdout is valid JSON")
    }
}
