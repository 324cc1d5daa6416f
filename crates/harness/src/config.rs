// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration: defaults, `sv.toml`, command-line overrides.
//!
//! Precedence is lowest to highest: built-in defaults, then the config file,
//! then setter calls made by the CLI.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use sv_runner::{LangProfile, Profiles};
use thiserror::Error;

/// Default per-snippet timeout when neither file nor flag sets one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Config file name searched for in the working directory.
pub const CONFIG_FILE: &str = "sv.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything the harness needs to run a catalog.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Per-snippet wall-clock bound.
    pub timeout: Duration,
    /// Maximum snippets in flight at once.
    pub jobs: usize,
    /// Substring filter on snippet identity; `None` runs everything.
    pub filter: Option<String>,
    pub profiles: Profiles,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            jobs: default_jobs(),
            filter: None,
            profiles: Profiles::builtin(),
        }
    }
}

impl RunConfig {
    sv_core::setters! {
        set {
            timeout: Duration,
            jobs: usize,
        }
        option {
            filter: String,
        }
    }

    /// Load configuration for a run.
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// `sv.toml` in the working directory is used when present and silently
    /// skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };
        Self::load_file(&path)
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(file.into_config())
    }
}

fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(4)
}

/// On-disk shape of `sv.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    timeout_secs: Option<u64>,
    jobs: Option<usize>,
    /// `[lang.<name>]` tables; they override built-in profiles by name.
    #[serde(default)]
    lang: BTreeMap<String, LangProfile>,
}

impl ConfigFile {
    fn into_config(self) -> RunConfig {
        let mut config = RunConfig::default();
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(jobs) = self.jobs {
            config.jobs = jobs.max(1);
        }
        for (lang, profile) in self.lang {
            config.profiles.insert(lang, profile);
        }
        config
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
