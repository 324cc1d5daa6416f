// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Language profiles: how a snippet of a given language becomes a runnable
//! source file and a command line.

use serde::Deserialize;
use std::collections::HashMap;

/// How to materialize and run snippets of one language.
#[derive(Debug, Clone, Deserialize)]
pub struct LangProfile {
    /// Command line; `{file}` is replaced with the source path.
    pub command: Vec<String>,
    /// File extension for the materialized source.
    pub extension: String,
    /// Optional whole-file template with `{imports}` and `{body}`
    /// placeholders. Without it the snippet source is written as-is and
    /// import lines (if any) are prepended.
    #[serde(default)]
    pub wrapper: Option<String>,
    /// Per-import line template with a `{name}` placeholder.
    #[serde(default)]
    pub import_line: Option<String>,
}

impl LangProfile {
    /// Render the source file content for a snippet body and its imports.
    pub fn render(&self, body: &str, imports: &[String]) -> String {
        let import_block = match &self.import_line {
            Some(template) => imports
                .iter()
                .map(|name| template.replace("{name}", name))
                .collect::<Vec<_>>()
                .join("\n"),
            None => String::new(),
        };

        match &self.wrapper {
            Some(wrapper) => wrapper
                .replace("{imports}", &import_block)
                .replace("{body}", body),
            None if import_block.is_empty() => format!("{}\n", body.trim_end()),
            None => format!("{}\n\n{}\n", import_block, body.trim_end()),
        }
    }

    /// Command line with `{file}` substituted. First element is the program.
    pub fn command_for(&self, file: &str) -> Vec<String> {
        self.command
            .iter()
            .map(|arg| arg.replace("{file}", file))
            .collect()
    }
}

/// The set of known language profiles for a run.
#[derive(Debug, Clone)]
pub struct Profiles {
    by_lang: HashMap<String, LangProfile>,
}

impl Profiles {
    /// Built-in profiles: `sh`, `python`, `go`.
    pub fn builtin() -> Self {
        let mut by_lang = HashMap::new();
        by_lang.insert(
            "sh".to_string(),
            LangProfile {
                command: vec!["sh".to_string(), "{file}".to_string()],
                extension: "sh".to_string(),
                wrapper: None,
                import_line: None,
            },
        );
        by_lang.insert(
            "python".to_string(),
            LangProfile {
                command: vec!["python3".to_string(), "{file}".to_string()],
                extension: "py".to_string(),
                wrapper: None,
                import_line: Some("import {name}".to_string()),
            },
        );
        by_lang.insert(
            "go".to_string(),
            LangProfile {
                command: vec!["go".to_string(), "run".to_string(), "{file}".to_string()],
                extension: "go".to_string(),
                wrapper: Some(
                    "package main\n\n{imports}\n\nfunc main() {\n{body}\n}\n".to_string(),
                ),
                import_line: Some("import \"{name}\"".to_string()),
            },
        );
        Self { by_lang }
    }

    pub fn get(&self, lang: &str) -> Option<&LangProfile> {
        self.by_lang.get(lang)
    }

    /// Add or replace a profile (configuration overrides built-ins).
    pub fn insert(&mut self, lang: impl Into<String>, profile: LangProfile) {
        self.by_lang.insert(lang.into(), profile);
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.by_lang.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
