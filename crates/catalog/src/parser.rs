// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outline-markup document parser.
//!
//! Documents are plain-text outlines: heading lines start with one or more
//! `*`, snippet blocks are fenced by `#+begin_src <lang>` / `#+end_src`, and
//! an expected-output block immediately after a snippet (a
//! `#+begin_example` fence, or `: `-prefixed lines after `#+RESULTS:`) is the
//! oracle for that snippet.
//!
//! Parsing is deterministic: the same content always yields the same snippet
//! sequence, in document order.

use crate::document::Document;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::Path;
use sv_core::{Snippet, SnippetId};
use thiserror::Error;

/// Errors from parsing a single document.
///
/// Reported per document; a failing document never aborts the overall run.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unterminated {block} block opened at line {line}")]
    Unterminated { block: &'static str, line: usize },
    #[error("source block at line {line} has no language tag")]
    MissingLanguage { line: usize },
}

/// Parse one document into its snippet sequence.
pub fn parse_document(path: &Path, content: &str) -> Result<Document, ParseError> {
    let mut scanner = Scanner::new(content);
    let mut heading: Vec<String> = Vec::new();
    let mut ordinals: HashMap<Vec<String>, u32> = HashMap::new();
    let mut snippets: Vec<Snippet> = Vec::new();
    let mut seq: u32 = 0;

    while let Some(line) = scanner.next_line() {
        if let Some((level, title)) = parse_heading(line) {
            heading.truncate(level - 1);
            heading.push(title.to_string());
            continue;
        }

        let opened_at = scanner.line_no;
        let Some(opener) = parse_src_opener(line, opened_at)? else {
            continue;
        };

        let source = scan_until(&mut scanner, "#+end_src", "source", opened_at)?;
        let expected = scan_expected(&mut scanner)?;

        // Keyed on the title list itself, so a literal `/` in a title cannot
        // collide with a nested heading path.
        let ordinal = ordinals.entry(heading.clone()).or_insert(0);
        *ordinal += 1;

        snippets.push(Snippet {
            id: SnippetId::new(path, seq, heading.clone(), *ordinal),
            lang: opener.lang,
            source,
            imports: opener.imports,
            expected,
            capture: opener.capture,
        });
        seq += 1;
    }

    Ok(Document {
        path: path.to_path_buf(),
        hash: content_hash(content),
        snippets,
    })
}

/// Hex digest of the raw document content (for change detection and display).
pub fn content_hash(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        use std::fmt::Write;
        let _ = write!(hex, "{:02x}", byte);
    }
    hex
}

// ---------------------------------------------------------------------------
// Line scanner
// ---------------------------------------------------------------------------

struct Scanner<'a> {
    lines: std::str::Lines<'a>,
    peeked: Option<&'a str>,
    line_no: usize,
}

impl<'a> Scanner<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines(),
            peeked: None,
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        if let Some(line) = self.peeked.take() {
            return Some(line);
        }
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line)
    }

    /// Push a consumed line back so the next `next_line` returns it again.
    fn unread(&mut self, line: &'a str) {
        self.peeked = Some(line);
    }
}

// ---------------------------------------------------------------------------
// Block recognition
// ---------------------------------------------------------------------------

/// `(level, title)` for a heading line, `None` otherwise.
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let stars = line.bytes().take_while(|b| *b == b'*').count();
    if stars == 0 {
        return None;
    }
    let rest = &line[stars..];
    let title = rest.strip_prefix(' ')?;
    Some((stars, title.trim()))
}

struct SrcOpener {
    lang: String,
    imports: Vec<String>,
    capture: bool,
}

/// Parse a `#+begin_src` opener line; `None` when the line is ordinary prose.
fn parse_src_opener(line: &str, line_no: usize) -> Result<Option<SrcOpener>, ParseError> {
    let trimmed = line.trim_start();
    if !starts_with_keyword(trimmed, "#+begin_src") {
        return Ok(None);
    }
    let rest = trimmed["#+begin_src".len()..].trim();

    let mut tokens = rest.split_whitespace().peekable();
    let lang = match tokens.peek() {
        Some(tok) if !tok.starts_with(':') => {
            let lang = tok.to_string();
            tokens.next();
            lang
        }
        _ => return Err(ParseError::MissingLanguage { line: line_no }),
    };

    let mut imports = Vec::new();
    let mut capture = true;
    while let Some(tok) = tokens.next() {
        match tok {
            ":imports" => {
                if let Some(list) = tokens.next() {
                    imports.extend(
                        list.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from),
                    );
                }
            }
            ":no-capture" => capture = false,
            other => {
                tracing::debug!(flag = other, line = line_no, "ignoring unknown block flag");
            }
        }
    }

    Ok(Some(SrcOpener {
        lang,
        imports,
        capture,
    }))
}

/// Collect lines until the closing keyword, erroring at end of input.
fn scan_until(
    scanner: &mut Scanner<'_>,
    closer: &str,
    block: &'static str,
    opened_at: usize,
) -> Result<String, ParseError> {
    let mut body: Vec<&str> = Vec::new();
    while let Some(line) = scanner.next_line() {
        if starts_with_keyword(line.trim_start(), closer) {
            return Ok(body.join("\n"));
        }
        body.push(line);
    }
    Err(ParseError::Unterminated {
        block,
        line: opened_at,
    })
}

/// Scan the expected-output block directly following a snippet, if any.
///
/// Only blank lines and a single `#+RESULTS:` marker may sit between the
/// snippet and its oracle; anything else means the snippet has none.
fn scan_expected(scanner: &mut Scanner<'_>) -> Result<Option<String>, ParseError> {
    let mut saw_results_marker = false;

    while let Some(line) = scanner.next_line() {
        let trimmed = line.trim_start();

        if trimmed.is_empty() {
            continue;
        }
        if !saw_results_marker && starts_with_keyword(trimmed, "#+results:") {
            saw_results_marker = true;
            continue;
        }
        if starts_with_keyword(trimmed, "#+begin_example") {
            let opened_at = scanner.line_no;
            let body = scan_until(scanner, "#+end_example", "example", opened_at)?;
            return Ok(Some(body));
        }
        if saw_results_marker && trimmed.starts_with(':') {
            let mut lines = vec![strip_colon(trimmed)];
            while let Some(next) = scanner.next_line() {
                let next_trimmed = next.trim_start();
                if next_trimmed.starts_with(':') {
                    lines.push(strip_colon(next_trimmed));
                } else {
                    scanner.unread(next);
                    break;
                }
            }
            return Ok(Some(lines.join("\n")));
        }

        // Ordinary content: no oracle for this snippet.
        scanner.unread(line);
        return Ok(None);
    }

    Ok(None)
}

fn strip_colon(line: &str) -> &str {
    line.strip_prefix(": ")
        .or_else(|| line.strip_prefix(':'))
        .unwrap_or(line)
}

/// ASCII-case-insensitive prefix match. Compares bytes, so multibyte prose
/// never lands a slice on a non-char boundary.
fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    line.len() >= keyword.len()
        && line.as_bytes()[..keyword.len()].eq_ignore_ascii_case(keyword.as_bytes())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
