// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compact elapsed-time formatting for report output.

/// Format a duration in seconds as a compact human string: "5s", "2m", "1h", "3d".
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}

/// Format a millisecond duration, switching to seconds past one second.
pub fn format_elapsed_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        let secs = ms as f64 / 1000.0;
        format!("{:.1}s", secs)
    } else {
        format_elapsed(ms / 1000)
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
