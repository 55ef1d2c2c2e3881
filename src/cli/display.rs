// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the locus CLI.
//!
//! Plain ANSI colors, boxed sections, aligned columns. Colors switch off for
//! `NO_COLOR` and when stdout is not a terminal, so piping `locus search`
//! into other tools gives clean text.

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if colors are on, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(text: &str) -> String {
    styled(&[GRAY], text)
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", styled(&[BOLD, CYAN], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    println!("{}{}{}", border("│"), pad_right(content, BOX_WIDTH), border("│"));
}

/// Print a `label  value` line inside a section
pub fn field(label: &str, value: &str) {
    row(&format!(" {} {}", pad_right(&styled(&[DIM], label), 18), value));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Building code badge, `[A1]`, or a dash for places without one
pub fn building_badge(code: Option<&str>) -> String {
    match code {
        Some(code) => styled(&[MAGENTA], &format!("[{}]", code)),
        None => styled(&[GRAY], "  - "),
    }
}

/// Color-coded score value
pub fn score_value(score: f64) -> String {
    let text = format!("{:>7.1}", score);
    let color = if score >= 100.0 {
        GREEN
    } else if score >= 40.0 {
        CYAN
    } else if score >= 15.0 {
        YELLOW
    } else {
        GRAY
    };
    styled(&[color], &text)
}

/// Color-coded timing value in microseconds
pub fn timing_us(value: f64) -> String {
    let text = format!("{:.1} µs", value);
    let color = if value < 100.0 {
        GREEN
    } else if value < 1000.0 {
        YELLOW
    } else {
        RED
    };
    styled(&[color], &text)
}

/// Coloured "ok" / "warn" status word
pub fn status(ok: bool) -> String {
    if ok {
        styled(&[BOLD, GREEN], "ok")
    } else {
        styled(&[BOLD, YELLOW], "warn")
    }
}

/// Dim hint line, printed outside any box
pub fn hint(text: &str) {
    println!("{}", styled(&[DIM, BLUE], text));
}
