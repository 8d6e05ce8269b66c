// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the vitrine CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `VITRINE_THEME` first, then `COLORFGBG`, and falls back to dark.
//! `NO_COLOR` and non-TTY stdout turn colors off so the output pipes cleanly.
//!
//! Box drawing, score colors, pass/fail marks and percentage colors live here
//! so `commands` only decides *what* to print.

use std::sync::OnceLock;
use vitrine::IndexStatus;

// Width between │ and │, excluding the border characters
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME AND COLORS
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// `VITRINE_THEME` wins, then `COLORFGBG` ("fg;bg", light from bg 7 up except
/// 8), else dark.
fn detect_theme(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    match explicit.map(str::to_ascii_lowercase).as_deref() {
        Some("light" | "l") => return Theme::Light,
        Some("dark" | "d") => return Theme::Dark,
        _ => {}
    }
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok());
    match background {
        Some(bg) if bg >= 7 && bg != 8 => Theme::Light,
        _ => Theme::Dark,
    }
}

pub fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(|| {
        detect_theme(
            std::env::var("VITRINE_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    })
}

/// Semantic colors; each maps to a OneDark or One Light RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Failures
    Red,
    /// Passes and strong matches
    Green,
    /// Warnings and middling scores
    Yellow,
    /// Audit frame
    Blue,
    /// Labels and urls
    Cyan,
    /// Body text
    Text,
    /// Borders and weak matches
    Muted,
}

impl Color {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Color::Red) => (224, 108, 117),
            (Theme::Dark, Color::Green) => (152, 195, 121),
            (Theme::Dark, Color::Yellow) => (229, 192, 123),
            (Theme::Dark, Color::Blue) => (97, 175, 239),
            (Theme::Dark, Color::Cyan) => (86, 182, 194),
            (Theme::Dark, Color::Text) => (171, 178, 191),
            (Theme::Dark, Color::Muted) => (92, 99, 112),
            (Theme::Light, Color::Red) => (228, 86, 73),
            (Theme::Light, Color::Green) => (80, 161, 79),
            (Theme::Light, Color::Yellow) => (193, 132, 1),
            (Theme::Light, Color::Blue) => (64, 120, 242),
            (Theme::Light, Color::Cyan) => (1, 132, 188),
            (Theme::Light, Color::Text) => (56, 58, 66),
            (Theme::Light, Color::Muted) => (160, 161, 167),
        }
    }

    /// Truecolor foreground escape for the detected theme.
    pub fn code(self) -> String {
        let (r, g, b) = self.rgb(theme());
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Apply a color with optional modifiers, or nothing when colors are off.
pub fn themed(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.code(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI escape sequences.
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

/// Border color, or nothing when colors are off.
fn border(color: Color) -> (String, &'static str) {
    if use_colors() {
        (color.code(), RESET)
    } else {
        (String::new(), "")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let (b, reset) = border(Color::Muted);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{b}│{reset}{}{}{b}│{reset}", content, " ".repeat(pad));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (b, reset) = border(Color::Muted);
    let label_part = format!("─ {} ", themed(Color::Cyan, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}┌{reset}{}{b}{}┐{reset}", label_part, "─".repeat(remaining));
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let (b, reset) = border(Color::Muted);
    let label_part = format!("─ {} ", themed(Color::Cyan, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}├{reset}{}{b}{}┤{reset}", label_part, "─".repeat(remaining));
}

/// └──────────────────┘
pub fn section_bot() {
    let (b, reset) = border(Color::Muted);
    println!("{b}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

pub fn double_header() {
    let (b, reset) = border(Color::Blue);
    println!("{b}╔{}╗{reset}", "═".repeat(BOX_WIDTH));
}

pub fn double_footer() {
    let (b, reset) = border(Color::Blue);
    println!("{b}╚{}╝{reset}", "═".repeat(BOX_WIDTH));
}

/// ║      TEXT        ║, centered and bold
pub fn title(text: &str) {
    let (b, reset) = border(Color::Blue);
    let colored = themed(Color::Cyan, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!(
        "{b}║{reset}{}{}{}{b}║{reset}",
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad)
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Right-pad a styled string to a fixed visible width.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut `text` to at most `max_chars` characters, ending in `…` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Greedy word wrap to lines of at most `width` characters.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { 0 } else { 1 } + word.chars().count();
        if !line.is_empty() && line.chars().count() + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Color-coded score: title hits are green, body-only hits gray.
pub fn score_value(score: f64) -> String {
    if !use_colors() {
        return format!("{:>5.0}", score);
    }
    let (color, bold) = if score >= 100.0 {
        (Color::Green, BOLD)
    } else if score >= 80.0 {
        (Color::Green, "")
    } else if score >= 30.0 {
        (Color::Yellow, "")
    } else {
        (Color::Muted, "")
    };
    format!("{}{}{:>5.0}{}", bold, color.code(), score, RESET)
}

/// ✓ or ✗
pub fn check_mark(ok: bool) -> String {
    if ok {
        themed(Color::Green, &[BOLD], "✓")
    } else {
        themed(Color::Red, &[BOLD], "✗")
    }
}

/// ✓ or ⚠ for soft failures
pub fn warn_mark(ok: bool) -> String {
    if ok {
        themed(Color::Green, &[BOLD], "✓")
    } else {
        themed(Color::Yellow, &[BOLD], "⚠")
    }
}

/// Percentage colored by grade; `N/A` when there was nothing to measure.
pub fn percent_colored(value: Option<u32>) -> String {
    match value {
        None => themed(Color::Muted, &[], " N/A"),
        Some(p) if p >= 80 => themed(Color::Green, &[BOLD], &format!("{:>3}%", p)),
        Some(p) if p >= 50 => themed(Color::Yellow, &[BOLD], &format!("{:>3}%", p)),
        Some(p) => themed(Color::Red, &[BOLD], &format!("{:>3}%", p)),
    }
}

pub fn status_label(status: IndexStatus) -> String {
    match status {
        IndexStatus::Ready => themed(Color::Green, &[], "ready"),
        IndexStatus::Indexing => themed(Color::Yellow, &[], "indexing…"),
    }
}

pub fn dim(text: &str) -> String {
    themed(Color::Text, &[DIM], text)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
