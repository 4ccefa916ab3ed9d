//! Score and clock bookkeeping
//!
//! The scoreboard keeps its display strings in sync with the numbers: every
//! setter regenerates the matching line.

use serde::{Deserialize, Serialize};

/// Clock text shown once time has run out
pub const EXPIRED_TIME_TEXT: &str = "00:00,000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    score: u64,
    time_remaining: f32,
    /// Phase label
    pub top: String,
    /// Formatted score
    pub middle: String,
    /// Formatted remaining time
    pub bottom: String,
}

impl Scoreboard {
    /// A zeroed scoreboard with the given label and clock
    pub fn new(label: &str, time_remaining: f32) -> Self {
        let mut scoreboard = Self {
            top: label.to_string(),
            ..Default::default()
        };
        scoreboard.set_score(0);
        scoreboard.set_time_remaining(time_remaining);
        scoreboard
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    pub fn set_score(&mut self, value: u64) {
        self.score = value;
        self.middle = format_score(value);
    }

    pub fn set_time_remaining(&mut self, value: f32) {
        self.time_remaining = value;
        self.bottom = format_time_remaining(value);
    }

    pub fn add_score(&mut self, delta: u64) {
        self.set_score(self.score.saturating_add(delta));
    }

    pub fn add_time(&mut self, delta: f32) {
        self.set_time_remaining(self.time_remaining + delta);
    }

    pub fn set_label(&mut self, label: &str) {
        self.top.clear();
        self.top.push_str(label);
    }
}

/// Group digits in thousands: 1234567 -> "1,234,567"
pub fn format_score(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format seconds as `MM:SS,mmm`
pub fn format_time_remaining(value: f32) -> String {
    if value.is_nan() || value <= 0.0 {
        return EXPIRED_TIME_TEXT.to_string();
    }

    let total_ms = (f64::from(value) * 1000.0).floor() as u64;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{minutes:02}:{seconds:02},{millis:03}")
}
