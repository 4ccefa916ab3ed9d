//! Session leaderboard
//!
//! Tracks the best finished runs of the current process. Nothing is written to
//! disk.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Hits landed during the run
    pub hits: u32,
    /// Run length in seconds
    pub duration: f32,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// A run earns a slot when it scored and the board has room or it beats
    /// the weakest run kept
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_none_or(|weakest| score > weakest.score))
    }

    /// 1-based slot a run with `score` would take right now
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        self.qualifies(score).then(|| {
            // Number of runs at or above this score
            self.entries.iter().take_while(|e| e.score >= score).count() + 1
        })
    }

    /// Record a finished run. Returns the rank achieved (1-indexed) or None if
    /// it didn't qualify. Ties rank below earlier runs.
    pub fn add_score(&mut self, score: u64, hits: u32, duration: f32) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                score,
                hits,
                duration,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        log::info!("New high score #{rank}: {score}");
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best finished run of the session
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|best| best.score)
    }
}
