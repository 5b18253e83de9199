//! Best-score record
//!
//! A single integer persisted under one key. Read once at startup and
//! overwritten whenever a run beats it.

use crate::consts::HIGH_SCORE_KEY;
use crate::platform::KeyValueStore;

/// The session's best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Load from storage; a missing or unparseable value counts as zero
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let best = store
            .get_item(HIGH_SCORE_KEY)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(0);
        log::info!("Loaded high score: {}", best);
        Self { best }
    }

    /// Record a finished run. Returns true (and persists) on a new record.
    pub fn record(&mut self, score: u64, store: &mut dyn KeyValueStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        store.set_item(HIGH_SCORE_KEY, &score.to_string());
        log::info!("New high score: {}", score);
        true
    }
}
