//! High score leaderboard
//!
//! Persisted to LocalStorage as a JSON array of `{score, date}` objects,
//! sorted descending by score and capped at `MAX_RANKING_ENTRIES`.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_RANKING_ENTRIES, RANKING_KEY};
use crate::platform::storage::{self, KeyValueStore, StorageError};
use crate::platform::time::timestamp_label;
use crate::ui;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Final score
    pub score: u64,
    /// Local time the score was recorded, already formatted for display
    pub date: String,
}

impl RankingEntry {
    pub fn new(score: u64, date: impl Into<String>) -> Self {
        Self {
            score,
            date: date.into(),
        }
    }
}

/// Leaderboard contents (highest score first)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Ranking {
    pub entries: Vec<RankingEntry>,
}

impl Ranking {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, re-sort and trim to `capacity`.
    /// Returns the rank achieved (1-indexed) or None if it was trimmed off.
    pub fn insert(&mut self, entry: RankingEntry, capacity: usize) -> Option<usize> {
        self.entries.push(entry);
        let new_idx = self.entries.len() - 1;

        // Stable: among equal scores the newest stays last
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| self.entries[b].score.cmp(&self.entries[a].score));
        let rank = order.iter().position(|&i| i == new_idx).map(|p| p + 1);

        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(capacity);

        rank.filter(|&r| r <= capacity)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Display lines: a placeholder when empty, otherwise one line per entry
    pub fn display_lines(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![ui::RANKING_PLACEHOLDER.to_string()];
        }
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| ui::ranking_line(i + 1, e))
            .collect()
    }
}

/// Leaderboard bound to a storage slot
#[derive(Debug)]
pub struct RankingStore<S: KeyValueStore> {
    store: S,
    key: String,
    capacity: usize,
}

impl<S: KeyValueStore> RankingStore<S> {
    /// Leaderboard under the default key with the default size
    pub fn new(store: S) -> Self {
        Self::with_capacity(store, MAX_RANKING_ENTRIES)
    }

    pub fn with_capacity(store: S, capacity: usize) -> Self {
        Self {
            store,
            key: RANKING_KEY.to_string(),
            capacity,
        }
    }

    /// Underlying storage (shared with other persisted records)
    pub fn storage(&self) -> &S {
        &self.store
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Load the leaderboard. Missing or malformed data reads as empty.
    pub fn load(&self) -> Ranking {
        match storage::load_json::<Ranking>(&self.store, &self.key) {
            Some(ranking) => {
                log::debug!("Loaded {} ranking entries", ranking.len());
                ranking
            }
            None => Ranking::new(),
        }
    }

    /// Record `score` stamped with the current local time
    pub fn add(&mut self, score: u64) -> Result<Option<usize>, StorageError> {
        self.add_entry(RankingEntry::new(score, timestamp_label()))
    }

    /// Record a prepared entry; returns the rank it landed at, if any
    pub fn add_entry(&mut self, entry: RankingEntry) -> Result<Option<usize>, StorageError> {
        let mut ranking = self.load();
        let rank = ranking.insert(entry, self.capacity);
        storage::save_json(&mut self.store, &self.key, &ranking)?;
        log::info!("Ranking saved ({} entries, rank {:?})", ranking.len(), rank);
        Ok(rank)
    }

    /// Current leaderboard as display lines
    pub fn render(&self) -> Vec<String> {
        self.load().display_lines()
    }

    /// Delete the persisted leaderboard and return the (placeholder) view
    pub fn reset(&mut self) -> Result<Vec<String>, StorageError> {
        self.store.remove(&self.key)?;
        log::info!("Ranking cleared");
        Ok(self.render())
    }
}
