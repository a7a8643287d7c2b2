//! In-process tally store
//!
//! All state sits behind one async mutex, so each trait call is a single
//! critical section: increments cannot interleave and `record_vote` applies
//! both counters together. With a snapshot path configured, each change is
//! applied to a copy of the state, written to a JSON file (temp file + rename)
//! and only then swapped in, so a failed write leaves the store unchanged.

mod snapshot;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

use tally_core::traits::{CooldownStore, RepoResult, TallyStore};
use tally_core::{CooldownEntry, DailyTally, DayBucket, VoteCounts, VoteRecord};

pub use snapshot::SnapshotError;
use snapshot::Snapshot;

/// Cooldown entries kept before expired ones are swept
const COOLDOWN_SWEEP_THRESHOLD: usize = 4096;

/// Memory-backed tally and cooldown store
#[derive(Debug)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    snapshot_path: Option<PathBuf>,
}

#[derive(Debug, Default, Clone)]
struct MemoryState {
    /// Creation order
    votes: Vec<VoteRecord>,
    vote_index: HashMap<String, usize>,
    /// Creation order
    daily: Vec<DailyTally>,
    daily_index: HashMap<(String, NaiveDate), usize>,
    cooldowns: HashMap<(String, String), i64>,
}

impl MemoryStore {
    /// Create an empty store that is never written to disk
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            snapshot_path: None,
        }
    }

    /// Open a store mirrored to `path`, loading the existing snapshot if any
    pub async fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let path = path.as_ref().to_path_buf();
        let state = match Snapshot::load(&path).await? {
            Some(snapshot) => {
                info!(
                    path = %path.display(),
                    keywords = snapshot.votes.len(),
                    "Loaded vote snapshot"
                );
                MemoryState::from(snapshot)
            }
            None => {
                info!(path = %path.display(), "No vote snapshot found, starting empty");
                MemoryState::default()
            }
        };

        Ok(Self {
            state: Mutex::new(state),
            snapshot_path: Some(path),
        })
    }

    /// Apply `change` under the lock, persisting it before it becomes visible.
    ///
    /// Without a snapshot path the change is applied in place.
    async fn commit<T>(&self, change: impl FnOnce(&mut MemoryState) -> T) -> RepoResult<T> {
        let mut state = self.state.lock().await;
        let Some(path) = &self.snapshot_path else {
            return Ok(change(&mut state));
        };

        let mut next = state.clone();
        let output = change(&mut next);
        if let Err(e) = Snapshot::from(&next).save(path).await {
            error!(path = %path.display(), error = %e, "Failed to write vote snapshot");
            return Err(e.into());
        }
        *state = next;
        Ok(output)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryState {
    fn increment_total(&mut self, key: &str, display: &str) -> &VoteRecord {
        let idx = match self.vote_index.get(key) {
            Some(&idx) => {
                self.votes[idx].count += 1;
                idx
            }
            None => {
                self.votes.push(VoteRecord::first_vote(key, display));
                let idx = self.votes.len() - 1;
                self.vote_index.insert(key.to_string(), idx);
                idx
            }
        };
        &self.votes[idx]
    }

    fn increment_daily(&mut self, key: &str, display: &str, day: DayBucket) -> i64 {
        let index_key = (key.to_string(), day.date());
        let idx = match self.daily_index.get(&index_key) {
            Some(&idx) => {
                self.daily[idx].count += 1;
                idx
            }
            None => {
                self.daily
                    .push(DailyTally::first_vote(key, display, day.date()));
                let idx = self.daily.len() - 1;
                self.daily_index.insert(index_key, idx);
                idx
            }
        };
        self.daily[idx].count
    }

    fn sweep_cooldowns(&mut self, now_ms: i64, window: Duration) {
        if self.cooldowns.len() < COOLDOWN_SWEEP_THRESHOLD {
            return;
        }
        let window_ms = i64::try_from(window.as_millis()).unwrap_or(i64::MAX);
        self.cooldowns
            .retain(|_, last| now_ms.saturating_sub(*last) < window_ms);
    }
}

#[async_trait]
impl TallyStore for MemoryStore {
    #[instrument(skip(self, display))]
    async fn increment_total(&self, key: &str, display: &str) -> RepoResult<i64> {
        self.commit(|state| state.increment_total(key, display).count)
            .await
    }

    #[instrument(skip(self, display))]
    async fn increment_daily(&self, key: &str, display: &str, day: DayBucket) -> RepoResult<i64> {
        self.commit(|state| state.increment_daily(key, display, day))
            .await
    }

    #[instrument(skip(self, display))]
    async fn record_vote(&self, key: &str, display: &str, day: DayBucket) -> RepoResult<VoteCounts> {
        self.commit(|state| {
            let record = state.increment_total(key, display);
            let (stored_display, total) = (record.display.clone(), record.count);
            let daily = state.increment_daily(key, &stored_display, day);
            VoteCounts {
                display: stored_display,
                total,
                daily,
            }
        })
        .await
    }

    async fn get(&self, key: &str) -> RepoResult<Option<VoteRecord>> {
        let state = self.state.lock().await;
        Ok(state
            .vote_index
            .get(key)
            .map(|&idx| state.votes[idx].clone()))
    }

    async fn get_all(&self) -> RepoResult<Vec<VoteRecord>> {
        let mut votes = self.state.lock().await.votes.clone();
        // Stable sort keeps creation order among equal counts
        votes.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(votes)
    }

    async fn get_top_for_day(&self, day: DayBucket) -> RepoResult<Option<DailyTally>> {
        let state = self.state.lock().await;
        let top = state
            .daily
            .iter()
            .filter(|tally| tally.day == day.date())
            .fold(None::<&DailyTally>, |best, tally| match best {
                Some(best) if best.count >= tally.count => Some(best),
                _ => Some(tally),
            });
        Ok(top.cloned())
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[async_trait]
impl CooldownStore for MemoryStore {
    async fn last_vote(&self, voter_id: &str, scope_key: &str) -> RepoResult<Option<CooldownEntry>> {
        let state = self.state.lock().await;
        Ok(state
            .cooldowns
            .get(&(voter_id.to_string(), scope_key.to_string()))
            .map(|&last_vote_ms| CooldownEntry::new(voter_id, scope_key, last_vote_ms)))
    }

    #[instrument(skip(self))]
    async fn record(&self, entry: &CooldownEntry, window: Duration) -> RepoResult<()> {
        self.commit(|state| {
            state.sweep_cooldowns(entry.last_vote_ms, window);
            state.cooldowns.insert(
                (entry.voter_id.clone(), entry.key.clone()),
                entry.last_vote_ms,
            );
        })
        .await
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
