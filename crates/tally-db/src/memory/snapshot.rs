//! JSON snapshot of the memory store

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tally_core::{CooldownEntry, DailyTally, DomainError, VoteRecord};

use super::MemoryState;

/// Snapshot read/write failures
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<SnapshotError> for DomainError {
    fn from(e: SnapshotError) -> Self {
        DomainError::storage(e)
    }
}

/// On-disk layout; vectors are in creation order
#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct Snapshot {
    pub votes: Vec<VoteRecord>,
    #[serde(default)]
    pub daily: Vec<DailyTally>,
    #[serde(default)]
    pub cooldowns: Vec<CooldownEntry>,
}

impl Snapshot {
    /// Read a snapshot; a missing file is not an error
    pub async fn load(path: &Path) -> Result<Option<Self>, SnapshotError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write through a sibling temp file so readers never see a partial snapshot
    pub async fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let bytes = serde_json::to_vec_pretty(self)?;
        let tmp = temp_path(path);
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

impl From<&MemoryState> for Snapshot {
    fn from(state: &MemoryState) -> Self {
        Self {
            votes: state.votes.clone(),
            daily: state.daily.clone(),
            cooldowns: state
                .cooldowns
                .iter()
                .map(|((voter, key), &ms)| CooldownEntry::new(voter.clone(), key.clone(), ms))
                .collect(),
        }
    }
}

impl From<Snapshot> for MemoryState {
    fn from(snapshot: Snapshot) -> Self {
        let vote_index = snapshot
            .votes
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.key.clone(), idx))
            .collect();
        let daily_index = snapshot
            .daily
            .iter()
            .enumerate()
            .map(|(idx, tally)| ((tally.key.clone(), tally.day), idx))
            .collect();
        let cooldowns = snapshot
            .cooldowns
            .into_iter()
            .map(|entry| ((entry.voter_id, entry.key), entry.last_vote_ms))
            .collect();

        Self {
            votes: snapshot.votes,
            vote_index,
            daily: snapshot.daily,
            daily_index,
            cooldowns,
        }
    }
}
