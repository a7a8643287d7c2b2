//! Model → entity conversions

use tally_core::{CooldownEntry, DailyTally, VoteRecord};

use crate::models::{CooldownModel, DailyVoteModel, VoteModel};

impl From<VoteModel> for VoteRecord {
    fn from(model: VoteModel) -> Self {
        Self {
            key: model.keyword,
            display: model.display,
            count: model.count,
        }
    }
}

impl From<DailyVoteModel> for DailyTally {
    fn from(model: DailyVoteModel) -> Self {
        Self {
            key: model.keyword,
            display: model.display,
            day: model.day,
            count: model.count,
        }
    }
}

impl From<CooldownModel> for CooldownEntry {
    fn from(model: CooldownModel) -> Self {
        Self {
            voter_id: model.voter_id,
            key: model.keyword,
            last_vote_ms: model.last_vote_ms,
        }
    }
}
