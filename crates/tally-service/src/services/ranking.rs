//! Ranking service
//!
//! Position of a single keyword and fixed-size pages of the leaderboard.
//! Both read the full ordering from the tally store, where equal counts keep
//! creation order.

use tally_core::{DisplayCasing, DomainError, Keyword, RankedEntry, VoteRecord};
use tracing::instrument;

use crate::dto::{KeywordRank, TopPage};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Entries per leaderboard page
pub const PAGE_SIZE: usize = 10;

/// Interpret a raw `page` parameter. Missing, unparsable, and values below 1
/// all mean the first page.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&page| page >= 1)
        .map_or(1, |page| usize::try_from(page).unwrap_or(usize::MAX))
}

/// Ranking service
pub struct RankingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RankingService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Rank the keyword named by the first word of `name`.
    ///
    /// Fails with `KeywordNotFound` carrying the word as typed when nobody
    /// has voted for it.
    #[instrument(skip(self))]
    pub async fn rank(&self, name: &str) -> ServiceResult<KeywordRank> {
        let keyword = Keyword::parse(name, DisplayCasing::Exact)?;
        let records = self
            .ctx
            .bounded("tally.get_all", self.ctx.tally_store().get_all())
            .await?;

        let (index, record) = records
            .into_iter()
            .enumerate()
            .find(|(_, record)| record.is_key(keyword.key()))
            .ok_or_else(|| DomainError::KeywordNotFound(keyword.display().to_string()))?;

        Ok(ranked(index, record).into())
    }

    /// Page `page` (1-based) of the leaderboard. Pages are disjoint windows of
    /// [`PAGE_SIZE`] entries; a page past the end is empty.
    #[instrument(skip(self))]
    pub async fn top_page(&self, page: usize) -> ServiceResult<TopPage> {
        let start = page.max(1).saturating_sub(1).saturating_mul(PAGE_SIZE);
        let records = self
            .ctx
            .bounded("tally.get_all", self.ctx.tally_store().get_all())
            .await?;

        let entries = records
            .into_iter()
            .enumerate()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|(index, record)| ranked(index, record))
            .collect();

        Ok(TopPage { entries })
    }
}

fn ranked(index: usize, record: VoteRecord) -> RankedEntry {
    RankedEntry {
        position: index + 1,
        display: record.display,
        count: record.count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::memory_context;
    use crate::services::ServiceError;
    use tally_common::VotingConfig;
    use tally_core::traits::TallyStore;
    use tally_db::MemoryStore;

    async fn vote_n(store: &MemoryStore, key: &str, display: &str, n: usize) {
        for _ in 0..n {
            store.increment_total(key, display).await.unwrap();
        }
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-3")), 1);
        assert_eq!(parse_page(Some("2")), 2);
        assert_eq!(parse_page(Some(" 7 ")), 7);
    }

    #[tokio::test]
    async fn test_rank_found() {
        let (ctx, store) = memory_context(VotingConfig::default());
        vote_n(&store, "dog", "Dog", 50).await;
        vote_n(&store, "cat", "Cat", 30).await;

        let rank = RankingService::new(&ctx).rank("CAT").await.unwrap();
        assert_eq!(
            rank.to_string(),
            "[ Cat ] Voting ranking is #2 with a total of 30 votes."
        );
    }

    #[tokio::test]
    async fn test_rank_unknown_keyword() {
        let (ctx, _) = memory_context(VotingConfig::default());

        let err = RankingService::new(&ctx).rank("cat").await.unwrap_err();
        match err {
            ServiceError::Domain(DomainError::KeywordNotFound(name)) => assert_eq!(name, "cat"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_rank_position_counts_greater_and_earlier_ties() {
        let (ctx, store) = memory_context(VotingConfig::default());
        vote_n(&store, "a", "A", 5).await;
        vote_n(&store, "b", "B", 3).await;
        vote_n(&store, "c", "C", 3).await;
        vote_n(&store, "d", "D", 1).await;

        let service = RankingService::new(&ctx);
        assert_eq!(service.rank("a").await.unwrap().position, 1);
        assert_eq!(service.rank("b").await.unwrap().position, 2);
        assert_eq!(service.rank("c").await.unwrap().position, 3);
        assert_eq!(service.rank("d").await.unwrap().position, 4);
    }

    #[tokio::test]
    async fn test_top_page_formatting() {
        let (ctx, store) = memory_context(VotingConfig::default());
        vote_n(&store, "bird", "Bird", 10).await;
        vote_n(&store, "dog", "Dog", 50).await;
        vote_n(&store, "cat", "Cat", 30).await;

        let page = RankingService::new(&ctx).top_page(1).await.unwrap();
        assert_eq!(page.to_string(), "VOTES RANKING: #1 DOG (50) #2 CAT #3 BIRD");
    }

    #[tokio::test]
    async fn test_pages_partition_the_leaderboard() {
        let (ctx, store) = memory_context(VotingConfig::default());
        for i in 0..25 {
            vote_n(&store, &format!("k{i}"), &format!("K{i}"), 30 - i).await;
        }

        let service = RankingService::new(&ctx);
        let mut seen = Vec::new();
        for page in 1..=3 {
            let entries = service.top_page(page).await.unwrap().entries;
            assert!(entries.len() <= PAGE_SIZE);
            seen.extend(entries);
        }

        assert_eq!(seen.len(), 25);
        let positions: Vec<usize> = seen.iter().map(|e| e.position).collect();
        assert_eq!(positions, (1..=25).collect::<Vec<_>>());
        assert!(seen.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[tokio::test]
    async fn test_page_two_starts_at_eleven() {
        let (ctx, store) = memory_context(VotingConfig::default());
        for i in 0..12 {
            vote_n(&store, &format!("k{i}"), &format!("K{i}"), 20 - i).await;
        }

        let page = RankingService::new(&ctx).top_page(2).await.unwrap();
        assert_eq!(page.to_string(), "VOTES RANKING: #11 K10 (10) #12 K11");
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let (ctx, store) = memory_context(VotingConfig::default());
        vote_n(&store, "dog", "Dog", 1).await;

        let page = RankingService::new(&ctx).top_page(5).await.unwrap();
        assert_eq!(page.to_string(), "VOTES RANKING:");
    }
}
