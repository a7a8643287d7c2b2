//! API Integration Tests
//!
//! Each test starts its own server on the memory backend, so no external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{test_config, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_root_banner() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (status, body) = server.get_text("/").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "MDM Votes API ONLINE");
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = TestServer::start().await.expect("Failed to start server");
    assert_eq!(
        server.get_text("/health").await.unwrap(),
        (StatusCode::OK, "OK".to_string())
    );
    assert_eq!(
        server.get_text("/health/ready").await.unwrap(),
        (StatusCode::OK, "READY".to_string())
    );
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_first_vote() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = server.vote("alice", "Dog is cute").await.unwrap();
    assert_eq!(body, "Voted for [ Dog ]. 1 total votes @alice");
}

#[tokio::test]
async fn test_immediate_repeat_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.vote("alice", "Dog is cute").await.unwrap();

    let body = server.vote("alice", "dog").await.unwrap();
    assert_eq!(body, "You can't vote consecutively.");

    let body = server.get_query("/rank", &[("name", "dog")]).await.unwrap();
    assert_eq!(body, "[ Dog ] Voting ranking is #1 with a total of 1 votes.");
}

#[tokio::test]
async fn test_other_keyword_is_not_blocked() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.vote("alice", "Dog").await.unwrap();

    let body = server.vote("alice", "Cat").await.unwrap();
    assert_eq!(body, "Voted for [ Cat ]. 1 total votes @alice");
}

#[tokio::test]
async fn test_voter_scope_blocks_other_keywords() {
    let config = test_config(&[("VOTE_COOLDOWN_SCOPE", "voter")]).unwrap();
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    server.vote("alice", "Dog").await.unwrap();

    let body = server.vote("alice", "Cat").await.unwrap();
    assert_eq!(body, "You can't vote consecutively.");
}

#[tokio::test]
async fn test_zero_cooldown_allows_repeats() {
    let config = test_config(&[("VOTE_COOLDOWN_MS", "0")]).unwrap();
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    server.vote("alice", "Dog").await.unwrap();

    let body = server.vote("alice", "Dog").await.unwrap();
    assert_eq!(body, "Voted for [ Dog ]. 2 total votes @alice");
}

#[tokio::test]
async fn test_missing_or_blank_params_give_empty_body() {
    let server = TestServer::start().await.expect("Failed to start server");

    for query in ["/vote", "/vote?user=alice", "/vote?msg=Dog", "/vote?user=alice&msg=", "/vote?user=&msg=Dog"] {
        let (status, body) = server.get_text(query).await.unwrap();
        assert_eq!(status, StatusCode::OK, "{query}");
        assert!(body.is_empty(), "{query} returned {body:?}");
    }

    assert_eq!(server.vote("alice", "   ").await.unwrap(), "");
    assert_eq!(server.get_text("/rank").await.unwrap().1, "");
}

// ============================================================================
// Ranking Tests
// ============================================================================

#[tokio::test]
async fn test_rank_unknown_keyword() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = server.get_query("/rank", &[("name", "cat")]).await.unwrap();
    assert_eq!(body, "[ Cat ] has 0 votes.");
}

#[tokio::test]
async fn test_top_first_page() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.vote_many("Dog", 50).await.unwrap();
    server.vote_many("Cat", 30).await.unwrap();
    server.vote_many("Bird", 10).await.unwrap();

    let (_, body) = server.get_text("/top").await.unwrap();
    assert_eq!(body, "VOTES RANKING: #1 DOG (50) #2 CAT #3 BIRD");

    let (_, body) = server.get_text("/top?page=1").await.unwrap();
    assert_eq!(body, "VOTES RANKING: #1 DOG (50) #2 CAT #3 BIRD");

    let body = server.get_query("/rank", &[("name", "Cat")]).await.unwrap();
    assert_eq!(body, "[ Cat ] Voting ranking is #2 with a total of 30 votes.");
}

#[tokio::test]
async fn test_top_pages_are_disjoint() {
    let server = TestServer::start().await.expect("Failed to start server");
    // Twelve keywords with counts 12 down to 1
    for i in 0..12 {
        server.vote_many(&format!("K{i}"), 12 - i).await.unwrap();
    }

    let (_, page1) = server.get_text("/top?page=1").await.unwrap();
    assert!(page1.starts_with("VOTES RANKING: #1 K0 (12) #2 K1"));
    assert!(page1.ends_with("#10 K9"));

    let (_, page2) = server.get_text("/top?page=2").await.unwrap();
    assert_eq!(page2, "VOTES RANKING: #11 K10 (2) #12 K11");

    let (_, page3) = server.get_text("/top?page=3").await.unwrap();
    assert_eq!(page3, "VOTES RANKING:");

    let (_, invalid) = server.get_text("/top?page=0").await.unwrap();
    assert_eq!(invalid, page1);
}

// ============================================================================
// Daily Tests
// ============================================================================

#[tokio::test]
async fn test_fastest_without_votes() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, body) = server.get_text("/fastest").await.unwrap();
    assert_eq!(body, "No votes registered today.");
}

#[tokio::test]
async fn test_fastest_today() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.vote_many("Cat", 1).await.unwrap();
    server.vote_many("Dog", 2).await.unwrap();

    let (_, body) = server.get_text("/fastest").await.unwrap();
    assert!(
        body.starts_with("Current Fastest Keyword: DOG [ 2 Votes Today ] -> resets in "),
        "{body}"
    );
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_file_backend_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    let path = path.to_str().unwrap();
    let overrides = [("STORAGE_BACKEND", "file"), ("STORAGE_FILE", path)];

    let server = TestServer::start_with_config(test_config(&overrides).unwrap())
        .await
        .expect("Failed to start server");
    server.vote("alice", "Dog").await.unwrap();
    server.stop();

    let server = TestServer::start_with_config(test_config(&overrides).unwrap())
        .await
        .expect("Failed to restart server");
    let body = server.vote("bob", "dog").await.unwrap();
    assert_eq!(body, "Voted for [ Dog ]. 2 total votes @bob");

    // The cooldown was persisted too
    let body = server.vote("alice", "Dog").await.unwrap();
    assert_eq!(body, "You can't vote consecutively.");
}
